use crate::PackSide;

/// One modpack entry of the catalog, built from the attributes of its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRecord {
    pub author: Option<String>,
    pub curse_project_id: Option<String>,
    pub description: Option<String>,
    /// Path segment the pack's archives are stored under
    pub directory: Option<String>,
    pub image: Option<String>,
    pub logo: Option<String>,
    pub minecraft_version: Option<String>,
    pub minimum_java_runtime: String,
    /// Raw mods attribute, unparsed
    pub mods_list: Option<String>,
    pub name: Option<String>,
    pub old_versions: Vec<String>,
    pub repo_version: Option<String>,
    pub server_pack_filename: Option<String>,
    pub client_pack_url: Option<String>,
    pub current_version: Option<String>,
}

impl Default for PackRecord {
    fn default() -> Self {
        PackRecord {
            author: None,
            curse_project_id: None,
            description: None,
            directory: None,
            image: None,
            logo: None,
            minecraft_version: None,
            minimum_java_runtime: "0".to_string(),
            mods_list: None,
            name: None,
            old_versions: split_old_versions(""),
            repo_version: None,
            server_pack_filename: None,
            client_pack_url: None,
            current_version: None,
        }
    }
}

impl PackRecord {
    /// Applies one catalog attribute. Unknown attributes are ignored.
    pub fn set_attribute(&mut self, key: &str, value: String) {
        match key {
            "author" => self.author = Some(value),
            "curseProjectId" => self.curse_project_id = Some(value),
            "description" => self.description = Some(value),
            "dir" => self.directory = Some(value),
            "image" => self.image = Some(value),
            "logo" => self.logo = Some(value),
            "mcVersion" => self.minecraft_version = Some(value),
            "minJRE" => self.minimum_java_runtime = value,
            "mods" => self.mods_list = Some(value),
            "name" => self.name = Some(value),
            "oldVersions" => self.old_versions = split_old_versions(&value),
            "repoVersion" => self.repo_version = Some(value),
            "serverPack" => self.server_pack_filename = Some(value),
            "url" => self.client_pack_url = Some(value),
            "version" => self.current_version = Some(value),
            _ => {}
        }
    }

    pub fn archive(&self, side: PackSide) -> Option<&str> {
        match side {
            PackSide::Server => self.server_pack_filename.as_deref(),
            PackSide::Client => self.client_pack_url.as_deref(),
        }
    }
}

// An empty field still yields one empty entry.
fn split_old_versions(value: &str) -> Vec<String> {
    value.split(';').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_for_missing_attributes() {
        let pack = PackRecord::default();
        assert_eq!(pack.minimum_java_runtime, "0");
        assert_eq!(pack.old_versions, vec![String::new()]);
        assert_eq!(pack.name, None);
    }

    #[test]
    fn empty_old_versions_yield_single_empty_entry() {
        let mut pack = PackRecord::default();
        pack.set_attribute("oldVersions", String::new());
        assert_eq!(pack.old_versions, vec![String::new()]);
    }

    #[test]
    fn old_versions_are_split_in_order() {
        let mut pack = PackRecord::default();
        pack.set_attribute("oldVersions", "1.0.1;1.0.0;0.9".to_string());
        assert_eq!(pack.old_versions, vec!["1.0.1", "1.0.0", "0.9"]);
    }

    #[test]
    fn archive_follows_side() {
        let mut pack = PackRecord::default();
        pack.set_attribute("serverPack", "server.zip".to_string());
        pack.set_attribute("url", "client.zip".to_string());
        assert_eq!(pack.archive(PackSide::Server), Some("server.zip"));
        assert_eq!(pack.archive(PackSide::Client), Some("client.zip"));
    }
}
