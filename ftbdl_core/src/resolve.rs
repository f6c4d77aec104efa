use crate::{models::packs::PackRecord, Error, Result};

/// Version spec selecting the pack's current version
pub const LATEST: &str = "LATEST";

/// Finds the first record whose name equals `name` exactly.
pub fn resolve_pack<'a>(catalog: &'a [PackRecord], name: &str) -> Result<&'a PackRecord> {
    catalog
        .iter()
        .find(|pack| pack.name.as_deref() == Some(name))
        .ok_or_else(|| Error::PackNotFound(name.to_string()))
}

/// Resolves `version_spec` against the pack and returns it as a download
/// path segment, with every `.` replaced by `_`.
pub fn resolve_version(pack: &PackRecord, version_spec: &str) -> Result<String> {
    let pack_name = || pack.name.clone().unwrap_or_default();

    let version = if version_spec == LATEST {
        pack.current_version
            .as_deref()
            .ok_or_else(|| Error::MissingField {
                pack: pack_name(),
                field: "version",
            })?
    } else {
        pack.old_versions
            .iter()
            .map(String::as_str)
            .find(|version| *version == version_spec)
            .ok_or_else(|| Error::VersionNotFound {
                version: version_spec.to_string(),
                pack: pack_name(),
            })?
    };

    Ok(path_segment(version))
}

pub fn path_segment(version: &str) -> String {
    version.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pack(name: &str, version: &str, old_versions: &str) -> PackRecord {
        let mut pack = PackRecord::default();
        pack.set_attribute("name", name.to_string());
        pack.set_attribute("version", version.to_string());
        pack.set_attribute("oldVersions", old_versions.to_string());
        pack
    }

    #[test]
    fn resolves_first_exact_name_match() {
        let catalog = vec![
            pack("foo", "0.1", ""),
            pack("Foo", "1.0", ""),
            pack("Foo", "2.0", ""),
        ];
        let found = resolve_pack(&catalog, "Foo").unwrap();
        assert_eq!(found.name.as_deref(), Some("Foo"));
        assert_eq!(found.current_version.as_deref(), Some("1.0"));
    }

    #[test]
    fn unknown_pack_is_not_found() {
        let catalog = vec![pack("Foo", "1.0", "")];
        match resolve_pack(&catalog, "Fo") {
            Err(Error::PackNotFound(name)) => assert_eq!(name, "Fo"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(resolve_pack(&[], "Foo").is_err());
    }

    #[test]
    fn latest_uses_current_version_with_underscores() {
        let foo = pack("Foo", "1.7.10", "1.6.4");
        assert_eq!(resolve_version(&foo, LATEST).unwrap(), "1_7_10");
    }

    #[test]
    fn explicit_version_must_be_listed() {
        let foo = pack("Foo", "1.7.10", "1.6.4;1.5.2");
        assert_eq!(resolve_version(&foo, "1.5.2").unwrap(), "1_5_2");

        match resolve_version(&foo, "1.7.10") {
            Err(Error::VersionNotFound { version, pack }) => {
                assert_eq!(version, "1.7.10");
                assert_eq!(pack, "Foo");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn substitution_is_the_same_for_both_branches() {
        let foo = pack("Foo", "1.2.3", "1.2.3");
        assert_eq!(
            resolve_version(&foo, LATEST).unwrap(),
            resolve_version(&foo, "1.2.3").unwrap()
        );
    }

    #[test]
    fn versions_without_dots_are_unchanged() {
        let foo = pack("Foo", "LATEST_TAG", "");
        assert_eq!(resolve_version(&foo, LATEST).unwrap(), "LATEST_TAG");
        assert_eq!(path_segment("1.2.3"), "1_2_3");
    }

    #[test]
    fn empty_version_matches_empty_old_versions_entry() {
        let foo = pack("Foo", "1.0", "");
        assert_eq!(resolve_version(&foo, "").unwrap(), "");
    }

    #[test]
    fn latest_without_current_version_is_missing_field() {
        let mut foo = PackRecord::default();
        foo.set_attribute("name", "Foo".to_string());
        assert!(matches!(
            resolve_version(&foo, LATEST),
            Err(Error::MissingField { field: "version", .. })
        ));
    }
}
