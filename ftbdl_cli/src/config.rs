use std::env::var;

use ftbdl_core::{DEFAULT_CATALOG_URL, DEFAULT_DOWNLOAD_URL};
use serde::Deserialize;

#[derive(Deserialize, Default, Debug)]
pub struct ConfigFile {
    pub catalog_url: Option<String>,
    pub download_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub catalog_url: String,
    /// Template with `{dir}`, `{version}` and `{pack}` placeholders
    pub download_url: String,
}

impl Config {
    /// Reads `FTBDL_CONFIG_PATH` (default `ftbdl.toml`) if it exists, then
    /// applies the `FTBDL_CATALOG_URL` / `FTBDL_DOWNLOAD_URL` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_text =
            std::fs::read_to_string(var("FTBDL_CONFIG_PATH").unwrap_or("ftbdl.toml".to_string()));
        let config_file = if let Ok(text) = config_text {
            toml::from_str::<ConfigFile>(&text)?
        } else {
            ConfigFile::default()
        };

        Ok(Self::merge(
            config_file,
            var("FTBDL_CATALOG_URL").ok(),
            var("FTBDL_DOWNLOAD_URL").ok(),
        ))
    }

    fn merge(file: ConfigFile, catalog_url: Option<String>, download_url: Option<String>) -> Self {
        Config {
            catalog_url: catalog_url
                .or(file.catalog_url)
                .unwrap_or(DEFAULT_CATALOG_URL.to_string()),
            download_url: download_url
                .or(file.download_url)
                .unwrap_or(DEFAULT_DOWNLOAD_URL.to_string()),
        }
    }
}
