pub mod catalog;
pub mod download;
pub mod error;
pub mod extract;
pub mod models;
pub mod resolve;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};

pub const DEFAULT_CATALOG_URL: &str = "http://ftb.cursecdn.com/FTB2/static/modpacks.xml";
pub const DEFAULT_DOWNLOAD_URL: &str = "http://ftb.cursecdn.com/FTB2/modpacks/{dir}/{version}/{pack}";

/// Which archive of a pack to fetch
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum PackSide {
    Server,
    Client,
}

impl PackSide {
    pub fn from_client_flag(client: bool) -> Self {
        if client {
            Self::Client
        } else {
            Self::Server
        }
    }

    /// Catalog attribute holding this side's archive name
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Server => "serverPack",
            Self::Client => "url",
        }
    }
}
