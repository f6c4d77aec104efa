use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use colored::Colorize;
use ftbdl_core::{
    catalog::fetch_catalog,
    download::{download_file, download_url, local_archive_path},
    extract::extract_archive,
    models::packs::PackRecord,
    resolve::{resolve_pack, resolve_version, LATEST},
    Error, PackSide,
};
use log::info;
use reqwest::Client;

use crate::config::Config;

/// Download and unpack a Feed The Beast modpack
#[derive(Parser, Debug)]
#[command(long_about = None, disable_version_flag = true)]
pub struct FetchCommand {
    /// The FTB pack to use, copy the name from the FTB site
    #[arg(short = 'p', long)]
    pack: Option<String>,

    /// The version of the pack, leave empty for LATEST
    #[arg(short = 'v', long, default_value = LATEST)]
    version: String,

    /// Do not extract the zip file
    #[arg(short = 'e', long = "no-extract", action = ArgAction::SetFalse)]
    extract: bool,

    /// Delete the zip file afterwards
    #[arg(short = 'd', long)]
    delete: bool,

    /// Download the client version instead of the server version
    #[arg(short = 'c', long)]
    client: bool,

    /// Skip the download and use the archive already in the working directory
    #[arg(short = 'o', long)]
    offline: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("--pack is required, type -h for help!")]
    MissingPack,
}

/// Everything needed to fetch one archive, resolved without touching the
/// network or the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub pack_name: String,
    /// Resolved version with `.` replaced by `_`
    pub version: String,
    /// Archive URL, absent in offline mode
    pub url: Option<String>,
    /// Archive file name, relative to the working directory
    pub local_path: PathBuf,
}

impl FetchCommand {
    pub async fn run(&self) -> anyhow::Result<()> {
        let pack_name = self.pack.as_deref().ok_or(FetchError::MissingPack)?;
        let config = Config::load()?;
        let client = Client::new();

        let catalog = fetch_catalog(&client, &config.catalog_url).await?;
        let plan = self.plan(pack_name, &catalog, &config.download_url)?;
        self.execute(&client, &plan, Path::new(".")).await?;

        Ok(())
    }

    pub fn plan(
        &self,
        pack_name: &str,
        catalog: &[PackRecord],
        template: &str,
    ) -> ftbdl_core::Result<DownloadPlan> {
        let pack = resolve_pack(catalog, pack_name)?;
        let version = resolve_version(pack, &self.version)?;

        let side = PackSide::from_client_flag(self.client);
        let archive = pack.archive(side).ok_or_else(|| Error::MissingField {
            pack: pack_name.to_string(),
            field: side.attribute(),
        })?;
        let local_path = local_archive_path(archive)?;

        let url = if self.offline {
            None
        } else {
            let directory = pack.directory.as_deref().ok_or_else(|| Error::MissingField {
                pack: pack_name.to_string(),
                field: "dir",
            })?;
            Some(download_url(template, directory, &version, archive))
        };

        Ok(DownloadPlan {
            pack_name: pack_name.to_string(),
            version,
            url,
            local_path,
        })
    }

    /// Downloads, extracts and deletes inside `workdir`, as the flags ask.
    pub async fn execute(
        &self,
        client: &Client,
        plan: &DownloadPlan,
        workdir: &Path,
    ) -> anyhow::Result<()> {
        let archive = workdir.join(&plan.local_path);
        info!(
            "Starting download of {} version {}",
            plan.pack_name.green(),
            plan.version.green()
        );

        match &plan.url {
            Some(url) => {
                download_file(client, url, &archive).await?;
            }
            None => info!("Offline mode, skipping the download"),
        }

        if self.extract {
            info!("Extracting {}", plan.local_path.to_string_lossy().yellow());
            extract_archive(&archive, workdir)?;
            if self.delete {
                info!("Deleting {}", plan.local_path.to_string_lossy().red());
                std::fs::remove_file(&archive)?;
            }
        }

        Ok(())
    }
}

/// Message for the failures that end the run with a controlled exit code.
/// Any other error is left to propagate.
pub fn user_message(err: &anyhow::Error) -> Option<String> {
    if let Some(err) = err.downcast_ref::<FetchError>() {
        return Some(err.to_string());
    }
    match err.downcast_ref::<Error>()? {
        Error::PackNotFound(pack) => Some(format!("Pack {} not found!", pack)),
        Error::VersionNotFound { version, pack } => {
            Some(format!("Version {} not found for {}!", version, pack))
        }
        _ => None,
    }
}
