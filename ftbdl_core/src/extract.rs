use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};
use zip::ZipArchive;

use crate::{Error, Result};

/// Extracts every entry of the zip archive at `archive_path` into
/// `destination`, keeping the relative paths stored in the archive and
/// overwriting existing files. Returns the number of files written.
///
/// All entry names are checked before anything is written: an entry that is
/// absolute or climbs out of `destination` fails the whole extraction with
/// [`Error::UnsafeArchiveEntry`].
pub fn extract_archive<A, D>(archive_path: A, destination: D) -> Result<usize>
where
    A: AsRef<Path>,
    D: AsRef<Path>,
{
    let archive_path = archive_path.as_ref();
    let destination = destination.as_ref();

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut entries: Vec<PathBuf> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| Error::UnsafeArchiveEntry(entry.name().to_string()))?;
        entries.push(relative);
    }

    let mut extracted = 0;
    for (i, relative) in entries.into_iter().enumerate() {
        let mut entry = archive.by_index(i)?;
        let outpath = destination.join(&relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Extracting {}", relative.to_string_lossy());
        let mut outfile = File::create(&outpath)?;
        std::io::copy(&mut entry, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
        extracted += 1;
    }

    info!(
        "Extracted {} files from {}",
        extracted,
        archive_path.to_string_lossy()
    );
    Ok(extracted)
}
