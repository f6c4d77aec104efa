use std::{
    fs::File,
    io::Write,
    path::{Component, Path, PathBuf},
};

use colored::Colorize;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use reqwest::Client;

use crate::{Error, Result};

/// Bytes written to disk per progress step
pub const CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// Fills the `{dir}`, `{version}` and `{pack}` placeholders of a download
/// URL template.
pub fn download_url(template: &str, directory: &str, version: &str, pack: &str) -> String {
    template
        .replace("{dir}", directory)
        .replace("{version}", version)
        .replace("{pack}", pack)
}

/// Turns a catalog archive name into a path relative to the working
/// directory. Absolute names and names climbing out with `..` are refused.
pub fn local_archive_path(name: &str) -> Result<PathBuf> {
    let path = PathBuf::from(name);
    let confined = path.file_name().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !confined {
        return Err(Error::UnsafeLocalPath(name.to_string()));
    }
    Ok(path)
}

/// Streams `url` into `path` in [`CHUNK_SIZE`] pieces, creating or
/// overwriting the file. Returns the number of bytes written.
pub async fn download_file<P>(client: &Client, url: &str, path: P) -> Result<u64>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    info!(
        "Getting {} storing to {}",
        url.blue(),
        path.to_string_lossy().blue()
    );

    let response = client.get(url).send().await?.error_for_status()?;
    let total_size = response.content_length();

    make_parent_directories(path)?;
    let mut file = File::create(path)?;

    let bar = if let Some(size) = total_size {
        let bar = ProgressBar::new(size);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:.cyan/blue}] {bytes}/{total_bytes}")?
                .progress_chars("#>-")
        );
        bar
    } else {
        ProgressBar::new_spinner()
    };
    bar.tick();

    let mut file_stream = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::with_capacity(CHUNK_SIZE);
    let mut written: u64 = 0;

    while let Some(chunk) = file_stream.next().await {
        let chunk = chunk?;
        let mut remaining: &[u8] = &chunk;
        while !remaining.is_empty() {
            let take = (CHUNK_SIZE - buffer.len()).min(remaining.len());
            buffer.extend_from_slice(&remaining[..take]);
            remaining = &remaining[take..];
            if buffer.len() == CHUNK_SIZE {
                written += write_chunk(&mut file, &mut buffer, &bar)?;
            }
        }
    }
    if !buffer.is_empty() {
        written += write_chunk(&mut file, &mut buffer, &bar)?;
    }

    bar.finish();
    info!("{}", "Download done!".green());

    Ok(written)
}

fn write_chunk<W: Write>(file: &mut W, buffer: &mut Vec<u8>, bar: &ProgressBar) -> Result<u64> {
    file.write_all(buffer.as_slice())?;
    file.flush()?;
    let length = buffer.len() as u64;
    bar.inc(length);
    buffer.clear();
    Ok(length)
}

fn make_parent_directories(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
