//! Thumbnail download over blocking HTTP.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;

use crate::{Error, Result};

/// Build the HTTP client used for thumbnail downloads.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("prosecap/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;
    Ok(client)
}

/// Download the thumbnail at `url` into `dest_path`, returning the number of bytes written.
///
/// A missing or blank URL is an error, as is any non-success HTTP status.
pub fn download_thumbnail(client: &Client, url: Option<&str>, dest_path: &Path) -> Result<u64> {
    let url = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::msg("No thumbnail URL found"))?;

    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("download failed (bad status): {url}"))?;

    let total = resp.content_length();
    let written = download_to_path_with_reader(resp, total, dest_path)?;

    tracing::info!(url, path = %dest_path.display(), bytes = written, "downloaded thumbnail");
    Ok(written)
}

/// Stream `reader` into `dest_path` safely:
/// - write to `dest_path.part`
/// - fsync + rename to final path
/// - remove the `.part` file if anything fails
pub fn download_to_path_with_reader<R: Read>(
    mut reader: R,
    total_bytes: Option<u64>,
    dest_path: &Path,
) -> Result<u64> {
    let pb = match total_bytes {
        Some(total) if total > 0 => ProgressBar::new(total),
        _ => ProgressBar::new_spinner(),
    };

    let style = ProgressStyle::with_template(
        "{spinner:.green} {bytes}/{total_bytes} {bar:40.cyan/blue} {eta}",
    )
    .map_err(|err| Error::msg(format!("invalid progress template: {err}")))?
    .progress_chars("#>-");
    pb.set_style(style);

    let tmp_path = PathBuf::from(format!("{}.part", dest_path.display()));

    let result = (|| -> Result<u64> {
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("failed to create temp file: {}", tmp_path.display()))?;

        let mut written = 0u64;
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            written += n as u64;
            pb.inc(n as u64);
        }

        file.sync_all()?;
        pb.finish_and_clear();

        fs::rename(&tmp_path, dest_path)
            .with_context(|| format!("failed to move into place: {}", dest_path.display()))?;

        Ok(written)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
        pb.finish_and_clear();
    }

    result
}
