//! Filenames and persistence for transcripts and thumbnails.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use url::Url;

use crate::Result;

/// Characters that are invalid in filenames on at least one common filesystem.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum filename length, in characters, after sanitizing.
pub const MAX_FILENAME_CHARS: usize = 50;

const TRANSCRIPT_EXTENSION: &str = ".md";

/// Replace invalid filename characters with `_`, trim, and cap the length.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();
    replaced.trim().chars().take(MAX_FILENAME_CHARS).collect()
}

/// Filename for a saved transcript.
///
/// With no (or a blank) requested name, the sanitized title plus `.md` is used. A requested
/// name is sanitized and gets `.md` appended unless it already ends with it.
pub fn transcript_filename(requested: Option<&str>, title: &str) -> String {
    match requested.map(str::trim).filter(|r| !r.is_empty()) {
        None => format!("{}{TRANSCRIPT_EXTENSION}", sanitize_filename(title)),
        Some(raw) => {
            let name = sanitize_filename(raw);
            if name.ends_with(TRANSCRIPT_EXTENSION) {
                name
            } else {
                format!("{name}{TRANSCRIPT_EXTENSION}")
            }
        }
    }
}

/// Extension for a thumbnail URL: the last four characters of its path (`.jpg`, `webp`, ...).
pub fn thumbnail_extension(url: &str) -> String {
    let path = url_path(url);
    let count = path.chars().count();
    path.chars().skip(count.saturating_sub(4)).collect()
}

/// Path component of `url`, without query or fragment.
///
/// A bare host (`https://host`, `https://host?x=/a.png`) has an empty path; the parser reports
/// it as `/`, which carries no extension either.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.path() != "/" => parsed.path().to_owned(),
        Ok(_) => String::new(),
        Err(err) => {
            tracing::debug!(url, error = %err, "thumbnail URL did not parse");
            String::new()
        }
    }
}

/// Filename for a downloaded thumbnail.
///
/// Defaults to `{title}_thumbnail{ext}`; the extension is appended to requested names that
/// don't already carry it.
pub fn thumbnail_filename(requested: Option<&str>, title: &str, url: &str) -> String {
    let ext = thumbnail_extension(url);
    let name = match requested.map(str::trim).filter(|r| !r.is_empty()) {
        None => format!("{}_thumbnail", sanitize_filename(title)),
        Some(raw) => sanitize_filename(raw),
    };

    if name.ends_with(&ext) {
        name
    } else {
        format!("{name}{ext}")
    }
}

/// Write a transcript body to `dir/filename` as UTF-8 and return the full path.
pub fn save_transcript(dir: &Path, filename: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, body)
        .with_context(|| format!("failed to write transcript: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = body.len(), "saved transcript");
    Ok(path)
}
