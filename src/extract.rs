//! High-level API: pull a transcript and its page metadata out of a page accessor.
//!
//! This wires accessor → classifier → assembler → cleanup and packages the result with the
//! metadata that downstream actions (saving, thumbnail download, description display) need.

use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::json_encoder::JsonEncoder;
use crate::markdown_encoder::MarkdownEncoder;
use crate::opts::Opts;
use crate::output_type::OutputType;
use crate::page::{PageAccessor, PageMetadata};
use crate::transcript::{TranscriptResult, reconstruct_transcript_with};
use crate::transcript_encoder::TranscriptEncoder;
use crate::{Error, Result};

/// Everything gathered from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// Video title, page-title suffix removed. Used for default filenames.
    pub title: String,

    pub transcript: TranscriptResult,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
}

/// Extract and reconstruct the transcript from `page`.
///
/// Any accessor failure aborts the whole extraction; nothing is retried here.
pub fn extract<P: PageAccessor + ?Sized>(page: &P, opts: &Opts) -> Result<PageData> {
    let meta = page.metadata()?;
    let title = resolve_title(&meta, &opts.title_suffix)?;

    let segments = page.segments()?;

    // The heading line prefers the visible video heading; the page title is the fallback.
    let heading = meta.heading.as_deref().unwrap_or(&title);
    let transcript = reconstruct_transcript_with(&segments, heading, opts);

    tracing::info!(
        title = %title,
        segments = segments.len(),
        has_thumbnail = meta.thumbnail_url.is_some(),
        has_description = meta.description.is_some(),
        "extracted page transcript"
    );

    Ok(PageData {
        title,
        transcript,
        thumbnail_url: meta.thumbnail_url,
        description: meta.description,
    })
}

/// Strip one trailing `suffix` from the page title, falling back to the visible heading.
pub fn resolve_title(meta: &PageMetadata, suffix: &str) -> Result<String> {
    meta.page_title
        .as_deref()
        .map(|t| strip_title_suffix(t, suffix).trim().to_owned())
        .filter(|t| !t.is_empty())
        .or_else(|| meta.heading.clone())
        .ok_or_else(|| Error::missing("page title"))
}

fn strip_title_suffix<'a>(title: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return title;
    }
    title.strip_suffix(suffix).unwrap_or(title)
}

/// Encode `page` into `w` using the requested output format.
pub fn write_page<W: Write>(page: &PageData, w: W, output_type: OutputType) -> Result<()> {
    // Buffer output for efficiency (especially important for stdout).
    let writer = BufWriter::new(w);

    // Explicit per-format arms keep the encoder statically typed.
    match output_type {
        OutputType::Markdown => {
            let mut encoder = MarkdownEncoder::new(writer);
            let run_res = encoder.write_transcript(page);
            merge_run_and_close(run_res, encoder.close())
        }
        OutputType::Json => {
            let mut encoder = JsonEncoder::new(writer);
            let run_res = encoder.write_transcript(page);
            merge_run_and_close(run_res, encoder.close())
        }
    }
}

/// Prefer the write error, but never drop a close error silently.
fn merge_run_and_close(run_res: Result<()>, close_res: Result<()>) -> Result<()> {
    match (run_res, close_res) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => Err(Error::msg(format!(
            "{err} (close failed: {close_err})"
        ))),
    }
}
