//! `prosecap` — rebuild readable prose from a video page's caption transcript.
//!
//! This crate provides:
//! - Page accessors that probe a rendered DOM snapshot for transcript segments and metadata
//! - Segment classification (chapter headers, captions, noise)
//! - Text assembly into sentences and paragraphs, plus a final cleanup pass
//! - Pluggable output encoders (Markdown, JSON)
//! - Helpers for the usual follow-ups: terminal rendering, saving, thumbnail download
//!
//! Reconstruction itself is a pure, synchronous function of the segment list and a title.

// High-level API (most consumers should start here).
pub mod extract;
pub mod opts;

// Crate-wide error type.
pub mod error;

// Where segments come from.
pub mod page;

// Reconstruction core.
pub mod assembler;
pub mod cleanup;
pub mod segments;
pub mod transcript;

// Output selection and encoder interfaces.
pub mod output_type;
pub mod transcript_encoder;

// Output encoders.
pub mod json_encoder;
pub mod markdown_encoder;

// Downstream actions.
pub mod files;
pub mod render;

#[cfg(feature = "fetch")]
pub mod fetch;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Error, Result};
pub use extract::{PageData, extract, write_page};
pub use opts::Opts;
pub use output_type::OutputType;
pub use page::{CapturedPage, HtmlPage, PageAccessor, PageMetadata};
pub use segments::{ClassifiedSegment, RawSegment};
pub use transcript::{TranscriptResult, reconstruct_transcript, reconstruct_transcript_with};

#[cfg(feature = "logging")]
pub use logging::init as init_logging;
