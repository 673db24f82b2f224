//! Transcript reconstruction: classify → assemble → clean up.

use serde::{Deserialize, Serialize};

use crate::assembler::assemble;
use crate::cleanup::finalize;
use crate::opts::Opts;
use crate::segments::{RawSegment, classify_all};

/// A reconstructed transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Title used for the `# ` heading line.
    pub title: String,

    /// Full Markdown-ish body, heading line included.
    pub body: String,
}

/// Reconstruct a transcript with the default options.
///
/// This never fails: empty input, blank captions and content-less segments all produce a
/// defined body (at minimum the `# title` heading).
pub fn reconstruct_transcript(segments: &[RawSegment], title: &str) -> TranscriptResult {
    reconstruct_transcript_with(segments, title, &Opts::default())
}

/// Reconstruct a transcript, honoring the header-skip threshold and artifact list in `opts`.
pub fn reconstruct_transcript_with(
    segments: &[RawSegment],
    title: &str,
    opts: &Opts,
) -> TranscriptResult {
    let classified = classify_all(segments, opts.skipped_header_candidates);
    let assembled = assemble(&classified);
    let body = finalize(&assembled, title, &opts.artifacts);

    tracing::info!(
        segments = segments.len(),
        assembled_bytes = assembled.len(),
        body_bytes = body.len(),
        "reconstructed transcript"
    );

    TranscriptResult {
        title: title.to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        let segments = [RawSegment::caption("hello"), RawSegment::caption("world.")];
        let result = reconstruct_transcript(&segments, "T");
        assert_eq!(result.title, "T");
        assert_eq!(result.body, "# T\n\nHello world.");
    }

    #[test]
    fn empty_sequence_yields_heading_only() {
        let result = reconstruct_transcript(&[], "Nothing");
        assert_eq!(result.body, "# Nothing\n\n");
    }

    #[test]
    fn custom_threshold_and_artifacts_are_honored() {
        let opts = Opts {
            skipped_header_candidates: 1,
            artifacts: vec!["[Music]".to_owned()],
            ..Opts::default()
        };
        let segments = [
            RawSegment::header("Transcript"),
            RawSegment::header("Opening"),
            RawSegment::caption("[Music] hi there."),
        ];
        let result = reconstruct_transcript_with(&segments, "T", &opts);
        assert_eq!(result.body, "# T\n\n###Opening\n\n hi there.");
    }
}
