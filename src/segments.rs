use serde::{Deserialize, Serialize};

use crate::opts::DEFAULT_SKIPPED_HEADER_CANDIDATES;

/// One transcript-panel element as seen by the page accessor.
///
/// The accessor probes each element once: does it contain a chapter-header shape, does it
/// contain a caption-text shape. At most one of `header_text`/`caption_text` is meaningful;
/// an element matching neither carries no content and is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub is_header_candidate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_text: Option<String>,
}

impl RawSegment {
    /// An element that matched the chapter-header shape.
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            is_header_candidate: true,
            header_text: Some(text.into()),
            caption_text: None,
        }
    }

    /// An element that matched the caption-text shape.
    pub fn caption(text: impl Into<String>) -> Self {
        Self {
            is_header_candidate: false,
            header_text: None,
            caption_text: Some(text.into()),
        }
    }

    /// An element that matched neither shape.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A segment after classification, ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedSegment {
    /// A real chapter heading. `ordinal` counts every header candidate seen so far (1-based),
    /// skipped ones included.
    Header { text: String, ordinal: usize },

    /// Caption text, trimmed and with newlines removed. May be empty.
    Caption { text: String },

    Skip,
}

/// Classify one segment using the default header-skip threshold.
///
/// Returns the classification and the updated header ordinal.
pub fn classify(segment: &RawSegment, header_ordinal: usize) -> (ClassifiedSegment, usize) {
    classify_with_threshold(segment, header_ordinal, DEFAULT_SKIPPED_HEADER_CANDIDATES)
}

/// Classify one segment, dropping the first `skipped_headers` header candidates.
pub fn classify_with_threshold(
    segment: &RawSegment,
    header_ordinal: usize,
    skipped_headers: usize,
) -> (ClassifiedSegment, usize) {
    if segment.is_header_candidate {
        let ordinal = header_ordinal + 1;
        if ordinal <= skipped_headers {
            return (ClassifiedSegment::Skip, ordinal);
        }

        let text = segment.header_text.clone().unwrap_or_default();
        return (ClassifiedSegment::Header { text, ordinal }, ordinal);
    }

    match &segment.caption_text {
        Some(raw) => {
            let text = raw.replace('\n', "").trim().to_owned();
            (ClassifiedSegment::Caption { text }, header_ordinal)
        }
        None => (ClassifiedSegment::Skip, header_ordinal),
    }
}

/// Classify a whole segment sequence in order, threading the header ordinal through.
pub fn classify_all(segments: &[RawSegment], skipped_headers: usize) -> Vec<ClassifiedSegment> {
    let mut ordinal = 0;
    let classified: Vec<ClassifiedSegment> = segments
        .iter()
        .map(|seg| {
            let (class, next) = classify_with_threshold(seg, ordinal, skipped_headers);
            ordinal = next;
            class
        })
        .collect();

    tracing::debug!(
        segments = segments.len(),
        header_candidates = ordinal,
        chapters = classified
            .iter()
            .filter(|c| matches!(c, ClassifiedSegment::Header { .. }))
            .count(),
        "classified transcript segments"
    );

    classified
}

/// Parse a captured list of raw segments from JSON.
///
/// This lets callers replay a segment list captured from a live page without re-querying it.
pub fn segments_from_json(json: &str) -> crate::Result<Vec<RawSegment>> {
    Ok(serde_json::from_str(json)?)
}
