use crate::output_type::OutputType;

/// Number of leading header-shaped elements the transcript panel renders before the first real
/// chapter heading.
pub const DEFAULT_SKIPPED_HEADER_CANDIDATES: usize = 3;

/// Transient "retry" prompt the transcript panel can leak into caption text.
pub const DEFAULT_RETRY_ARTIFACT: &str = "No results found Tap to retry";

/// Suffix the page appends to the video title in `<title>`.
pub const DEFAULT_TITLE_SUFFIX: &str = " - YouTube";

/// Options that control how a transcript is reconstructed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// How many header candidates to drop before emitting chapter headings.
    ///
    /// The default of 3 matches the panel's own structural headers. It is kept configurable
    /// because it is an observed layout detail, not something derived from content.
    pub skipped_header_candidates: usize,

    /// Literal strings stripped from the assembled text during cleanup.
    pub artifacts: Vec<String>,

    /// Trailing suffix removed from the page `<title>` to get the video title.
    pub title_suffix: String,

    /// The desired output format for the transcript.
    pub output_type: OutputType,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            skipped_header_candidates: DEFAULT_SKIPPED_HEADER_CANDIDATES,
            artifacts: vec![DEFAULT_RETRY_ARTIFACT.to_owned()],
            title_suffix: DEFAULT_TITLE_SUFFIX.to_owned(),
            output_type: OutputType::default(),
        }
    }
}
