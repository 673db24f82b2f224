/// The supported output formats for a reconstructed transcript.
///
/// Each variant maps to a concrete `TranscriptEncoder` implementation. With the `cli` feature
/// enabled the enum doubles as a `clap` value so the binary can take it straight from a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputType {
    /// The transcript body as Markdown (`# title`, `###chapter`, prose).
    #[default]
    Markdown,

    /// A single JSON object carrying the title, body and page metadata.
    Json,
}
