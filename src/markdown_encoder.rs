use std::io::Write;

use crate::extract::PageData;
use crate::transcript_encoder::TranscriptEncoder;
use crate::{Error, Result};

/// A `TranscriptEncoder` that writes the transcript body as Markdown.
///
/// The body already carries its `# title` heading and `###` chapter lines, so each transcript
/// is written verbatim followed by a single newline.
pub struct MarkdownEncoder<W: Write> {
    /// The underlying writer we stream Markdown into.
    w: W,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> MarkdownEncoder<W> {
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> TranscriptEncoder for MarkdownEncoder<W> {
    fn write_transcript(&mut self, page: &PageData) -> Result<()> {
        if self.closed {
            return Err(Error::msg(
                "cannot write transcript: encoder is already closed",
            ));
        }

        self.w.write_all(page.transcript.body.as_bytes())?;
        writeln!(&mut self.w)?;

        // Flush so streaming consumers (stdout, pipes) see output promptly.
        self.w.flush()?;
        Ok(())
    }

    /// Flush the underlying writer. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;
        Ok(())
    }
}
