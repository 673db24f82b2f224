use std::io::Write;

use serde::Serialize;

use crate::extract::PageData;
use crate::transcript_encoder::TranscriptEncoder;
use crate::{Error, Result};

/// A `TranscriptEncoder` that writes each transcript as one JSON object per line.
///
/// Example output:
/// ```json
/// {"title":"Clip","body":"# Clip\n\nHello.","thumbnail_url":null,"description":null}
/// ```
pub struct JsonEncoder<W: Write> {
    /// The underlying writer we stream JSON into.
    w: W,

    /// Whether the encoder has been closed.
    /// Once closed, no further writes are allowed.
    closed: bool,
}

/// Flat wire shape; keeps the JSON stable if `PageData` grows internal fields.
#[derive(Serialize)]
struct JsonTranscript<'a> {
    title: &'a str,
    body: &'a str,
    thumbnail_url: Option<&'a str>,
    description: Option<&'a str>,
}

impl<W: Write> JsonEncoder<W> {
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> TranscriptEncoder for JsonEncoder<W> {
    fn write_transcript(&mut self, page: &PageData) -> Result<()> {
        if self.closed {
            return Err(Error::msg(
                "cannot write transcript: encoder is already closed",
            ));
        }

        let record = JsonTranscript {
            title: &page.title,
            body: &page.transcript.body,
            thumbnail_url: page.thumbnail_url.as_deref(),
            description: page.description.as_deref(),
        };
        serde_json::to_writer(&mut self.w, &record)?;
        writeln!(&mut self.w)?;

        self.w.flush()?;
        Ok(())
    }

    /// Flush the underlying writer.
    ///
    /// This method is idempotent; after closing, no further transcripts may be written.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;
        Ok(())
    }
}
