use crate::Result;
use crate::extract::PageData;

/// Serializes extracted pages to some output format.
///
/// `close` must be idempotent, and writing after `close` must fail.
pub trait TranscriptEncoder {
    fn write_transcript(&mut self, page: &PageData) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}
