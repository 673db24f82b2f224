//! Fold classified segments into transcript prose.
//!
//! Captions arrive as short lowercase fragments with no reliable sentence boundaries. The
//! assembler only knows one thing about sentences: a fragment ending in `.`, `!` or `?` closes
//! one. Fragments that don't are case-normalized so that only the first fragment after a
//! sentence end starts with a capital.
//!
//! Known limitation: proper nouns and acronyms inside non-terminal fragments get lowercased.

use crate::segments::ClassifiedSegment;

/// Appended for an empty caption; marks a paragraph break.
const PARAGRAPH_BREAK: &str = "\n\n\n";

/// Mutable state for one assembly pass.
///
/// Owned by a single [`assemble`] call and consumed into the output string at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyState {
    buffer: String,
    capitalize_next: bool,
}

impl Default for AssemblyState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            capitalize_next: true,
        }
    }

    /// Text assembled so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the next non-terminal fragment starts a sentence.
    pub fn capitalize_next(&self) -> bool {
        self.capitalize_next
    }

    /// Apply one segment and return the new state.
    pub fn step(mut self, segment: &ClassifiedSegment) -> Self {
        self.push(segment);
        self
    }

    /// Apply one segment in place.
    pub fn push(&mut self, segment: &ClassifiedSegment) {
        match segment {
            ClassifiedSegment::Skip => {}
            ClassifiedSegment::Header { text, .. } => {
                self.buffer.push_str("\n\n###");
                self.buffer.push_str(text);
                self.buffer.push_str("\n\n");
            }
            ClassifiedSegment::Caption { text } if text.is_empty() => {
                self.buffer.push_str(PARAGRAPH_BREAK);
            }
            ClassifiedSegment::Caption { text } => self.push_caption(text),
        }
    }

    fn push_caption(&mut self, text: &str) {
        if let Some(last) = self.buffer.chars().last() {
            if last != ' ' && last != '\n' {
                self.buffer.push(' ');
            }
        }

        if ends_sentence(text) {
            self.buffer.push_str(text);
            self.capitalize_next = true;
            return;
        }

        if self.capitalize_next {
            let mut chars = text.chars();
            if let Some(first) = chars.next() {
                self.buffer.extend(first.to_uppercase());
                self.buffer.push_str(&chars.as_str().to_lowercase());
            }
            self.capitalize_next = false;
        } else {
            // The continuation carries its own leading space on top of the boundary space.
            self.buffer.push(' ');
            self.buffer.push_str(&text.to_lowercase());
        }
    }

    /// Consume the state and return the assembled text.
    pub fn into_buffer(self) -> String {
        self.buffer
    }
}

fn ends_sentence(text: &str) -> bool {
    matches!(text.chars().last(), Some('.' | '!' | '?'))
}

/// Assemble classified segments into a single string in one forward pass.
pub fn assemble<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a ClassifiedSegment>,
{
    segments
        .into_iter()
        .fold(AssemblyState::new(), AssemblyState::step)
        .into_buffer()
}
