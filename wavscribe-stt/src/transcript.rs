//! Transcript accumulation
//!
//! Utterances arrive one at a time (mid-stream completions plus the final
//! flush); the transcript is their space-joined concatenation.

/// Ordered collection of decoded utterance fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    fragments: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded utterance. Blank fragments are dropped.
    pub fn push_fragment<S: Into<String>>(&mut self, fragment: S) {
        let fragment = fragment.into();
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            self.fragments.push(trimmed.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of utterances collected
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// The full transcript, fragments joined by single spaces
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }
}
