//! The stdout contract
//!
//! Exactly one JSON object per invocation: `{"transcript": ...}` on success
//! or `{"error": ..., "hint"?: ...}` on failure. Everything else goes to
//! stderr.

use serde::Serialize;
use wavscribe_stt::{SttError, Transcript};

/// Exit code for every validation, I/O, or recognition failure
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Success payload
#[derive(Debug, Serialize)]
pub struct TranscriptReport {
    pub transcript: String,
}

impl TranscriptReport {
    pub fn new(transcript: &Transcript) -> Self {
        Self {
            transcript: transcript.text(),
        }
    }
}

/// Failure payload; `hint` is present only when remediation guidance exists
#[derive(Debug, Serialize)]
pub struct Failure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Failure {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
            hint: None,
        }
    }

    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<SttError> for Failure {
    fn from(err: SttError) -> Self {
        Self::new(err.to_string())
    }
}

/// Print the single JSON line that constitutes the tool's stdout
pub fn emit<T: Serialize>(payload: &T) {
    // Both payload shapes serialize plain strings; this cannot fail.
    let line = serde_json::to_string(payload).expect("output serialization");
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_report_json() {
        let mut transcript = Transcript::new();
        transcript.push_fragment("hello world");
        transcript.push_fragment("goodbye");

        let report = TranscriptReport::new(&transcript);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"transcript":"hello world goodbye"}"#
        );
    }

    #[test]
    fn test_empty_transcript_json() {
        let report = TranscriptReport::new(&Transcript::new());
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"transcript":""}"#
        );
    }

    #[test]
    fn test_failure_omits_absent_hint() {
        let failure = Failure::new("missing wav path");
        assert_eq!(
            serde_json::to_string(&failure).unwrap(),
            r#"{"error":"missing wav path"}"#
        );
    }

    #[test]
    fn test_failure_with_hint() {
        let failure = Failure::new("VOSK_MODEL_PATH is not set").with_hint("set it");
        assert_eq!(
            serde_json::to_string(&failure).unwrap(),
            r#"{"error":"VOSK_MODEL_PATH is not set","hint":"set it"}"#
        );
    }

    #[test]
    fn test_stt_error_becomes_failure() {
        let failure = Failure::from(SttError::audio_open("no such file"));
        assert_eq!(failure.error, "failed to open wav: no such file");
        assert!(failure.hint.is_none());
    }
}
