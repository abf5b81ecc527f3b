//! Vosk recognizer adapter
//!
//! Owns the loaded model and the per-invocation recognizer state. Audio is
//! fed in fixed-size chunks; completed utterances are collected into a
//! [`Transcript`] with one final flush after the stream ends.

use crate::audio::{WavSource, CHUNK_SAMPLES};
use crate::error::{Result, SttError};
use crate::transcript::Transcript;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use vosk::{CompleteResult, DecodingState, Model};

/// Speech recognizer bound to a model directory and a sample rate
pub struct Recognizer {
    inner: vosk::Recognizer,
    // The model must outlive every decode call on `inner`.
    _model: Model,
}

impl Recognizer {
    /// Load the model and construct a recognizer for the given sample rate.
    ///
    /// Word-level output is enabled even though only utterance text is
    /// consumed here; downstream tooling assumes the engine runs in that
    /// mode.
    pub fn new<P: AsRef<Path>>(model_path: P, sample_rate: f32) -> Result<Self> {
        let path = model_path.as_ref();
        let model = Model::new(path.to_string_lossy()).ok_or_else(|| {
            SttError::model_load(format!("no usable model at {}", path.display()))
        })?;
        let mut inner = vosk::Recognizer::new(&model, sample_rate).ok_or_else(|| {
            SttError::recognizer_init(format!("sample rate {sample_rate} Hz rejected"))
        })?;
        inner.set_words(true);

        debug!("Recognizer ready: model {}, {} Hz", path.display(), sample_rate);

        Ok(Self {
            inner,
            _model: model,
        })
    }

    /// Feed one block of samples.
    ///
    /// Returns the decoded text when the block completes an utterance and
    /// that text is non-empty.
    pub fn accept_chunk(&mut self, samples: &[i16]) -> Result<Option<String>> {
        let state = self
            .inner
            .accept_waveform(samples)
            .map_err(|e| SttError::decode(format!("chunk rejected: {e}")))?;

        match state {
            DecodingState::Finalized => Ok(non_empty(utterance_text(self.inner.result()))),
            DecodingState::Running => Ok(None),
            DecodingState::Failed => Err(SttError::decode("decoder entered failed state")),
        }
    }

    /// Flush buffered audio and return any trailing utterance text
    pub fn finalize(&mut self) -> Result<Option<String>> {
        Ok(non_empty(utterance_text(self.inner.final_result())))
    }

    /// Stream an entire WAV source through the recognizer.
    ///
    /// Reads [`CHUNK_SAMPLES`]-sized blocks until a zero-length read, then
    /// flushes. One linear pass; the recognizer is not reusable across
    /// sources afterwards.
    pub fn transcribe(&mut self, source: &mut WavSource) -> Result<Transcript> {
        let start = Instant::now();
        let mut transcript = Transcript::new();

        loop {
            let chunk = source.read_chunk(CHUNK_SAMPLES)?;
            if chunk.is_empty() {
                break;
            }
            if let Some(text) = self.accept_chunk(&chunk)? {
                transcript.push_fragment(text);
            }
        }

        if let Some(text) = self.finalize()? {
            transcript.push_fragment(text);
        }

        debug!(
            "Transcribed {} utterance(s) in {:.2}ms",
            transcript.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(transcript)
    }
}

fn utterance_text(result: CompleteResult) -> String {
    match result {
        CompleteResult::Single(single) => single.text.to_string(),
        CompleteResult::Multiple(multiple) => multiple
            .alternatives
            .first()
            .map(|alternative| alternative.text.to_string())
            .unwrap_or_default(),
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
