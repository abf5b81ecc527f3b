//! WAV input for the recognizer
//!
//! Wraps hound's reader with the fixed-size chunked reads the engine is fed
//! with, plus an informational check of the expected sample layout.

use crate::error::{Result, SttError};
use hound::{SampleFormat, WavReader, WavSpec};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Sample rate the recognizer models are trained for
pub const EXPECTED_SAMPLE_RATE: u32 = 16000;

/// Samples per block fed to the recognizer
pub const CHUNK_SAMPLES: usize = 4000;

/// Sequential reader over a WAV file's PCM samples
pub struct WavSource {
    reader: WavReader<BufReader<File>>,
    spec: WavSpec,
}

impl WavSource {
    /// Open a WAV file for sequential reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader =
            WavReader::open(path.as_ref()).map_err(|e| SttError::audio_open(e.to_string()))?;
        let spec = reader.spec();

        info!(
            "Loaded WAV: {} Hz, {} channels, {} bits",
            spec.sample_rate, spec.channels, spec.bits_per_sample
        );

        Ok(Self { reader, spec })
    }

    /// Sample rate from the container header
    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    /// Channel count from the container header
    pub fn channels(&self) -> u16 {
        self.spec.channels
    }

    /// Sample width in bits from the container header
    pub fn bits_per_sample(&self) -> u16 {
        self.spec.bits_per_sample
    }

    /// Whether the file matches the mono 16-bit 16 kHz layout the models
    /// are trained for. Informational only: mismatches are tolerated.
    pub fn is_expected_format(&self) -> bool {
        self.spec.channels == 1
            && self.spec.bits_per_sample == 16
            && self.spec.sample_format == SampleFormat::Int
            && self.spec.sample_rate == EXPECTED_SAMPLE_RATE
    }

    /// Emit a warning when the layout differs from the expected one
    pub fn warn_on_unexpected_format(&self) {
        if !self.is_expected_format() {
            warn!(
                "Expected mono 16-bit {} Hz PCM, got {} channel(s), {} bits, {} Hz",
                EXPECTED_SAMPLE_RATE,
                self.spec.channels,
                self.spec.bits_per_sample,
                self.spec.sample_rate
            );
        }
    }

    /// Read up to `max_samples` samples from the current position.
    ///
    /// An empty vector signals the stream is exhausted.
    pub fn read_chunk(&mut self, max_samples: usize) -> Result<Vec<i16>> {
        let mut chunk = Vec::with_capacity(max_samples);
        for sample in self.reader.samples::<i16>().take(max_samples) {
            let sample = sample.map_err(|e| SttError::audio_read(e.to_string()))?;
            chunk.push(sample);
        }
        Ok(chunk)
    }
}
