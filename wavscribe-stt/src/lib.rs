//! Wavscribe Speech-to-Text
//!
//! Offline WAV transcription backed by the Vosk engine (libvosk).
//!
//! ## Features
//!
//! - Sequential WAV reading via hound, fed to the engine in fixed-size chunks
//! - Utterance accumulation into a single space-joined transcript
//! - Explicit error values for every fallible step
//!
//! ## Quick Start
//!
//! ```no_run
//! use wavscribe_stt::{Recognizer, WavSource};
//!
//! let mut source = WavSource::open("audio.wav")?;
//! let mut recognizer = Recognizer::new(
//!     "/opt/models/vosk-model-small-en-us-0.15",
//!     source.sample_rate() as f32,
//! )?;
//!
//! let transcript = recognizer.transcribe(&mut source)?;
//! println!("{}", transcript.text());
//! # Ok::<(), wavscribe_stt::SttError>(())
//! ```

pub mod audio;
pub mod error;
pub mod recognizer;
pub mod transcript;

pub use audio::WavSource;
pub use error::{Result, SttError};
pub use recognizer::Recognizer;
pub use transcript::Transcript;
