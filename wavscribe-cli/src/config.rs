//! Invocation configuration
//!
//! One positional WAV path plus the `VOSK_MODEL_PATH` environment variable,
//! resolved into a complete value before the pipeline starts.

use crate::output::Failure;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the Vosk model directory
pub const MODEL_PATH_ENV: &str = "VOSK_MODEL_PATH";

const MODEL_HINT: &str =
    "Download a model (e.g. vosk-model-small-en-us-0.15) and set VOSK_MODEL_PATH to its folder";

#[derive(Debug, Clone)]
pub struct Config {
    pub wav_path: PathBuf,
    pub model_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the CLI argument and the process environment
    pub fn resolve(wav_path: PathBuf) -> Result<Self, Failure> {
        let model_path = model_path_from(env::var(MODEL_PATH_ENV).ok())?;
        Ok(Self {
            wav_path,
            model_path,
        })
    }
}

/// Validate the raw environment value into an existing model directory
fn model_path_from(raw: Option<String>) -> Result<PathBuf, Failure> {
    let trimmed = raw.as_deref().map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Err(Failure::new(format!("{MODEL_PATH_ENV} is not set")).with_hint(MODEL_HINT));
    }

    let path = PathBuf::from(trimmed);
    if !path.is_dir() {
        return Err(Failure::new(format!(
            "{MODEL_PATH_ENV} not found: {}",
            path.display()
        )));
    }

    Ok(path)
}
