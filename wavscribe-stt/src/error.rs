//! Error types for STT operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

#[derive(Error, Debug)]
pub enum SttError {
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("failed to create recognizer: {0}")]
    RecognizerInit(String),

    #[error("failed to open wav: {0}")]
    AudioOpen(String),

    #[error("failed to read samples: {0}")]
    AudioRead(String),

    #[error("recognition failed: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SttError {
    pub fn model_load<S: Into<String>>(msg: S) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn recognizer_init<S: Into<String>>(msg: S) -> Self {
        Self::RecognizerInit(msg.into())
    }

    pub fn audio_open<S: Into<String>>(msg: S) -> Self {
        Self::AudioOpen(msg.into())
    }

    pub fn audio_read<S: Into<String>>(msg: S) -> Self {
        Self::AudioRead(msg.into())
    }

    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }
}
