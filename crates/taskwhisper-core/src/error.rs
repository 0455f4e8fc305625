use thiserror::Error;

/// Top-level error type for TaskWhisper.
///
/// The transcript parser itself never fails; these variants cover the
/// surrounding concerns (configuration, transcription, I/O) that callers
/// compose around it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaskWhisperError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("No transcript detected")]
    EmptyTranscript,

    #[error("Invalid reference time: {0}")]
    InvalidReferenceTime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for TaskWhisperError {
    fn from(err: toml::de::Error) -> Self {
        TaskWhisperError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TaskWhisperError {
    fn from(err: toml::ser::Error) -> Self {
        TaskWhisperError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TaskWhisperError {
    fn from(err: serde_json::Error) -> Self {
        TaskWhisperError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for TaskWhisper operations.
pub type Result<T> = std::result::Result<T, TaskWhisperError>;
