//! Shared types, configuration and error handling for TaskWhisper.

pub mod config;
pub mod error;
pub mod transcription;
pub mod types;

pub use config::TaskWhisperConfig;
pub use error::{Result, TaskWhisperError};
pub use transcription::{MockTranscriptionService, TranscriptionService};
pub use types::*;
