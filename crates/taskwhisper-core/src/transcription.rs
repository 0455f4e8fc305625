//! Speech-to-text boundary.
//!
//! The transcription provider is an external collaborator. This module only
//! defines the contract the voice-task flow depends on, plus a mock used in
//! tests and local development.

use std::future::Future;

use crate::error::{Result, TaskWhisperError};

// =============================================================================
// Trait
// =============================================================================

/// Service turning an uploaded audio clip into a transcript.
///
/// Implementations return a best-effort transcript, which may be empty when
/// nothing intelligible was said. Partial or streaming results are never
/// surfaced.
pub trait TranscriptionService: Send + Sync {
    /// Transcribe encoded audio.
    ///
    /// # Arguments
    /// * `audio` - Raw bytes of the uploaded clip.
    /// * `mime_type` - Container/codec of `audio` (e.g. `audio/webm`).
    fn transcribe(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

// =============================================================================
// Mock implementation
// =============================================================================

/// Mock transcription service returning a fixed transcript.
#[derive(Debug, Clone, Default)]
pub struct MockTranscriptionService {
    transcript: String,
}

impl MockTranscriptionService {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl TranscriptionService for MockTranscriptionService {
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String> {
        if audio.is_empty() {
            return Err(TaskWhisperError::Transcription(
                "Cannot transcribe empty audio data".to_string(),
            ));
        }
        if !mime_type.starts_with("audio/") {
            return Err(TaskWhisperError::Transcription(format!(
                "Unsupported MIME type: {}",
                mime_type
            )));
        }

        tracing::debug!(
            bytes = audio.len(),
            mime_type = mime_type,
            "Mock transcription generated"
        );

        Ok(self.transcript.clone())
    }
}
