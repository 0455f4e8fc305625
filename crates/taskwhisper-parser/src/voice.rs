//! Voice upload flow: audio in, task record out.

use taskwhisper_core::config::VoiceConfig;
use taskwhisper_core::{Result, TaskWhisperError, TranscriptionService, VoiceTaskResponse};

use crate::parser::TaskParser;

/// Chains a [`TranscriptionService`] into a [`TaskParser`].
pub struct VoiceTaskFlow<T: TranscriptionService> {
    transcriber: T,
    parser: TaskParser,
    voice: VoiceConfig,
}

impl<T: TranscriptionService> VoiceTaskFlow<T> {
    pub fn new(transcriber: T, parser: TaskParser, voice: VoiceConfig) -> Self {
        Self {
            transcriber,
            parser,
            voice,
        }
    }

    pub fn parser(&self) -> &TaskParser {
        &self.parser
    }

    /// Transcribe `audio` and parse the transcript.
    ///
    /// A missing MIME type defaults to the configured one and a missing
    /// language to the parser's default. An empty transcript is an error.
    pub async fn process(
        &self,
        audio: &[u8],
        mime_type: Option<&str>,
        language: Option<&str>,
    ) -> Result<VoiceTaskResponse> {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.voice.default_mime_type);
        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.parser.config().default_language);

        let transcript = self.transcriber.transcribe(audio, mime_type).await?;
        if transcript.trim().is_empty() {
            tracing::warn!(bytes = audio.len(), mime_type, "No transcript detected");
            return Err(TaskWhisperError::EmptyTranscript);
        }

        tracing::info!(
            language,
            chars = transcript.len(),
            "Transcribed voice task"
        );

        let parsed = self.parser.parse(&transcript, language);
        Ok(VoiceTaskResponse::new(
            transcript,
            parsed,
            &self.voice.untitled_title,
        ))
    }
}
