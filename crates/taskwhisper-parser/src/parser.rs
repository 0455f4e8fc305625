//! Transcript to [`ParsedTask`] pipeline.

use std::sync::Arc;

use taskwhisper_core::config::ParserConfig;
use taskwhisper_core::ParsedTask;

use crate::classifier::{classify_priority, classify_status, detect_tag};
use crate::clock::{Clock, SystemClock};
use crate::distiller;
use crate::language;
use crate::temporal::extract_due_date;

/// Turns free-form transcripts into structured tasks.
///
/// Stateless apart from its configuration and clock, so a single parser can
/// be shared across threads.
#[derive(Clone)]
pub struct TaskParser {
    config: ParserConfig,
    clock: Arc<dyn Clock>,
}

impl TaskParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the reference clock used for relative dates.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `transcript` using the rules for `language`.
    ///
    /// Never fails: unknown languages use English rules, and a date that
    /// cannot be resolved leaves `due_date` empty.
    pub fn parse(&self, transcript: &str, language: &str) -> ParsedTask {
        let text = transcript.trim();
        let bundle = language::resolve(language);
        let lower = text.to_lowercase();

        let due_date = extract_due_date(bundle.grammar(), text, self.clock.now());
        let priority = classify_priority(&lower, bundle);
        let status = classify_status(&lower, bundle);
        let tag = detect_tag(&lower)
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_tag.clone());

        let task = ParsedTask {
            title: distiller::title(text, bundle, &self.config.title),
            due_date,
            priority,
            status,
            description: distiller::description(text, bundle),
            tag,
        };

        tracing::debug!(
            language = bundle.code(),
            title = %task.title,
            priority = %task.priority,
            status = %task.status,
            tag = %task.tag,
            has_due_date = task.due_date.is_some(),
            "Parsed transcript"
        );

        task
    }

    /// Parse with the configured default language.
    pub fn parse_default(&self, transcript: &str) -> ParsedTask {
        self.parse(transcript, &self.config.default_language)
    }
}

impl Default for TaskParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl std::fmt::Debug for TaskParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parse with default settings and the system clock.
pub fn parse_task(transcript: &str, language: &str) -> ParsedTask {
    TaskParser::default().parse(transcript, language)
}
