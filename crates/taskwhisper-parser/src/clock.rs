//! Reference time source for relative date resolution.

use chrono::{DateTime, FixedOffset, Local};

use taskwhisper_core::{Result, TaskWhisperError};

/// Supplies "now" to the temporal extractor.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant. Used for tests and `--now`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// Parse an RFC 3339 timestamp such as `2026-10-19T10:00:00+02:00`.
    pub fn parse_rfc3339(raw: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(Self::new)
            .map_err(|e| TaskWhisperError::InvalidReferenceTime(format!("{}: {}", raw, e)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}
