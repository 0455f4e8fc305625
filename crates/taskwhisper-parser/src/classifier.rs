//! Priority, status and tag detection.
//!
//! Plain keyword scans over the transcript. Inputs are expected to be
//! lowercased already; the patterns are case-insensitive regardless.

use std::sync::LazyLock;

use regex::Regex;

use taskwhisper_core::{Priority, TaskStatus};

use crate::language::RuleBundle;
use crate::rules::TAG_VOCABULARY;

/// High wins over low; neither means medium.
///
/// "not that important" contains "important" and therefore reads as high.
pub fn classify_priority(text: &str, bundle: &RuleBundle) -> Priority {
    if bundle.priority_high.is_match(text) {
        Priority::High
    } else if bundle.priority_low.is_match(text) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Done wins over in-progress when both are mentioned.
pub fn classify_status(text: &str, bundle: &RuleBundle) -> TaskStatus {
    let mut status = TaskStatus::ToDo;
    if bundle.status_in_progress.is_match(text) {
        status = TaskStatus::InProgress;
    }
    if bundle.status_done.is_match(text) {
        status = TaskStatus::Done;
    }
    status
}

static TAG_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TAG_VOCABULARY
        .iter()
        .map(|tag| {
            let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(tag)))
                .expect("Invalid tag regex");
            (*tag, regex)
        })
        .collect()
});

/// First vocabulary word present in `text`, in vocabulary order.
pub fn detect_tag(text: &str) -> Option<&'static str> {
    TAG_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(tag, _)| *tag)
}
