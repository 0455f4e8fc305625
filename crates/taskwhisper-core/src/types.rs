//! Domain types shared by the parser and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enums
// =============================================================================

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::ToDo => write!(f, "To Do"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Done => write!(f, "Done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Do" => Ok(TaskStatus::ToDo),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Done" => Ok(TaskStatus::Done),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Tag reported when no category word is found in a transcript.
pub const DEFAULT_TAG: &str = "general";

/// The structured task extracted from a single transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub description: String,
    pub tag: String,
}

impl Default for ParsedTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            due_date: None,
            priority: Priority::default(),
            status: TaskStatus::default(),
            description: String::new(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

/// JSON record returned for a voice upload: the raw transcript alongside
/// the fields parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceTaskResponse {
    pub transcript: String,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub description: String,
    pub tag: String,
}

impl VoiceTaskResponse {
    /// Combine a transcript with its parse result. An empty title is
    /// replaced by `untitled_title`.
    pub fn new(transcript: impl Into<String>, parsed: ParsedTask, untitled_title: &str) -> Self {
        let title = if parsed.title.is_empty() {
            untitled_title.to_string()
        } else {
            parsed.title
        };
        Self {
            transcript: transcript.into(),
            title,
            due_date: parsed.due_date,
            priority: parsed.priority,
            status: parsed.status,
            description: parsed.description,
            tag: parsed.tag,
        }
    }
}
