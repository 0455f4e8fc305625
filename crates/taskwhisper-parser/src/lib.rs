//! Multilingual transcript parsing for TaskWhisper.
//!
//! A transcript passes through four stages: the language is resolved to a
//! rule bundle, the first date/time expression is resolved to a due date,
//! keywords classify priority, status and tag, and the distiller produces the
//! title and description.

pub mod classifier;
pub mod clock;
pub mod distiller;
pub mod language;
pub mod parser;
pub mod rules;
pub mod temporal;
pub mod voice;

pub use clock::{Clock, FixedClock, SystemClock};
pub use language::{resolve, supported_languages, RuleBundle, DEFAULT_LANGUAGE};
pub use parser::{parse_task, TaskParser};
pub use temporal::{extract_due_date, TemporalError, TemporalGrammar, TemporalMatch};
pub use voice::VoiceTaskFlow;
