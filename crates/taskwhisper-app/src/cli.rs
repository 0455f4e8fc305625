//! CLI argument definitions for the TaskWhisper binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// TaskWhisper: turn a spoken task description into a structured task.
#[derive(Parser, Debug)]
#[command(name = "taskwhisper", version, about)]
pub struct CliArgs {
    /// Transcript to parse. Read from stdin when omitted.
    pub transcript: Option<String>,

    /// Language code of the transcript (en, es, fr, de, hi).
    #[arg(short = 'l', long = "lang")]
    pub language: Option<String>,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Reference time for relative dates, as RFC 3339.
    #[arg(long = "now")]
    pub now: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > TASKWHISPER_CONFIG env var > ~/.taskwhisper/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TASKWHISPER_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the transcript language.
    ///
    /// Priority: --lang flag > config file value.
    pub fn resolve_language(&self, config_language: &str) -> String {
        self.language
            .clone()
            .unwrap_or_else(|| config_language.to_string())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".taskwhisper").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".taskwhisper").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let args = CliArgs::try_parse_from([
            "taskwhisper",
            "remind me to call mom",
            "-l",
            "es",
            "--now",
            "2026-10-19T10:00:00Z",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.transcript.as_deref(), Some("remind me to call mom"));
        assert_eq!(args.language.as_deref(), Some("es"));
        assert_eq!(args.now.as_deref(), Some("2026-10-19T10:00:00Z"));
        assert!(args.pretty);
    }

    #[test]
    fn test_transcript_is_optional() {
        let args = CliArgs::try_parse_from(["taskwhisper"]).unwrap();
        assert!(args.transcript.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs::try_parse_from(["taskwhisper", "-c", "/tmp/tw.toml"]).unwrap();
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/tw.toml"));
    }

    #[test]
    fn test_language_and_log_level_fallbacks() {
        let args = CliArgs::try_parse_from(["taskwhisper"]).unwrap();
        assert_eq!(args.resolve_language("fr"), "fr");
        assert_eq!(args.resolve_log_level("warn"), "warn");

        let args =
            CliArgs::try_parse_from(["taskwhisper", "--lang", "de", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.resolve_language("fr"), "de");
        assert_eq!(args.resolve_log_level("warn"), "debug");
    }
}
