use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TaskWhisperError};

/// Top-level configuration for TaskWhisper.
///
/// Loaded from `~/.taskwhisper/config.toml` by default. Every section and
/// field is optional; missing values fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskWhisperConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl TaskWhisperConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TaskWhisperConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TaskWhisperError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Transcript parser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Language used when the caller does not name one.
    pub default_language: String,
    /// Tag reported when no vocabulary word is found.
    pub default_tag: String,
    #[serde(default)]
    pub title: TitleConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            default_tag: "general".to_string(),
            title: TitleConfig::default(),
        }
    }
}

/// Title length bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Titles with more words than this are truncated.
    pub max_words: usize,
    /// Number of words kept when truncating.
    pub truncate_to: usize,
    /// Marker appended to a truncated title.
    pub ellipsis: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            max_words: 12,
            truncate_to: 10,
            ellipsis: "...".to_string(),
        }
    }
}

/// Voice upload settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// MIME type assumed when an upload does not declare one.
    pub default_mime_type: String,
    /// Title reported when the transcript yields no title words.
    pub untitled_title: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            default_mime_type: "audio/webm".to_string(),
            untitled_title: "Untitled Task".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = TaskWhisperConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.parser.default_language, "en");
        assert_eq!(config.parser.default_tag, "general");
        assert_eq!(config.parser.title.max_words, 12);
        assert_eq!(config.parser.title.truncate_to, 10);
        assert_eq!(config.parser.title.ellipsis, "...");
        assert_eq!(config.voice.default_mime_type, "audio/webm");
        assert_eq!(config.voice.untitled_title, "Untitled Task");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[parser]
default_language = "es"
default_tag = "misc"

[parser.title]
max_words = 8
truncate_to = 6
ellipsis = "…"

[voice]
default_mime_type = "audio/ogg"
untitled_title = "Sin título"
"#;
        let file = create_temp_config(content);
        let config = TaskWhisperConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.parser.default_language, "es");
        assert_eq!(config.parser.default_tag, "misc");
        assert_eq!(config.parser.title.max_words, 8);
        assert_eq!(config.parser.title.truncate_to, 6);
        assert_eq!(config.parser.title.ellipsis, "…");
        assert_eq!(config.voice.default_mime_type, "audio/ogg");
        assert_eq!(config.voice.untitled_title, "Sin título");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[parser.title]
max_words = 20
"#;
        let file = create_temp_config(content);
        let config = TaskWhisperConfig::load(file.path()).unwrap();
        assert_eq!(config.parser.title.max_words, 20);
        // Remaining fields use defaults
        assert_eq!(config.parser.title.truncate_to, 10);
        assert_eq!(config.parser.default_language, "en");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = TaskWhisperConfig::load(file.path()).unwrap();
        assert_eq!(config.parser.default_tag, "general");
        assert_eq!(config.voice.untitled_title, "Untitled Task");
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = TaskWhisperConfig::load(file.path());
        assert!(matches!(result, Err(TaskWhisperError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            TaskWhisperConfig::load_or_default(Path::new("/nonexistent/taskwhisper.toml"));
        assert_eq!(config.parser.default_language, "en");
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let mut config = TaskWhisperConfig::default();
        config.parser.default_language = "fr".to_string();
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = TaskWhisperConfig::load(&path).unwrap();
        assert_eq!(reloaded.parser.default_language, "fr");
        assert_eq!(reloaded.parser.title.ellipsis, "...");
    }
}
