//! TaskWhisper binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialise tracing (logs go to stderr)
//! 3. Read the transcript from the arguments or stdin
//! 4. Parse it and print the task record as JSON on stdout

mod cli;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use taskwhisper_core::config::TaskWhisperConfig;
use taskwhisper_core::{Result, TaskWhisperError, VoiceTaskResponse};
use taskwhisper_parser::{FixedClock, TaskParser};

use cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let (config, load_error) = read_config(&config_file);

    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match load_error {
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Invalid configuration, using defaults"
        ),
        None => tracing::debug!(path = %config_file.display(), "Configuration resolved"),
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse task");
            eprintln!("taskwhisper: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read the config file before logging is up. A missing file means
/// defaults; a broken one falls back to defaults and hands back the error so
/// it can be logged once the subscriber exists.
fn read_config(path: &Path) -> (TaskWhisperConfig, Option<TaskWhisperError>) {
    if !path.exists() {
        return (TaskWhisperConfig::default(), None);
    }
    match TaskWhisperConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (TaskWhisperConfig::default(), Some(e)),
    }
}

fn run(args: &CliArgs, config: &TaskWhisperConfig) -> Result<()> {
    let transcript = match &args.transcript {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };
    if transcript.trim().is_empty() {
        return Err(TaskWhisperError::EmptyTranscript);
    }

    let mut parser = TaskParser::new(config.parser.clone());
    if let Some(ref now) = args.now {
        parser = parser.with_clock(Arc::new(FixedClock::parse_rfc3339(now)?));
    }

    let language = args.resolve_language(&config.parser.default_language);
    let parsed = parser.parse(&transcript, &language);
    let response = VoiceTaskResponse::new(transcript, parsed, &config.voice.untitled_title);

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
