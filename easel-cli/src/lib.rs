//! # Easel Replay
//!
//! Headless host for the Easel editor core. A script of editor events is
//! applied to a fresh editor and the resulting state is printed as JSON,
//! which makes whole editing sessions reproducible outside a browser.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p easel-cli -- --script session.json
//! cargo run -p easel-cli -- --script session.json --config editor.json --log-format json
//! ```
//!
//! A script is a JSON array of events:
//!
//! ```json
//! [
//!   {"type": "add_element", "kind": "shape"},
//!   {"type": "pointer_move", "x": 120, "y": 80},
//!   {"type": "toggle_preview"}
//! ]
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use easel_core::{Editor, EditorConfig, EditorEvent, EditorSnapshot};
use serde::Serialize;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Command-line arguments for easel-replay.
#[derive(Debug, Clone, Parser)]
#[command(name = "easel-replay")]
#[command(about = "Replay scripted editor events and print the resulting state")]
#[command(version)]
pub struct CliArgs {
    /// JSON file holding an array of editor events
    #[arg(long, short)]
    pub script: PathBuf,

    /// Editor configuration JSON (defaults apply for missing keys)
    #[arg(long, short, env = "EASEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "EASEL_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Number of events applied.
    pub events: usize,
    /// Number of events that changed nothing.
    pub ignored: usize,
    /// Editor state after the last event.
    pub snapshot: EditorSnapshot,
}

/// Load the editor configuration, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds an invalid configuration.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    EditorConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Load an event script.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an array of events.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<EditorEvent>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid script {}", path.display()))
}

/// Apply `events` to a fresh editor.
#[must_use]
pub fn replay(config: EditorConfig, events: &[EditorEvent]) -> ReplayReport {
    let mut editor = Editor::new(config);
    let mut ignored = 0;
    for (index, event) in events.iter().enumerate() {
        let changes = editor.dispatch(event);
        if changes.is_empty() {
            ignored += 1;
            tracing::debug!(index, ?event, "Event changed nothing");
        } else {
            tracing::debug!(index, ?event, ?changes, "Event applied");
        }
    }
    tracing::info!(
        "Replayed {} events ({} ignored), {} nodes on canvas",
        events.len(),
        ignored,
        editor.state().scene().node_count()
    );
    ReplayReport {
        events: events.len(),
        ignored,
        snapshot: editor.snapshot(),
    }
}

/// Run a replay as described by the arguments and render the report as JSON.
///
/// # Errors
///
/// Returns an error if the config or script cannot be loaded.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    let events = load_script(&args.script)?;
    let report = replay(config, &events);
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::NodeKind;

    #[test]
    fn args_parse_with_defaults() {
        let args = CliArgs::try_parse_from(["easel-replay", "--script", "s.json"]).expect("args");
        assert_eq!(args.script, PathBuf::from("s.json"));
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn args_accept_json_logs() {
        let args = CliArgs::try_parse_from([
            "easel-replay",
            "-s",
            "s.json",
            "--config",
            "c.json",
            "--log-format",
            "json",
        ])
        .expect("args");
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn script_is_required() {
        assert!(CliArgs::try_parse_from(["easel-replay"]).is_err());
    }

    #[test]
    fn replay_counts_ignored_events() {
        let events = vec![
            EditorEvent::PointerUp,
            EditorEvent::AddElement {
                kind: NodeKind::Text,
            },
            EditorEvent::BackgroundClick,
            EditorEvent::BackgroundClick,
        ];
        let report = replay(EditorConfig::default(), &events);
        assert_eq!(report.events, 4);
        assert_eq!(report.ignored, 2);
        assert_eq!(report.snapshot.nodes.len(), 1);
        assert!(report.snapshot.selection.is_none());
    }

    #[test]
    fn missing_config_path_means_defaults() {
        assert_eq!(load_config(None).expect("config"), EditorConfig::default());
    }
}
