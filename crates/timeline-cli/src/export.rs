//! # Build Subcommand
//!
//! Exports the event file as JSON for the site front end, sorted by date
//! ascending. Events whose date is missing or unparseable keep their
//! relative order and go after every dated event.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_yaml::Value;
use timeline_core::field::DATE;
use timeline_core::{yaml_to_json_value, Timestamp};
use timeline_schema::{load_document, DEFAULT_EVENTS_PATH};

use crate::console::Reporter;

/// Default location of the exported JSON.
pub const DEFAULT_EXPORT_PATH: &str = "src/data/events.json";

/// Arguments for the build subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    /// Event file to read.
    #[arg(long, default_value = DEFAULT_EVENTS_PATH)]
    pub input: PathBuf,

    /// JSON file to write. Parent directories are created as needed.
    #[arg(long, short, default_value = DEFAULT_EXPORT_PATH)]
    pub out: PathBuf,
}

/// Execute the build subcommand.
pub fn run_build<W: Write>(args: &BuildArgs, reporter: &mut Reporter<W>) -> Result<u8> {
    let doc = load_document(&args.input)?;
    let events = doc.events()?;

    let sorted = sort_by_date(events);
    if let Some(earliest) = sorted.first().and_then(|event| event_date(event)) {
        tracing::debug!(earliest = %earliest.to_iso8601(), "earliest dated event");
    }
    let json = sorted
        .into_iter()
        .map(yaml_to_json_value)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("cannot convert {} to JSON", doc.path().display()))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(&json)?;
    std::fs::write(&args.out, text)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    tracing::debug!(count = json.len(), out = %args.out.display(), "export written");
    reporter.success(format!("Built {} events → {}", json.len(), args.out.display()))?;
    Ok(0)
}

/// Order events by parsed `date`, stable, undated events last.
pub fn sort_by_date(events: &[Value]) -> Vec<&Value> {
    let mut keyed: Vec<(Option<Timestamp>, &Value)> = events
        .iter()
        .map(|event| (event_date(event), event))
        .collect();
    // `None` sorts before `Some`, so compare on "is undated" first.
    keyed.sort_by_key(|(date, _)| (date.is_none(), *date));
    keyed.into_iter().map(|(_, event)| event).collect()
}

fn event_date(event: &Value) -> Option<Timestamp> {
    let raw = event.get(DATE)?.as_str()?;
    Timestamp::parse_event_date(raw).ok()
}
