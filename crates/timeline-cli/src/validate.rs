//! # Validate Subcommand
//!
//! Runs the full check of an event file and decides the exit code. Also the
//! default action when `timeline` is invoked without a subcommand.
//!
//! Stages run strictly in order and the first failing stage ends the run:
//!
//! 1. load: the file must exist and be readable;
//! 2. syntax: the content must be YAML;
//! 3. root type: the root must be a list of events;
//! 4. structure: every event must satisfy the schema (all violations are
//!    printed before failing);
//! 5. consistency: advisory warnings, printed but never fatal.
//!
//! Exit code 0 means every gating stage passed; 1 means one failed.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use timeline_schema::{
    load_document, validate_consistency, validate_structure, LoadError, DEFAULT_EVENTS_PATH,
};

use crate::console::Reporter;

/// Arguments for the validate subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ValidateArgs {
    /// Path to the event file.
    #[arg(default_value = DEFAULT_EVENTS_PATH)]
    pub path: PathBuf,
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EVENTS_PATH),
        }
    }
}

/// Stages of a validation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Syntax,
    RootType,
    Structure,
    Consistency,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Syntax => "syntax",
            Self::RootType => "root-type",
            Self::Structure => "structure",
            Self::Consistency => "consistency",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Execute the validate subcommand, printing the report to `reporter`.
///
/// Returns the process exit code. `Err` is reserved for failures of the
/// reporter itself (e.g. a closed stdout).
pub fn run_validate<W: Write>(args: &ValidateArgs, reporter: &mut Reporter<W>) -> Result<u8> {
    let path = args.path.as_path();

    enter(Stage::Load, path);
    let loaded = load_document(path);
    if let Err(LoadError::NotFound { .. }) = &loaded {
        reporter.failure(format!("File not found: {}", path.display()))?;
        return Ok(fail(Stage::Load));
    }
    reporter.info(format!("Validating {}...", path.display()))?;

    enter(Stage::Syntax, path);
    let doc = match loaded {
        Ok(doc) => doc,
        Err(LoadError::Syntax { message, .. }) => {
            reporter.failure(format!("YAML syntax error in {}:", path.display()))?;
            reporter.detail(message)?;
            return Ok(fail(Stage::Syntax));
        }
        Err(LoadError::Read { source, .. }) => {
            reporter.failure(format!("Error reading {}: {source}", path.display()))?;
            return Ok(fail(Stage::Load));
        }
        Err(other) => {
            reporter.failure(format!("Error loading events: {other}"))?;
            return Ok(fail(Stage::Load));
        }
    };
    reporter.success(format!("YAML syntax is valid: {}", path.display()))?;

    enter(Stage::RootType, path);
    let events = match doc.events() {
        Ok(events) => events,
        Err(e) => {
            tracing::debug!(error = %e, "root type check failed");
            reporter.failure("Root element must be a list of events")?;
            return Ok(fail(Stage::RootType));
        }
    };
    tracing::info!(count = events.len(), "decoded event list");
    reporter.success(format!("Found {} events", events.len()))?;

    enter(Stage::Structure, path);
    let violations = validate_structure(events);
    if !violations.is_empty() {
        tracing::info!(count = violations.len(), "structural violations");
        reporter.failure("Structure validation errors:")?;
        for violation in &violations {
            reporter.detail(violation)?;
        }
        return Ok(fail(Stage::Structure));
    }
    reporter.success("Event structure is valid")?;

    enter(Stage::Consistency, path);
    let warnings = validate_consistency(events);
    if warnings.is_empty() {
        reporter.success("Data consistency is good")?;
    } else {
        tracing::info!(count = warnings.len(), "consistency warnings");
        reporter.warning("Data consistency warnings:")?;
        for warning in &warnings {
            reporter.detail(warning)?;
        }
    }

    enter(Stage::Done, path);
    reporter.done("All validations passed!")?;
    Ok(0)
}

fn enter(stage: Stage, path: &Path) {
    tracing::debug!(%stage, path = %path.display(), "entering stage");
}

fn fail(stage: Stage) -> u8 {
    tracing::debug!(%stage, "validation failed");
    1
}
