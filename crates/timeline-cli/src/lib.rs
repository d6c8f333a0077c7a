//! # timeline-cli — Timeline Event Checker CLI
//!
//! Provides the `timeline` command. Run with no arguments in a build or CI
//! pipeline, it validates `data/events.yaml` and exits non-zero if the file
//! is missing, malformed, or structurally invalid.
//!
//! ## Subcommands
//!
//! - `timeline validate [PATH]` — the default action; see [`validate`].
//! - `timeline build` — export the events as date-sorted JSON; see [`export`].
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate validation to `timeline-schema` and only decide what
//!   to print and which exit code to return.
//! - The report goes to stdout through [`console::Reporter`]; logs go to
//!   stderr.

pub mod console;
pub mod export;
pub mod telemetry;
pub mod validate;
