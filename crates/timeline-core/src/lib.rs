//! # timeline-core — Foundational Types for the Timeline Checker
//!
//! Shared primitives for the event data checker. Every other crate in the
//! workspace depends on `timeline-core`; it depends on nothing internal.
//!
//! - [`field`] — the event field vocabulary and which rules apply to which
//!   field.
//! - [`temporal`] — [`Timestamp`], the ISO-8601 parser for event dates.
//! - [`value`] — helpers over the untyped `serde_yaml::Value` tree: kind
//!   names, message rendering and YAML-to-JSON conversion.
//! - [`error`] — [`TimelineError`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod temporal;
pub mod value;

pub use error::TimelineError;
pub use temporal::{normalize_utc_suffix, Timestamp};
pub use value::{display_value, kind_name, yaml_to_json_value};
