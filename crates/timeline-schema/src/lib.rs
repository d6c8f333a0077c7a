//! # timeline-schema — Event File Validation
//!
//! Loads an event file and checks it in two passes.
//!
//! ## Loading (`load`)
//!
//! [`load_document`] reads the file and decodes it with `serde_yaml` into an
//! untyped value tree. Missing files, unreadable files and malformed YAML
//! are fatal [`LoadError`]s. [`Document::events`] then insists that the root
//! is a sequence.
//!
//! ## Structural Validation (`structure`)
//!
//! [`validate_structure`] checks each event on its own: required fields,
//! list-typed fields and the ISO-8601 `date`. Every problem becomes a
//! [`Violation`]; any violation fails the run.
//!
//! ## Consistency Validation (`consistency`)
//!
//! [`validate_consistency`] looks across events for duplicate titles and
//! suspiciously empty `organizations`/`models` lists. Findings are
//! [`Warning`]s and never fail the run.
//!
//! ## Crate Policy
//!
//! - Depends only on `timeline-core` internally.
//! - Validation never panics and never stops at the first problem.
//! - Every message identifies its event by 1-based position and title.

pub mod consistency;
pub mod load;
pub mod report;
pub mod structure;

pub use consistency::{duplicate_titles, validate_consistency};
pub use load::{load_document, Document, LoadError, DEFAULT_EVENTS_PATH};
pub use report::{EventRef, Violation, ViolationKind, Warning};
pub use structure::validate_structure;
