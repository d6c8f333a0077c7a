//! # Violations and Warnings
//!
//! Typed results of the two validation passes. Each value renders, through
//! `Display`, the exact line printed to the user, so that every problem
//! names the event (by 1-based position and title) it was found in.

use std::fmt;

use serde_yaml::Value;
use timeline_core::display_value;
use timeline_core::field::{TITLE, UNKNOWN_TITLE};

/// Identifies one event in a document for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRef {
    /// 1-based position in the document.
    pub position: usize,
    /// Rendered `title` value, or `Unknown`.
    pub title: String,
}

impl EventRef {
    /// Build a reference for the event at 0-based `index`.
    pub fn new(index: usize, event: &Value) -> Self {
        let title = event
            .get(TITLE)
            .map(display_value)
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        Self {
            position: index + 1,
            title,
        }
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event {} ('{}')", self.position, self.title)
    }
}

/// What is wrong with a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The entry is not a mapping, so it cannot carry any field.
    NotAMapping {
        /// Kind of the entry that was found instead.
        found: &'static str,
    },
    /// A required field is absent.
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A list-typed field holds something other than a sequence.
    NotAList {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The `date` field does not parse as ISO-8601.
    InvalidDate {
        /// The raw value, before any UTC-suffix rewriting.
        raw: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMapping { found } => {
                write!(f, "Event must be a mapping of fields, found {found}")
            }
            Self::MissingField { field } => write!(f, "Missing required field '{field}'"),
            Self::NotAList { field } => write!(f, "'{field}' must be a list"),
            Self::InvalidDate { raw } => write!(f, "Invalid date format '{raw}'"),
        }
    }
}

/// A structural error. Any violation fails the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The event the violation was found in.
    pub event: EventRef,
    /// What is wrong.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event, self.kind)
    }
}

/// An advisory consistency finding. Warnings never fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Titles shared by more than one event, each listed once.
    DuplicateTitles(Vec<String>),
    /// A list field that is present but empty.
    EmptyCollection {
        /// The event carrying the empty list.
        event: EventRef,
        /// Name of the empty field.
        field: &'static str,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTitles(titles) => {
                write!(f, "Duplicate titles found: {}", titles.join(", "))
            }
            Self::EmptyCollection { event, field } => write!(
                f,
                "{event}: '{field}' is empty - consider removing if not applicable"
            ),
        }
    }
}
