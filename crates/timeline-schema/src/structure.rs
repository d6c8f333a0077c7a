//! # Structural Validation
//!
//! Per-event checks against the event schema:
//!
//! - `title`, `date` and `description` must be present;
//! - `tags`, `organizations`, `models`, `impact_areas` and `key_figures`
//!   must be sequences when present;
//! - `date` must parse as ISO-8601, with a trailing `Z` read as UTC.
//!
//! Every problem in every event is collected. Malformed input never makes
//! this pass fail early; it only produces more violations.

use serde_yaml::Value;
use timeline_core::field::{DATE, LIST_FIELDS, REQUIRED_FIELDS};
use timeline_core::{display_value, kind_name, Timestamp};

use crate::report::{EventRef, Violation, ViolationKind};

/// Check every event and return all violations, in event order.
///
/// An empty result means the document is structurally valid.
pub fn validate_structure(events: &[Value]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let at = EventRef::new(index, event);
        for kind in check_event(event) {
            violations.push(Violation {
                event: at.clone(),
                kind,
            });
        }
    }
    violations
}

fn check_event(event: &Value) -> Vec<ViolationKind> {
    if !event.is_mapping() {
        return vec![ViolationKind::NotAMapping {
            found: kind_name(event),
        }];
    }

    let mut found = Vec::new();

    for field in REQUIRED_FIELDS {
        if event.get(field).is_none() {
            found.push(ViolationKind::MissingField { field });
        }
    }

    for field in LIST_FIELDS {
        if let Some(value) = event.get(field) {
            if !value.is_sequence() {
                found.push(ViolationKind::NotAList { field });
            }
        }
    }

    // A missing date was reported above.
    if let Some(date) = event.get(DATE) {
        if !is_valid_date(date) {
            found.push(ViolationKind::InvalidDate {
                raw: display_value(date),
            });
        }
    }

    found
}

fn is_valid_date(value: &Value) -> bool {
    match value.as_str() {
        Some(raw) => Timestamp::parse_event_date(raw).is_ok(),
        None => false,
    }
}
