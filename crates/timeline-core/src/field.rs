//! # Event Field Vocabulary
//!
//! Names of the fields an event record may carry, grouped by the rule set
//! that applies to them.

/// Event title. Required; also used to identify events in messages.
pub const TITLE: &str = "title";
/// Event date. Required; must parse as ISO-8601.
pub const DATE: &str = "date";
/// Free-text description. Required.
pub const DESCRIPTION: &str = "description";

pub const TAGS: &str = "tags";
pub const ORGANIZATIONS: &str = "organizations";
pub const MODELS: &str = "models";
pub const IMPACT_AREAS: &str = "impact_areas";
pub const KEY_FIGURES: &str = "key_figures";

/// Fields every event must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = [TITLE, DATE, DESCRIPTION];

/// Optional fields whose value, when present, must be a sequence.
pub const LIST_FIELDS: [&str; 5] = [TAGS, ORGANIZATIONS, MODELS, IMPACT_AREAS, KEY_FIGURES];

/// List fields that are flagged when present but empty.
///
/// Only these two are checked; an empty `tags`, `impact_areas` or
/// `key_figures` list is accepted silently.
pub const NON_EMPTY_HINT_FIELDS: [&str; 2] = [ORGANIZATIONS, MODELS];

/// Placeholder used in messages for an event without a title.
pub const UNKNOWN_TITLE: &str = "Unknown";
