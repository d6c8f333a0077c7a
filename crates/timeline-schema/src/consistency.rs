//! # Consistency Validation
//!
//! Checks that look across the whole document rather than at one event in
//! isolation. Findings are advisory and never fail a run.

use std::collections::{HashMap, HashSet};

use serde_yaml::Value;
use timeline_core::display_value;
use timeline_core::field::{NON_EMPTY_HINT_FIELDS, TITLE};

use crate::report::{EventRef, Warning};

/// Run every consistency check and return the warnings.
///
/// A duplicate-title warning, if any, comes first, followed by the
/// empty-collection warnings in event order.
pub fn validate_consistency(events: &[Value]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let duplicates = duplicate_titles(events);
    if !duplicates.is_empty() {
        warnings.push(Warning::DuplicateTitles(duplicates));
    }

    for (index, event) in events.iter().enumerate() {
        for field in NON_EMPTY_HINT_FIELDS {
            let is_empty_list = event
                .get(field)
                .and_then(Value::as_sequence)
                .is_some_and(|items| items.is_empty());
            if is_empty_list {
                warnings.push(Warning::EmptyCollection {
                    event: EventRef::new(index, event),
                    field,
                });
            }
        }
    }

    warnings
}

/// Titles that occur more than once, each listed once, in order of first
/// occurrence. An event without a title counts as the empty title.
///
/// Titles are compared as YAML values, so `2001` and `"2001"` are distinct
/// even though both render as `2001`.
pub fn duplicate_titles(events: &[Value]) -> Vec<String> {
    let untitled = Value::String(String::new());
    let titles: Vec<&Value> = events
        .iter()
        .map(|event| event.get(TITLE).unwrap_or(&untitled))
        .collect();

    let mut counts: HashMap<&Value, usize> = HashMap::new();
    for title in &titles {
        *counts.entry(*title).or_default() += 1;
    }

    let mut reported: HashSet<&Value> = HashSet::new();
    let mut duplicates = Vec::new();
    for title in &titles {
        if counts[title] > 1 && reported.insert(*title) {
            duplicates.push(display_value(title));
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(s: &str) -> Vec<Value> {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_clean_document_has_no_warnings() {
        let warnings = validate_consistency(&events(
            r#"
- title: A
  organizations: [DeepMind]
  models: [AlphaFold]
- title: B
"#,
        ));
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_duplicate_title_single_warning() {
        let warnings = validate_consistency(&events(
            r#"
- title: GPT-4 released
- title: Gemini announced
- title: GPT-4 released
- title: GPT-4 released
"#,
        ));
        assert_eq!(warnings.len(), 1);
        let message = warnings[0].to_string();
        assert_eq!(message, "Duplicate titles found: GPT-4 released");
        assert_eq!(message.matches("GPT-4 released").count(), 1);
    }

    #[test]
    fn test_multiple_duplicates_in_first_occurrence_order() {
        let titles = duplicate_titles(&events(
            r#"
- title: B
- title: A
- title: A
- title: C
- title: B
"#,
        ));
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_untitled_events_share_empty_title() {
        let titles = duplicate_titles(&events("- date: x\n- date: y\n"));
        assert_eq!(titles, vec![String::new()]);
    }

    #[test]
    fn test_number_and_string_titles_are_distinct() {
        let titles = duplicate_titles(&events(
            r#"
- title: 2001
- title: "2001"
- title: 2001
"#,
        ));
        assert_eq!(titles, vec!["2001"]);
    }

    #[test]
    fn test_empty_organizations_flagged() {
        let warnings = validate_consistency(&events(
            r#"
- title: Solo paper
  organizations: []
"#,
        ));
        assert_eq!(
            warnings,
            vec![Warning::EmptyCollection {
                event: EventRef {
                    position: 1,
                    title: "Solo paper".to_string()
                },
                field: "organizations",
            }]
        );
    }

    #[test]
    fn test_empty_models_and_organizations_both_flagged() {
        let warnings = validate_consistency(&events(
            r#"
- title: Placeholder
  organizations: []
  models: []
"#,
        ));
        let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Event 1 ('Placeholder'): 'organizations' is empty - consider removing if not applicable",
                "Event 1 ('Placeholder'): 'models' is empty - consider removing if not applicable",
            ]
        );
    }

    #[test]
    fn test_other_empty_lists_not_flagged() {
        let warnings = validate_consistency(&events(
            r#"
- title: Quiet
  tags: []
  impact_areas: []
  key_figures: []
"#,
        ));
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_duplicate_warning_precedes_empty_warnings() {
        let warnings = validate_consistency(&events(
            r#"
- title: Same
  models: []
- title: Same
"#,
        ));
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::DuplicateTitles(_)));
        assert!(matches!(warnings[1], Warning::EmptyCollection { .. }));
    }

    #[test]
    fn test_non_mapping_entries_ignored() {
        let warnings = validate_consistency(&events("- 1\n- title: A\n  models: [GPT-2]\n"));
        assert!(warnings.is_empty());
    }
}
