//! # YAML Value Helpers
//!
//! Event files are decoded into an untyped `serde_yaml::Value` tree so that
//! every type problem can be reported instead of failing deserialization.
//! This module holds the small helpers the validators and the JSON export
//! share: kind names, message rendering, and YAML-to-JSON conversion.

use serde_json::Value as JsonValue;
use serde_yaml::Value;

use crate::error::TimelineError;

/// Human-readable name of a YAML value's kind.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a YAML value for use inside a diagnostic message.
///
/// Strings are written verbatim, other scalars in their YAML spelling, and
/// sequences/mappings as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => display_value(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => yaml_to_json_value(value)
            .ok()
            .and_then(|json| serde_json::to_string(&json).ok())
            .unwrap_or_else(|| format!("<{}>", kind_name(value))),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped and scalar map keys are stringified. Fails on floats
/// that JSON cannot represent (NaN, infinities) and on composite map keys.
pub fn yaml_to_json_value(yaml: &Value) -> Result<JsonValue, TimelineError> {
    match yaml {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(JsonValue::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(JsonValue::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(JsonValue::Number)
                    .ok_or_else(|| {
                        TimelineError::Conversion(format!("cannot represent float {f} in JSON"))
                    })
            } else {
                Err(TimelineError::Conversion(format!(
                    "unsupported YAML number: {n:?}"
                )))
            }
        }
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Sequence(seq) => {
            let items: Result<Vec<JsonValue>, TimelineError> =
                seq.iter().map(yaml_to_json_value).collect();
            Ok(JsonValue::Array(items?))
        }
        Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null => "null".to_string(),
                    other => {
                        return Err(TimelineError::Conversion(format!(
                            "unsupported YAML map key type: {}",
                            kind_name(other)
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(JsonValue::Object(json_map))
        }
        Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&yaml("[1, 2]")), "sequence");
        assert_eq!(kind_name(&yaml("a: 1")), "mapping");
        assert_eq!(kind_name(&yaml("hello")), "string");
        assert_eq!(kind_name(&yaml("42")), "number");
        assert_eq!(kind_name(&yaml("true")), "boolean");
        assert_eq!(kind_name(&yaml("~")), "null");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(display_value(&yaml("GPT-4 released")), "GPT-4 released");
        assert_eq!(display_value(&yaml("2024")), "2024");
        assert_eq!(display_value(&yaml("false")), "false");
        assert_eq!(display_value(&yaml("null")), "null");
    }

    #[test]
    fn test_display_composites_as_json() {
        assert_eq!(display_value(&yaml("[a, b]")), r#"["a","b"]"#);
        assert_eq!(display_value(&yaml("{k: 1}")), r#"{"k":1}"#);
    }

    #[test]
    fn test_yaml_to_json_conversion() {
        let yaml_value = yaml(
            r#"
title: Transformer paper
date: "2017-06-12"
citations: 100000
open_access: true
tags:
  - research
  - nlp
"#,
        );
        let json_value = yaml_to_json_value(&yaml_value).unwrap();

        assert_eq!(json_value["title"], "Transformer paper");
        assert_eq!(json_value["date"], "2017-06-12");
        assert_eq!(json_value["citations"], 100000);
        assert_eq!(json_value["open_access"], true);
        assert_eq!(json_value["tags"][1], "nlp");
    }

    #[test]
    fn test_yaml_to_json_numeric_keys_stringified() {
        let json_value = yaml_to_json_value(&yaml("{2023: launch}")).unwrap();
        assert_eq!(json_value["2023"], "launch");
    }

    #[test]
    fn test_yaml_to_json_rejects_nan() {
        let err = yaml_to_json_value(&yaml(".nan")).unwrap_err();
        assert!(matches!(err, TimelineError::Conversion(_)));
    }
}
