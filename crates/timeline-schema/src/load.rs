//! # Event File Loading
//!
//! Reads an event file from disk and decodes it into an untyped YAML value
//! tree. The file is decoded exactly once; a syntax error is surfaced before
//! any question about the document's shape is asked.
//!
//! The root type check is kept separate ([`Document::events`]) so callers
//! can report "the file is not YAML" and "the YAML is not a list of events"
//! as distinct stages.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use timeline_core::kind_name;

/// Location of the event file, relative to the repository root.
pub const DEFAULT_EVENTS_PATH: &str = "data/events.yaml";

/// Fatal failure while loading an event file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("error reading {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML.
    #[error("YAML syntax error in {}: {message}", path.display())]
    Syntax {
        /// Path of the malformed file.
        path: PathBuf,
        /// The parser's diagnostic, verbatim.
        message: String,
    },

    /// The document root is not a sequence of events.
    #[error("root element must be a list of events, found {found}")]
    RootNotSequence {
        /// Kind of the value found at the root.
        found: &'static str,
    },
}

/// A decoded event file.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    root: Value,
}

impl Document {
    /// Decode YAML text that was read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Syntax`] with the parser's message if `content`
    /// is not a single well-formed YAML document.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, LoadError> {
        let path = path.into();
        match serde_yaml::from_str::<Value>(content) {
            Ok(root) => Ok(Self { path, root }),
            Err(e) => Err(LoadError::Syntax {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The event records, if the root is a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RootNotSequence`] for any other root kind,
    /// including an empty file (which decodes to null).
    pub fn events(&self) -> Result<&[Value], LoadError> {
        match &self.root {
            Value::Sequence(events) => Ok(events.as_slice()),
            other => Err(LoadError::RootNotSequence {
                found: kind_name(other),
            }),
        }
    }
}

/// Read and decode the event file at `path`.
///
/// # Errors
///
/// - [`LoadError::NotFound`] if nothing exists at `path`.
/// - [`LoadError::Read`] on any other I/O failure, including invalid UTF-8.
/// - [`LoadError::Syntax`] if the content is not valid YAML.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Document::parse(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence_root() {
        let doc = Document::parse("events.yaml", "- title: A\n- title: B\n").unwrap();
        assert_eq!(doc.events().unwrap().len(), 2);
        assert_eq!(doc.path(), Path::new("events.yaml"));
    }

    #[test]
    fn test_parse_empty_sequence_is_valid() {
        let doc = Document::parse("events.yaml", "[]").unwrap();
        assert!(doc.events().unwrap().is_empty());
    }

    #[test]
    fn test_mapping_root_rejected() {
        let doc = Document::parse("events.yaml", "events:\n  - title: A\n").unwrap();
        let err = doc.events().unwrap_err();
        assert!(
            matches!(err, LoadError::RootNotSequence { found: "mapping" }),
            "Expected RootNotSequence, got: {err}"
        );
    }

    #[test]
    fn test_scalar_root_rejected() {
        let doc = Document::parse("events.yaml", "just text").unwrap();
        assert!(matches!(
            doc.events(),
            Err(LoadError::RootNotSequence { found: "string" })
        ));
    }

    #[test]
    fn test_syntax_error_carries_parser_message() {
        let err = Document::parse("events.yaml", "- title: [unclosed\n").unwrap_err();
        match &err {
            LoadError::Syntax { path, message } => {
                assert_eq!(path, Path::new("events.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected Syntax, got: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_load_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.yaml");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x2d]).unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got: {err}");
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got: {err}");
    }
}
