//! Error types for collective variable construction.
//!
//! This module defines the error type used throughout the build module.
//! Every failure is terminal for the build that raised it: the factory
//! never retries, substitutes defaults after a failed validation, or
//! returns partially constructed output.

use thiserror::Error;

use crate::schema::ValidationError;

/// Errors that can occur while building collective variables from a
/// configuration document.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The discriminator tag has no registered schema.
    #[error("{path}: unknown CV type specified: '{tag}' is not a valid type")]
    UnknownType {
        /// Path of the offending document.
        path: String,
        /// The unrecognized discriminator tag.
        tag: String,
    },

    /// Structural validation failed.
    ///
    /// Carries every violation found in one pass over the document, not
    /// just the first, so all structural problems can be fixed together.
    #[error("{}", render_violations(.0))]
    SchemaViolation(Vec<ValidationError>),

    /// A field passed schema validation but could not be mapped to its
    /// internal representation.
    ///
    /// Occurs when a schema and its extractor drift out of sync, for
    /// example an enumerated token with no mapping table row.
    #[error("CV construction failed: {0}")]
    Construction(String),
}

impl BuildError {
    /// Creates an [`UnknownType`](BuildError::UnknownType) error.
    pub fn unknown_type(path: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::UnknownType {
            path: path.into(),
            tag: tag.into(),
        }
    }

    /// Creates a [`Construction`](BuildError::Construction) error.
    pub fn construction(detail: impl Into<String>) -> Self {
        Self::Construction(detail.into())
    }
}

fn render_violations(errors: &[ValidationError]) -> String {
    let mut out = String::from("CV configuration failed schema validation:");
    for err in errors {
        out.push_str("\n  ");
        out.push_str(&err.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_message_names_the_tag() {
        let err = BuildError::unknown_type("#/CVs/1", "Bogus");
        let msg = err.to_string();
        assert!(msg.contains("Bogus"));
        assert!(msg.contains("#/CVs/1"));
        assert!(msg.contains("is not a valid type"));
    }

    #[test]
    fn schema_violation_message_lists_every_error() {
        let err = BuildError::SchemaViolation(vec![
            ValidationError {
                path: "#/CVs/0".to_string(),
                message: "\"atom ids\" is a required property".to_string(),
            },
            ValidationError {
                path: "#/CVs/0/periodic".to_string(),
                message: "\"yes\" is not of type \"boolean\"".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("#/CVs/0: \"atom ids\" is a required property"));
        assert!(msg.contains("#/CVs/0/periodic"));
    }

    #[test]
    fn construction_message_carries_detail() {
        let err = BuildError::construction("could not map dimension 'w'");
        assert_eq!(
            err.to_string(),
            "CV construction failed: could not map dimension 'w'"
        );
    }
}
