use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

/// A single structural violation found while checking a configuration
/// document against a schema.
///
/// `path` locates the offending node: the caller-supplied scope (for
/// example `#/CVs/2`) extended with `/`-separated segments for nested keys
/// and array indices. A violation at the document root carries the scope
/// path itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Runs `validator` against `doc`, collecting every violation in one pass.
///
/// An empty result means the document conforms. The validator never stops
/// at the first problem, so a caller can fix all structural issues
/// together.
pub(crate) fn collect(validator: &Validator, doc: &Value, path: &str) -> Vec<ValidationError> {
    validator
        .iter_errors(doc)
        .map(|err| ValidationError {
            path: format!("{}{}", path, err.instance_path),
            message: err.to_string(),
        })
        .collect()
}
