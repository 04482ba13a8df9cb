//! Construction of collective variables from configuration documents.
//!
//! - [`builder`] – Single-object and fail-fast batch build entry points
//!   with path-qualified error reporting.
//! - [`error`] – The terminal [`BuildError`] taxonomy for a build.
//! - [`extract`] – Field extraction with the declared defaults and derived
//!   mappings, run strictly after schema validation.

mod builder;
pub(crate) mod error;
pub(crate) mod extract;

pub use builder::{build_cv, build_cv_at, build_cvs, build_cvs_at, DEFAULT_PATH};
pub use error::BuildError;
