//! Schema storage and structural validation.
//!
//! - [`registry`] – Process-wide, read-only table mapping each supported
//!   discriminator tag to its compiled schema and constructor. Built once
//!   from embedded schema documents under `resources/schemas/` and never
//!   mutated afterward, so concurrent lookups need no synchronization.
//! - [`validate`] – Thin wrapper over the `jsonschema` engine that scopes
//!   violations to a caller-supplied document path.

pub(crate) mod registry;
pub(crate) mod validate;

pub use validate::ValidationError;
