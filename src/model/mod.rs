//! Domain types for constructed collective variables.
//!
//! - [`axis`] – Cartesian axis tokens and their coordinate indices.
//! - [`cv`] – The closed [`CollectiveVariable`] variant set and its
//!   per-variant payload structs.
//!
//! Values here are plain owned data: the builder hands them to the caller
//! and retains nothing, so they can be moved freely between threads.
//!
//! [`CollectiveVariable`]: cv::CollectiveVariable

pub mod axis;
pub mod cv;
