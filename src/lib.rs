//! A schema-validated factory that turns JSON configuration documents into
//! strongly-typed collective variables (CVs) for molecular simulation.
//!
//! Each document carries a `type` discriminator selecting one of a closed
//! set of CV kinds. The factory validates the document against the schema
//! registered for that tag, extracts its fields with the declared defaults,
//! and returns the constructed variant. Batch documents are JSON arrays
//! built element by element, in order, with fail-fast semantics.
//!
//! # Features
//!
//! - **Data-driven dispatch** — every supported tag is a row in an
//!   immutable registry pairing a compiled schema with a constructor;
//!   adding a CV kind never touches existing dispatch logic
//! - **Validate before construct** — structural problems are collected in
//!   one pass and reported together with `/`-separated document paths
//! - **Declared defaults** — absent optional fields take their documented
//!   defaults (`dimension` → `"x"`, `periodic` → `true`, unset atom ids
//!   → `-1`, ...) during extraction, never after a failed validation
//!
//! # Quick Start
//!
//! ```
//! use colvar_forge::{build_cvs, CollectiveVariable};
//! use serde_json::json;
//!
//! let doc = json!([
//!     {"type": "AtomSeparation", "atom id 1": 3, "atom id 2": 7},
//!     {"type": "Torsional", "atom ids": [1, 2, 3, 4]},
//! ]);
//!
//! let cvs = build_cvs(&doc)?;
//! assert_eq!(cvs.len(), 2);
//! assert_eq!(cvs[0].kind(), "AtomSeparation");
//!
//! match &cvs[1] {
//!     CollectiveVariable::Torsional(t) => assert!(t.periodic), // default applied
//!     _ => unreachable!(),
//! }
//! # Ok::<(), colvar_forge::BuildError>(())
//! ```
//!
//! # Errors
//!
//! All failures surface as [`BuildError`]: an unknown discriminator tag,
//! a schema violation carrying every problem found, or a construction
//! failure when a validated field cannot be mapped internally. None are
//! recoverable at this boundary; a failed batch returns no partial list.
//!
//! # Supported CV kinds
//!
//! - [`AtomCoordinateCv`] — one coordinate axis of one atom
//! - [`AtomPositionCv`] — fixed 3-D point with per-axis freeze flags
//! - [`TorsionalCv`] — signed four-atom dihedral, optionally periodic
//! - [`AtomSeparationCv`] — pairwise distance between two atoms
//! - [`AngleCv`] — three-atom planar angle
//! - [`RadiusOfGyrationCv`] — gyration radius over an atom group
//! - [`CenterOfMassDistanceCv`] — center-of-mass distance between two groups
//! - [`RmsdCv`] — deviation from a reference structure

mod build;
mod model;
mod schema;

pub use build::{build_cv, build_cv_at, build_cvs, build_cvs_at, BuildError, DEFAULT_PATH};

pub use model::axis::{Axis, ParseAxisError};
pub use model::cv::{
    AngleCv, AtomCoordinateCv, AtomPositionCv, AtomSeparationCv, CenterOfMassDistanceCv,
    CollectiveVariable, CvList, RadiusOfGyrationCv, RmsdCv, TorsionalCv, Vector3,
};

pub use schema::ValidationError;
