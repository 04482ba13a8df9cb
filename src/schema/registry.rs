use std::collections::HashMap;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

use crate::build::error::BuildError;
use crate::build::extract;
use crate::model::cv::CollectiveVariable;

const CVS_SCHEMA: &str = include_str!("../../resources/schemas/cvs.json");
const ATOM_COORDINATE_SCHEMA: &str = include_str!("../../resources/schemas/atom_coordinate.json");
const ATOM_POSITION_SCHEMA: &str = include_str!("../../resources/schemas/atom_position.json");
const TORSIONAL_SCHEMA: &str = include_str!("../../resources/schemas/torsional.json");
const ATOM_SEPARATION_SCHEMA: &str = include_str!("../../resources/schemas/atom_separation.json");
const ANGLE_SCHEMA: &str = include_str!("../../resources/schemas/angle.json");
const RADIUS_OF_GYRATION_SCHEMA: &str =
    include_str!("../../resources/schemas/radius_of_gyration.json");
const CENTER_OF_MASS_DISTANCE_SCHEMA: &str =
    include_str!("../../resources/schemas/center_of_mass_distance.json");
const RMSD_SCHEMA: &str = include_str!("../../resources/schemas/rmsd.json");

static REGISTRY: OnceLock<HashMap<&'static str, CvEntry>> = OnceLock::new();
static CV_ARRAY_VALIDATOR: OnceLock<Validator> = OnceLock::new();

type Constructor = fn(&Value) -> Result<CollectiveVariable, BuildError>;

/// One registry row: the compiled schema a candidate document must satisfy
/// and the constructor that extracts fields and builds the variant.
pub(crate) struct CvEntry {
    pub(crate) schema: Validator,
    pub(crate) construct: Constructor,
}

/// Looks up the registry row for a discriminator tag.
///
/// The registry is immutable after first use; a miss is the trigger for the
/// builder's unknown-type error, not an error in itself.
pub(crate) fn lookup(tag: &str) -> Option<&'static CvEntry> {
    registry().get(tag)
}

/// Returns the validator for the batch-level shape (the document must be an
/// array; per-element schemas differ by tag and are checked individually).
pub(crate) fn cv_array_validator() -> &'static Validator {
    CV_ARRAY_VALIDATOR.get_or_init(|| compile(CVS_SCHEMA))
}

fn registry() -> &'static HashMap<&'static str, CvEntry> {
    REGISTRY.get_or_init(|| {
        HashMap::from([
            entry("AtomCoordinate", ATOM_COORDINATE_SCHEMA, extract::atom_coordinate),
            entry("AtomPosition", ATOM_POSITION_SCHEMA, extract::atom_position),
            entry("Torsional", TORSIONAL_SCHEMA, extract::torsional),
            entry("AtomSeparation", ATOM_SEPARATION_SCHEMA, extract::atom_separation),
            entry("Angle", ANGLE_SCHEMA, extract::angle),
            entry(
                "RadiusOfGyration",
                RADIUS_OF_GYRATION_SCHEMA,
                extract::radius_of_gyration,
            ),
            entry(
                "CenterofMassDistance",
                CENTER_OF_MASS_DISTANCE_SCHEMA,
                extract::center_of_mass_distance,
            ),
            entry("RMSD", RMSD_SCHEMA, extract::rmsd),
        ])
    })
}

fn entry(
    tag: &'static str,
    schema: &'static str,
    construct: Constructor,
) -> (&'static str, CvEntry) {
    (
        tag,
        CvEntry {
            schema: compile(schema),
            construct,
        },
    )
}

fn compile(source: &str) -> Validator {
    let schema: Value = serde_json::from_str(source)
        .expect("Failed to parse embedded CV schema. This is a library bug.");
    jsonschema::validator_for(&schema)
        .expect("Failed to compile embedded CV schema. This is a library bug.")
}
