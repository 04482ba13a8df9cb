use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::BuildError;
use crate::model::axis::Axis;
use crate::model::cv::{
    AngleCv, AtomCoordinateCv, AtomPositionCv, AtomSeparationCv, CenterOfMassDistanceCv,
    CollectiveVariable, RadiusOfGyrationCv, RmsdCv, TorsionalCv, Vector3,
};

// Extraction runs strictly after schema validation, so field presence,
// types and cardinalities are already settled; only the declared defaults
// and derived mappings happen here. The unset sentinels (-1 atom ids, a
// single-space reference) are the documented defaults and are preserved
// as-is.

fn default_atom_id() -> i32 {
    -1
}
fn default_dimension() -> String {
    "x".to_string()
}
fn default_periodic() -> bool {
    true
}
fn default_reference() -> String {
    " ".to_string()
}

// The schema keyword "integer" admits zero-fraction floats such as 3.0, so
// id extraction coerces them the way the original configuration format's
// integer accessor does. Anything with a fractional part or outside the
// i32 range never passes the schema and is refused here too.
fn to_atom_id<E: serde::de::Error>(raw: f64) -> Result<i32, E> {
    if raw.fract() != 0.0 || raw < i32::MIN as f64 || raw > i32::MAX as f64 {
        return Err(E::custom(format!("cannot represent {raw} as an atom id")));
    }
    Ok(raw as i32)
}

fn atom_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    to_atom_id(f64::deserialize(deserializer)?)
}

fn atom_id_array<'de, const N: usize, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<[i32; N], D::Error>
where
    [f64; N]: Deserialize<'de>,
{
    let raw = <[f64; N]>::deserialize(deserializer)?;
    let mut ids = [0i32; N];
    for (id, value) in ids.iter_mut().zip(raw) {
        *id = to_atom_id(value)?;
    }
    Ok(ids)
}

fn atom_id_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i32>, D::Error> {
    Vec::<f64>::deserialize(deserializer)?
        .into_iter()
        .map(to_atom_id)
        .collect()
}

fn extract_params<'a, T: Deserialize<'a>>(doc: &'a Value) -> Result<T, BuildError> {
    T::deserialize(doc).map_err(|err| {
        BuildError::construction(format!(
            "validated fields do not match the extractor: {err}"
        ))
    })
}

#[derive(Deserialize)]
struct AtomCoordinateParams {
    #[serde(
        rename = "atom id",
        default = "default_atom_id",
        deserialize_with = "atom_id"
    )]
    atom_id: i32,
    #[serde(default = "default_dimension")]
    dimension: String,
}

pub(crate) fn atom_coordinate(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: AtomCoordinateParams = extract_params(doc)?;
    let axis = Axis::from_str(&params.dimension).map_err(|err| {
        BuildError::construction(format!("could not map AtomCoordinate dimension: {err}"))
    })?;
    Ok(CollectiveVariable::AtomCoordinate(AtomCoordinateCv::new(
        params.atom_id,
        axis,
    )))
}

#[derive(Deserialize)]
struct AtomPositionParams {
    #[serde(
        rename = "atom id",
        default = "default_atom_id",
        deserialize_with = "atom_id"
    )]
    atom_id: i32,
    position: Vector3,
    #[serde(rename = "fixx", default)]
    fix_x: bool,
    #[serde(rename = "fixy", default)]
    fix_y: bool,
    #[serde(rename = "fixz", default)]
    fix_z: bool,
}

pub(crate) fn atom_position(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: AtomPositionParams = extract_params(doc)?;
    Ok(CollectiveVariable::AtomPosition(AtomPositionCv::new(
        params.atom_id,
        params.position,
        params.fix_x,
        params.fix_y,
        params.fix_z,
    )))
}

#[derive(Deserialize)]
struct TorsionalParams {
    #[serde(rename = "atom ids", deserialize_with = "atom_id_array")]
    atom_ids: [i32; 4],
    #[serde(default = "default_periodic")]
    periodic: bool,
}

pub(crate) fn torsional(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: TorsionalParams = extract_params(doc)?;
    Ok(CollectiveVariable::Torsional(TorsionalCv::new(
        params.atom_ids,
        params.periodic,
    )))
}

#[derive(Deserialize)]
struct AtomSeparationParams {
    #[serde(
        rename = "atom id 1",
        default = "default_atom_id",
        deserialize_with = "atom_id"
    )]
    atom_id1: i32,
    #[serde(
        rename = "atom id 2",
        default = "default_atom_id",
        deserialize_with = "atom_id"
    )]
    atom_id2: i32,
}

pub(crate) fn atom_separation(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: AtomSeparationParams = extract_params(doc)?;
    Ok(CollectiveVariable::AtomSeparation(AtomSeparationCv::new(
        params.atom_id1,
        params.atom_id2,
    )))
}

#[derive(Deserialize)]
struct AngleParams {
    #[serde(rename = "atom ids", deserialize_with = "atom_id_array")]
    atom_ids: [i32; 3],
}

pub(crate) fn angle(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: AngleParams = extract_params(doc)?;
    Ok(CollectiveVariable::Angle(AngleCv::new(params.atom_ids)))
}

#[derive(Deserialize)]
struct RadiusOfGyrationParams {
    #[serde(rename = "atom ids", deserialize_with = "atom_id_vec")]
    atom_ids: Vec<i32>,
    #[serde(default)]
    use_range: bool,
}

pub(crate) fn radius_of_gyration(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: RadiusOfGyrationParams = extract_params(doc)?;
    Ok(CollectiveVariable::RadiusOfGyration(
        RadiusOfGyrationCv::new(params.atom_ids, params.use_range),
    ))
}

#[derive(Deserialize)]
struct CenterOfMassDistanceParams {
    #[serde(rename = "atom ids1", deserialize_with = "atom_id_vec")]
    atom_ids1: Vec<i32>,
    #[serde(rename = "atom ids2", deserialize_with = "atom_id_vec")]
    atom_ids2: Vec<i32>,
    #[serde(default)]
    use_range1: bool,
    #[serde(default)]
    use_range2: bool,
}

pub(crate) fn center_of_mass_distance(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: CenterOfMassDistanceParams = extract_params(doc)?;
    Ok(CollectiveVariable::CenterOfMassDistance(
        CenterOfMassDistanceCv::new(
            params.atom_ids1,
            params.atom_ids2,
            params.use_range1,
            params.use_range2,
        ),
    ))
}

#[derive(Deserialize)]
struct RmsdParams {
    #[serde(rename = "atom ids", deserialize_with = "atom_id_vec")]
    atom_ids: Vec<i32>,
    #[serde(default = "default_reference")]
    reference: String,
    #[serde(default)]
    use_range: bool,
}

pub(crate) fn rmsd(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    let params: RmsdParams = extract_params(doc)?;
    Ok(CollectiveVariable::Rmsd(RmsdCv::new(
        params.atom_ids,
        params.reference,
        params.use_range,
    )))
}
