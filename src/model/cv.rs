use super::axis::Axis;

/// Three-dimensional vector.
pub type Vector3 = [f64; 3];

/// Ordered list of collective variables, in source-document order.
pub type CvList = Vec<CollectiveVariable>;

/// Single coordinate of one atom along a Cartesian axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomCoordinateCv {
    pub atom_id: i32,
    pub axis: Axis,
}

impl AtomCoordinateCv {
    pub fn new(atom_id: i32, axis: Axis) -> Self {
        Self { atom_id, axis }
    }
}

/// Fixed 3-D point constraint on one atom, with independent per-axis
/// freeze flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomPositionCv {
    pub atom_id: i32,
    pub position: Vector3,
    pub fix_x: bool,
    pub fix_y: bool,
    pub fix_z: bool,
}

impl AtomPositionCv {
    pub fn new(atom_id: i32, position: Vector3, fix_x: bool, fix_y: bool, fix_z: bool) -> Self {
        Self {
            atom_id,
            position,
            fix_x,
            fix_y,
            fix_z,
        }
    }
}

/// Signed dihedral angle among four atoms, optionally wrapped into a
/// periodic interval.
#[derive(Debug, Clone, PartialEq)]
pub struct TorsionalCv {
    pub atom_ids: [i32; 4],
    pub periodic: bool,
}

impl TorsionalCv {
    pub fn new(atom_ids: [i32; 4], periodic: bool) -> Self {
        Self { atom_ids, periodic }
    }
}

/// Pairwise separation distance between two atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSeparationCv {
    pub atom_id1: i32,
    pub atom_id2: i32,
}

impl AtomSeparationCv {
    pub fn new(atom_id1: i32, atom_id2: i32) -> Self {
        Self { atom_id1, atom_id2 }
    }
}

/// Planar angle among three atoms, with the vertex at the middle atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleCv {
    pub atom_ids: [i32; 3],
}

impl AngleCv {
    pub fn new(atom_ids: [i32; 3]) -> Self {
        Self { atom_ids }
    }
}

/// Radius of gyration over an atom group.
///
/// With `use_range` set, the two listed ids are interpreted as an inclusive
/// index range rather than an explicit atom list.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusOfGyrationCv {
    pub atom_ids: Vec<i32>,
    pub use_range: bool,
}

impl RadiusOfGyrationCv {
    pub fn new(atom_ids: Vec<i32>, use_range: bool) -> Self {
        Self { atom_ids, use_range }
    }
}

/// Center-of-mass separation between two independently sized atom groups,
/// each with its own range-mode flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterOfMassDistanceCv {
    pub atom_ids1: Vec<i32>,
    pub atom_ids2: Vec<i32>,
    pub use_range1: bool,
    pub use_range2: bool,
}

impl CenterOfMassDistanceCv {
    pub fn new(
        atom_ids1: Vec<i32>,
        atom_ids2: Vec<i32>,
        use_range1: bool,
        use_range2: bool,
    ) -> Self {
        Self {
            atom_ids1,
            atom_ids2,
            use_range1,
            use_range2,
        }
    }
}

/// Root-mean-square deviation of an atom group from a reference structure.
#[derive(Debug, Clone, PartialEq)]
pub struct RmsdCv {
    pub atom_ids: Vec<i32>,
    pub reference: String,
    pub use_range: bool,
}

impl RmsdCv {
    pub fn new(atom_ids: Vec<i32>, reference: String, use_range: bool) -> Self {
        Self {
            atom_ids,
            reference,
            use_range,
        }
    }
}

/// A fully constructed collective variable.
///
/// The variant set is closed: adding a kind means adding a schema document,
/// a registry row, and a variant here. Each value is exclusively owned by
/// the caller of the builder; the factory keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectiveVariable {
    AtomCoordinate(AtomCoordinateCv),
    AtomPosition(AtomPositionCv),
    Torsional(TorsionalCv),
    AtomSeparation(AtomSeparationCv),
    Angle(AngleCv),
    RadiusOfGyration(RadiusOfGyrationCv),
    CenterOfMassDistance(CenterOfMassDistanceCv),
    Rmsd(RmsdCv),
}

impl CollectiveVariable {
    /// Returns the discriminator tag this variable was built from.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectiveVariable::AtomCoordinate(_) => "AtomCoordinate",
            CollectiveVariable::AtomPosition(_) => "AtomPosition",
            CollectiveVariable::Torsional(_) => "Torsional",
            CollectiveVariable::AtomSeparation(_) => "AtomSeparation",
            CollectiveVariable::Angle(_) => "Angle",
            CollectiveVariable::RadiusOfGyration(_) => "RadiusOfGyration",
            CollectiveVariable::CenterOfMassDistance(_) => "CenterofMassDistance",
            CollectiveVariable::Rmsd(_) => "RMSD",
        }
    }
}
