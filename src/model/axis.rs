use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid axis token: '{0}'")]
pub struct ParseAxisError(String);

/// A Cartesian axis selecting one coordinate of an atom.
///
/// Configuration documents spell axes as the tokens `"x"`, `"y"` and `"z"`;
/// internally each maps to the corresponding coordinate index (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y,
    Z,
}

impl Axis {
    /// Returns the coordinate index of this axis (x = 0, y = 1, z = 2).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    // Tokens are matched exactly; the schema enum is case-sensitive too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}
