use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display unit for the two acute angles.
///
/// Angle values are stored in whatever unit is active; these helpers
/// convert to and from radians at the trigonometric call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert a value in this unit to radians.
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * std::f64::consts::PI / 180.0,
            Self::Radians => value,
        }
    }

    /// Convert a value in radians to this unit.
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians * 180.0 / std::f64::consts::PI,
            Self::Radians => radians,
        }
    }

    /// The right-angle constant (90 degrees) expressed in this unit.
    /// The complementary-angle rules subtract from this.
    pub fn quarter_turn(&self) -> f64 {
        match self {
            Self::Degrees => 90.0,
            Self::Radians => std::f64::consts::FRAC_PI_2,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Radians => write!(f, "rad"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown angle unit '{0}', expected 'degree' or 'radian'")]
pub struct UnitParseError(pub String);

impl FromStr for AngleUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree" | "degrees" | "deg" => Ok(Self::Degrees),
            "radian" | "radians" | "rad" => Ok(Self::Radians),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}
