//! Measurement set for a right triangle.
//!
//! Each field is either known (`Some`) or unknown (`None`). The solver
//! fills in unknowns from knowns; nothing here validates geometric
//! consistency, so a present value may be NaN (e.g. from unparseable
//! input or an impossible square root) and is carried as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The measurements of a right triangle with legs `a`, `b` and
/// hypotenuse `c`. Angle `alpha` is opposite `a`, `beta` opposite `b`;
/// both are stored in the active display unit. `height` is the altitude
/// from the right-angle vertex to the hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TriangleValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,
}

impl TriangleValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::A => self.a,
            Field::B => self.b,
            Field::C => self.c,
            Field::Alpha => self.alpha,
            Field::Beta => self.beta,
            Field::Height => self.height,
            Field::Area => self.area,
            Field::Perimeter => self.perimeter,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::A => self.a = value,
            Field::B => self.b = value,
            Field::C => self.c = value,
            Field::Alpha => self.alpha = value,
            Field::Beta => self.beta = value,
            Field::Height => self.height = value,
            Field::Area => self.area = value,
            Field::Perimeter => self.perimeter = value,
        }
    }

    /// Number of fields currently present (including NaN values).
    pub fn known_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// Round every present value to 3 decimal places. NaN stays NaN.
    pub fn round_all(&mut self) {
        for field in Field::ALL {
            if let Some(v) = self.get(field) {
                self.set(field, Some(round3(v)));
            }
        }
    }
}

/// Round to 3 decimal places, ties away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A value is usable by a derivation rule only when it is present,
/// non-zero, and not NaN. A stored NaN is display-only: it propagates
/// to the output but never satisfies a rule precondition.
pub fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Names of the eight measurement fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    A,
    B,
    C,
    Alpha,
    Beta,
    Height,
    Area,
    Perimeter,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::A,
        Field::B,
        Field::C,
        Field::Alpha,
        Field::Beta,
        Field::Height,
        Field::Area,
        Field::Perimeter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Height => "height",
            Self::Area => "area",
            Self::Perimeter => "perimeter",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown measurement field '{0}'")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            "height" => Ok(Self::Height),
            "area" => Ok(Self::Area),
            "perimeter" => Ok(Self::Perimeter),
            other => Err(FieldParseError(other.to_string())),
        }
    }
}
