//! Form-state layer: one calculator session.
//!
//! Owns the measurement set, the active angle unit, and the diagram
//! anchor point, and maps the user-facing actions (set a field, toggle
//! the unit, Calculate, Clear) onto the pure solver and projection.

use crate::geometry::Point2;
use crate::triangle::projection;
use crate::triangle::solver;
use crate::triangle::types::{Field, FieldParseError, TriangleValues};
use crate::units::{AngleUnit, UnitParseError};
use thiserror::Error;


/// Wire-facing failures. Bad numeric text is deliberately not here:
/// unparseable numbers become NaN and propagate through the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] FieldParseError),
    #[error(transparent)]
    UnknownUnit(#[from] UnitParseError),
}

/// State of a single calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: TriangleValues,
    unit: AngleUnit,
    point: Point2,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: TriangleValues::new(),
            unit: AngleUnit::default(),
            point: projection::origin(),
        }
    }

    pub fn values(&self) -> &TriangleValues {
        &self.values
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Current diagram anchor. Only moves when Calculate produces a
    /// projectable pair of legs; Clear resets it to the origin.
    pub fn point(&self) -> Point2 {
        self.point
    }

    /// Set one field from raw input text. Empty text clears the field;
    /// unparseable text stores NaN rather than failing.
    pub fn set_field_text(&mut self, field: Field, text: &str) {
        let value = if text.is_empty() {
            None
        } else {
            Some(text.parse::<f64>().unwrap_or(f64::NAN))
        };
        self.values.set(field, value);
    }

    /// Switch the display unit, converting any present angle values so
    /// the stored measurements mean the same triangle.
    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        if unit == self.unit {
            return;
        }
        for field in [Field::Alpha, Field::Beta] {
            if let Some(v) = self.values.get(field) {
                let radians = self.unit.to_radians(v);
                self.values.set(field, Some(unit.from_radians(radians)));
            }
        }
        self.unit = unit;
    }

    /// The Calculate action: run the solver over the current knowns and
    /// move the diagram anchor if the result projects.
    pub fn calculate(&mut self) {
        self.values = solver::solve(&self.values, self.unit);
        if let Some(point) = projection::project(&self.values) {
            self.point = point;
        }
    }

    /// The Clear action: every field back to unknown, diagram back to
    /// the origin. The angle unit is a mode, not a field; it stays.
    pub fn clear(&mut self) {
        self.values = TriangleValues::new();
        self.point = projection::origin();
    }

    /// Apply a `field=text` assignment from the wire.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<Field, FormError> {
        let (name, text) = assignment.split_once('=').unwrap_or((assignment, ""));
        let field: Field = name.trim().parse()?;
        self.set_field_text(field, text.trim());
        Ok(field)
    }
}
