//! Right-triangle solver.
//!
//! Propagates known measurements to unknown ones through a fixed, ordered
//! list of derivation rules. Each rule fires only when its preconditions
//! hold and its target is still unknown, so a single pass reaches a fixed
//! point: re-running `solve` on its own output changes nothing.
//!
//! There is no consistency validation. Impossible input (say `a > c`)
//! turns an intermediate square root into NaN, which is stored and
//! rounded like any other value but never satisfies a later rule's
//! preconditions.

use super::types::{usable, TriangleValues};
use crate::units::AngleUnit;

/// Slack allowed before rule 1 re-normalizes an angle pair. Must exceed
/// the worst-case drift of two 3-decimal roundings, or the rule would
/// re-fire on the solver's own rounded output and break idempotence.
const ANGLE_SUM_TOL: f64 = 1e-3;

/// Solve as much of the triangle as the known values permit.
///
/// Takes an immutable snapshot and returns a new, more complete one with
/// every present value rounded to 3 decimal places. Angle values are read
/// and written in `unit`; conversions to radians happen only at the trig
/// call sites.
pub fn solve(values: &TriangleValues, unit: AngleUnit) -> TriangleValues {
    let mut v = *values;

    normalize_angle_pair(&mut v, unit);
    complete_pythagorean(&mut v);
    apply_isosceles_shortcut(&mut v);
    derive_angles_from_sides(&mut v, unit);
    derive_complementary_angle(&mut v, unit);
    derive_sides_from_angles(&mut v, unit);
    derive_height(&mut v, unit);
    derive_area(&mut v);
    derive_perimeter(&mut v);

    v.round_all();
    v
}

/// Rule 1: if both acute angles are present but do not sum to a quarter
/// turn, the second is forced complementary to the first. Alpha wins over
/// a stale or contradictory beta.
fn normalize_angle_pair(v: &mut TriangleValues, unit: AngleUnit) {
    if let (Some(alpha), Some(beta)) = (usable(v.alpha), usable(v.beta)) {
        if (alpha + beta - unit.quarter_turn()).abs() > ANGLE_SUM_TOL {
            v.beta = Some(unit.quarter_turn() - alpha);
        }
    }
}

/// Rule 2: exactly two of {a, b, c} known determines the third.
fn complete_pythagorean(v: &mut TriangleValues) {
    match (usable(v.a), usable(v.b), usable(v.c)) {
        (Some(a), Some(b), None) => v.c = Some((a * a + b * b).sqrt()),
        (Some(a), None, Some(c)) => v.b = Some((c * c - a * a).sqrt()),
        (None, Some(b), Some(c)) => v.a = Some((c * c - b * b).sqrt()),
        _ => {}
    }
}

/// Rule 3: only `b` known. Assume a 45-45-90 triangle with `b` as the
/// hypotenuse: both legs become `b / sqrt(2)` and `c` takes the old `b`.
fn apply_isosceles_shortcut(v: &mut TriangleValues) {
    if let (None, Some(b), None) = (usable(v.a), usable(v.b), usable(v.c)) {
        v.c = Some(b);
        v.a = Some(b / std::f64::consts::SQRT_2);
        v.b = v.a;
    }
}

/// Rule 4: unknown angles from side ratios, preferring the opposite-side
/// sine form over the adjacent-side cosine form.
fn derive_angles_from_sides(v: &mut TriangleValues, unit: AngleUnit) {
    if usable(v.alpha).is_none() {
        if let (Some(a), Some(c)) = (usable(v.a), usable(v.c)) {
            v.alpha = Some(unit.from_radians((a / c).asin()));
        } else if let (Some(b), Some(c)) = (usable(v.b), usable(v.c)) {
            v.alpha = Some(unit.from_radians((b / c).acos()));
        }
    }

    if usable(v.beta).is_none() {
        if let (Some(a), Some(c)) = (usable(v.a), usable(v.c)) {
            v.beta = Some(unit.from_radians((a / c).acos()));
        } else if let (Some(b), Some(c)) = (usable(v.b), usable(v.c)) {
            v.beta = Some(unit.from_radians((b / c).asin()));
        }
    }
}

/// Rule 5: exactly one acute angle known determines the other.
fn derive_complementary_angle(v: &mut TriangleValues, unit: AngleUnit) {
    match (usable(v.alpha), usable(v.beta)) {
        (Some(alpha), None) => v.beta = Some(unit.quarter_turn() - alpha),
        (None, Some(beta)) => v.alpha = Some(unit.quarter_turn() - beta),
        _ => {}
    }
}

/// Rule 6: a leg from the hypotenuse and its opposite angle.
fn derive_sides_from_angles(v: &mut TriangleValues, unit: AngleUnit) {
    if let (Some(c), Some(alpha)) = (usable(v.c), usable(v.alpha)) {
        if usable(v.a).is_none() {
            v.a = Some(c * unit.to_radians(alpha).sin());
        }
    }
    if let (Some(c), Some(beta)) = (usable(v.c), usable(v.beta)) {
        if usable(v.b).is_none() {
            v.b = Some(c * unit.to_radians(beta).sin());
        }
    }
}

/// Rule 7: altitude to the hypotenuse, `a*b/c` when both legs are known,
/// with tangent fallbacks when only one leg and its angle are.
fn derive_height(v: &mut TriangleValues, unit: AngleUnit) {
    if usable(v.height).is_some() {
        return;
    }
    if let (Some(a), Some(b)) = (usable(v.a), usable(v.b)) {
        v.height = Some(a * b / v.c.unwrap_or(f64::NAN));
    } else if let (Some(a), Some(alpha)) = (usable(v.a), usable(v.alpha)) {
        v.height = Some(a * unit.to_radians(alpha).tan());
    } else if let (Some(b), Some(beta)) = (usable(v.b), usable(v.beta)) {
        v.height = Some(b * unit.to_radians(beta).tan());
    }
}

/// Rule 8: area from the hypotenuse and its altitude, else from the legs.
fn derive_area(v: &mut TriangleValues) {
    if usable(v.area).is_some() {
        return;
    }
    if let (Some(c), Some(height)) = (usable(v.c), usable(v.height)) {
        v.area = Some(c * height / 2.0);
    } else if let (Some(a), Some(b)) = (usable(v.a), usable(v.b)) {
        v.area = Some(a * b / 2.0);
    }
}

/// Rule 9: perimeter once all three sides are known.
fn derive_perimeter(v: &mut TriangleValues) {
    if usable(v.perimeter).is_some() {
        return;
    }
    if let (Some(a), Some(b), Some(c)) = (usable(v.a), usable(v.b), usable(v.c)) {
        v.perimeter = Some(a + b + c);
    }
}
