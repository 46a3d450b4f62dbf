use crate::triangle::solver::solve;
use crate::triangle::types::TriangleValues;
use crate::units::AngleUnit;

fn approx(actual: Option<f64>, expected: f64) -> bool {
    matches!(actual, Some(v) if (v - expected).abs() < 1e-3)
}

#[test]
fn test_two_legs_complete_everything() {
    let input = TriangleValues {
        a: Some(3.0),
        b: Some(4.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.c, Some(5.0));
    assert_eq!(result.height, Some(2.4));
    assert_eq!(result.area, Some(6.0));
    assert_eq!(result.perimeter, Some(12.0));
    assert!(approx(result.alpha, 36.870));
    assert!(approx(result.beta, 53.130));
}

#[test]
fn test_hypotenuse_and_angle() {
    let input = TriangleValues {
        c: Some(10.0),
        alpha: Some(30.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert!(approx(result.a, 5.0));
    assert!(approx(result.b, 8.660));
    assert!(approx(result.beta, 60.0));
    assert!(approx(result.height, 4.330));
    assert!(approx(result.area, 21.651));
    assert!(approx(result.perimeter, 23.660));
}

#[test]
fn test_hypotenuse_and_angle_radian_mode() {
    let input = TriangleValues {
        c: Some(10.0),
        alpha: Some(std::f64::consts::FRAC_PI_6),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Radians);

    assert!(approx(result.a, 5.0));
    assert!(approx(result.b, 8.660));
    assert!(approx(result.beta, 1.047));
    assert!(approx(result.height, 4.330));
}

#[test]
fn test_lone_b_assumes_isosceles() {
    let input = TriangleValues {
        b: Some(5.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    // b is reassigned: both legs end up b / sqrt(2), c takes the old b.
    assert_eq!(result.c, Some(5.0));
    assert!(approx(result.a, 3.536));
    assert!(approx(result.b, 3.536));
    assert!(approx(result.alpha, 45.0));
    assert!(approx(result.beta, 45.0));
    assert_eq!(result.height, Some(2.5));
}

#[test]
fn test_leg_and_hypotenuse() {
    let input = TriangleValues {
        a: Some(5.0),
        c: Some(13.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.b, Some(12.0));
    assert!(approx(result.alpha, 22.620));
    assert!(approx(result.beta, 67.380));
    assert!(approx(result.height, 4.615));
    assert_eq!(result.perimeter, Some(30.0));
}

#[test]
fn test_single_known_angle_gets_complement() {
    let input = TriangleValues {
        alpha: Some(25.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.beta, Some(65.0));
    // No sides to derive from a bare angle.
    assert_eq!(result.a, None);
    assert_eq!(result.c, None);
}

#[test]
fn test_angle_pair_normalization() {
    // Stale beta left in the form: alpha wins, beta is forced complementary.
    let input = TriangleValues {
        c: Some(10.0),
        alpha: Some(30.0),
        beta: Some(40.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.beta, Some(60.0));
    assert!(approx(result.a, 5.0));
    assert!(approx(result.b, 8.660));
}

#[test]
fn test_angle_pair_left_alone_when_complementary() {
    let input = TriangleValues {
        alpha: Some(30.0),
        beta: Some(60.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.alpha, Some(30.0));
    assert_eq!(result.beta, Some(60.0));
}

#[test]
fn test_known_values_are_never_recomputed() {
    // A deliberately non-Pythagorean triple: all three sides known, so
    // rule 2 has nothing to do and the sides pass through untouched.
    let input = TriangleValues {
        a: Some(3.0),
        b: Some(4.0),
        c: Some(6.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.a, Some(3.0));
    assert_eq!(result.b, Some(4.0));
    assert_eq!(result.c, Some(6.0));
}

#[test]
fn test_inconsistent_sides_propagate_nan() {
    // a > c has no real solution; the square root goes NaN and dependent
    // fields either go NaN or stay unknown. No panic, no error.
    let input = TriangleValues {
        a: Some(7.0),
        c: Some(5.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert!(result.b.is_some_and(f64::is_nan));
    assert!(result.alpha.is_some_and(f64::is_nan));
    assert!(result.beta.is_some_and(f64::is_nan));
    assert_eq!(result.height, None);
    assert_eq!(result.area, None);
    assert_eq!(result.perimeter, None);
}

#[test]
fn test_nan_input_is_invisible_to_rules() {
    // NaN in c behaves like an unknown for preconditions, so the two
    // legs still complete the triangle and overwrite it.
    let input = TriangleValues {
        a: Some(3.0),
        b: Some(4.0),
        c: Some(f64::NAN),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.c, Some(5.0));
    assert_eq!(result.perimeter, Some(12.0));
}

#[test]
fn test_zero_leg_counts_as_unknown() {
    let input = TriangleValues {
        a: Some(0.0),
        b: Some(5.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    // Zero a does not pair with b for Pythagoras; the lone-b shortcut
    // runs instead and replaces it.
    assert_eq!(result.c, Some(5.0));
    assert!(approx(result.a, 3.536));
}

#[test]
fn test_supplied_height_and_area_are_kept() {
    let input = TriangleValues {
        a: Some(3.0),
        b: Some(4.0),
        height: Some(9.0),
        area: Some(99.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    assert_eq!(result.height, Some(9.0));
    assert_eq!(result.area, Some(99.0));
    assert_eq!(result.c, Some(5.0));
}

#[test]
fn test_rounding_to_three_decimals() {
    let input = TriangleValues {
        a: Some(1.0),
        b: Some(1.0),
        ..Default::default()
    };

    let result = solve(&input, AngleUnit::Degrees);

    // sqrt(2) = 1.41421356... rounds to 1.414
    assert_eq!(result.c, Some(1.414));
    assert_eq!(result.alpha, Some(45.0));
}

#[test]
fn test_empty_input_stays_empty() {
    let result = solve(&TriangleValues::new(), AngleUnit::Degrees);
    assert_eq!(result, TriangleValues::new());
}

#[test]
fn test_complementary_invariant() {
    let cases = [
        TriangleValues { a: Some(3.0), b: Some(4.0), ..Default::default() },
        TriangleValues { c: Some(10.0), alpha: Some(30.0), ..Default::default() },
        TriangleValues { b: Some(5.0), ..Default::default() },
        TriangleValues { a: Some(5.0), c: Some(13.0), ..Default::default() },
        TriangleValues { beta: Some(71.5), ..Default::default() },
    ];

    for input in cases {
        let result = solve(&input, AngleUnit::Degrees);
        if let (Some(alpha), Some(beta)) = (result.alpha, result.beta) {
            assert!(
                (alpha + beta - 90.0).abs() < 1e-3,
                "alpha {alpha} + beta {beta} should be 90"
            );
        }
    }
}

#[test]
fn test_idempotent_on_own_output() {
    let cases = [
        (TriangleValues { a: Some(3.0), b: Some(4.0), ..Default::default() }, AngleUnit::Degrees),
        (TriangleValues { c: Some(10.0), alpha: Some(30.0), ..Default::default() }, AngleUnit::Degrees),
        (TriangleValues { b: Some(5.0), ..Default::default() }, AngleUnit::Degrees),
        (TriangleValues { b: Some(5.0), ..Default::default() }, AngleUnit::Radians),
        (
            TriangleValues { c: Some(10.0), alpha: Some(std::f64::consts::FRAC_PI_6), ..Default::default() },
            AngleUnit::Radians,
        ),
        (TriangleValues { a: Some(5.0), c: Some(13.0), ..Default::default() }, AngleUnit::Degrees),
    ];

    for (input, unit) in cases {
        let once = solve(&input, unit);
        let twice = solve(&once, unit);
        assert_eq!(once, twice, "solve must be a fixed point for {input:?} ({unit})");
    }
}
