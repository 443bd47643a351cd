//! Easing Function Tests
//!
//! Tests for:
//! - Endpoint contract f(0) = 0, f(1) = 1 across the fixed-form catalogue
//! - Exact special-casing of the expo/elastic singularities
//! - Known midpoint values for each easing family
//! - Overshoot behavior (back, elastic) and out-of-range passthrough
//! - CubicBezier lookup-table construction and identity-curve accuracy

use std::f32::consts::{FRAC_PI_4, PI};

use cadence::{CubicBezier, Easing};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn fixed_forms() -> [Easing; 31] {
    [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ]
}

// ============================================================================
// Endpoint Contract
// ============================================================================

#[test]
fn fixed_forms_map_zero_to_zero() {
    for easing in fixed_forms() {
        let v = easing.apply(0.0);
        assert!(approx(v, 0.0), "{easing:?}: f(0) = {v}, expected 0");
    }
}

#[test]
fn fixed_forms_map_one_to_one() {
    for easing in fixed_forms() {
        let v = easing.apply(1.0);
        assert!(approx(v, 1.0), "{easing:?}: f(1) = {v}, expected 1");
    }
}

#[test]
fn expo_and_elastic_endpoints_are_exact() {
    // The pow singularity is special-cased, not approximated
    assert_eq!(Easing::InExpo.apply(0.0), 0.0);
    assert_eq!(Easing::OutExpo.apply(1.0), 1.0);
    assert_eq!(Easing::InOutExpo.apply(0.0), 0.0);
    assert_eq!(Easing::InOutExpo.apply(1.0), 1.0);
    assert_eq!(Easing::InElastic.apply(0.0), 0.0);
    assert_eq!(Easing::InElastic.apply(1.0), 1.0);
    assert_eq!(Easing::OutElastic.apply(0.0), 0.0);
    assert_eq!(Easing::OutElastic.apply(1.0), 1.0);
    assert_eq!(Easing::InOutElastic.apply(0.0), 0.0);
    assert_eq!(Easing::InOutElastic.apply(1.0), 1.0);
}

#[test]
fn default_is_linear() {
    assert_eq!(Easing::default(), Easing::Linear);
}

// ============================================================================
// Polynomial Families
// ============================================================================

#[test]
fn quad_known_values() {
    assert!(approx(Easing::InQuad.apply(0.5), 0.25));
    assert!(approx(Easing::OutQuad.apply(0.5), 0.75));
    assert!(approx(Easing::InOutQuad.apply(0.25), 0.125));
    assert!(approx(Easing::InOutQuad.apply(0.75), 0.875));
    assert!(approx(Easing::InOutQuad.apply(0.5), 0.5));
}

#[test]
fn cubic_known_values() {
    assert!(approx(Easing::InCubic.apply(0.5), 0.125));
    assert!(approx(Easing::OutCubic.apply(0.5), 0.875));
    assert!(approx(Easing::InOutCubic.apply(0.25), 0.0625));
}

#[test]
fn quart_and_quint_known_values() {
    assert!(approx(Easing::InQuart.apply(0.5), 0.0625));
    assert!(approx(Easing::OutQuart.apply(0.5), 0.9375));
    assert!(approx(Easing::InQuint.apply(0.5), 0.03125));
    assert!(approx(Easing::OutQuint.apply(0.5), 0.96875));
}

// ============================================================================
// Trigonometric / Exponential Families
// ============================================================================

#[test]
fn sine_known_values() {
    assert!(approx(Easing::InSine.apply(0.5), 1.0 - FRAC_PI_4.cos()));
    assert!(approx(Easing::OutSine.apply(0.5), FRAC_PI_4.sin()));
    assert!(approx(Easing::InOutSine.apply(0.5), 0.5));
}

#[test]
fn expo_known_values() {
    assert!(approx(Easing::InExpo.apply(0.5), 0.03125));
    assert!(approx(Easing::OutExpo.apply(0.5), 0.96875));
    assert!(approx(Easing::InOutExpo.apply(0.5), 0.5));
}

#[test]
fn circ_known_values() {
    assert!(approx(Easing::InCirc.apply(0.5), 1.0 - 0.75_f32.sqrt()));
    assert!(approx(Easing::OutCirc.apply(0.5), 0.75_f32.sqrt()));
}

// ============================================================================
// Overshooting Families
// ============================================================================

#[test]
fn in_back_dips_below_zero() {
    assert!(Easing::InBack.apply(0.2) < 0.0);
}

#[test]
fn out_back_overshoots_above_one() {
    // 1 + c3 * (-0.5)^3 + c1 * 0.5^2 with c1 = 1.70158, c3 = 2.70158
    assert!(approx(Easing::OutBack.apply(0.5), 1.087_697_5));
    assert!(Easing::OutBack.apply(0.5) > 1.0);
}

#[test]
fn out_elastic_overshoots_above_one() {
    // 2^-1.25 * sin(0.5 * 2π/3) + 1
    let expected = 2.0_f32.powf(-1.25) * (0.5 * (2.0 * PI) / 3.0).sin() + 1.0;
    let v = Easing::OutElastic.apply(0.125);
    assert!((v - expected).abs() < 1e-4, "got {v}, expected {expected}");
    assert!(v > 1.0);
}

#[test]
fn no_input_clamping() {
    assert!(approx(Easing::Linear.apply(1.5), 1.5));
    assert!(approx(Easing::InQuad.apply(2.0), 4.0));
    assert!(approx(Easing::InQuad.apply(-0.5), 0.25));
}

// ============================================================================
// Bounce Family
// ============================================================================

#[test]
fn out_bounce_segment_values() {
    // first segment: n1 * x^2
    assert!(approx(Easing::OutBounce.apply(0.25), 0.472_656_25));
    // second segment
    assert!(approx(Easing::OutBounce.apply(0.5), 0.765_625));
}

#[test]
fn in_bounce_mirrors_out_bounce() {
    for i in 0..=10 {
        let x = i as f32 / 10.0;
        let mirrored = 1.0 - Easing::OutBounce.apply(1.0 - x);
        assert!(approx(Easing::InBounce.apply(x), mirrored), "x = {x}");
    }
}

// ============================================================================
// Cubic Bézier
// ============================================================================

#[test]
fn bezier_identity_curve_is_identity() {
    // Handles on the diagonal degenerate the curve to y = x; the sampled
    // table then reproduces the input up to float rounding.
    let curve = CubicBezier::new((1.0 / 3.0, 1.0 / 3.0), (2.0 / 3.0, 2.0 / 3.0));
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let v = curve.apply(t);
        assert!((v - t).abs() < 1e-4, "t = {t}: got {v}");
    }
}

#[test]
fn bezier_endpoints() {
    let curve = CubicBezier::new((0.25, 0.1), (0.25, 1.0));
    assert!(approx(curve.apply(0.0), 0.0));
    assert!(approx(curve.apply(1.0), 1.0));
}

#[test]
fn bezier_css_ease_shape() {
    // The CSS "ease" curve front-loads progress: past the midpoint of x it
    // is already well above y = x.
    let ease = Easing::bezier((0.25, 0.1), (0.25, 1.0));
    assert!(ease.apply(0.5) > 0.7);
    assert!(ease.apply(0.1) < 0.2);
}

#[test]
fn bezier_is_monotonic_for_monotonic_handles() {
    let curve = CubicBezier::new((0.42, 0.0), (0.58, 1.0));
    let mut previous = curve.apply(0.0);
    for i in 1..=40 {
        let v = curve.apply(i as f32 / 40.0);
        assert!(v >= previous - EPSILON, "dip at sample {i}: {v} < {previous}");
        previous = v;
    }
}
