//! Easing Functions
//!
//! A fixed catalogue of progress-remapping curves plus a runtime-constructed
//! cubic Bézier. Each easing maps normalized progress to eased progress with
//! `apply(0) == 0` and `apply(1) == 1`; formulas follow the standard forms
//! published at <https://easings.net/>.
//!
//! Inputs are deliberately not clamped: the overshooting families (back,
//! elastic) rely on callers passing values outside `[0, 1]` untouched.

use std::f32::consts::PI;

use crate::utils::math::remap;

const C1: f32 = 1.701_58;
const C2: f32 = C1 * 1.525;
const C3: f32 = C1 + 1.0;
const C4: f32 = (2.0 * PI) / 3.0;
const C5: f32 = (2.0 * PI) / 4.5;

/// A progress-remapping curve applied to a track's interpolation.
///
/// Fixed-form variants are pure formulas; [`Easing::Bezier`] carries a
/// precomputed sample table (see [`CubicBezier`]) and stays cheap to apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    Bezier(CubicBezier),
}

impl Easing {
    /// Builds a cubic-Bézier easing from the two control handles.
    #[must_use]
    pub fn bezier(start_handle: (f32, f32), end_handle: (f32, f32)) -> Self {
        Self::Bezier(CubicBezier::new(start_handle, end_handle))
    }

    /// Maps progress `x` to eased progress.
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::InQuad => x * x,
            Self::OutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Self::InOutQuad => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => x * x * x,
            Self::OutCubic => 1.0 - (1.0 - x).powi(3),
            Self::InOutCubic => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
            Self::InQuart => x * x * x * x,
            Self::OutQuart => 1.0 - (1.0 - x).powi(4),
            Self::InOutQuart => {
                if x < 0.5 {
                    8.0 * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
                }
            }
            Self::InQuint => x * x * x * x * x,
            Self::OutQuint => 1.0 - (1.0 - x).powi(5),
            Self::InOutQuint => {
                if x < 0.5 {
                    16.0 * x * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
                }
            }
            Self::InSine => 1.0 - ((x * PI) / 2.0).cos(),
            Self::OutSine => ((x * PI) / 2.0).sin(),
            Self::InOutSine => -((PI * x).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if x == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * x - 10.0)
                }
            }
            Self::OutExpo => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * x)
                }
            }
            Self::InOutExpo => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    2.0_f32.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * x + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - x * x).sqrt(),
            Self::OutCirc => (1.0 - (x - 1.0) * (x - 1.0)).sqrt(),
            Self::InOutCirc => {
                if x < 0.5 {
                    (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => C3 * x * x * x - C1 * x * x,
            Self::OutBack => 1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2),
            Self::InOutBack => {
                if x < 0.5 {
                    ((2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2)) / 2.0
                } else {
                    ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }
            Self::InElastic => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    -(2.0_f32.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * C4).sin()
                }
            }
            Self::OutElastic => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            Self::InOutElastic => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    -(2.0_f32.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0
                } else {
                    (2.0_f32.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0 + 1.0
                }
            }
            Self::InBounce => 1.0 - out_bounce(1.0 - x),
            Self::OutBounce => out_bounce(x),
            Self::InOutBounce => {
                if x < 0.5 {
                    (1.0 - out_bounce(1.0 - 2.0 * x)) / 2.0
                } else {
                    (1.0 + out_bounce(2.0 * x - 1.0)) / 2.0
                }
            }
            Self::Bezier(curve) => curve.apply(x),
        }
    }
}

// Four-segment piecewise quadratic shared by the bounce family.
fn out_bounce(x: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

/// Number of evenly spaced parametric samples taken from the curve.
const SAMPLE_COUNT: usize = 20;

/// A cubic Bézier easing curve from `(0, 0)` through two control handles to
/// `(1, 1)`, approximated by a 20-entry lookup table.
///
/// `apply` brackets the input by sampled x-coordinate and interpolates
/// linearly between the surrounding samples rather than inverting the curve
/// exactly. Curves with a steep local x-derivative near the ends show the
/// linear-segment error inherent to the 20-sample design.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    points: [(f32, f32); SAMPLE_COUNT],
}

impl CubicBezier {
    /// Samples the curve defined by the two handles into a lookup table.
    #[must_use]
    pub fn new(start_handle: (f32, f32), end_handle: (f32, f32)) -> Self {
        let mut points = [(0.0, 0.0); SAMPLE_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            let t = i as f32 / (SAMPLE_COUNT - 1) as f32;
            *point = bezier_point(start_handle, end_handle, t);
        }
        Self { points }
    }

    /// Maps progress `t` through the sampled curve.
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        // Bracket t between the sampled points around it. Past the last
        // sample, the final pair extrapolates.
        let mut previous = self.points[0];
        let mut next = self.points[SAMPLE_COUNT - 1];
        for i in 0..SAMPLE_COUNT {
            if t <= self.points[i].0 {
                if i == 0 {
                    previous = self.points[0];
                    next = self.points[1];
                } else {
                    previous = self.points[i - 1];
                    next = self.points[i];
                }
                break;
            }
        }

        remap(previous.0, next.0, previous.1, next.1, t)
    }
}

// Cubic Bernstein evaluation with fixed endpoints (0,0) and (1,1); the start
// point's term vanishes.
fn bezier_point(start_handle: (f32, f32), end_handle: (f32, f32), t: f32) -> (f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    let w1 = 3.0 * t3 - 6.0 * t2 + 3.0 * t;
    let w2 = -3.0 * t3 + 3.0 * t2;
    let w3 = t3;

    (
        start_handle.0 * w1 + end_handle.0 * w2 + w3,
        start_handle.1 * w1 + end_handle.1 * w2 + w3,
    )
}
