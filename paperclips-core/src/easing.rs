//! Easing curves for the angle animation.
//!
//! The curve is part of the spinner configuration: the larger preset runs
//! with linear timing, the compact one with a CSS-style cubic bezier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// The cubic-bezier(0.42, 0, 0.58, 1.0) ease-in-out curve.
    pub const EASE_IN_OUT_BEZIER: Easing = Easing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Map linear progress `t` in [0, 1] through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                let u = solve_bezier_t(x1, x2, t);
                bezier_axis(y1, y2, u)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Evaluate one axis of a cubic bezier with endpoints 0 and 1.
fn bezier_axis(c1: f32, c2: f32, t: f32) -> f32 {
    let omt = 1.0 - t;
    3.0 * c1 * t * omt * omt + 3.0 * c2 * t * t * omt + t * t * t
}

fn bezier_axis_deriv(c1: f32, c2: f32, t: f32) -> f32 {
    let omt = 1.0 - t;
    3.0 * c1 * omt * omt + 6.0 * (c2 - c1) * omt * t + 3.0 * (1.0 - c2) * t * t
}

/// Find the curve parameter whose x coordinate equals `x`.
///
/// Newton-Raphson with a bisection fallback when the derivative flattens
/// out near the endpoints.
fn solve_bezier_t(x1: f32, x2: f32, x: f32) -> f32 {
    let mut t = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, t) - x;
        if err.abs() < 1e-5 {
            return t;
        }
        let slope = bezier_axis_deriv(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..24 {
        t = (lo + hi) / 2.0;
        if bezier_axis(x1, x2, t) < x {
            lo = t;
        } else {
            hi = t;
        }
    }
    t
}
