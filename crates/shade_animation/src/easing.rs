//! Easing functions for keyframe interpolation
//!
//! Easing remaps the local progress between two keyframes before the values
//! are mixed. `Linear` is the default; `CubicBezier` covers path-style curves
//! authored as two control points, like the shade expansion path.

/// Easing function applied to a normalized progress value in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// No remapping
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end)
    EaseIn,
    /// Quadratic ease-out (fast start, slow end)
    EaseOut,
    /// Quadratic ease-in-out (slow start, slow end)
    EaseInOut,
    /// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Material-style decelerate curve, used for translation that follows a
    /// downward drag
    pub fn decelerate() -> Self {
        Easing::CubicBezier(0.0, 0.0, 0.2, 1.0)
    }

    /// Apply the easing function to `t`, clamping input to `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate one axis of a unit cubic bezier at parameter `s`
fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Solve y(t) for a unit cubic bezier by inverting x(s) = t with bisection.
/// x(s) is monotone for control x values in [0, 1], which authoring enforces.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut s = t;
    for _ in 0..24 {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_axis(y1, y2, s)
}
