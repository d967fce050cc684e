use kurbo::common::{solve_cubic, solve_quadratic};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in/out.
    InOutCubic,
    /// CSS-style cubic bezier timing with control points
    /// `(x1, y1)` and `(x2, y2)`; `x1`/`x2` must lie in `[0, 1]`.
    Bezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// The CSS `ease` timing function, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    ///
    /// This is the curve used for scroll transitions between cues.
    pub const CSS_EASE: Self = Self::Bezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bezier { x1, y1, x2, y2 } => bezier_apply(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluate the CSS timing function exactly: solve `x(s) = t` for the curve
/// parameter `s`, then return `y(s)`.
fn bezier_apply(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // x(s) = c1*s + c2*s^2 + c3*s^3 with x(0)=0, x(1)=1.
    let c1 = 3.0 * x1;
    let c2 = 3.0 * (x2 - 2.0 * x1);
    let c3 = 1.0 + 3.0 * (x1 - x2);
    let s = solve_unit_param(c1, c2, c3, t);

    let u = 1.0 - s;
    3.0 * y1 * s * u * u + 3.0 * y2 * s * s * u + s * s * s
}

const ROOT_EPS: f64 = 1e-9;

fn solve_unit_param(c1: f64, c2: f64, c3: f64, target: f64) -> f64 {
    let root = if c3.abs() < ROOT_EPS {
        unit_root(solve_quadratic(-target, c1, c2).iter().copied())
    } else {
        unit_root(solve_cubic(-target, c1, c2, c3).iter().copied())
    };
    // Degenerate control points collapse to the identity curve.
    root.unwrap_or_else(|| target.clamp(0.0, 1.0))
}

fn unit_root(roots: impl Iterator<Item = f64>) -> Option<f64> {
    roots
        .into_iter()
        .find(|r| (-ROOT_EPS..=1.0 + ROOT_EPS).contains(r))
        .map(|r| r.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
