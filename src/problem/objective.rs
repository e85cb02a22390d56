//! Objective functions and the optimization direction.

use std::cmp::Ordering;

/// A scalar objective over two real coordinates.
///
/// Implementations return the raw function value. Whether lower or higher
/// is better is decided by [`Mode`], never by the objective itself.
pub trait Objective: Send + Sync {
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// The "sin bowl" surface:
///
/// `f(x, y) = cos(x) + cos(y) + 0.01 * sin(x + y) * (1.3 x² + 0.8 y²)`
///
/// Many local minima ripple across a bowl whose floor tilts with
/// `sin(x + y)`, which makes it a useful stress test for small GAs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinBowl;

impl Objective for SinBowl {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        (x.cos() + y.cos()) + 0.01 * (x + y).sin() * (1.3 * x * x + 0.8 * y * y)
    }
}

/// Optimization direction.
///
/// Comparisons multiply fitness by [`sign`](Mode::sign) so that "greater"
/// always means "more fit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Minimize,
    Maximize,
}

impl Mode {
    /// `-1.0` for minimization, `1.0` for maximization.
    pub fn sign(self) -> f64 {
        match self {
            Mode::Minimize => -1.0,
            Mode::Maximize => 1.0,
        }
    }

    /// Sentinel fitness worse than any real value.
    pub fn worst(self) -> f64 {
        match self {
            Mode::Minimize => f64::INFINITY,
            Mode::Maximize => f64::NEG_INFINITY,
        }
    }

    /// Whether `a` is strictly more fit than `b`.
    ///
    /// NaN is never better than anything.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.sign() * a > self.sign() * b
    }

    /// Orders fitness values so that `Greater` means more fit.
    ///
    /// Incomparable values (NaN) compare as `Equal`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        (self.sign() * a)
            .partial_cmp(&(self.sign() * b))
            .unwrap_or(Ordering::Equal)
    }
}
