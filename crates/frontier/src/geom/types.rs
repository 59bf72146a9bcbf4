//! Basic numeric types and tolerances shared by every component.
//!
//! - `Cfg`: centralizes the dimension, the single epsilon, and the
//!   operational knobs (iteration cap, perturbation retry budget).
//! - `Hyperplane`: closed halfspace `n·x >= c` with eps-aware predicates.
//! - `Sign`: three-way classification of a point against a hyperplane.

use nalgebra::DVector;

/// Run configuration threaded explicitly through enumerator, variant and
/// driver. One epsilon governs every comparison against zero.
#[derive(Clone, Copy, Debug)]
pub struct Cfg {
    /// Dimension of the enumeration space (number of objectives).
    pub dimension: usize,
    /// Tolerance for all sign tests and equality checks.
    pub epsilon: f64,
    /// Optional wall on driver iterations; `None` means unbounded.
    pub max_iterations: Option<usize>,
    /// Retry budget for the degenerate adjacency tie-break.
    pub perturbation_attempts: usize,
}

impl Cfg {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            epsilon: 1e-8,
            max_iterations: None,
            perturbation_attempts: 4,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }
}

/// Classification of a point against a hyperplane at tolerance eps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Boundary,
    Negative,
}

/// Closed halfspace `normal · x >= offset` (no normalization required).
///
/// Hyperplanes are inserted in strict sequence and never removed; the
/// insertion index into the enumerator's arena identifies them everywhere.
#[derive(Clone, Debug)]
pub struct Hyperplane {
    pub normal: DVector<f64>,
    pub offset: f64,
}

impl Hyperplane {
    #[inline]
    pub fn new(normal: DVector<f64>, offset: f64) -> Self {
        Self { normal, offset }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal.len()
    }

    /// Signed slack at `x`; nonnegative inside the halfspace.
    #[inline]
    pub fn eval(&self, x: &DVector<f64>) -> f64 {
        self.normal.dot(x) - self.offset
    }

    #[inline]
    pub fn satisfies_eps(&self, x: &DVector<f64>, eps: f64) -> bool {
        self.eval(x) >= -eps
    }

    /// Three-way sign of the slack at tolerance `eps`.
    #[inline]
    pub fn classify(&self, x: &DVector<f64>, eps: f64) -> Sign {
        let v = self.eval(x);
        if v >= eps {
            Sign::Positive
        } else if v <= -eps {
            Sign::Negative
        } else {
            Sign::Boundary
        }
    }
}
