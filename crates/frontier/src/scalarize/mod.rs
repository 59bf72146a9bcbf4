//! Scalarization oracle contract and built-in toy oracles.
//!
//! Purpose
//! - Define the single seam between the generic driver and the
//!   problem-specific solvers: a pure function from a direction vector to
//!   the best achievable point and its scalar value.
//! - Concrete combinatorial/LP solvers are external collaborators; the toy
//!   oracles here exist for tests, benches and the cli demos.
//!
//! Determinism: an oracle must return identical answers for identical
//! directions over the life of one driver run. Failures are substantive
//! (the scalarized subproblem is infeasible or unbounded for that
//! direction) and are propagated, never retried.

mod variant;

pub use variant::Variant;

#[cfg(test)]
mod tests;

use nalgebra::DVector;
use thiserror::Error;

use crate::geom::point::lex_cmp;

/// Answer of one scalarization: the achieved objective vector and the
/// scalar value `direction · point` it realizes.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub point: DVector<f64>,
    pub value: f64,
}

/// Failure of a scalarized subproblem. Carries the direction that
/// triggered it so the run can be reproduced.
#[derive(Clone, Debug, Error)]
pub enum OracleFailure {
    #[error("scalarized subproblem infeasible for direction {direction:?}")]
    Infeasible { direction: Vec<f64> },
    #[error("scalarized subproblem unbounded for direction {direction:?}")]
    Unbounded { direction: Vec<f64> },
}

/// Problem-specific scalarization solver consumed by the driver.
pub trait ScalarizationOracle {
    fn evaluate(&self, direction: &DVector<f64>) -> Result<Evaluation, OracleFailure>;
}

/// Minimizes `direction · p` over an explicit finite point set — the
/// discrete stand-in for an assignment or shortest-path solver. Ties break
/// lexicographically so the oracle stays a pure function of its input.
#[derive(Clone, Debug)]
pub struct PointSetOracle {
    points: Vec<DVector<f64>>,
    eps: f64,
}

impl PointSetOracle {
    pub fn new(points: Vec<DVector<f64>>, eps: f64) -> Self {
        Self { points, eps }
    }
}

impl ScalarizationOracle for PointSetOracle {
    fn evaluate(&self, direction: &DVector<f64>) -> Result<Evaluation, OracleFailure> {
        let mut best: Option<&DVector<f64>> = None;
        let mut best_value = f64::INFINITY;
        for p in &self.points {
            let value = direction.dot(p);
            let better = match best {
                None => true,
                Some(b) => {
                    value < best_value - self.eps
                        || (value < best_value + self.eps
                            && lex_cmp(p, b, self.eps) == std::cmp::Ordering::Less)
                }
            };
            if better {
                best = Some(p);
                best_value = value;
            }
        }
        match best {
            Some(p) => Ok(Evaluation {
                point: p.clone(),
                value: best_value,
            }),
            None => Err(OracleFailure::Infeasible {
                direction: direction.iter().copied().collect(),
            }),
        }
    }
}

/// Two-objective toy oracle returning `(1/w0, 1/w1)` for weights `(w0, w1)`.
/// Weights are floored at `w_min` so the corner directions stay finite.
#[derive(Clone, Copy, Debug)]
pub struct ReciprocalOracle {
    pub w_min: f64,
}

impl Default for ReciprocalOracle {
    fn default() -> Self {
        Self { w_min: 1e-6 }
    }
}

impl ScalarizationOracle for ReciprocalOracle {
    fn evaluate(&self, direction: &DVector<f64>) -> Result<Evaluation, OracleFailure> {
        if direction.len() != 2 {
            return Err(OracleFailure::Infeasible {
                direction: direction.iter().copied().collect(),
            });
        }
        let w0 = direction[0].max(self.w_min);
        let w1 = direction[1].max(self.w_min);
        let point = DVector::from_vec(vec![1.0 / w0, 1.0 / w1]);
        let value = direction.dot(&point);
        Ok(Evaluation { point, value })
    }
}
