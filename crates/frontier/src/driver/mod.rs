//! Benson dual driver: orchestrates enumerator and oracle to convergence.
//!
//! Purpose
//! - Run the generic dual algorithm: pop the least pending vertex, ask the
//!   oracle to evaluate its direction, then either confirm the vertex (the
//!   approximation is tight there) or insert the supporting cut derived
//!   from the answer and continue with the refined polytope.
//! - Everything problem-specific sits behind `ScalarizationOracle` and
//!   `Variant`; the loop below is shared by all problem classes.
//!
//! Termination: each accepted cut retires at least the vertex that
//! triggered it, and the number of vertices ever created is bounded by the
//! combinatorics of the dimension and the final cut count, so the pending
//! queue drains in finitely many steps.

use nalgebra::DVector;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::enumerate::{EnumerationError, VertexEnumerator};
use crate::geom::point::{dominates, eq_eps};
use crate::geom::Cfg;
use crate::scalarize::{OracleFailure, ScalarizationOracle, Variant};

/// Driver lifecycle. `Failed` keeps the error context in the returned
/// `DriverError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DriverState {
    Init,
    Running,
    Converged,
    Failed,
}

/// One confirmed support of the frontier: the direction that was queried
/// and the achieved objective vector the oracle returned for it.
#[derive(Clone, Debug, Serialize)]
pub struct FrontierEntry {
    pub direction: DVector<f64>,
    pub point: DVector<f64>,
}

/// Run counters, reported alongside the frontier.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RunStats {
    pub iterations: usize,
    pub oracle_calls: usize,
    pub confirmed: usize,
    pub cuts: usize,
    pub vertices_created: usize,
    pub final_vertices: usize,
    pub final_hyperplanes: usize,
}

/// Output of a converged run: confirmed entries in confirmation order.
#[derive(Clone, Debug, Serialize)]
pub struct Frontier {
    pub entries: Vec<FrontierEntry>,
    pub stats: RunStats,
    /// Tolerance the run was configured with.
    pub epsilon: f64,
}

impl Frontier {
    /// Achieved points with duplicates and dominated entries removed.
    ///
    /// Filters at the run tolerance: near-duplicate supports confirmed from
    /// different directions differ by less than the run can distinguish,
    /// and a finer filter would keep comparable pairs of them.
    pub fn nondominated_points(&self) -> Vec<DVector<f64>> {
        let eps = self.epsilon;
        let mut out: Vec<DVector<f64>> = Vec::new();
        for e in &self.entries {
            let p = &e.point;
            if out.iter().any(|q| eq_eps(q, p, eps) || dominates(q, p, eps)) {
                continue;
            }
            out.retain(|q| !dominates(p, q, eps));
            out.push(p.clone());
        }
        out
    }
}

/// Failures that end a run in `Failed`. Nothing is retried: oracle
/// determinism makes a retry pointless, and a degenerate polytope cannot
/// be repaired mid-run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Oracle(#[from] OracleFailure),
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    /// Operational safeguard, distinct from algorithmic failure.
    #[error("iteration limit {limit} exceeded")]
    IterationLimitExceeded { limit: usize },
}

/// State machine `Init → Running → {Converged, Failed}` around the
/// enumerator/oracle loop.
pub struct DualBensonDriver<'a, O: ScalarizationOracle> {
    cfg: Cfg,
    variant: Variant,
    oracle: &'a O,
    state: DriverState,
}

impl<'a, O: ScalarizationOracle> DualBensonDriver<'a, O> {
    pub fn new(cfg: Cfg, variant: Variant, oracle: &'a O) -> Self {
        Self {
            cfg,
            variant,
            oracle,
            state: DriverState::Init,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Run to convergence. On error the driver is left in `Failed`.
    pub fn solve(&mut self) -> Result<Frontier, DriverError> {
        let result = self.run();
        self.state = match &result {
            Ok(_) => DriverState::Converged,
            Err(_) => DriverState::Failed,
        };
        result
    }

    fn run(&mut self) -> Result<Frontier, DriverError> {
        let cfg = self.cfg;
        let mut stats = RunStats::default();

        // Init: seed the bounding region from one oracle call and enumerate
        // its vertex set.
        let d0 = self.variant.initial_direction(&cfg);
        let eval0 = self.oracle.evaluate(&d0)?;
        stats.oracle_calls += 1;
        let bounds = self.variant.initial_bounds(&cfg, &d0, &eval0);
        let mut en = VertexEnumerator::from_bounds(cfg, bounds)?;
        stats.vertices_created += en.num_vertices();
        self.state = DriverState::Running;

        let mut entries: Vec<FrontierEntry> = Vec::new();
        while let Some(id) = en.next_pending() {
            stats.iterations += 1;
            if let Some(limit) = cfg.max_iterations {
                if stats.iterations > limit {
                    return Err(DriverError::IterationLimitExceeded { limit });
                }
            }
            let Some(v) = en.vertex(id) else { continue };
            let vp = v.point.clone();
            let dir = self.variant.direction(&cfg, &vp);
            let eval = self.oracle.evaluate(&dir)?;
            stats.oracle_calls += 1;
            let predicted = self.variant.predicted(&cfg, &vp);
            let gap = self.variant.gap(predicted, eval.value);
            if gap <= cfg.epsilon {
                en.mark_processed(id);
                stats.confirmed += 1;
                debug!(vertex = ?id, gap, "vertex confirmed");
                entries.push(FrontierEntry {
                    direction: dir,
                    point: eval.point,
                });
            } else {
                let cut = self.variant.cut(&cfg, &dir, &eval);
                let created = en.add_hyperplane(cut)?;
                stats.cuts += 1;
                stats.vertices_created += created.len();
                debug!(vertex = ?id, gap, created = created.len(), "cut inserted");
                if en.vertex(id).is_some() {
                    // A cut that fails to retire its trigger would stall
                    // the queue; demote the vertex instead.
                    warn!(vertex = ?id, "cut left its trigger vertex alive");
                    en.mark_processed(id);
                }
            }
        }

        stats.final_vertices = en.num_vertices();
        stats.final_hyperplanes = en.num_hyperplanes();
        info!(
            iterations = stats.iterations,
            confirmed = stats.confirmed,
            cuts = stats.cuts,
            vertices = stats.final_vertices,
            "converged"
        );
        Ok(Frontier {
            entries,
            stats,
            epsilon: cfg.epsilon,
        })
    }
}
