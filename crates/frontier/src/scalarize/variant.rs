//! Weight-space / upper-image interpretation of enumerator vertices.
//!
//! One enumerator engine serves both problem classes; the variant decides
//! only how a vertex is turned into an oracle direction, how an oracle
//! answer becomes the next cut, which linear functional predicts a vertex's
//! value, and which bounding hyperplanes seed the run.

use nalgebra::DVector;

use crate::geom::{Cfg, Hyperplane};

use super::Evaluation;

/// Problem-class interpretation, selected once per driver run.
#[derive(Clone, Debug)]
pub enum Variant {
    /// Enumerator points are `(w_0, …, w_{D-2}, z)`: the first D−1 weights
    /// of a normalized weight vector plus the predicted scalar value. The
    /// polytope is the region under the dual envelope `z <= w·p` over the
    /// weight simplex, floored at a bound derived from the ideal point.
    WeightSpace { ideal: DVector<f64> },
    /// Enumerator points are objective vectors; the polytope is an outer
    /// approximation of the upper image, boxed below by the ideal point and
    /// capped by a total-cost bound. Assumes a nonnegative objective space.
    UpperImage {
        ideal: DVector<f64>,
        total_bound: f64,
    },
}

impl Variant {
    /// Direction for the seeding oracle call, before any vertex exists.
    pub fn initial_direction(&self, cfg: &Cfg) -> DVector<f64> {
        let d = cfg.dimension;
        match self {
            Variant::WeightSpace { .. } => {
                let mut w = DVector::zeros(d);
                w[0] = 1.0;
                w
            }
            Variant::UpperImage { .. } => DVector::from_element(d, 1.0 / d as f64),
        }
    }

    /// Bounding hyperplanes seeding the enumerator, including the cut from
    /// the seeding evaluation (without it the weight-space region has no
    /// finite top).
    pub fn initial_bounds(
        &self,
        cfg: &Cfg,
        direction0: &DVector<f64>,
        eval0: &Evaluation,
    ) -> Vec<Hyperplane> {
        let d = cfg.dimension;
        let mut bounds = Vec::with_capacity(d + 2);
        match self {
            Variant::WeightSpace { ideal } => {
                // w_i >= 0 for the reduced weights.
                for i in 0..d - 1 {
                    let mut n = DVector::zeros(d);
                    n[i] = 1.0;
                    bounds.push(Hyperplane::new(n, 0.0));
                }
                // sum of reduced weights <= 1.
                let mut n = DVector::from_element(d, -1.0);
                n[d - 1] = 0.0;
                bounds.push(Hyperplane::new(n, -1.0));
                // Floor on the value axis from the ideal point.
                let z_lo = ideal.iter().fold(f64::INFINITY, |a, &b| a.min(b)) - 1.0;
                let mut n = DVector::zeros(d);
                n[d - 1] = 1.0;
                bounds.push(Hyperplane::new(n, z_lo));
            }
            Variant::UpperImage { ideal, total_bound } => {
                for i in 0..d {
                    let mut n = DVector::zeros(d);
                    n[i] = 1.0;
                    bounds.push(Hyperplane::new(n, ideal[i]));
                }
                let n = DVector::from_element(d, -1.0);
                bounds.push(Hyperplane::new(n, -total_bound));
            }
        }
        bounds.push(self.cut(cfg, direction0, eval0));
        bounds
    }

    /// Scalarization direction for a vertex.
    ///
    /// Weight space embeds the reduced weights with `w_{D-1} = 1 − Σ w_i`;
    /// the upper image points from the vertex toward the anti-ideal corner,
    /// which always yields a nonnegative weighting.
    pub fn direction(&self, cfg: &Cfg, vertex_point: &DVector<f64>) -> DVector<f64> {
        let d = cfg.dimension;
        match self {
            Variant::WeightSpace { .. } => {
                let mut w = DVector::zeros(d);
                let mut sum = 0.0;
                for i in 0..d - 1 {
                    w[i] = vertex_point[i].max(0.0);
                    sum += w[i];
                }
                w[d - 1] = (1.0 - sum).max(0.0);
                w
            }
            Variant::UpperImage { total_bound, .. } => {
                let mut w = DVector::zeros(d);
                let mut sum = 0.0;
                for i in 0..d {
                    w[i] = (total_bound - vertex_point[i]).max(0.0);
                    sum += w[i];
                }
                if sum <= cfg.epsilon {
                    return DVector::from_element(d, 1.0 / d as f64);
                }
                w / sum
            }
        }
    }

    /// Value predicted for the vertex by the current approximation.
    pub fn predicted(&self, cfg: &Cfg, vertex_point: &DVector<f64>) -> f64 {
        match self {
            Variant::WeightSpace { .. } => vertex_point[cfg.dimension - 1],
            Variant::UpperImage { .. } => self.direction(cfg, vertex_point).dot(vertex_point),
        }
    }

    /// Positive when the approximation must be cut at this vertex.
    ///
    /// Weight space overestimates from above (predicted envelope > achieved
    /// value); the upper-image outer approximation undershoots from below.
    #[inline]
    pub fn gap(&self, predicted: f64, value: f64) -> f64 {
        match self {
            Variant::WeightSpace { .. } => predicted - value,
            Variant::UpperImage { .. } => value - predicted,
        }
    }

    /// Supporting hyperplane derived from an oracle answer.
    pub fn cut(&self, cfg: &Cfg, direction: &DVector<f64>, eval: &Evaluation) -> Hyperplane {
        let d = cfg.dimension;
        match self {
            Variant::WeightSpace { .. } => {
                // z <= sum_i w_i (p_i - p_{D-1}) + p_{D-1} in reduced weights.
                let p = &eval.point;
                let mut n = DVector::zeros(d);
                for i in 0..d - 1 {
                    n[i] = p[i] - p[d - 1];
                }
                n[d - 1] = -1.0;
                Hyperplane::new(n, -p[d - 1])
            }
            Variant::UpperImage { .. } => Hyperplane::new(direction.clone(), eval.value),
        }
    }
}
