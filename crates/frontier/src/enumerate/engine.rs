//! Online vertex enumeration under incremental halfspace insertion
//! (double-description update).
//!
//! The enumerator owns an append-only arena of hyperplanes and a slab of
//! vertices addressed by `VertexId`. `add_hyperplane` classifies every live
//! vertex against the new halfspace in one pure pass, then applies the
//! update: boundary vertices gain the new incidence, adjacent
//! positive/negative pairs spawn a cut vertex on the segment between them,
//! negative vertices are retired. Classification is collected before any
//! mutation, so the pass can be parallelized without shared state.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::geom::point::{eq_eps, lex_cmp};
use crate::geom::{Cfg, Hyperplane, Sign};

use super::adjacency::{adjacent, common_incidence};
use super::types::{EnumerationError, Vertex, VertexId, VertexStatus};

/// Maintains the exact vertex set of `{x : h(x) >= 0 for all inserted h}`.
#[derive(Debug)]
pub struct VertexEnumerator {
    cfg: Cfg,
    hyperplanes: Vec<Hyperplane>,
    vertices: Vec<Option<Vertex>>,
}

impl VertexEnumerator {
    /// Seed from an initial bounding set of hyperplanes. The initial vertex
    /// set is enumerated brute force over D-subsets of the bounds, so the
    /// bounds must be few and must intersect in at least one vertex.
    pub fn from_bounds(cfg: Cfg, bounds: Vec<Hyperplane>) -> Result<Self, EnumerationError> {
        let d = cfg.dimension;
        if bounds.len() < d {
            return Err(EnumerationError::InsufficientHyperplanes {
                needed: d,
                got: bounds.len(),
            });
        }
        for h in &bounds {
            check_dimension(d, h)?;
        }
        let mut en = Self {
            cfg,
            hyperplanes: bounds,
            vertices: Vec::new(),
        };
        en.seed_initial_vertices();
        if en.vertices.is_empty() {
            return Err(EnumerationError::EmptyInitialRegion);
        }
        debug!(
            hyperplanes = en.hyperplanes.len(),
            vertices = en.vertices.len(),
            "seeded initial polytope"
        );
        Ok(en)
    }

    fn seed_initial_vertices(&mut self) {
        let d = self.cfg.dimension;
        let eps = self.cfg.epsilon;
        for comb in combinations(self.hyperplanes.len(), d) {
            let m = DMatrix::from_fn(d, d, |r, c| self.hyperplanes[comb[r]].normal[c]);
            let rhs = DVector::from_fn(d, |r, _| self.hyperplanes[comb[r]].offset);
            let Some(x) = m.lu().solve(&rhs) else {
                continue;
            };
            // Near-singular solves drift off the chosen planes; reject them.
            if comb.iter().any(|&i| self.hyperplanes[i].eval(&x).abs() >= eps) {
                continue;
            }
            if !self.hyperplanes.iter().all(|h| h.satisfies_eps(&x, eps)) {
                continue;
            }
            if self
                .vertices
                .iter()
                .flatten()
                .any(|v| eq_eps(&v.point, &x, eps))
            {
                continue;
            }
            let incident: Vec<usize> = (0..self.hyperplanes.len())
                .filter(|&i| self.hyperplanes[i].eval(&x).abs() < eps)
                .collect();
            self.vertices.push(Some(Vertex::new(x, incident)));
        }
    }

    /// Insert one halfspace and return the handles of the vertices it
    /// created. Redundant halfspaces leave the vertex set unchanged.
    pub fn add_hyperplane(&mut self, h: Hyperplane) -> Result<Vec<VertexId>, EnumerationError> {
        let d = self.cfg.dimension;
        let eps = self.cfg.epsilon;
        check_dimension(d, &h)?;
        let idx = self.hyperplanes.len();

        // Step 1: classify every live vertex (pure pass, collected results).
        let mut positives: Vec<(VertexId, f64)> = Vec::new();
        let mut negatives: Vec<(VertexId, f64)> = Vec::new();
        let mut boundary: Vec<VertexId> = Vec::new();
        for (i, slot) in self.vertices.iter().enumerate() {
            let Some(v) = slot else { continue };
            let margin = h.eval(&v.point);
            match h.classify(&v.point, eps) {
                Sign::Positive => positives.push((VertexId(i), margin)),
                Sign::Negative => negatives.push((VertexId(i), margin)),
                Sign::Boundary => boundary.push(VertexId(i)),
            }
        }

        // Steps 2–3: boundary vertices survive with the new incidence; each
        // adjacent positive/negative pair yields the cut point where h
        // vanishes on the segment between them.
        let mut spawned: Vec<Vertex> = Vec::new();
        if !negatives.is_empty() {
            let live_incidence: Vec<(VertexId, &[usize])> = self
                .vertices
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.as_ref().map(|v| (VertexId(i), v.incident.as_slice())))
                .collect();
            for &(p_id, hp) in &positives {
                let Some(pv) = self.vertex(p_id) else { continue };
                for &(n_id, hn) in &negatives {
                    let Some(nv) = self.vertex(n_id) else { continue };
                    let is_edge = adjacent(
                        &self.cfg,
                        &self.hyperplanes,
                        &live_incidence,
                        (p_id, &pv.incident),
                        (n_id, &nv.incident),
                    )?;
                    if !is_edge {
                        continue;
                    }
                    // The classification bands keep the denominator away
                    // from zero: hp >= eps and hn <= -eps.
                    debug_assert!(hp - hn >= eps);
                    let t = (hp / (hp - hn)).clamp(0.0, 1.0);
                    let point = &pv.point + (&nv.point - &pv.point) * t;
                    let mut incident = common_incidence(&pv.incident, &nv.incident);
                    incident.push(idx);
                    // Degenerate inputs can reach the same cut point through
                    // several pairs; merge instead of duplicating.
                    if let Some(existing) =
                        spawned.iter_mut().find(|w| eq_eps(&w.point, &point, eps))
                    {
                        existing.incident = merge_sorted(&existing.incident, &incident);
                        continue;
                    }
                    spawned.push(Vertex::new(point, incident));
                }
            }
        }

        // Steps 4–5: apply the collected update.
        for id in &boundary {
            if let Some(v) = self.vertices[id.0].as_mut() {
                v.incident.push(idx);
            }
        }
        for (id, _) in &negatives {
            self.vertices[id.0] = None;
        }
        let mut created = Vec::with_capacity(spawned.len());
        for v in spawned {
            created.push(VertexId(self.vertices.len()));
            self.vertices.push(Some(v));
        }
        self.hyperplanes.push(h);

        debug!(
            hyperplane = idx,
            removed = negatives.len(),
            created = created.len(),
            "inserted halfspace"
        );
        #[cfg(debug_assertions)]
        self.debug_check_containment();
        Ok(created)
    }

    /// Lexicographically-least unprocessed vertex, marked dequeued so it is
    /// handed out exactly once. Returns `None` when the queue is empty.
    pub fn next_pending(&mut self) -> Option<VertexId> {
        let eps = self.cfg.epsilon;
        let mut best: Option<(usize, &DVector<f64>)> = None;
        for (i, slot) in self.vertices.iter().enumerate() {
            let Some(v) = slot else { continue };
            if !v.is_pending() || v.dequeued {
                continue;
            }
            match best {
                None => best = Some((i, &v.point)),
                Some((_, bp)) => {
                    if lex_cmp(&v.point, bp, eps) == std::cmp::Ordering::Less {
                        best = Some((i, &v.point));
                    }
                }
            }
        }
        let id = best.map(|(i, _)| VertexId(i))?;
        if let Some(v) = self.vertices[id.0].as_mut() {
            v.dequeued = true;
        }
        Some(id)
    }

    /// Demote a vertex out of the pending set without deleting it.
    pub fn mark_processed(&mut self, id: VertexId) {
        if let Some(v) = self.vertices.get_mut(id.0).and_then(|s| s.as_mut()) {
            v.status = VertexStatus::Processed;
        }
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0).and_then(|s| s.as_ref())
    }

    #[inline]
    pub fn num_hyperplanes(&self) -> usize {
        self.hyperplanes.len()
    }

    /// Count of live vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.iter().flatten().count()
    }

    #[inline]
    pub fn hyperplanes(&self) -> &[Hyperplane] {
        &self.hyperplanes
    }

    /// Live vertices with their handles, in slab order.
    pub fn live_vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|v| (VertexId(i), v)))
    }

    #[inline]
    pub fn cfg(&self) -> &Cfg {
        &self.cfg
    }

    #[cfg(debug_assertions)]
    fn debug_check_containment(&self) {
        // Clamped cut points can sit a few ulps outside; allow a loose band.
        let tol = self.cfg.epsilon * 64.0;
        for (id, v) in self.live_vertices() {
            for (j, h) in self.hyperplanes.iter().enumerate() {
                debug_assert!(
                    h.satisfies_eps(&v.point, tol),
                    "vertex {id:?} violates hyperplane {j}: {}",
                    h.eval(&v.point)
                );
            }
        }
    }
}

fn check_dimension(expected: usize, h: &Hyperplane) -> Result<(), EnumerationError> {
    if h.dimension() != expected {
        return Err(EnumerationError::InvalidDimension {
            expected,
            got: h.dimension(),
        });
    }
    Ok(())
}

/// Merge two sorted index lists, deduplicating.
fn merge_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let next = match (a.get(i), b.get(j)) {
            (Some(&x), Some(&y)) if x < y => {
                i += 1;
                x
            }
            (Some(&x), Some(&y)) if x > y => {
                j += 1;
                y
            }
            (Some(&x), Some(_)) => {
                i += 1;
                j += 1;
                x
            }
            (Some(&x), None) => {
                i += 1;
                x
            }
            (None, Some(&y)) => {
                j += 1;
                y
            }
            (None, None) => break,
        };
        if out.last() != Some(&next) {
            out.push(next);
        }
    }
    out
}

/// k-subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    loop {
        out.push(idxs.clone());
        let mut i = k;
        while i > 0 && idxs[i - 1] == i - 1 + n - k {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        idxs[i - 1] += 1;
        for j in i..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}
