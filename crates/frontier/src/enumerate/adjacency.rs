//! Combinatorial adjacency test with a rank fallback for degenerate ties.
//!
//! Two vertices are adjacent when their incidence sets meet in exactly
//! D−1 hyperplanes and no third vertex is incident to a strict superset of
//! that intersection. Vertices incident to more than D hyperplanes make the
//! counting test ambiguous; there the rank of the common normals decides,
//! with a bounded number of tolerance re-draws before giving up.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Cfg, Hyperplane};

use super::types::{EnumerationError, VertexId};

/// Sorted-list intersection of two incidence sets.
pub(crate) fn common_incidence(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[inline]
fn is_superset(sup: &[usize], sub: &[usize]) -> bool {
    let mut i = 0;
    for &x in sub {
        loop {
            if i >= sup.len() {
                return false;
            }
            match sup[i].cmp(&x) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Equal => {
                    i += 1;
                    break;
                }
                std::cmp::Ordering::Greater => return false,
            }
        }
    }
    true
}

/// Decide adjacency of `(first, second)` given the incidence sets of all
/// current vertices.
///
/// `incidences` must cover every live vertex (including the ones slated for
/// removal); the witness test runs against it.
pub(crate) fn adjacent(
    cfg: &Cfg,
    hyperplanes: &[Hyperplane],
    incidences: &[(VertexId, &[usize])],
    first: (VertexId, &[usize]),
    second: (VertexId, &[usize]),
) -> Result<bool, EnumerationError> {
    let d = cfg.dimension;
    let common = common_incidence(first.1, second.1);
    if common.len() + 1 < d {
        return Ok(false);
    }

    // Witness test: a third vertex incident to all common hyperplanes (and
    // more) means the pair spans a higher-dimensional face, not an edge.
    for &(id, inc) in incidences {
        if id == first.0 || id == second.0 {
            continue;
        }
        if inc.len() > common.len() && is_superset(inc, &common) {
            return Ok(false);
        }
    }

    if common.len() == d - 1 {
        return Ok(true);
    }

    // Degenerate tie: more than D−1 common hyperplanes. The pair spans an
    // edge iff the common normals have rank exactly D−1.
    rank_resolves_edge(cfg, hyperplanes, &common, first.0, second.0)
}

fn rank_resolves_edge(
    cfg: &Cfg,
    hyperplanes: &[Hyperplane],
    common: &[usize],
    first: VertexId,
    second: VertexId,
) -> Result<bool, EnumerationError> {
    let d = cfg.dimension;
    let m = DMatrix::from_fn(common.len(), d, |r, c| hyperplanes[common[r]].normal[c]);
    let sv = m.singular_values();

    let mut rng = tie_rng(hyperplanes.len() as u64, first.0 as u64, second.0 as u64);
    let mut tol = cfg.epsilon;
    for _ in 0..cfg.perturbation_attempts.max(1) {
        // A singular value inside the band cannot be told from noise at this
        // tolerance; re-draw the tolerance and retry.
        let ambiguous = sv.iter().any(|&s| s >= tol / 8.0 && s < tol * 8.0);
        if !ambiguous {
            let rank = sv.iter().filter(|&&s| s >= tol * 8.0).count();
            return Ok(rank == d - 1);
        }
        tol *= rng.gen_range(0.25..4.0);
    }
    Err(EnumerationError::DegenerateInput {
        first,
        second,
        attempts: cfg.perturbation_attempts.max(1),
    })
}

/// Deterministic RNG for the tolerance re-draws, keyed on the arena state
/// and the pair under test (SplitMix64-style mixing).
fn tie_rng(a: u64, b: u64, c: u64) -> StdRng {
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }
    let k = mix(a ^ mix(b.wrapping_add(0x9e3779b97f4a7c15)) ^ mix(c.rotate_left(17)));
    StdRng::seed_from_u64(k)
}
