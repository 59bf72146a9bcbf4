//! Data types for the vertex enumerator.
//!
//! Kept small and explicit: vertices live in an append-only slab and refer
//! to hyperplanes by insertion index, never by reference.

use nalgebra::DVector;
use thiserror::Error;

/// Opaque handle into the enumerator's vertex slab. Slots are never reused,
/// so a handle stays valid (and may turn dead) for the life of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Lifecycle tag of a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexStatus {
    Pending,
    Processed,
}

/// A polytope vertex: its point, the sorted list of hyperplane indices it
/// lies on, and its status.
///
/// Invariant: `incident` is sorted, has at least `dimension` entries, and
/// the vertex satisfies every inserted hyperplane within eps (equality on
/// the incident ones).
#[derive(Clone, Debug)]
pub struct Vertex {
    pub point: DVector<f64>,
    pub incident: Vec<usize>,
    pub status: VertexStatus,
    /// Already handed out by `next_pending`; kept out of the queue.
    pub(crate) dequeued: bool,
}

impl Vertex {
    pub(crate) fn new(point: DVector<f64>, incident: Vec<usize>) -> Self {
        debug_assert!(incident.windows(2).all(|w| w[0] < w[1]), "incidence not sorted");
        Self {
            point,
            incident,
            status: VertexStatus::Pending,
            dequeued: false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == VertexStatus::Pending
    }
}

/// Failures of the enumerator. Nothing here is silently recovered: every
/// variant halts the run with enough context to reproduce it.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// A hyperplane or point does not match the configured dimension.
    /// Programming error; fails fast and is never retried.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    /// Fewer bounding hyperplanes than the dimension requires.
    #[error("need at least {needed} bounding hyperplanes, got {got}")]
    InsufficientHyperplanes { needed: usize, got: usize },

    /// The bounding hyperplanes admit no vertex at all.
    #[error("bounding hyperplanes do not intersect in any vertex")]
    EmptyInitialRegion,

    /// The adjacency rank test stayed ambiguous through every perturbation
    /// attempt.
    #[error(
        "adjacency tie between vertices {first:?} and {second:?} unresolved \
         after {attempts} perturbation attempts"
    )]
    DegenerateInput {
        first: VertexId,
        second: VertexId,
        attempts: usize,
    },
}
