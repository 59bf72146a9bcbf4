//! Polytope vertex enumerator (online double-description update).
//!
//! Purpose
//! - Maintain the exact vertex set of a growing intersection of halfspaces,
//!   one insertion at a time, with deterministic pending-vertex order.
//! - Keep all cross-references index-based: vertices name hyperplanes by
//!   insertion index into an append-only arena, never by pointer.
//!
//! Why this design
//! - One engine serves every problem variant; the weight-space and
//!   upper-image interpretations differ only in how hyperplanes are built
//!   (see `scalarize::Variant`), not in the mechanics here.
//! - Degenerate incidence ties are resolved by a rank test with a bounded
//!   perturbation budget instead of being assumed away; an unresolved tie
//!   is a hard `DegenerateInput` error, never a silent bad vertex set.
//!
//! Code cross-refs: `geom::{Cfg, Hyperplane, point}`, `driver::DualBensonDriver`.

mod adjacency;
mod engine;
mod types;

pub use engine::VertexEnumerator;
pub use types::{EnumerationError, Vertex, VertexId, VertexStatus};
