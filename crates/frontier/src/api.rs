//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for project-internal code and experiments; breaking
//! changes are allowed and expected.

// Numeric primitives
pub use crate::geom::point::{dominates, eq_eps, lex_cmp};
pub use crate::geom::{Cfg, Hyperplane, Sign};
// Vertex enumeration
pub use crate::enumerate::{EnumerationError, Vertex, VertexEnumerator, VertexId, VertexStatus};
// Scalarization seam and variants
pub use crate::scalarize::{
    Evaluation, OracleFailure, PointSetOracle, ReciprocalOracle, ScalarizationOracle, Variant,
};
// Driver
pub use crate::driver::{
    DriverError, DriverState, DualBensonDriver, Frontier, FrontierEntry, RunStats,
};
