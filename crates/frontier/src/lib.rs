//! Pareto frontier computation via the generic dual (Benson-type)
//! algorithm.
//!
//! The crate is built around one engine: an online vertex enumerator that
//! maintains the exact vertex set of a growing intersection of halfspaces
//! (`enumerate`). A thin interpretation layer (`scalarize::Variant`) reads
//! those vertices either as weight vectors or as objective points, and the
//! driver (`driver`) alternates between the enumerator and a
//! problem-specific scalarization oracle until no pending vertex remains.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod api;
pub mod driver;
pub mod enumerate;
pub mod geom;
pub mod scalarize;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::driver::{DriverError, DriverState, DualBensonDriver, Frontier, FrontierEntry};
    pub use crate::enumerate::{EnumerationError, VertexEnumerator, VertexId, VertexStatus};
    pub use crate::geom::{Cfg, Hyperplane, Sign};
    pub use crate::scalarize::{
        Evaluation, OracleFailure, PointSetOracle, ReciprocalOracle, ScalarizationOracle, Variant,
    };
    pub use nalgebra::DVector;
}
