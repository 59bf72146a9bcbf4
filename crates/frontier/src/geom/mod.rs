//! Numeric primitives (points, hyperplanes, tolerances).
//!
//! Purpose
//! - Provide the value types every other component builds on: runtime-D
//!   points (`DVector<f64>`), halfspaces `n·x >= c`, and the single `Cfg`
//!   carrying dimension and epsilon.
//! - Keep comparators explicit (eps as argument) and deterministic.
//!
//! Code cross-refs: `enumerate::VertexEnumerator`, `scalarize::Variant`.

pub mod point;
mod types;

pub use types::{Cfg, Hyperplane, Sign};

#[cfg(test)]
mod tests;
