//! Spatial queries for X-Machina.
//!
//! View frustum extraction, the per-tick visibility gate that decides which
//! pooled entities get simulated, and the collision tests shared by the
//! gameplay systems. Pure functions over core types.

pub mod collision;
pub mod frustum;
pub mod visibility;

pub use collision::BuildingQueries;
pub use frustum::Frustum;
pub use visibility::VisibilityGate;

#[cfg(test)]
mod tests;
