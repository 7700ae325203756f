//! Simulation engine for X-Machina.
//!
//! Owns the entity pools and gameplay systems, runs them once per frame,
//! and produces GameStateSnapshots for the renderer and UI.

pub mod engine;
pub mod pool;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use pool::{EntityPool, Poolable};
pub use xmachina_core as core;
