//! Drone AI for X-Machina.
//!
//! Implements the patrol/pursuit state machine with its hysteresis band,
//! per-tick steering, and role-driven spawn placement.

pub mod fsm;
pub mod placement;

pub use xmachina_core as core;

#[cfg(test)]
mod tests;
