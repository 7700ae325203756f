//! Core types and definitions for the X-Machina simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity data, commands, state snapshots, events, tuning and constants.
//! It has no dependency on a renderer or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
