//! Player commands and per-frame input sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! `FrameInput` is consumed every tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::CameraParams;

/// Game flow actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin the level.
    StartGame,
    Pause,
    /// Resume from Paused or LevelComplete.
    Resume,
    /// Clear every pool and build a fresh level.
    Restart,
}

/// Per-tick input from the input and camera collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Where the ship wants to be after this frame's movement.
    pub ship_position: Vec3,
    /// Ship yaw in radians (0 = facing +Z).
    pub ship_heading: f32,
    pub camera: CameraParams,
    /// Fire intent, edge-triggered by the input layer.
    pub fire: bool,
}

impl FrameInput {
    /// Input with a chase camera behind the ship and no fire intent.
    pub fn at(ship_position: Vec3, ship_heading: f32) -> Self {
        Self {
            ship_position,
            ship_heading,
            camera: CameraParams::chase(ship_position, ship_heading),
            fire: false,
        }
    }

    pub fn with_fire(mut self) -> Self {
        self.fire = true;
        self
    }

    /// Unit vector the ship's nose points along.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.ship_heading.sin(), 0.0, self.ship_heading.cos())
    }
}
