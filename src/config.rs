// Simulation parameters
//
// Every value here is fixed at start-up. There is no config file and no CLI;
// the struct exists so the active parameters can be logged and so tests can
// build worlds with other bounds.

use crate::error::SimError;
use sdl2::pixels::Color;
use serde::Serialize;
use std::time::Duration;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const TARGET_FPS: u32 = 60;
pub const NPC_COUNT: usize = 10;
pub const NPC_SIZE: u32 = 10;
pub const NPC_SPEED: f32 = 100.0; // pixels per second

const WINDOW_TITLE: &str = "NPC Chaos Simulator - Lite";
const BACKGROUND_RGB: (u8, u8, u8) = (0, 0, 0);
const NPC_RGB: (u8, u8, u8) = (0, 200, 255);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub npc_count: usize,
    pub npc_size: u32,
    pub npc_speed: f32,
    pub title: String,
    pub background: (u8, u8, u8),
    pub npc_color: (u8, u8, u8),
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: TARGET_FPS,
            npc_count: NPC_COUNT,
            npc_size: NPC_SIZE,
            npc_speed: NPC_SPEED,
            title: WINDOW_TITLE.to_string(),
            background: BACKGROUND_RGB,
            npc_color: NPC_RGB,
        }
    }
}

impl SimConfig {
    /// Check that the parameters describe a window an NPC can move inside
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "window must have a non-zero size (got {}x{})",
                self.width, self.height
            )));
        }

        if self.fps == 0 {
            return Err(SimError::InvalidConfig("fps must be positive".to_string()));
        }

        if self.npc_size == 0 || self.npc_size >= self.width.min(self.height) {
            return Err(SimError::InvalidConfig(format!(
                "npc size {} does not fit a {}x{} window",
                self.npc_size, self.width, self.height
            )));
        }

        if !self.npc_speed.is_finite() || self.npc_speed < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "npc speed must be finite and non-negative (got {})",
                self.npc_speed
            )));
        }

        Ok(())
    }

    /// Time budget for one frame at the target rate
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Right-hand reflection threshold (`WIDTH - size`)
    pub fn max_x(&self) -> f32 {
        self.width as f32 - self.npc_size as f32
    }

    /// Bottom reflection threshold (`HEIGHT - size`)
    pub fn max_y(&self) -> f32 {
        self.height as f32 - self.npc_size as f32
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::RGB(r, g, b)
    }

    pub fn npc_color(&self) -> Color {
        let (r, g, b) = self.npc_color;
        Color::RGB(r, g, b)
    }
}
