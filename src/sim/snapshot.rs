//! Read-only per-frame view for the renderer
//!
//! Built after `tick` returns; carries interpolated poses and presentation
//! values only. Nothing in here feeds back into the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::food::FoodKind;
use super::state::{Difficulty, GamePhase, GameState};
use crate::grid_to_world;

/// Interpolated pose of one snake segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentPose {
    pub position: Vec3,
    pub direction: Vec3,
}

/// An active food as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPose {
    pub position: Vec3,
    pub kind: FoodKind,
    /// Spin in degrees
    pub rotation: f32,
}

/// An active obstacle as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePose {
    pub position: Vec3,
    pub is_boundary: bool,
    /// Patrol heading, zero for stationary obstacles
    pub move_dir: Vec3,
    /// Brightness oscillation in [0, 1]
    pub pulse: f32,
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub score: u32,
    pub snake_length: usize,
    pub snake_color: Vec3,
    pub segments: Vec<SegmentPose>,
    pub foods: Vec<FoodPose>,
    pub obstacles: Vec<ObstaclePose>,
}

impl GameState {
    /// Capture the current frame for rendering
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.score,
            snake_length: self.snake.length(),
            snake_color: self.snake.current_color(),
            segments: self
                .snake
                .segments()
                .iter()
                .map(|s| SegmentPose {
                    position: s.position(),
                    direction: s.direction(),
                })
                .collect(),
            foods: self
                .foods
                .iter()
                .filter(|f| f.active)
                .map(|f| FoodPose {
                    position: grid_to_world(f.cell),
                    kind: f.kind,
                    rotation: f.rotation,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .filter(|o| o.is_active)
                .map(|o| ObstaclePose {
                    position: o.position,
                    is_boundary: o.is_boundary,
                    move_dir: o.move_dir,
                    pulse: o.pulse,
                })
                .collect(),
        }
    }
}
