//! Voxel Snake - a 3D grid snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid logic, interpolation, collisions, game state)
//! - `settings`: Control-scheme preferences for the surrounding app
//!
//! Rendering, windowing and input decoding live outside this crate; the sim
//! consumes a per-frame input struct and exposes a per-frame snapshot.

pub mod settings;
pub mod sim;

pub use settings::{ControlScheme, Settings};

use glam::{IVec3, Vec3};

/// Game configuration constants
pub mod consts {
    /// Cells per side of the cubic play volume, centered at the origin
    pub const GRID_SIZE: i32 = 20;
    /// World-space edge length of one grid cell
    pub const CELL_SIZE: f32 = 1.0;

    /// Seconds between snake move ticks at speed multiplier 1.0
    pub const MOVE_INTERVAL: f64 = 0.15;
    /// Interpolation progress gained per move tick (scaled by speed multiplier)
    pub const PROGRESS_PER_MOVE: f32 = 0.5;

    /// Seconds a speed or slow effect stays active
    pub const SPEED_EFFECT_DURATION: f64 = 5.0;
    /// Seconds an effect tint stays on the snake
    pub const COLOR_EFFECT_DURATION: f64 = 5.0;

    /// Maximum simultaneously active foods
    pub const MAX_FOODS: usize = 5;
    /// Bounds of the uniform draw for the next food spawn delay (seconds)
    pub const FOOD_SPAWN_DELAY_MIN: f64 = 1.0;
    pub const FOOD_SPAWN_DELAY_MAX: f64 = 3.0;
    /// Presentation spin applied to each active food per frame (degrees)
    pub const FOOD_SPIN_PER_FRAME: f32 = 0.5;

    /// Seconds between obstacle motion updates
    pub const OBSTACLE_MOVE_INTERVAL: f64 = 0.02;
    /// Horizontal distance at which a cell counts as touching an obstacle
    pub const OBSTACLE_HIT_RADIUS: f32 = 0.8;

    /// Cap on random placement retries before a spawn cycle is skipped
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;
}

/// Convert a grid cell to its world-space center
#[inline]
pub fn grid_to_world(cell: IVec3) -> Vec3 {
    cell.as_vec3() * consts::CELL_SIZE
}

/// Distance between two points projected onto the XZ plane
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
