//! Blocking cells: the perimeter wall and interior hazards
//!
//! Boundary obstacles ring the grid at `±GRID_SIZE/2` and never move.
//! Interior obstacles are stationary except under Hard difficulty, where each
//! patrols one horizontal axis around its spawn origin and reverses where the
//! patrol range or the interior ends. Collision is a horizontal proximity
//! test against committed grid cells, so a patrolling obstacle blocks the
//! cell it is currently over, not the cell it spawned in.

use glam::{IVec3, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{INTERIOR_MAX, INTERIOR_MIN};
use super::state::Difficulty;
use crate::consts::OBSTACLE_HIT_RADIUS;
use crate::{grid_to_world, horizontal_distance};

/// A static or patrolling blocking cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Current world-space position (fractional while patrolling)
    pub position: Vec3,
    /// Spawn position, the center of the patrol range
    pub origin: Vec3,
    pub is_boundary: bool,
    pub difficulty: Difficulty,
    /// Unit step along the patrol axis; zero for stationary obstacles
    pub move_dir: Vec3,
    /// Distance covered per obstacle update
    pub move_speed: f32,
    /// Maximum distance from `origin` along the patrol axis
    pub move_range: f32,
    pub is_active: bool,
    /// Presentation brightness oscillation in [0, 1], no collision meaning
    pub pulse: f32,
    pulse_speed: f32,
}

impl Obstacle {
    pub fn new(cell: IVec3, difficulty: Difficulty, is_boundary: bool, rng: &mut impl Rng) -> Self {
        let position = grid_to_world(cell);
        let mut obstacle = Self {
            position,
            origin: position,
            is_boundary,
            difficulty,
            move_dir: Vec3::ZERO,
            move_speed: 0.0,
            move_range: 0.0,
            is_active: true,
            pulse: 0.0,
            pulse_speed: rng.random_range(0.05..0.1),
        };
        if difficulty == Difficulty::Hard && !is_boundary {
            let axis = if rng.random_bool(0.5) { 0 } else { 2 };
            obstacle.move_dir[axis] = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            obstacle.move_speed = rng.random_range(0.04..0.06);
            obstacle.move_range = rng.random_range(3.0..4.0);
        }
        obstacle
    }

    /// Advance patrol motion and the presentation pulse
    pub fn update(&mut self, now: f64) {
        if self.difficulty != Difficulty::Hard || self.is_boundary || !self.is_active {
            return;
        }
        self.pulse = ((now * self.pulse_speed as f64).sin() as f32 + 1.0) / 2.0;

        for axis in [0, 2] {
            if self.move_dir[axis] == 0.0 {
                continue;
            }
            let lo = (self.origin[axis] - self.move_range).max(INTERIOR_MIN as f32);
            let hi = (self.origin[axis] + self.move_range).min(INTERIOR_MAX as f32);
            let next = self.position[axis] + self.move_dir[axis] * self.move_speed;
            if next < lo || next > hi {
                self.move_dir[axis] = -self.move_dir[axis];
            }
            self.position[axis] = next.clamp(lo, hi);
        }
    }

    /// Whether a committed grid cell is blocked by this obstacle
    pub fn hits(&self, cell: IVec3) -> bool {
        self.is_active && horizontal_distance(grid_to_world(cell), self.position) < OBSTACLE_HIT_RADIUS
    }

    /// The grid cell this obstacle currently occupies (for spawn exclusion)
    pub fn covers_cell(&self, cell: IVec3) -> bool {
        self.is_active && self.position.round().as_ivec3() == cell
    }
}
