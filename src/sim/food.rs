//! Timed collectibles
//!
//! Food kinds form a closed variant carrying the whole effect table: spawn
//! weight, score value, lifetime and tint. Spawning samples free interior
//! cells with a bounded retry budget so a pathologically full board skips the
//! cycle instead of spinning.

use glam::{IVec3, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::random_interior_cell;
use super::obstacle::Obstacle;
use super::snake::Snake;
use crate::consts::{FOOD_SPIN_PER_FRAME, MAX_SPAWN_ATTEMPTS};

/// Food variety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Normal,
    Golden,
    Speed,
    Slow,
    Poison,
}

impl FoodKind {
    /// Score awarded on consumption
    pub const fn score(self) -> u32 {
        match self {
            FoodKind::Normal => 1,
            _ => 3,
        }
    }

    /// Seconds before an uneaten food despawns
    pub const fn duration(self) -> f64 {
        match self {
            FoodKind::Slow => 10.0,
            _ => 8.0,
        }
    }

    /// Color the snake takes on while the effect tint lasts
    pub fn tint(self) -> Option<Vec3> {
        match self {
            FoodKind::Normal => None,
            FoodKind::Golden => Some(Vec3::new(0.9, 0.8, 0.1)),
            FoodKind::Speed => Some(Vec3::new(0.0, 0.0, 1.0)),
            FoodKind::Slow => Some(Vec3::new(0.6, 0.2, 0.8)),
            FoodKind::Poison => Some(Vec3::new(0.0, 1.0, 0.0)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodKind::Normal => "Normal",
            FoodKind::Golden => "Golden",
            FoodKind::Speed => "Speed",
            FoodKind::Slow => "Slow",
            FoodKind::Poison => "Poison",
        }
    }

    /// Weighted draw: 60% Normal, 20% Golden, 10% Speed, 5% Slow, 5% Poison
    pub fn sample(rng: &mut impl Rng) -> Self {
        let roll: f32 = rng.random();
        if roll < 0.6 {
            FoodKind::Normal
        } else if roll < 0.8 {
            FoodKind::Golden
        } else if roll < 0.9 {
            FoodKind::Speed
        } else if roll < 0.95 {
            FoodKind::Slow
        } else {
            FoodKind::Poison
        }
    }
}

/// A timed collectible on the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub cell: IVec3,
    pub kind: FoodKind,
    /// Absolute time the food appeared
    pub spawn_time: f64,
    /// Lifetime in seconds
    pub duration: f64,
    pub active: bool,
    /// Presentation spin in degrees, no gameplay meaning
    pub rotation: f32,
}

impl Food {
    /// Spawn a food at a free interior cell, or skip this cycle if none is
    /// found within the retry budget.
    pub fn spawn(
        rng: &mut impl Rng,
        snake: &Snake,
        obstacles: &[Obstacle],
        foods: &[Food],
        now: f64,
    ) -> Option<Self> {
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let cell = random_interior_cell(rng);
            if snake.occupies(cell) {
                continue;
            }
            if obstacles.iter().any(|o| o.covers_cell(cell)) {
                continue;
            }
            if foods.iter().any(|f| f.active && f.cell == cell) {
                continue;
            }
            let kind = FoodKind::sample(rng);
            return Some(Self {
                cell,
                kind,
                spawn_time: now,
                duration: kind.duration(),
                active: true,
                rotation: rng.random_range(0.0..360.0),
            });
        }
        log::warn!("food spawn: no free cell after {MAX_SPAWN_ATTEMPTS} attempts, skipping");
        None
    }

    /// Per-frame presentation update
    pub fn update(&mut self) {
        if self.active {
            self.rotation = (self.rotation + FOOD_SPIN_PER_FRAME) % 360.0;
        }
    }

    /// Whether the food outlived its duration without being eaten
    pub fn expired(&self, now: f64) -> bool {
        self.active && now > self.spawn_time + self.duration
    }
}
