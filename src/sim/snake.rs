//! The snake: an ordered segment chain with timed status effects
//!
//! Movement is two-layered: `advance` runs at the move-tick cadence and pushes
//! every segment's interpolation forward, but a grid step only commits once
//! the head has fully arrived on its cell. Committed cells are the sole input
//! to growth, consumption and collision, so visual smoothing can never change
//! a gameplay outcome.
//!
//! Timed effects store absolute deadlines. Re-eating an effect food before
//! expiry simply pushes the deadline out; the tint reverts only once its
//! deadline has passed and no speed effect is still running.

use glam::{IVec3, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::FoodKind;
use super::grid::{self, Dir};
use super::obstacle::Obstacle;
use super::segment::Segment;
use crate::consts::{COLOR_EFFECT_DURATION, PROGRESS_PER_MOVE, SPEED_EFFECT_DURATION};

/// The player's snake, head at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    segments: Vec<Segment>,
    /// Heading applied at the next committed step
    direction: Dir,
    /// Segments still owed by growth effects, appended one per committed step
    grow_pending: u32,
    base_color: Vec3,
    current_color: Vec3,
    speed_multiplier: f32,
    color_deadline: f64,
    speed_deadline: f64,
    length: usize,
}

impl Snake {
    /// A fresh snake at the origin facing +X, with two segments of growth owed
    pub fn new(rng: &mut impl Rng) -> Self {
        let base_color = Vec3::new(
            rng.random_range(0.2..0.8),
            rng.random_range(0.2..0.8),
            rng.random_range(0.2..0.8),
        );
        Self {
            segments: vec![Segment::at(IVec3::ZERO, Dir::PosX)],
            direction: Dir::PosX,
            grow_pending: 2,
            base_color,
            current_color: base_color,
            speed_multiplier: 1.0,
            color_deadline: 0.0,
            speed_deadline: 0.0,
            length: 1,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pending heading for the next committed step
    pub fn heading(&self) -> Dir {
        self.direction
    }

    /// Committed cell of the head segment
    pub fn head_cell(&self) -> IVec3 {
        self.segments[0].cell
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn grow_pending(&self) -> u32 {
        self.grow_pending
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn base_color(&self) -> Vec3 {
        self.base_color
    }

    pub fn current_color(&self) -> Vec3 {
        self.current_color
    }

    /// Whether any segment's committed cell is `cell`
    pub fn occupies(&self, cell: IVec3) -> bool {
        self.segments.iter().any(|s| s.cell == cell)
    }

    /// Request a heading change; reversing straight into the body is ignored
    pub fn steer(&mut self, dir: Dir) {
        if dir != self.direction.opposite() {
            self.direction = dir;
        }
    }

    /// Owe `amount` more segments of growth
    pub fn grow(&mut self, amount: u32) {
        self.grow_pending += amount;
    }

    /// One move tick: expire effects, push interpolation, and commit a grid
    /// step once the head has arrived. Returns whether a step committed.
    pub fn advance(&mut self, now: f64) -> bool {
        if now > self.speed_deadline {
            self.speed_multiplier = 1.0;
        }
        if now > self.color_deadline && self.current_color != self.base_color {
            let speed_active = self.speed_multiplier != 1.0 && now < self.speed_deadline;
            if !speed_active {
                self.current_color = self.base_color;
            }
        }

        let step = PROGRESS_PER_MOVE * self.speed_multiplier;
        for segment in &mut self.segments {
            segment.animate(step);
        }
        if !self.segments[0].arrived() {
            return false;
        }

        // Head takes a new cell; every follower steps into its leader's old one
        let mut leader_cell = self.segments[0].cell;
        let mut leader_dir = self.segments[0].dir;
        let new_head = leader_cell + self.direction.ivec();
        self.segments[0].begin_step(new_head, self.direction);
        for segment in &mut self.segments[1..] {
            let vacated_cell = segment.cell;
            let vacated_dir = segment.dir;
            segment.begin_step(leader_cell, leader_dir);
            leader_cell = vacated_cell;
            leader_dir = vacated_dir;
        }

        if self.grow_pending > 0 {
            self.segments.push(Segment::at(leader_cell, leader_dir));
            self.grow_pending -= 1;
            self.length += 1;
        }
        debug_assert_eq!(self.length, self.segments.len());
        true
    }

    /// Apply the effect of a consumed food
    pub fn apply_food_effect(&mut self, kind: FoodKind, now: f64) {
        if let Some(tint) = kind.tint() {
            self.current_color = tint;
        }
        match kind {
            FoodKind::Normal => self.grow(1),
            FoodKind::Golden => {
                self.grow(3);
                self.color_deadline = now + COLOR_EFFECT_DURATION;
            }
            FoodKind::Speed => {
                self.speed_multiplier = 2.0;
                self.speed_deadline = now + SPEED_EFFECT_DURATION;
            }
            FoodKind::Slow => {
                self.speed_multiplier = 0.5;
                self.speed_deadline = now + SPEED_EFFECT_DURATION;
            }
            FoodKind::Poison => {
                if self.length > 3 {
                    self.segments.truncate(self.segments.len() - 2);
                    self.length -= 2;
                }
                self.color_deadline = now + COLOR_EFFECT_DURATION;
            }
        }
        debug_assert_eq!(self.length, self.segments.len());
    }

    /// Whether the snake is dead on its committed cells: out of the interior,
    /// touching an active obstacle, or head folded onto its own body.
    pub fn check_collision(&self, obstacles: &[Obstacle]) -> bool {
        for segment in &self.segments {
            if !grid::in_interior(segment.cell) {
                return true;
            }
            if obstacles.iter().any(|o| o.hits(segment.cell)) {
                return true;
            }
        }
        let head = self.segments[0].cell;
        self.segments[1..].iter().any(|s| s.cell == head)
    }

    #[cfg(test)]
    pub(crate) fn with_segments(segments: Vec<Segment>, direction: Dir) -> Self {
        let length = segments.len();
        Self {
            segments,
            direction,
            grow_pending: 0,
            base_color: Vec3::splat(0.5),
            current_color: Vec3::splat(0.5),
            speed_multiplier: 1.0,
            color_deadline: 0.0,
            speed_deadline: 0.0,
            length,
        }
    }
}
