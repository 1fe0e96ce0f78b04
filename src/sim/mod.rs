//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Scheduling by comparing a caller-supplied monotonic clock against stored
//!   absolute deadlines (the sim never reads a clock or sleeps)
//! - Seeded RNG only
//! - Discrete grid cells for all occupancy/collision/scoring decisions;
//!   continuous positions are derived for rendering only
//! - No rendering or platform dependencies

pub mod food;
pub mod grid;
pub mod obstacle;
pub mod segment;
pub mod snake;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use food::{Food, FoodKind};
pub use grid::{Dir, in_interior, random_interior_cell};
pub use obstacle::Obstacle;
pub use segment::Segment;
pub use snake::Snake;
pub use snapshot::{FoodPose, FrameSnapshot, ObstaclePose, SegmentPose};
pub use state::{Difficulty, GamePhase, GameState};
pub use tick::{DirectionInput, TickInput, tick};
