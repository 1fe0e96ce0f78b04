//! One snake body unit
//!
//! A segment always has a committed grid cell (its target) and remembers the
//! cell it committed from. `progress` measures how far the segment has
//! visually travelled between the two; the rendered pose is a straight lerp,
//! so a segment with `progress == 1` sits exactly on its cell and only then
//! may the next grid step be committed.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::grid::Dir;
use crate::grid_to_world;

/// One body unit of the snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Cell this segment is moving away from
    pub from_cell: IVec3,
    /// Heading it had at `from_cell`
    pub from_dir: Dir,
    /// Committed cell (all occupancy and collision math uses this)
    pub cell: IVec3,
    /// Committed heading
    pub dir: Dir,
    /// Fraction of the visual transition completed, in [0, 1]
    pub progress: f32,
}

impl Segment {
    /// A segment at rest on `cell`, fully arrived
    pub fn at(cell: IVec3, dir: Dir) -> Self {
        Self {
            from_cell: cell,
            from_dir: dir,
            cell,
            dir,
            progress: 1.0,
        }
    }

    /// Commit a step toward a new cell; the old target becomes the lerp origin
    pub fn begin_step(&mut self, cell: IVec3, dir: Dir) {
        self.from_cell = self.cell;
        self.from_dir = self.dir;
        self.cell = cell;
        self.dir = dir;
        self.progress = 0.0;
    }

    /// Advance the visual transition, clamped so progress never overshoots 1
    pub fn animate(&mut self, step: f32) {
        if self.progress < 1.0 {
            self.progress = (self.progress + step).min(1.0);
        }
    }

    /// Whether the segment sits exactly on its committed cell
    #[inline]
    pub fn arrived(&self) -> bool {
        self.progress >= 1.0
    }

    /// Interpolated world-space position for rendering
    pub fn position(&self) -> Vec3 {
        grid_to_world(self.from_cell).lerp(grid_to_world(self.cell), self.progress)
    }

    /// Interpolated facing for rendering
    pub fn direction(&self) -> Vec3 {
        self.from_dir.vec().lerp(self.dir.vec(), self.progress)
    }
}
