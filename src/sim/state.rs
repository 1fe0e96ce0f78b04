//! Game state and session lifecycle
//!
//! `GameState` exclusively owns every mutable piece of a session: the snake,
//! foods, obstacles, score, phase and the spawn/move schedule marks. The
//! driver mutates it only through `tick`; the renderer only reads snapshots.

use glam::IVec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::random_interior_cell;
use super::obstacle::Obstacle;
use super::snake::Snake;
use crate::consts::{FOOD_SPAWN_DELAY_MAX, FOOD_SPAWN_DELAY_MIN, GRID_SIZE, MAX_SPAWN_ATTEMPTS};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty menu, before the first run starts
    SelectingDifficulty,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended, waiting for a restart
    GameOver,
}

impl GamePhase {
    pub fn is_paused(&self) -> bool {
        matches!(self, GamePhase::Paused)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

/// Session difficulty, fixed at reset; shapes the obstacle population only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Interior obstacles generated at reset
    pub const fn obstacle_count(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 10,
            Difficulty::Hard => 5,
        }
    }

    /// Whether interior obstacles patrol
    pub const fn obstacles_move(self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    /// Step through the menu by `delta`, clamped at the ends
    pub fn offset(self, delta: i32) -> Self {
        let index = Self::ALL.iter().position(|d| *d == self).unwrap_or(0) as i32;
        let index = (index + delta).clamp(0, Self::ALL.len() as i32 - 1);
        Self::ALL[index as usize]
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub snake: Snake,
    pub foods: Vec<Food>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    /// Time of the last snake move tick
    pub last_move: f64,
    /// Time the next food may spawn
    pub next_food_spawn: f64,
    /// Time of the last obstacle motion update
    pub last_obstacle_move: f64,
}

impl GameState {
    /// A new session at the difficulty menu
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(&mut rng);
        Self {
            seed,
            rng,
            snake,
            foods: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::SelectingDifficulty,
            difficulty: Difficulty::Easy,
            last_move: 0.0,
            next_food_spawn: 0.0,
            last_obstacle_move: 0.0,
        }
    }

    /// Start (or restart) a run at the current difficulty
    pub fn reset(&mut self, now: f64) {
        self.snake = Snake::new(&mut self.rng);
        self.foods.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.last_move = now;
        self.next_food_spawn =
            now + self.rng.random_range(FOOD_SPAWN_DELAY_MIN..FOOD_SPAWN_DELAY_MAX);
        self.last_obstacle_move = now;
        self.generate_obstacles();
        log::info!(
            "run started: difficulty {}, {} obstacles",
            self.difficulty.as_str(),
            self.obstacles.len()
        );
    }

    /// Rebuild the obstacle field: the perimeter wall plus the difficulty's
    /// interior population, placed on free cells.
    fn generate_obstacles(&mut self) {
        self.obstacles.clear();
        let half = GRID_SIZE / 2;

        for x in -half..=half {
            for z in [-half, half] {
                self.obstacles
                    .push(Obstacle::new(IVec3::new(x, 0, z), self.difficulty, true, &mut self.rng));
            }
        }
        for z in (-half + 1)..half {
            for x in [-half, half] {
                self.obstacles
                    .push(Obstacle::new(IVec3::new(x, 0, z), self.difficulty, true, &mut self.rng));
            }
        }

        for _ in 0..self.difficulty.obstacle_count() {
            let mut placed = false;
            for _ in 0..MAX_SPAWN_ATTEMPTS {
                let cell = random_interior_cell(&mut self.rng);
                if cell == IVec3::ZERO || self.snake.occupies(cell) {
                    continue;
                }
                self.obstacles
                    .push(Obstacle::new(cell, self.difficulty, false, &mut self.rng));
                placed = true;
                break;
            }
            if !placed {
                log::warn!(
                    "obstacle placement: no free cell after {MAX_SPAWN_ATTEMPTS} attempts, skipping"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_menu_offsets_clamp() {
        assert_eq!(Difficulty::Easy.offset(1), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.offset(1), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.offset(1), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.offset(-1), Difficulty::Easy);
        assert_eq!(Difficulty::Hard.offset(-2), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("MED"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_new_session_starts_at_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::SelectingDifficulty);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_reset_builds_perimeter_and_interior_obstacles() {
        // Perimeter of a (GRID_SIZE+1)^2 ring of cells
        let wall_cells = (GRID_SIZE as usize + 1) * 2 + (GRID_SIZE as usize - 1) * 2;

        for (difficulty, interior) in [
            (Difficulty::Easy, 0),
            (Difficulty::Medium, 10),
            (Difficulty::Hard, 5),
        ] {
            let mut state = GameState::new(9);
            state.difficulty = difficulty;
            state.reset(0.0);
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.obstacles.len(), wall_cells + interior);
            assert_eq!(
                state.obstacles.iter().filter(|o| o.is_boundary).count(),
                wall_cells
            );
            for obstacle in state.obstacles.iter().filter(|o| !o.is_boundary) {
                assert_ne!(obstacle.position.as_ivec3(), IVec3::ZERO);
                assert!(!state.snake.occupies(obstacle.position.as_ivec3()));
                assert_eq!(
                    obstacle.move_dir.length() > 0.0,
                    difficulty.obstacles_move()
                );
            }
        }
    }

    #[test]
    fn test_reset_schedules_food_and_move() {
        let mut state = GameState::new(5);
        state.reset(100.0);
        assert_eq!(state.last_move, 100.0);
        assert!(state.next_food_spawn >= 100.0 + FOOD_SPAWN_DELAY_MIN);
        assert!(state.next_food_spawn <= 100.0 + FOOD_SPAWN_DELAY_MAX);
    }
}
