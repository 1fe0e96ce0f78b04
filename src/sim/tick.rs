//! Per-frame simulation update
//!
//! The external driver calls `tick` once per frame with a monotonic clock
//! reading in seconds. Everything time-based compares `now` against absolute
//! marks stored in the state; the sim itself never sleeps or reads a clock.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::Dir;
use super::state::{GamePhase, GameState};
use crate::consts::{
    FOOD_SPAWN_DELAY_MAX, FOOD_SPAWN_DELAY_MIN, MAX_FOODS, MOVE_INTERVAL, OBSTACLE_MOVE_INTERVAL,
};

/// A steering request, either absolute or relative to the snake's heading
///
/// Which of the two the surrounding app should produce depends on its control
/// scheme: overhead cameras map keys to absolute cardinals, a first-person
/// camera maps them to turns (see [`crate::settings::ControlScheme`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionInput {
    Absolute(Dir),
    TurnLeft,
    TurnRight,
}

impl DirectionInput {
    /// Resolve to a cardinal against the snake's pending heading
    pub fn resolve(self, heading: Dir) -> Dir {
        match self {
            DirectionInput::Absolute(dir) => dir,
            DirectionInput::TurnLeft => heading.turned_left(),
            DirectionInput::TurnRight => heading.turned_right(),
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering request for the next committed step
    pub steer: Option<DirectionInput>,
    /// Pause toggle
    pub pause: bool,
    /// Reset the run from any phase
    pub restart: bool,
    /// Difficulty menu navigation (only honored while selecting)
    pub select_delta: i32,
    /// Leave the difficulty menu and start playing
    pub confirm: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if input.restart {
        state.reset(now);
        return;
    }

    if state.phase == GamePhase::SelectingDifficulty {
        if input.select_delta != 0 {
            state.difficulty = state.difficulty.offset(input.select_delta);
        }
        if input.confirm {
            state.reset(now);
        }
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }
    if state.phase != GamePhase::Playing {
        return;
    }

    if let Some(steer) = input.steer {
        let dir = steer.resolve(state.snake.heading());
        state.snake.steer(dir);
    }

    if now - state.last_obstacle_move > OBSTACLE_MOVE_INTERVAL {
        for obstacle in &mut state.obstacles {
            obstacle.update(now);
        }
        state.last_obstacle_move = now;
    }

    if state.foods.len() < MAX_FOODS && now > state.next_food_spawn {
        if let Some(food) = Food::spawn(
            &mut state.rng,
            &state.snake,
            &state.obstacles,
            &state.foods,
            now,
        ) {
            state.foods.push(food);
        }
        state.next_food_spawn =
            now + state.rng.random_range(FOOD_SPAWN_DELAY_MIN..FOOD_SPAWN_DELAY_MAX);
    }

    for food in &mut state.foods {
        food.update();
    }
    state.foods.retain(|f| !f.expired(now));

    let move_interval = MOVE_INTERVAL / state.snake.speed_multiplier() as f64;
    if now - state.last_move > move_interval {
        let committed = state.snake.advance(now);
        state.last_move = now;
        if committed {
            resolve_step(state, now);
        }
    }
}

/// Consumption and collision for one committed grid step
fn resolve_step(state: &mut GameState, now: f64) {
    let head = state.snake.head_cell();
    let mut index = 0;
    while index < state.foods.len() {
        if state.foods[index].cell == head {
            let food = state.foods.remove(index);
            state.score += food.kind.score();
            state.snake.apply_food_effect(food.kind, now);
            log::debug!(
                "ate {} food at {head}: score {}, length {}",
                food.kind.as_str(),
                state.score,
                state.snake.length()
            );
        } else {
            index += 1;
        }
    }

    if state.snake.check_collision(&state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: score {}, length {}",
            state.score,
            state.snake.length()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRID_SIZE;
    use crate::sim::food::FoodKind;
    use crate::sim::state::Difficulty;
    use glam::IVec3;

    /// Start a run: pick a difficulty and confirm
    fn start(seed: u64, difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(seed);
        state.difficulty = difficulty;
        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
            0.0,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    /// Drive an idle run forward by whole move intervals
    fn run_for(state: &mut GameState, from: f64, frames: u32) -> f64 {
        let mut now = from;
        for _ in 0..frames {
            now += MOVE_INTERVAL + 0.001;
            tick(state, &TickInput::default(), now);
        }
        now
    }

    #[test]
    fn test_difficulty_menu_navigation() {
        let mut state = GameState::new(1);
        let select = |delta| TickInput {
            select_delta: delta,
            ..Default::default()
        };
        tick(&mut state, &select(1), 0.0);
        assert_eq!(state.difficulty, Difficulty::Medium);
        tick(&mut state, &select(1), 0.0);
        assert_eq!(state.difficulty, Difficulty::Hard);
        tick(&mut state, &select(1), 0.0);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.phase, GamePhase::SelectingDifficulty);

        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
            1.0,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_menu_ignores_gameplay_input() {
        let mut state = GameState::new(1);
        tick(
            &mut state,
            &TickInput {
                steer: Some(DirectionInput::Absolute(Dir::PosZ)),
                pause: true,
                ..Default::default()
            },
            0.0,
        );
        assert_eq!(state.phase, GamePhase::SelectingDifficulty);
        assert_eq!(state.snake.heading(), Dir::PosX);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = start(2, Difficulty::Easy);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 0.1);
        assert_eq!(state.phase, GamePhase::Paused);

        let head = state.snake.head_cell();
        let mut now = 0.1;
        for _ in 0..20 {
            now += MOVE_INTERVAL + 0.001;
            tick(&mut state, &TickInput::default(), now);
        }
        assert_eq!(state.snake.head_cell(), head);
        assert!(state.foods.is_empty());

        tick(&mut state, &pause, now);
        assert_eq!(state.phase, GamePhase::Playing);
        run_for(&mut state, now, 2);
        assert_ne!(state.snake.head_cell(), head);
    }

    #[test]
    fn test_steering_changes_the_committed_path() {
        let mut state = start(3, Difficulty::Easy);
        state.next_food_spawn = f64::MAX;
        let mut now = run_for(&mut state, 0.0, 4);
        let turn = TickInput {
            steer: Some(DirectionInput::TurnLeft),
            ..Default::default()
        };
        now += MOVE_INTERVAL + 0.001;
        tick(&mut state, &turn, now);
        run_for(&mut state, now, 3);
        // Heading resolved left of +X is -Z
        assert_eq!(state.snake.heading(), Dir::NegZ);
        assert!(state.snake.head_cell().z < 0);
    }

    #[test]
    fn test_food_spawning_respects_cap_and_schedule() {
        let mut state = start(4, Difficulty::Easy);
        // Idle long enough for the spawner to saturate; steering in a square
        // keeps the run alive.
        let mut now = 0.0;
        for frame in 0..2000u32 {
            now += 0.05;
            // A left turn every two seconds walks a closed square
            let steer = (frame % 40 == 0).then_some(DirectionInput::TurnLeft);
            tick(
                &mut state,
                &TickInput {
                    steer,
                    ..Default::default()
                },
                now,
            );
            assert!(state.foods.len() <= MAX_FOODS);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        // The spawner must have produced something in 100 simulated seconds
        assert!(state.foods.len() > 1 || state.score > 0);
    }

    #[test]
    fn test_expired_food_is_pruned_without_score() {
        let mut state = start(5, Difficulty::Easy);
        state.foods.push(Food {
            cell: IVec3::new(5, 0, 5),
            kind: FoodKind::Normal,
            spawn_time: 0.0,
            duration: 8.0,
            active: true,
            rotation: 0.0,
        });
        state.next_food_spawn = f64::MAX;
        tick(&mut state, &TickInput::default(), 7.9);
        assert_eq!(state.foods.len(), 1);
        tick(&mut state, &TickInput::default(), 8.1);
        assert!(state.foods.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_consumption_scores_and_applies_effect() {
        let mut state = start(6, Difficulty::Easy);
        state.next_food_spawn = f64::MAX;
        // Place foods on the head's path along +X
        state.foods.push(Food {
            cell: IVec3::new(1, 0, 0),
            kind: FoodKind::Normal,
            spawn_time: 0.0,
            duration: 1000.0,
            active: true,
            rotation: 0.0,
        });
        state.foods.push(Food {
            cell: IVec3::new(2, 0, 0),
            kind: FoodKind::Golden,
            spawn_time: 0.0,
            duration: 1000.0,
            active: true,
            rotation: 0.0,
        });
        run_for(&mut state, 0.0, 8);
        assert_eq!(state.score, 1 + 3);
        assert!(state.foods.is_empty());
        assert_eq!(state.snake.current_color(), FoodKind::Golden.tint().unwrap());
    }

    #[test]
    fn test_idle_run_ends_at_the_wall() {
        let mut state = start(7, Difficulty::Easy);
        state.next_food_spawn = f64::MAX;
        run_for(&mut state, 0.0, 2 * GRID_SIZE as u32 + 4);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Dead exactly on the boundary cell
        assert_eq!(state.snake.head_cell().x, GRID_SIZE / 2);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = start(8, Difficulty::Easy);
        state.next_food_spawn = f64::MAX;
        let now = run_for(&mut state, 0.0, 2 * GRID_SIZE as u32 + 4);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            now,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head_cell(), IVec3::ZERO);
        assert_eq!(state.snake.length(), 1);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut state = start(9, Difficulty::Easy);
        state.next_food_spawn = f64::MAX;
        let now = run_for(&mut state, 0.0, 2 * GRID_SIZE as u32 + 4);
        assert_eq!(state.phase, GamePhase::GameOver);
        let head = state.snake.head_cell();
        run_for(&mut state, now, 10);
        assert_eq!(state.snake.head_cell(), head);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_hard_obstacles_patrol_between_ticks() {
        let mut state = start(10, Difficulty::Hard);
        state.next_food_spawn = f64::MAX;
        let before: Vec<_> = state
            .obstacles
            .iter()
            .filter(|o| !o.is_boundary)
            .map(|o| o.position)
            .collect();
        run_for(&mut state, 0.0, 4);
        let after: Vec<_> = state
            .obstacles
            .iter()
            .filter(|o| !o.is_boundary)
            .map(|o| o.position)
            .collect();
        assert_eq!(before.len(), 5);
        assert!(before.iter().zip(&after).any(|(a, b)| a != b));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = start(99, Difficulty::Hard);
        let mut b = start(99, Difficulty::Hard);
        let mut now = 0.0;
        for frame in 0..500 {
            now += 1.0 / 60.0;
            let steer = if frame % 37 == 0 {
                Some(DirectionInput::TurnRight)
            } else {
                None
            };
            let input = TickInput {
                steer,
                ..Default::default()
            };
            tick(&mut a, &input, now);
            tick(&mut b, &input, now);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.snake.head_cell(), b.snake.head_cell());
        assert_eq!(a.foods.len(), b.foods.len());
        for (fa, fb) in a.foods.iter().zip(&b.foods) {
            assert_eq!(fa.cell, fb.cell);
            assert_eq!(fa.kind, fb.kind);
        }
    }
}
