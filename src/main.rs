//! Voxel Snake headless demo driver
//!
//! Runs the simulation with a trivial survival autopilot on a fixed-timestep
//! virtual clock, then dumps the final frame as JSON. Useful for smoke runs
//! and for watching the sim log without a renderer:
//!
//! ```text
//! RUST_LOG=info voxel-snake [seed] [easy|medium|hard] [seconds]
//! ```

use glam::IVec3;
use voxel_snake::sim::{
    Difficulty, DirectionInput, GamePhase, GameState, TickInput, in_interior, tick,
};

const FRAME_DT: f64 = 1.0 / 60.0;

/// Whether the snake would die by committing onto `cell`
fn blocked(state: &GameState, cell: IVec3) -> bool {
    !in_interior(cell)
        || state.obstacles.iter().any(|o| o.hits(cell))
        || state.snake.occupies(cell)
}

/// Keep going straight while it is safe, otherwise take a free turn
fn autopilot(state: &GameState) -> Option<DirectionInput> {
    let head = state.snake.head_cell();
    let heading = state.snake.heading();
    if !blocked(state, head + heading.ivec()) {
        return None;
    }
    [heading.turned_left(), heading.turned_right()]
        .into_iter()
        .find(|dir| !blocked(state, head + dir.ivec()))
        .map(DirectionInput::Absolute)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or(Difficulty::Medium);
    let max_seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);

    log::info!("voxel-snake demo: seed {seed}, difficulty {}", difficulty.as_str());

    let mut state = GameState::new(seed);
    let mut now = 0.0;

    // Walk the menu to the requested difficulty, then start
    let steps = Difficulty::ALL.iter().position(|d| *d == difficulty).unwrap_or(0);
    for _ in 0..steps {
        tick(
            &mut state,
            &TickInput {
                select_delta: 1,
                ..Default::default()
            },
            now,
        );
    }
    tick(
        &mut state,
        &TickInput {
            confirm: true,
            ..Default::default()
        },
        now,
    );

    while state.phase == GamePhase::Playing && now < max_seconds {
        let input = TickInput {
            steer: autopilot(&state),
            ..Default::default()
        };
        tick(&mut state, &input, now);
        now += FRAME_DT;
    }

    let snapshot = state.snapshot();
    log::info!(
        "finished at t={now:.1}s: phase {:?}, score {}, length {}",
        snapshot.phase,
        snapshot.score,
        snapshot.snake_length
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
