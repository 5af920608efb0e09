//! Brickfall entry point
//!
//! Runs a headless demo session: a simple autopilot drives the paddle while
//! the loop paces the simulation at the configured tick rate. Wiring a real
//! window, input device, and sprite blitter means replacing [`NullSink`]
//! and [`demo_input`] with host-backed implementations.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use brickfall::GameConfig;
use brickfall::render::{NullSink, render_frame};
use brickfall::sim::{BallState, GamePhase, GameState, TickInput, tick};

/// Demo sessions give up after five simulated minutes
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&PathBuf::from(path)),
        None => GameConfig::default(),
    };
    let seed: u64 = rand::random();
    let mut state = GameState::new(seed, &config);
    let mut sink = NullSink;

    let tick_duration = Duration::from_secs_f64(1.0 / config.tick_rate as f64);
    let session_start = Instant::now();
    let mut next_tick = Instant::now();

    loop {
        let input = demo_input(&state);
        let now_ms = session_start.elapsed().as_millis() as u64;
        tick(&mut state, &config, &input, now_ms);
        render_frame(&state, &config, &mut sink);

        match state.phase {
            GamePhase::GameOver => {
                log::info!("Demo over: out of hearts after {} ticks", state.time_ticks);
                break;
            }
            GamePhase::Won => {
                log::info!("Demo won: grid cleared after {} ticks", state.time_ticks);
                break;
            }
            GamePhase::Playing => {}
        }

        if state.time_ticks >= DEMO_TICK_LIMIT {
            log::info!(
                "Demo time limit reached with {} blocks left",
                state.blocks.len()
            );
            break;
        }
        if state.time_ticks.is_multiple_of(600) {
            log::info!(
                "Tick {}: {} blocks, {} hearts, {} upgrades falling",
                state.time_ticks,
                state.blocks.len(),
                state.paddle.hearts,
                state.upgrades.len()
            );
        }

        // Frame limiter: sleep out the remainder of this tick's slot
        next_tick += tick_duration;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            // Fell behind; don't try to catch up
            next_tick = now;
        }
    }
}

/// Demo autopilot: launch immediately, then chase the ball's horizontal
/// position with a small dead zone so the paddle doesn't jitter
fn demo_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.ball.state == BallState::Attached {
        input.launch = true;
        return input;
    }
    let paddle_x = state.paddle.rect.center().x;
    let ball_x = state.ball.rect.center().x;
    if ball_x < paddle_x - 2.0 {
        input.move_left = true;
    } else if ball_x > paddle_x + 2.0 {
        input.move_right = true;
    }
    input
}
