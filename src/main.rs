//! Pong Sim headless entry point
//!
//! Plays one AI-vs-AI match at the fixed tick rate (without sleeping),
//! routes events to a logging audio backend and prints the final snapshot
//! as JSON.
//!
//! Usage: `pong-sim [config.json]`

use anyhow::{Context, Result};

use pong_sim::SimConfig;
use pong_sim::audio::{AudioManager, LogAudio};
use pong_sim::sim::{Game, GamePhase, TickInput, tick};

/// Safety stop for matches that never finish
const MAX_TICKS: u64 = 60 * 60 * 30;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Pong Sim (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SimConfig::default(),
    };

    let mut game = Game::new(config).context("creating game")?;
    let mut audio = AudioManager::new(LogAudio);

    let mut input = TickInput {
        toggle: true,
        ..Default::default()
    };
    let mut ticks = 0;
    while ticks < MAX_TICKS {
        tick(&mut game, &input);
        ticks += 1;
        audio.handle_events(game.drain_events().iter());

        if game.phase == GamePhase::Over {
            break;
        }
        input = steer_player(&game);
    }

    log::info!(
        "Finished after {ticks} ticks: {} - {} ({:?})",
        game.score.player,
        game.score.opponent,
        game.outcome()
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

/// Stand-in for keyboard input: chase the ball with one press per tick
fn steer_player(game: &Game) -> TickInput {
    let paddle = &game.player;
    let target = game.ball.pos.y + game.ball.height / 2.0;
    let mut input = TickInput::default();
    if paddle.center_y() < target - 4.0 {
        input.player_down = 1;
    } else if paddle.center_y() > target + 4.0 {
        input.player_up = 1;
    }
    input
}
