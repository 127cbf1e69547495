//! Fixed-step simulation tick
//!
//! One call advances the game by one frame of the external loop.

use super::game::Game;
use super::state::GamePhase;

/// Input gathered by the driver since the previous tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Phase toggle (start game / leave game-over screen)
    pub toggle: bool,
    /// Number of up presses for the player paddle
    pub player_up: u8,
    /// Number of down presses for the player paddle
    pub player_down: u8,
}

/// Advance the game by one tick
pub fn tick(game: &mut Game, input: &TickInput) {
    game.clear_events();

    if input.toggle {
        game.switch_state();
    }

    match game.phase {
        GamePhase::InProgress => {
            for _ in 0..input.player_up {
                game.player.move_up();
            }
            for _ in 0..input.player_down {
                game.player.move_down();
            }
            game.move_opponent();

            let wind = game.wind;
            game.ball.apply_force(wind);
            game.ball.update();
            game.player.update();
            game.opponent.update();

            game.check_ball_edges();
            game.check_bats();
            game.check_ball_in_score_position();

            game.update_starfield();
        }
        GamePhase::Intro | GamePhase::Over => {
            game.update_starfield();
            game.update_title_jitter();
        }
    }
}
