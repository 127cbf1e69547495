//! Match state and gameplay rules
//!
//! `Game` owns every piece of simulation state: both paddles, the ball,
//! the wind force, scores, the phase machine and the seeded randomness.
//! Collaborators read it through accessors or `snapshot()` and drive it
//! with `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::{Ball, BallTrail};
use super::collision::{ball_hits_paddle, bounce_off_edges, reflect_angle};
use super::noise_engine::{NoiseEngine1D, NoiseSource};
use super::paddle::Paddle;
use super::starfield::Starfield;
use super::state::{GameEvent, GamePhase, Outcome, Score, Side, TitleJitter};
use crate::config::SimConfig;
use crate::consts::MAX_STARS;
use crate::error::SimError;

/// Noise lookahead for the horizontal wind draw
const WIND_X_OFFSET: f64 = 100.0;
/// Noise lookahead for the second title jitter draw
const JITTER_OFFSET: f64 = 1000.0;
/// Noise seeds are drawn from this range
const NOISE_SEED_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

#[derive(Debug)]
pub struct Game {
    config: SimConfig,
    /// Seed actually used (from config or entropy)
    seed: u64,
    pub phase: GamePhase,
    pub score: Score,
    /// Toggles on every point; true serves toward the player
    pub player_serve: bool,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Standing force on the ball, recomputed on every bat hit
    pub wind: Vec2,
    pub starfield: Starfield,
    pub jitter: TitleJitter,
    noise: NoiseEngine1D,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Game {
    /// New game in the `Intro` phase with an OpenSimplex noise backend
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        Self::build(config, None)
    }

    /// New game whose wind and jitter come from `source`
    pub fn with_noise(config: SimConfig, source: Box<dyn NoiseSource>) -> Result<Self, SimError> {
        Self::build(config, Some(source))
    }

    fn build(config: SimConfig, source: Option<Box<dyn NoiseSource>>) -> Result<Self, SimError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(seed);
        let noise_seed = rng.random_range(NOISE_SEED_RANGE);
        let noise = match source {
            Some(source) => {
                NoiseEngine1D::with_source(noise_seed, config.noise_smoothness, source)?
            }
            None => NoiseEngine1D::new(noise_seed, config.noise_smoothness)?,
        };

        let paddle = &config.paddle;
        let player = Paddle::new(
            config.player_start(),
            paddle.width,
            paddle.height,
            paddle.player_max_speed,
            paddle.accel_step,
            config.screen_height,
        );
        let opponent = Paddle::new(
            config.opponent_start(),
            paddle.width,
            paddle.height,
            paddle.opponent_max_speed,
            paddle.accel_step,
            config.screen_height,
        );

        let spec = &config.ball;
        let ball = Ball::new(
            config.ball_center(),
            spec.size,
            spec.mass,
            Vec2::new(-spec.launch_speed, 0.0),
            spec.serve_speed,
            BallTrail::new(spec.trail_length, spec.trail_interval),
        );

        let starfield = Starfield::new(
            &mut rng,
            MAX_STARS,
            config.screen_width,
            config.screen_height,
        );

        log::info!("New game: seed={seed} noise_seed={noise_seed}");

        Ok(Self {
            config,
            seed,
            phase: GamePhase::Intro,
            score: Score::new(),
            player_serve: true,
            player,
            opponent,
            ball,
            wind: Vec2::ZERO,
            starfield,
            jitter: TitleJitter::default(),
            noise,
            rng,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn noise(&self) -> &NoiseEngine1D {
        &self.noise
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Events raised since the last `tick` started
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Winner banner, only meaningful once the match is over
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != GamePhase::Over {
            return None;
        }
        if self.score.player > self.score.opponent {
            Some(Outcome::PlayerWon)
        } else {
            Some(Outcome::PlayerLost)
        }
    }

    /// Handle the external toggle input.
    ///
    /// Intro starts play; Over clears scores and positions and returns to
    /// Intro; a toggle during play is ignored.
    pub fn switch_state(&mut self) {
        let to = self.phase.toggled();
        if self.phase == GamePhase::Over {
            self.reset_from_win();
        }
        self.set_phase(to);
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("Phase {from:?} -> {to:?}");
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Bounce the ball off the top and bottom of the court
    pub fn check_ball_edges(&mut self) {
        if bounce_off_edges(&mut self.ball, self.config.screen_height) {
            self.events.push(GameEvent::WallHit);
        }
    }

    /// Reflect the ball off whichever paddle it overlaps, player first
    pub fn check_bats(&mut self) {
        let side = if ball_hits_paddle(&self.ball, &self.player) {
            Side::Player
        } else if ball_hits_paddle(&self.ball, &self.opponent) {
            Side::Opponent
        } else {
            return;
        };

        let paddle = self.paddle(side);
        let vy = reflect_angle(self.ball.pos.y, paddle.pos.y, paddle.height);
        self.ball.vel.y = vy;
        self.ball.vel.x = -self.ball.vel.x;
        // Snap out of the paddle so a fast ball cannot tunnel through it
        self.ball.pos.x = match side {
            Side::Player => self.config.rebound_player_x(),
            Side::Opponent => self.config.rebound_opponent_x(),
        };
        self.bat_hit(side);
    }

    /// Side effects of a paddle hit: event, fresh wind and the speed ramp.
    ///
    /// Horizontal speed grows by `speed_step` while below the cap and is
    /// pinned to the cap once it reaches it. Vertical speed only has an
    /// upper clamp.
    pub fn bat_hit(&mut self, side: Side) {
        self.events.push(GameEvent::BatHit(side));
        self.set_wind();

        let spec = &self.config.ball;
        if self.ball.vel.x < spec.max_speed_x {
            self.ball.vel.x *= spec.speed_step;
        } else {
            self.ball.vel.x = spec.max_speed_x;
        }
        // Upper bound only; steep upward rebounds keep their speed
        if self.ball.vel.y > spec.max_speed_y {
            self.ball.vel.y = spec.max_speed_y;
        }
        log::debug!("Bat hit by {side:?}, ball vel {:?}", self.ball.vel);
    }

    /// Draw a new wind force. Mostly vertical; the horizontal part is a
    /// quarter strength and sampled ahead of the cursor.
    pub fn set_wind(&mut self) {
        let strength = self.config.wind_strength;
        self.wind.x = self.noise.next(WIND_X_OFFSET) as f32 * (strength / 4.0);
        self.wind.y = self.noise.next(0.0) as f32 * strength;
        log::debug!("Wind {:?}", self.wind);
    }

    /// Steer the opponent paddle toward the ball
    pub fn move_opponent(&mut self) {
        let target = self.ball.pos.y - (self.opponent.height / 2.0).floor();
        if self.opponent.pos.y < target {
            self.opponent.move_down();
        }
        if self.opponent.pos.y > target {
            self.opponent.move_up();
        }
    }

    /// Award a point if the ball left the court on either side
    pub fn check_ball_in_score_position(&mut self) {
        if self.ball.pos.x < 0.0 {
            self.score.increment(Side::Opponent);
            self.reset_from_score(Side::Opponent);
        }
        if self.ball.pos.x > self.config.screen_width {
            self.score.increment(Side::Player);
            self.reset_from_score(Side::Player);
        }
    }

    /// After a point: swap serve, reset the court and end the match if
    /// someone has won
    pub fn reset_from_score(&mut self, scorer: Side) {
        self.player_serve = !self.player_serve;
        self.events.push(GameEvent::Scored(scorer));
        log::info!(
            "{scorer:?} scores, now at {} ({} - {})",
            self.score.get(scorer),
            self.score.player,
            self.score.opponent
        );
        self.reset_positions();

        if self.score.has_winner(self.config.win_score).is_some() {
            self.set_phase(GamePhase::Over);
        }
    }

    /// After a finished match: zero scores and reset the court
    pub fn reset_from_win(&mut self) {
        self.score.reset();
        self.reset_positions();
    }

    /// Serve a fresh ball, return paddles to their starts and calm the wind
    pub fn reset_positions(&mut self) {
        self.ball.reset(self.player_serve, &mut self.rng);
        self.player.reset();
        self.opponent.reset();
        self.wind *= 0.0;
    }

    /// Advance the noise-driven offsets used by the title screens
    pub fn update_title_jitter(&mut self) {
        self.jitter.primary = self.noise.next(0.0) as f32;
        self.jitter.secondary = self.noise.next(JITTER_OFFSET) as f32;
    }

    pub fn update_starfield(&mut self) {
        self.starfield.update(&mut self.rng);
    }
}
