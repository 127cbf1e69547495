//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG and seeded noise only
//! - Noise draws in a fixed order
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod collision;
pub mod game;
pub mod noise_engine;
pub mod paddle;
pub mod snapshot;
pub mod starfield;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::{Ball, BallTrail};
pub use collision::{ball_hits_paddle, bounce_off_edges, rects_overlap, reflect_angle};
pub use game::Game;
pub use noise_engine::{NoiseEngine1D, NoiseSource, OpenSimplexSource};
pub use paddle::Paddle;
pub use snapshot::{RectView, Snapshot, StarView};
pub use starfield::{Star, Starfield};
pub use state::{GameEvent, GamePhase, Outcome, Score, Side, TitleJitter};
pub use tick::{TickInput, tick};
pub use vector::{Vector2, map_range};
