//! Read-only view of the game for renderers
//!
//! Built fresh each frame; holds copies, so nothing a renderer does with it
//! can reach back into the simulation.

use glam::Vec2;
use serde::Serialize;

use super::game::Game;
use super::state::{GamePhase, Outcome, Score, TitleJitter};

/// Axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarView {
    pub pos: Vec2,
    pub size: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: Score,
    pub outcome: Option<Outcome>,
    pub player: RectView,
    pub opponent: RectView,
    pub ball: RectView,
    /// Oldest first
    pub trail: Vec<Vec2>,
    pub stars: Vec<StarView>,
    pub jitter: TitleJitter,
    pub wind: Vec2,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let rect = |pos: Vec2, width: f32, height: f32| RectView {
            pos,
            size: Vec2::new(width, height),
        };
        Snapshot {
            phase: self.phase,
            score: self.score,
            outcome: self.outcome(),
            player: rect(self.player.pos, self.player.width, self.player.height),
            opponent: rect(self.opponent.pos, self.opponent.width, self.opponent.height),
            ball: rect(self.ball.pos, self.ball.width, self.ball.height),
            trail: self.ball.trail.points().collect(),
            stars: self
                .starfield
                .stars
                .iter()
                .map(|s| StarView {
                    pos: s.pos,
                    size: s.size,
                })
                .collect(),
            jitter: self.jitter,
            wind: self.wind,
        }
    }
}
