//! Game phases, scores and events

use serde::{Deserialize, Serialize};

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the toggle input
    #[default]
    Intro,
    /// Active gameplay
    InProgress,
    /// Someone reached the winning score
    Over,
}

impl GamePhase {
    /// Phase reached from this one on a toggle input
    pub fn toggled(self) -> Self {
        match self {
            GamePhase::Intro => GamePhase::InProgress,
            GamePhase::InProgress => GamePhase::InProgress,
            GamePhase::Over => GamePhase::Intro,
        }
    }
}

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, human controlled
    Player,
    /// Right paddle, AI controlled
    Opponent,
}

/// Discrete events for audio and other listeners.
/// Collected per tick and drained by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallHit,
    /// Ball bounced off a paddle
    BatHit(Side),
    /// A side scored a point
    Scored(Side),
    PhaseChanged { from: GamePhase, to: GamePhase },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Result shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
}

/// Noise-driven offsets for the title and game-over artwork
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleJitter {
    pub primary: f32,
    pub secondary: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_toggle() {
        assert_eq!(GamePhase::Intro.toggled(), GamePhase::InProgress);
        assert_eq!(GamePhase::InProgress.toggled(), GamePhase::InProgress);
        assert_eq!(GamePhase::Over.toggled(), GamePhase::Intro);
    }

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Opponent);
        score.increment(Side::Opponent);
        score.increment(Side::Player);
        assert_eq!(score.get(Side::Player), 1);
        assert_eq!(score.get(Side::Opponent), 2);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score {
            player: 4,
            opponent: 4,
        };
        assert_eq!(score.has_winner(5), None);
        score.increment(Side::Opponent);
        assert_eq!(score.has_winner(5), Some(Side::Opponent));
        score.reset();
        assert_eq!(score, Score::new());
    }
}
