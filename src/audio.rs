//! Sound effect routing
//!
//! The simulation only raises `GameEvent`s. This module maps them to sound
//! effects and hands them to a playback backend, fire-and-forget.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom edge
    WallHit,
    /// A point was scored
    Score,
}

impl SoundEffect {
    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallHit => Some(SoundEffect::WallHit),
            GameEvent::BatHit(_) => Some(SoundEffect::PaddleHit),
            GameEvent::Scored(_) => Some(SoundEffect::Score),
            GameEvent::PhaseChanged { .. } => None,
        }
    }

    /// Sound file stem
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "blip",
            SoundEffect::WallHit => "blip2",
            SoundEffect::Score => "score",
        }
    }
}

/// Playback backend. Must return immediately.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.asset_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the sounds for a batch of events, in order
    pub fn handle_events<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for effect in events.into_iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Side};

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_sounds() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.handle_events(&[
            GameEvent::PhaseChanged {
                from: GamePhase::Intro,
                to: GamePhase::InProgress,
            },
            GameEvent::BatHit(Side::Player),
            GameEvent::WallHit,
            GameEvent::Scored(Side::Opponent),
        ]);
        let played: Vec<SoundEffect> = audio.sink().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![SoundEffect::PaddleHit, SoundEffect::WallHit, SoundEffect::Score]
        );
    }

    #[test]
    fn test_volume_and_mute() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(2.0);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::WallHit);
        assert_eq!(audio.sink().0, vec![(SoundEffect::WallHit, 0.5)]);

        audio.set_muted(true);
        audio.play(SoundEffect::WallHit);
        assert_eq!(audio.sink().0.len(), 1);
    }
}
