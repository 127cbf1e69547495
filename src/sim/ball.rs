//! The ball: a force-driven body with a position trail

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Recent ball positions, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallTrail {
    points: VecDeque<Vec2>,
    capacity: usize,
    /// Record a point every `interval` ticks
    interval: u32,
    current_frame: u64,
    last_frame: u64,
}

impl BallTrail {
    pub fn new(capacity: usize, interval: u32) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            interval,
            current_frame: 0,
            last_frame: 0,
        }
    }

    /// Count a tick and sample `pos` when the interval has elapsed
    pub fn update(&mut self, pos: Vec2) {
        self.current_frame += 1;
        if self.current_frame - self.last_frame < u64::from(self.interval) {
            return;
        }
        self.last_frame = self.current_frame;
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub mass: f32,
    pub width: f32,
    pub height: f32,
    pub trail: BallTrail,
    /// Where `reset` places the ball
    center: Vec2,
    serve_speed: f32,
}

impl Ball {
    pub fn new(
        center: Vec2,
        size: f32,
        mass: f32,
        launch_vel: Vec2,
        serve_speed: f32,
        trail: BallTrail,
    ) -> Self {
        Self {
            pos: center,
            vel: launch_vel,
            accel: Vec2::ZERO,
            mass,
            width: size,
            height: size,
            trail,
            center,
            serve_speed,
        }
    }

    /// Accumulate `force / mass`. The caller's force is taken by value and
    /// left untouched.
    pub fn apply_force(&mut self, force: Vec2) {
        let mut f = force;
        f /= self.mass;
        self.accel += f;
    }

    /// Integrate one tick and sample the trail
    pub fn update(&mut self) {
        self.vel += self.accel;
        self.pos += self.vel;
        self.accel *= 0.0;
        self.trail.update(self.pos);
    }

    /// Re-center for a serve. `player_serve` sends the ball toward the
    /// player (negative x); the vertical direction is -1, 0 or 1.
    pub fn reset<R: Rng>(&mut self, player_serve: bool, rng: &mut R) {
        self.trail.clear();
        let vy = rng.random_range(-1..=1) as f32;
        let vx = if player_serve {
            -self.serve_speed
        } else {
            self.serve_speed
        };
        self.pos = self.center;
        self.vel = Vec2::new(vx, vy);
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball() -> Ball {
        Ball::new(
            Vec2::new(596.0, 296.0),
            8.0,
            8.0,
            Vec2::new(-5.0, 0.0),
            4.0,
            BallTrail::new(30, 3),
        )
    }

    #[test]
    fn test_apply_force_scales_by_mass() {
        let mut b = ball();
        let wind = Vec2::new(0.8, -1.6);
        b.apply_force(wind);
        b.apply_force(wind);
        assert_eq!(wind, Vec2::new(0.8, -1.6));
        assert!((b.accel - Vec2::new(0.2, -0.4)).length() < 1e-6);
    }

    #[test]
    fn test_update_integrates_and_clears_accel() {
        let mut b = ball();
        b.apply_force(Vec2::new(8.0, 16.0));
        b.update();
        assert_eq!(b.vel, Vec2::new(-4.0, 2.0));
        assert_eq!(b.pos, Vec2::new(592.0, 298.0));
        assert_eq!(b.accel, Vec2::ZERO);
    }

    #[test]
    fn test_trail_samples_every_third_tick() {
        let mut b = ball();
        b.update();
        b.update();
        assert!(b.trail.is_empty());
        b.update();
        assert_eq!(b.trail.len(), 1);
        assert_eq!(b.trail.points().next(), Some(b.pos));
        for _ in 0..3 {
            b.update();
        }
        assert_eq!(b.trail.len(), 2);
    }

    #[test]
    fn test_trail_evicts_oldest_first() {
        let mut trail = BallTrail::new(3, 1);
        for i in 0..5 {
            trail.update(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reset_serve_direction() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut b = ball();
        for _ in 0..9 {
            b.update();
        }
        assert!(!b.trail.is_empty());

        b.reset(true, &mut rng);
        assert_eq!(b.pos, Vec2::new(596.0, 296.0));
        assert_eq!(b.vel.x, -4.0);
        assert!(b.trail.is_empty());

        b.reset(false, &mut rng);
        assert_eq!(b.vel.x, 4.0);
    }

    #[test]
    fn test_reset_vertical_direction_values() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut b = ball();
        let mut seen = [false; 3];
        for _ in 0..100 {
            b.reset(true, &mut rng);
            assert!([-1.0, 0.0, 1.0].contains(&b.vel.y));
            seen[(b.vel.y + 1.0) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    proptest! {
        #[test]
        fn prop_trail_bounded(ticks in 0usize..500) {
            let mut b = ball();
            for _ in 0..ticks {
                b.update();
                prop_assert!(b.trail.len() <= 30);
            }
            prop_assert_eq!(b.trail.len(), (ticks / 3).min(30));
        }
    }
}
