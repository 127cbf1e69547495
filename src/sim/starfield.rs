//! Decorative falling stars
//!
//! Purely visual. Stars draw from the game's seeded RNG, never from the
//! noise engine, so they cannot disturb the wind sequence.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-tick downward pull, so stars fall like rain
const STAR_GRAVITY: f32 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: u8,
}

impl Star {
    fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random_range(0.0..=width), rng.random_range(0.0..=height)),
            vel: Vec2::new(0.0, fall_speed(rng)),
            size: rng.random_range(1..=4),
        }
    }

    fn respawn<R: Rng>(&mut self, rng: &mut R, width: f32) {
        self.pos = Vec2::new(rng.random_range(0.0..=width), 0.0);
        self.vel.y = fall_speed(rng);
    }
}

fn fall_speed<R: Rng>(rng: &mut R) -> f32 {
    1.0 + rng.random::<f32>() * 10.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl Starfield {
    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let stars = (0..count).map(|_| Star::spawn(rng, width, height)).collect();
        Self {
            stars,
            width,
            height,
        }
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            star.vel.y += STAR_GRAVITY;
            star.pos += star.vel;
            if star.pos.y > self.height {
                star.respawn(rng, self.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_stars_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = Starfield::new(&mut rng, 40, 1200.0, 600.0);
        assert_eq!(field.stars.len(), 40);
        for _ in 0..1000 {
            field.update(&mut rng);
            for star in &field.stars {
                assert!(star.pos.y <= 600.0);
                assert!((0.0..=1200.0).contains(&star.pos.x));
                assert!((1..=4).contains(&star.size));
            }
        }
    }

    #[test]
    fn test_star_falls_and_accelerates() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = Starfield::new(&mut rng, 1, 1200.0, 600.0);
        field.stars[0].pos = Vec2::new(100.0, 0.0);
        field.stars[0].vel = Vec2::new(0.0, 2.0);
        field.update(&mut rng);
        assert!((field.stars[0].vel.y - 2.05).abs() < 1e-6);
        assert!((field.stars[0].pos.y - 2.05).abs() < 1e-6);
    }

    #[test]
    fn test_star_respawns_at_top() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = Starfield::new(&mut rng, 1, 1200.0, 600.0);
        field.stars[0].pos = Vec2::new(100.0, 599.0);
        field.stars[0].vel = Vec2::new(0.0, 5.0);
        field.update(&mut rng);
        assert_eq!(field.stars[0].pos.y, 0.0);
        assert!((1.0..=11.0).contains(&field.stars[0].vel.y));
    }
}
