//! Vertical-only paddle body
//!
//! Move presses accumulate acceleration; `update` integrates, clamps the
//! vertical speed and keeps the paddle on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub width: f32,
    pub height: f32,
    pub max_speed_y: f32,
    pub accel_step: f32,
    pub start_pos: Vec2,
    /// Lowest allowed top edge (screen height minus paddle height)
    max_y: f32,
}

impl Paddle {
    pub fn new(
        start_pos: Vec2,
        width: f32,
        height: f32,
        max_speed_y: f32,
        accel_step: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            pos: start_pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            width,
            height,
            max_speed_y,
            accel_step,
            start_pos,
            max_y: screen_height - height,
        }
    }

    pub fn move_up(&mut self) {
        self.accel.y -= self.accel_step;
    }

    pub fn move_down(&mut self) {
        self.accel.y += self.accel_step;
    }

    /// Integrate one tick
    pub fn update(&mut self) {
        self.vel += self.accel;
        self.vel.y = self.vel.y.clamp(-self.max_speed_y, self.max_speed_y);
        self.pos += self.vel;
        self.accel *= 0.0;
        self.constrain();
    }

    /// Clamp to the screen, stopping vertical motion at either bound
    pub fn constrain(&mut self) {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
        } else if self.pos.y > self.max_y {
            self.pos.y = self.max_y;
            self.vel.y = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.vel *= 0.0;
        self.accel *= 0.0;
    }

    /// Bottom edge of the paddle's valid range
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}
