//! Physical body shared by the hero and enemies
//!
//! Positions are hitbox centers. Edge setters move the center so that the
//! requested edge lands exactly on the given coordinate.

use glam::Vec2;

use super::collision::{resolve_horizontal, resolve_vertical};
use super::level::Platform;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Horizontal facing, driven by the last nonzero direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sprites are authored facing right
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// A dynamic axis-aligned body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Hitbox center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Hitbox size
    pub size: Vec2,
    pub facing: Facing,
    /// True when downward motion was stopped by a platform this tick
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            facing: Facing::Right,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Accumulate gravity, clamped to the terminal fall speed
    pub fn apply_gravity(&mut self, gravity: f32, max_fall_speed: f32) {
        self.vel.y = (self.vel.y + gravity).min(max_fall_speed);
    }

    /// Move by `vel.x` and push out of any platform on the side of travel
    pub fn step_horizontal(&mut self, platforms: &[Platform]) {
        self.pos.x += self.vel.x;
        resolve_horizontal(self, platforms);
    }

    /// Apply gravity, move by `vel.y`, and land on or bonk against platforms
    pub fn step_vertical(&mut self, platforms: &[Platform], tuning: &Tuning) {
        self.apply_gravity(tuning.gravity, tuning.max_fall_speed);
        self.pos.y += self.vel.y;
        self.grounded = false;
        resolve_vertical(self, platforms);
    }

    /// Full physics step: horizontal pass first, then vertical
    pub fn update_position(&mut self, platforms: &[Platform], tuning: &Tuning) {
        self.step_horizontal(platforms);
        self.step_vertical(platforms, tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edge_setters() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(20.0, 40.0));
        body.set_right(100.0);
        assert_eq!(body.rect().right(), 100.0);
        body.set_left(10.0);
        assert_eq!(body.rect().left(), 10.0);
        body.set_bottom(300.0);
        assert_eq!(body.rect().bottom(), 300.0);
        body.set_top(50.0);
        assert_eq!(body.rect().top(), 50.0);
    }

    #[test]
    fn test_gravity_clamps_to_max_fall_speed() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(10.0));
        body.vel.y = 9.8;
        body.apply_gravity(0.5, 10.0);
        assert_eq!(body.vel.y, 10.0);
        body.apply_gravity(0.5, 10.0);
        assert_eq!(body.vel.y, 10.0);
    }

    #[test]
    fn test_free_fall_is_never_grounded() {
        let tuning = Tuning::default();
        let mut body = Body::new(Vec2::new(100.0, 0.0), Vec2::splat(10.0));
        for _ in 0..50 {
            body.update_position(&[], &tuning);
            assert!(!body.grounded);
        }
        assert_eq!(body.vel.y, tuning.max_fall_speed);
    }

    proptest! {
        #[test]
        fn prop_fall_speed_monotonic_and_bounded(
            start_vy in -20.0f32..10.0,
            gravity in 0.05f32..2.0,
            max_fall in 1.0f32..30.0,
            frames in 1usize..200,
        ) {
            let tuning = Tuning {
                gravity,
                max_fall_speed: max_fall,
                ..Tuning::default()
            };
            let mut body = Body::new(Vec2::new(400.0, -1000.0), Vec2::splat(16.0));
            body.vel.y = start_vy.min(max_fall);

            let mut prev = body.vel.y;
            for _ in 0..frames {
                body.step_vertical(&[], &tuning);
                prop_assert!(body.vel.y >= prev);
                prop_assert!(body.vel.y <= max_fall);
                prev = body.vel.y;
            }
        }
    }
}
