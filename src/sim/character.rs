//! Characters: a body, an animator and a control policy
//!
//! The hero and enemies share physics and animation; only `Control` differs.

use glam::Vec2;

use super::animation::Animator;
use super::body::{Body, Facing};
use super::level::Platform;
use super::tick::TickInput;
use crate::assets::{self, AnimationSet};
use crate::tuning::Tuning;

/// Scripted back-and-forth motion over `[start_x, end_x]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub start_x: f32,
    pub end_x: f32,
}

/// Who decides how a character moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Directional keys and jump
    Player,
    /// Fixed patrol, blind to the hero
    Patrol(Patrol),
}

/// What happened during a character update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub jumped: bool,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub body: Body,
    pub anim: Animator,
    pub control: Control,
}

impl Character {
    pub fn new(body: Body, frames: AnimationSet, control: Control) -> Self {
        Self {
            body,
            anim: Animator::new(frames),
            control,
        }
    }

    /// Player-controlled hero centered on `pos`
    pub fn hero(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(
            Body::new(pos, tuning.hero_size),
            assets::hero_animations(),
            Control::Player,
        )
    }

    /// Enemy patrolling from its spawn x to `range` pixels right of it
    pub fn enemy(pos: Vec2, range: f32, tuning: &Tuning) -> Self {
        let mut body = Body::new(pos, tuning.enemy_size);
        body.vel.x = tuning.enemy_speed;
        body.facing = Facing::Right;
        Self::new(
            body,
            assets::enemy_animations(),
            Control::Patrol(Patrol {
                start_x: pos.x,
                end_x: pos.x + range,
            }),
        )
    }

    /// Advance one tick
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], tuning: &Tuning) -> StepEvents {
        match self.control {
            Control::Player => self.update_player(input, platforms, tuning),
            Control::Patrol(patrol) => {
                self.update_patrol(patrol, platforms, tuning);
                StepEvents::default()
            }
        }
    }

    /// Input → animation → physics. Start and stop are instantaneous.
    fn update_player(&mut self, input: &TickInput, platforms: &[Platform], tuning: &Tuning) -> StepEvents {
        let mut events = StepEvents::default();
        let body = &mut self.body;

        body.vel.x = 0.0;
        if input.left {
            body.vel.x = -tuning.player_speed;
            body.facing = Facing::Left;
        }
        if input.right {
            body.vel.x = tuning.player_speed;
            body.facing = Facing::Right;
        }
        if input.up && body.grounded {
            body.vel.y = tuning.jump_velocity;
            body.grounded = false;
            self.anim.restart();
            events.jumped = true;
        }

        self.anim.update(self.body.grounded, self.body.vel.x, tuning);
        self.body.update_position(platforms, tuning);
        events
    }

    /// Patrol → gravity and vertical collision → animation.
    ///
    /// Horizontal platform collision is not applied; patrol ranges are laid
    /// out to stay on walkable ground.
    fn update_patrol(&mut self, patrol: Patrol, platforms: &[Platform], tuning: &Tuning) {
        let body = &mut self.body;

        if body.pos.x >= patrol.end_x {
            body.vel.x = -tuning.enemy_speed;
            body.facing = Facing::Left;
        } else if body.pos.x <= patrol.start_x {
            body.vel.x = tuning.enemy_speed;
            body.facing = Facing::Right;
        }
        body.pos.x = (body.pos.x + body.vel.x).clamp(patrol.start_x, patrol.end_x);

        body.step_vertical(platforms, tuning);
        self.anim.update(self.body.grounded, self.body.vel.x, tuning);
    }

    /// Sprite to draw this tick
    pub fn sprite(&self) -> &'static str {
        self.anim.current_sprite()
    }
}
