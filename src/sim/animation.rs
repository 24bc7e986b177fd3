//! Sprite animation state machine
//!
//! The animation state is derived every tick from grounded status and
//! horizontal speed. Switching state restarts the new animation from its
//! first frame.

use crate::assets::AnimationSet;
use crate::tuning::Tuning;

/// Which frame list is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Move,
    Jump,
}

impl AnimState {
    /// Pick the state for this tick
    pub fn select(grounded: bool, speed: f32, move_threshold: f32) -> Self {
        if !grounded {
            AnimState::Jump
        } else if speed.abs() > move_threshold {
            AnimState::Move
        } else {
            AnimState::Idle
        }
    }

    /// Ticks each frame stays on screen
    pub fn frame_ticks(self, tuning: &Tuning) -> u32 {
        match self {
            AnimState::Idle => tuning.idle_frame_ticks,
            AnimState::Move | AnimState::Jump => tuning.active_frame_ticks,
        }
    }
}

/// Plays an `AnimationSet` according to the current `AnimState`
#[derive(Debug, Clone)]
pub struct Animator {
    frames: AnimationSet,
    state: AnimState,
    frame: usize,
    timer: u32,
}

impl Animator {
    pub fn new(frames: AnimationSet) -> Self {
        Self {
            frames,
            state: AnimState::Idle,
            frame: 0,
            timer: 0,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Restart the current animation from its first frame
    pub fn restart(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }

    /// Advance one tick
    pub fn update(&mut self, grounded: bool, speed: f32, tuning: &Tuning) {
        let next = AnimState::select(grounded, speed, tuning.move_threshold);
        if next != self.state {
            self.state = next;
            self.restart();
        }

        let len = self.frames.frames(self.state).len().max(1);
        self.timer += 1;
        if self.timer >= self.state.frame_ticks(tuning) {
            self.timer = 0;
            self.frame = (self.frame + 1) % len;
        }
    }

    /// Symbolic name of the sprite to draw this tick. A state without
    /// frames yields an empty name, which no catalog resolves.
    pub fn current_sprite(&self) -> &'static str {
        let frames = self.frames.frames(self.state);
        frames
            .get(self.frame % frames.len().max(1))
            .copied()
            .unwrap_or_default()
    }
}
