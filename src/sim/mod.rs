//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - One tick per 60 Hz frame, constants are per tick
//! - Stable iteration order (hero first, then enemies in level order)
//! - Audio is requested through queued cues, never played directly

pub mod animation;
pub mod body;
pub mod character;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{AnimState, Animator};
pub use body::{Body, Facing};
pub use character::{Character, Control, Patrol, StepEvents};
pub use collision::{bodies_overlap, resolve_horizontal, resolve_vertical};
pub use level::{EnemySpawn, Level, Platform};
pub use rect::Rect;
pub use state::{GamePhase, GameState, LossCause, World};
pub use tick::{TickInput, tick};
