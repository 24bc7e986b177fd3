//! Menu widgets and per-phase screens

pub mod button;
pub mod menu;
pub mod screens;

pub use button::Button;
pub use menu::{Menu, MenuAction};
pub use screens::{ScreenOptions, draw};
