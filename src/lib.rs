//! Ledge Runner - a small 2D platformer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (bodies, collisions, game flow)
//! - `ui`: Menu widgets and per-phase screens
//! - `renderer`: Draw-call recording and the WebGPU pipeline
//! - `audio`: Sound ids, sound bank and audio back ends
//! - `assets`: Symbolic sprite/background names and their art
//! - `settings` / `tuning`: Player preferences and data-driven physics

pub mod assets;
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (physics constants are per 60 Hz tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical screen size; all sim coordinates live in this space
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    pub const TITLE: &str = "Ledge Runner";
    pub const SUBTITLE: &str = "Mind the gap";
}
