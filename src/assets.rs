//! Symbolic asset names and their procedural art
//!
//! The simulation only refers to sprites and backgrounds by name. The
//! catalog resolves a name to the art the renderer draws; an unknown name
//! is reported as `AssetError` and the caller skips the draw or playback.

use std::collections::HashMap;
use std::fmt;

use crate::audio::{MusicTrack, SoundEffect};
use crate::renderer::vertex::colors;

/// Failure to resolve a referenced asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    MissingSprite(String),
    MissingBackground(BackgroundId),
    MissingSound(SoundEffect),
    MissingMusic(MusicTrack),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MissingSprite(name) => write!(f, "sprite '{}' not found", name),
            AssetError::MissingBackground(id) => write!(f, "background '{}' not found", id.name()),
            AssetError::MissingSound(id) => write!(f, "sound '{}' not found", id.name()),
            AssetError::MissingMusic(id) => write!(f, "music '{}' not found", id.name()),
        }
    }
}

impl std::error::Error for AssetError {}

/// Sprite frame lists for each animation state
#[derive(Debug, Clone)]
pub struct AnimationSet {
    pub idle: Vec<&'static str>,
    pub moving: Vec<&'static str>,
    pub jump: Vec<&'static str>,
}

impl AnimationSet {
    /// Build a set; without jump frames the first idle frame (if any) is used
    pub fn new(
        idle: Vec<&'static str>,
        moving: Vec<&'static str>,
        jump: Option<Vec<&'static str>>,
    ) -> Self {
        let jump = jump.unwrap_or_else(|| idle.iter().take(1).copied().collect());
        Self { idle, moving, jump }
    }

    pub fn frames(&self, state: crate::sim::AnimState) -> &[&'static str] {
        use crate::sim::AnimState;
        match state {
            AnimState::Idle => &self.idle,
            AnimState::Move => &self.moving,
            AnimState::Jump => &self.jump,
        }
    }
}

pub fn hero_animations() -> AnimationSet {
    AnimationSet::new(
        vec!["hero_idle_1", "hero_idle_2"],
        vec!["hero_run_1", "hero_run_2", "hero_run_3"],
        Some(vec!["hero_jump_1", "hero_jump_2", "hero_jump_3"]),
    )
}

pub fn enemy_animations() -> AnimationSet {
    AnimationSet::new(
        vec!["enemy_idle_1", "enemy_idle_2"],
        vec!["enemy_run_1", "enemy_run_2"],
        None,
    )
}

/// Full-screen backdrops, one per game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundId {
    Menu,
    Game,
    GameOver,
}

impl BackgroundId {
    pub fn name(self) -> &'static str {
        match self {
            BackgroundId::Menu => "bg_menu",
            BackgroundId::Game => "bg_game",
            BackgroundId::GameOver => "bg_gameover",
        }
    }
}

/// Procedural sprite: a body block with an accent stripe on the facing side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteArt {
    pub body: [f32; 4],
    pub accent: [f32; 4],
    /// Vertical offset in pixels, varied per frame to suggest motion
    pub bob: f32,
    /// Horizontal squash (fraction of width), varied per frame
    pub squash: f32,
}

/// Vertical gradient backdrop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundArt {
    pub top: [f32; 4],
    pub bottom: [f32; 4],
}

/// Name-to-art lookup table
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    sprites: HashMap<&'static str, SpriteArt>,
    backgrounds: HashMap<BackgroundId, BackgroundArt>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let hero = |bob: f32, squash: f32| SpriteArt {
            body: colors::HERO,
            accent: colors::HERO_ACCENT,
            bob,
            squash,
        };
        let enemy = |bob: f32, squash: f32| SpriteArt {
            body: colors::ENEMY,
            accent: colors::ENEMY_ACCENT,
            bob,
            squash,
        };

        let sprites = HashMap::from([
            ("hero_idle_1", hero(0.0, 0.0)),
            ("hero_idle_2", hero(1.0, 0.0)),
            ("hero_run_1", hero(0.0, 0.05)),
            ("hero_run_2", hero(-2.0, 0.0)),
            ("hero_run_3", hero(0.0, 0.05)),
            ("hero_jump_1", hero(0.0, 0.1)),
            ("hero_jump_2", hero(-1.0, 0.15)),
            ("hero_jump_3", hero(0.0, 0.1)),
            ("enemy_idle_1", enemy(0.0, 0.0)),
            ("enemy_idle_2", enemy(1.0, 0.05)),
            ("enemy_run_1", enemy(0.0, 0.1)),
            ("enemy_run_2", enemy(-2.0, 0.0)),
        ]);

        let backgrounds = HashMap::from([
            (
                BackgroundId::Menu,
                BackgroundArt {
                    top: colors::MENU_SKY_TOP,
                    bottom: colors::MENU_SKY_BOTTOM,
                },
            ),
            (
                BackgroundId::Game,
                BackgroundArt {
                    top: colors::GAME_SKY_TOP,
                    bottom: colors::GAME_SKY_BOTTOM,
                },
            ),
            (
                BackgroundId::GameOver,
                BackgroundArt {
                    top: colors::GAME_OVER_TOP,
                    bottom: colors::GAME_OVER_BOTTOM,
                },
            ),
        ]);

        Self {
            sprites,
            backgrounds,
        }
    }
}

impl AssetCatalog {
    /// Catalog with no entries; everything resolves to `AssetError`
    pub fn empty() -> Self {
        Self {
            sprites: HashMap::new(),
            backgrounds: HashMap::new(),
        }
    }

    pub fn sprite(&self, name: &str) -> Result<&SpriteArt, AssetError> {
        self.sprites
            .get(name)
            .ok_or_else(|| AssetError::MissingSprite(name.to_string()))
    }

    pub fn background(&self, id: BackgroundId) -> Result<&BackgroundArt, AssetError> {
        self.backgrounds
            .get(&id)
            .ok_or(AssetError::MissingBackground(id))
    }
}
