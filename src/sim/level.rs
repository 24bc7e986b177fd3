//! Level geometry: platforms and spawn points
//!
//! There is a single hand-built level; its layout lives in code.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::draw::Canvas;
use crate::renderer::vertex::colors;

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, colors::PLATFORM);
        canvas.stroke_rect(self.rect, colors::PLATFORM_OUTLINE);
    }
}

/// Where an enemy starts and how far right it patrols
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub pos: Vec2,
    pub range: f32,
}

/// Layout of a level
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub hero_spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<EnemySpawn>,
}

impl Level {
    /// The one level shipped with the game
    pub fn standard() -> Self {
        const W: f32 = SCREEN_WIDTH;
        const H: f32 = SCREEN_HEIGHT;

        Self {
            hero_spawn: Vec2::new(50.0, H - 60.0),
            platforms: vec![
                // Ground
                Platform::new(0.0, H - 30.0, W, 30.0),
                Platform::new(300.0, H - 150.0, 150.0, 20.0),
                Platform::new(550.0, H - 250.0, 150.0, 20.0),
                Platform::new(580.0, H - 120.0, 150.0, 20.0),
            ],
            enemies: vec![
                EnemySpawn {
                    pos: Vec2::new(270.0, H - 190.0),
                    range: 150.0,
                },
                EnemySpawn {
                    pos: Vec2::new(600.0, H - 160.0),
                    range: 150.0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw::{DrawCommand, DrawList};

    #[test]
    fn test_standard_layout() {
        let level = Level::standard();
        assert_eq!(level.hero_spawn, Vec2::new(50.0, 540.0));
        assert_eq!(level.platforms.len(), 4);
        assert_eq!(level.platforms[0].rect, Rect::new(0.0, 570.0, 800.0, 30.0));
        assert_eq!(level.enemies.len(), 2);
    }

    #[test]
    fn test_platform_draws_fill_then_outline() {
        let platform = Platform::new(10.0, 20.0, 30.0, 40.0);
        let mut list = DrawList::new();
        platform.draw(&mut list);
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::FillRect {
                    rect: platform.rect,
                    color: colors::PLATFORM
                },
                DrawCommand::StrokeRect {
                    rect: platform.rect,
                    color: colors::PLATFORM_OUTLINE
                },
            ]
        );
    }
}
