//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    // Level
    pub const PLATFORM: [f32; 4] = [100.0 / 255.0, 50.0 / 255.0, 0.0, 1.0]; // Brown
    pub const PLATFORM_OUTLINE: [f32; 4] = WHITE;
    pub const HITBOX: [f32; 4] = [1.0, 0.2, 0.8, 1.0];

    // Characters
    pub const HERO: [f32; 4] = [0.2, 0.45, 0.9, 1.0];
    pub const HERO_ACCENT: [f32; 4] = [1.0, 0.85, 0.6, 1.0];
    pub const ENEMY: [f32; 4] = [0.75, 0.15, 0.15, 1.0];
    pub const ENEMY_ACCENT: [f32; 4] = [1.0, 0.9, 0.2, 1.0];

    // UI
    pub const BUTTON: [f32; 4] = [50.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0, 1.0];
    pub const TITLE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TITLE_OUTLINE: [f32; 4] = [210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0, 1.0];
    pub const SUBTITLE: [f32; 4] = [1.0, 1.0, 150.0 / 255.0, 1.0];
    pub const SUBTITLE_OUTLINE: [f32; 4] = [101.0 / 255.0, 67.0 / 255.0, 33.0 / 255.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    // Backdrops (top, bottom of the gradient)
    pub const MENU_SKY_TOP: [f32; 4] = [0.05, 0.25, 0.15, 1.0];
    pub const MENU_SKY_BOTTOM: [f32; 4] = [0.02, 0.1, 0.05, 1.0];
    pub const GAME_SKY_TOP: [f32; 4] = [0.35, 0.65, 0.9, 1.0];
    pub const GAME_SKY_BOTTOM: [f32; 4] = [0.15, 0.45, 0.25, 1.0];
    pub const GAME_OVER_TOP: [f32; 4] = [0.15, 0.0, 0.0, 1.0];
    pub const GAME_OVER_BOTTOM: [f32; 4] = [0.02, 0.0, 0.02, 1.0];
}
