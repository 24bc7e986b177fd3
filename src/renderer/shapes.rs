//! Shape generation for 2D primitives
//!
//! Turns recorded draw calls into triangle-list vertices in screen space.
//! Text is not tessellated; the overlay draws it.

use super::draw::{DrawCommand, DrawList};
use super::vertex::Vertex;
use crate::assets::{AssetCatalog, BackgroundArt, SpriteArt};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Outline thickness in logical pixels
const STROKE_WIDTH: f32 = 2.0;

/// Two triangles covering `rect`, with separate top and bottom colors
fn gradient_quad(rect: Rect, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, top),
        Vertex::new(l, b, bottom),
        Vertex::new(r, t, top),
        Vertex::new(r, t, top),
        Vertex::new(l, b, bottom),
        Vertex::new(r, b, bottom),
    ]
}

/// Generate vertices for a filled rectangle
pub fn quad(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    gradient_quad(rect, color, color)
}

/// Generate vertices for a rectangle outline drawn inside its bounds
pub fn outline(rect: Rect, color: [f32; 4], width: f32) -> Vec<Vertex> {
    let w = width.min(rect.w / 2.0).min(rect.h / 2.0);
    let edges = [
        Rect::new(rect.x, rect.y, rect.w, w),
        Rect::new(rect.x, rect.bottom() - w, rect.w, w),
        Rect::new(rect.x, rect.y + w, w, rect.h - 2.0 * w),
        Rect::new(rect.right() - w, rect.y + w, w, rect.h - 2.0 * w),
    ];
    edges.iter().flat_map(|edge| quad(*edge, color)).collect()
}

/// Generate vertices for a procedural sprite: squashed, bobbed body with an
/// accent stripe toward the facing side
pub fn sprite(art: &SpriteArt, rect: Rect, flip_x: bool) -> Vec<Vertex> {
    let inset = rect.w * art.squash / 2.0;
    let body = Rect::new(rect.x + inset, rect.y + art.bob, rect.w - 2.0 * inset, rect.h);

    let stripe_w = body.w * 0.3;
    let stripe_x = if flip_x {
        body.x + body.w * 0.1
    } else {
        body.right() - body.w * 0.1 - stripe_w
    };
    let stripe = Rect::new(stripe_x, body.y + body.h * 0.2, stripe_w, body.h * 0.15);

    let mut vertices = Vec::with_capacity(12);
    vertices.extend(quad(body, art.body));
    vertices.extend(quad(stripe, art.accent));
    vertices
}

/// Full-screen gradient backdrop
pub fn background(art: &BackgroundArt) -> [Vertex; 6] {
    gradient_quad(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        art.top,
        art.bottom,
    )
}

/// Tessellate a frame's draw list. Unknown sprites and backgrounds are
/// logged and skipped.
pub fn tessellate(list: &DrawList, catalog: &AssetCatalog) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.commands().len() * 12);

    for cmd in list.commands() {
        match cmd {
            DrawCommand::Clear { color } => {
                vertices.extend(quad(Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT), *color));
            }
            DrawCommand::Background { id } => match catalog.background(*id) {
                Ok(art) => vertices.extend(background(art)),
                Err(e) => log::warn!("Skipping draw: {}", e),
            },
            DrawCommand::FillRect { rect, color } => vertices.extend(quad(*rect, *color)),
            DrawCommand::StrokeRect { rect, color } => {
                vertices.extend(outline(*rect, *color, STROKE_WIDTH));
            }
            DrawCommand::Sprite { name, rect, flip_x } => match catalog.sprite(name) {
                Ok(art) => vertices.extend(sprite(art, *rect, *flip_x)),
                Err(e) => log::warn!("Skipping draw: {}", e),
            },
            DrawCommand::Text { .. } => {}
        }
    }

    vertices
}
