//! Draw-call recording
//!
//! Game code draws into a `Canvas`. `DrawList` records the calls so a back
//! end can replay them: shapes and sprites go to the GPU, text goes to the
//! 2D overlay.

use glam::Vec2;

use crate::assets::BackgroundId;
use crate::sim::Rect;

/// How text is positioned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels
    pub size: f32,
    pub color: [f32; 4],
    /// Outline width and color
    pub outline: Option<(f32, [f32; 4])>,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn top_left(size: f32, color: [f32; 4]) -> Self {
        Self {
            size,
            color,
            outline: None,
            anchor: TextAnchor::TopLeft,
        }
    }

    pub fn centered(size: f32, color: [f32; 4]) -> Self {
        Self {
            size,
            color,
            outline: None,
            anchor: TextAnchor::Center,
        }
    }

    pub fn with_outline(mut self, width: f32, color: [f32; 4]) -> Self {
        self.outline = Some((width, color));
        self
    }
}

/// CSS color string for a linear RGBA color, for the 2D text overlay
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Primitive draw calls issued by the game
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]);
    fn background(&mut self, id: BackgroundId);
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    fn stroke_rect(&mut self, rect: Rect, color: [f32; 4]);
    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle);
    /// Blit a sprite by name into `rect`, mirrored when `flip_x`
    fn sprite(&mut self, name: &'static str, rect: Rect, flip_x: bool);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: [f32; 4],
    },
    Background {
        id: BackgroundId,
    },
    FillRect {
        rect: Rect,
        color: [f32; 4],
    },
    StrokeRect {
        rect: Rect,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
    Sprite {
        name: &'static str,
        rect: Rect,
        flip_x: bool,
    },
}

/// Recording canvas, reused frame to frame
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text commands in draw order, as (text, pos, style)
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2, &TextStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, pos, style } => Some((text.as_str(), *pos, style)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: [f32; 4]) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn background(&mut self, id: BackgroundId) {
        self.commands.push(DrawCommand::Background { id });
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }

    fn sprite(&mut self, name: &'static str, rect: Rect, flip_x: bool) {
        self.commands.push(DrawCommand::Sprite { name, rect, flip_x });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rgba() {
        assert_eq!(css_rgba([1.0, 0.0, 0.5, 1.0]), "rgba(255, 0, 128, 1)");
        assert_eq!(css_rgba([2.0, -1.0, 0.0, 0.5]), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_texts_filters_and_keeps_order() {
        let mut list = DrawList::new();
        list.text("one", Vec2::ZERO, TextStyle::top_left(10.0, [1.0; 4]));
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4]);
        list.text("two", Vec2::ONE, TextStyle::centered(20.0, [1.0; 4]));

        let texts: Vec<_> = list.texts().map(|(t, _, _)| t).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(list.commands().len(), 3);

        list.reset();
        assert!(list.commands().is_empty());
    }
}
