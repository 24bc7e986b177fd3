//! Clickable menu button

use glam::Vec2;

use super::menu::MenuAction;
use crate::renderer::draw::{Canvas, TextStyle};
use crate::renderer::vertex::colors;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: MenuAction,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, colors::BUTTON);
        canvas.stroke_rect(self.rect, colors::WHITE);
        canvas.text(
            &self.label,
            self.rect.center(),
            TextStyle::centered(30.0, colors::WHITE),
        );
    }

    /// The button's action if `pos` falls inside it
    pub fn is_clicked(&self, pos: Vec2) -> Option<MenuAction> {
        self.rect.contains_point(pos).then_some(self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_inside_and_outside() {
        let button = Button::new(Rect::new(100.0, 100.0, 200.0, 50.0), "Start", MenuAction::Start);
        assert_eq!(button.is_clicked(Vec2::new(150.0, 120.0)), Some(MenuAction::Start));
        assert_eq!(button.is_clicked(Vec2::new(99.0, 120.0)), None);
        assert_eq!(button.is_clicked(Vec2::new(150.0, 150.0)), None);
    }
}
