//! Title menu: a column of buttons

use glam::Vec2;

use super::button::Button;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::draw::Canvas;
use crate::sim::Rect;

/// What a menu button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub buttons: Vec<Button>,
}

impl Menu {
    /// Start, music toggle and exit, stacked in the left fifth of the screen
    pub fn standard() -> Self {
        let x = SCREEN_WIDTH / 5.0 - 100.0;
        let y = SCREEN_HEIGHT / 2.0;
        Self {
            buttons: vec![
                Button::new(Rect::new(x, y - 50.0, 200.0, 50.0), "Start", MenuAction::Start),
                Button::new(
                    Rect::new(x, y + 20.0, 200.0, 50.0),
                    "Music on/off",
                    MenuAction::ToggleMusic,
                ),
                Button::new(Rect::new(x, y + 90.0, 200.0, 50.0), "Exit", MenuAction::Exit),
            ],
        }
    }

    /// First button under the pointer wins
    pub fn click(&self, pos: Vec2) -> Option<MenuAction> {
        self.buttons.iter().find_map(|button| button.is_clicked(pos))
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        for button in &self.buttons {
            button.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_buttons() {
        let menu = Menu::standard();
        let actions: Vec<_> = menu.buttons.iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            vec![MenuAction::Start, MenuAction::ToggleMusic, MenuAction::Exit]
        );
        assert_eq!(menu.click(Vec2::new(100.0, 260.0)), Some(MenuAction::Start));
        assert_eq!(menu.click(Vec2::new(100.0, 330.0)), Some(MenuAction::ToggleMusic));
        assert_eq!(menu.click(Vec2::new(100.0, 400.0)), Some(MenuAction::Exit));
        assert_eq!(menu.click(Vec2::new(600.0, 300.0)), None);
    }

    #[test]
    fn test_only_first_overlapping_button_fires() {
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        let menu = Menu {
            buttons: vec![
                Button::new(area, "a", MenuAction::ToggleMusic),
                Button::new(area, "b", MenuAction::Exit),
            ],
        };
        assert_eq!(menu.click(Vec2::new(50.0, 50.0)), Some(MenuAction::ToggleMusic));
    }
}
