//! Per-phase screens
//!
//! `draw` renders whatever the current phase shows into any `Canvas`.

use glam::Vec2;

use crate::assets::BackgroundId;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SUBTITLE, TITLE};
use crate::renderer::draw::{Canvas, TextStyle};
use crate::renderer::vertex::colors;
use crate::sim::{Character, GamePhase, GameState, World};

/// Presentation switches that do not affect the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenOptions {
    pub show_hitboxes: bool,
}

pub fn draw(state: &GameState, canvas: &mut impl Canvas, options: ScreenOptions) {
    canvas.clear(colors::BACKGROUND);
    match state.phase {
        GamePhase::Menu => draw_menu(state, canvas),
        GamePhase::Playing => {
            if let Some(world) = &state.world {
                draw_world(world, canvas, options);
            }
        }
        GamePhase::GameOver => draw_game_over(canvas),
    }
}

fn draw_menu(state: &GameState, canvas: &mut impl Canvas) {
    canvas.background(BackgroundId::Menu);
    canvas.text(
        TITLE,
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 8.0),
        TextStyle::centered(60.0, colors::TITLE).with_outline(1.2, colors::TITLE_OUTLINE),
    );
    canvas.text(
        SUBTITLE,
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 5.3),
        TextStyle::centered(40.0, colors::SUBTITLE).with_outline(3.0, colors::SUBTITLE_OUTLINE),
    );
    state.menu.draw(canvas);

    let status = if state.music_on { "ON" } else { "OFF" };
    canvas.text(
        &format!("Music: {}", status),
        Vec2::new(10.0, 10.0),
        TextStyle::top_left(20.0, colors::WHITE),
    );
}

fn draw_world(world: &World, canvas: &mut impl Canvas, options: ScreenOptions) {
    canvas.background(BackgroundId::Game);
    for platform in &world.platforms {
        platform.draw(canvas);
    }
    draw_character(&world.hero, canvas, options);
    for enemy in &world.enemies {
        draw_character(enemy, canvas, options);
    }
    // No scoring yet; the HUD slot is fixed
    canvas.text(
        "SCORE: 0",
        Vec2::new(SCREEN_WIDTH - 150.0, 10.0),
        TextStyle::top_left(30.0, colors::WHITE),
    );
}

fn draw_character(character: &Character, canvas: &mut impl Canvas, options: ScreenOptions) {
    let rect = character.body.rect();
    canvas.sprite(character.sprite(), rect, character.body.facing.flip_x());
    if options.show_hitboxes {
        canvas.stroke_rect(rect, colors::HITBOX);
    }
}

fn draw_game_over(canvas: &mut impl Canvas) {
    canvas.background(BackgroundId::GameOver);
    canvas.text(
        "GAME OVER",
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        TextStyle::centered(80.0, colors::GAME_OVER).with_outline(2.0, colors::BLACK),
    );
    canvas.text(
        "Press R to restart or Esc for the menu",
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 70.0),
        TextStyle::centered(30.0, colors::WHITE).with_outline(1.0, colors::BLACK),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw::{DrawCommand, DrawList};
    use crate::sim::LossCause;
    use crate::tuning::Tuning;

    fn backgrounds(list: &DrawList) -> Vec<BackgroundId> {
        list.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Background { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_menu_screen() {
        let state = GameState::new(Tuning::default(), false);
        let mut list = DrawList::new();
        draw(&state, &mut list, ScreenOptions::default());

        assert_eq!(backgrounds(&list), vec![BackgroundId::Menu]);
        let texts: Vec<_> = list.texts().map(|(t, _, _)| t.to_string()).collect();
        assert!(texts.contains(&TITLE.to_string()));
        assert!(texts.contains(&"Start".to_string()));
        assert!(texts.contains(&"Music: OFF".to_string()));
    }

    #[test]
    fn test_playing_screen_draws_every_entity() {
        let mut state = GameState::new(Tuning::default(), true);
        state.start();
        let mut list = DrawList::new();
        draw(&state, &mut list, ScreenOptions::default());

        let sprites = list
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Sprite { .. }))
            .count();
        let fills = list
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(sprites, 3);
        assert_eq!(fills, 4);
        assert!(list.texts().any(|(t, _, _)| t == "SCORE: 0"));
    }

    #[test]
    fn test_hitboxes_option_outlines_characters() {
        let mut state = GameState::new(Tuning::default(), true);
        state.start();

        let count_strokes = |options| {
            let mut list = DrawList::new();
            draw(&state, &mut list, options);
            list.commands()
                .iter()
                .filter(|cmd| matches!(cmd, DrawCommand::StrokeRect { .. }))
                .count()
        };
        let plain = count_strokes(ScreenOptions::default());
        let debug = count_strokes(ScreenOptions {
            show_hitboxes: true,
        });
        assert_eq!(debug, plain + 3);
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::new(Tuning::default(), true);
        state.start();
        state.game_over(LossCause::Caught);
        let mut list = DrawList::new();
        draw(&state, &mut list, ScreenOptions::default());

        assert_eq!(backgrounds(&list), vec![BackgroundId::GameOver]);
        assert!(list.texts().any(|(t, _, _)| t == "GAME OVER"));
        assert!(!list.commands().iter().any(|cmd| matches!(cmd, DrawCommand::Sprite { .. })));
    }
}
