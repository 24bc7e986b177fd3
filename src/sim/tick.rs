//! Fixed timestep simulation tick
//!
//! Dispatches on the game phase and advances the world by one frame.

use super::collision::bodies_overlap;
use super::state::{GamePhase, GameState, LossCause};
use crate::audio::SoundEffect;
use crate::consts::SCREEN_HEIGHT;

/// Held-key state for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump
    pub up: bool,
    /// Restart after game over
    pub restart: bool,
    /// Leave game over for the menu
    pub cancel: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {}
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::GameOver => {
            // Both in one tick: the fresh run is set up, then left for the menu
            if input.restart {
                state.start();
            }
            if input.cancel {
                state.return_to_menu();
            }
        }
    }
}

/// Hero, then enemies, then loss checks - all within the same tick
fn tick_playing(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let Some(world) = state.world.as_mut() else {
        return;
    };

    let hero_events = world.hero.update(input, &world.platforms, tuning);
    for enemy in &mut world.enemies {
        enemy.update(input, &world.platforms, tuning);
    }

    let caught = world
        .enemies
        .iter()
        .any(|enemy| bodies_overlap(&world.hero.body, &enemy.body));
    let fell = world.hero.body.pos.y > SCREEN_HEIGHT + tuning.fall_margin;

    if hero_events.jumped {
        state.cue_sound(SoundEffect::Jump);
    }
    if caught {
        state.game_over(LossCause::Caught);
    } else if fell {
        state.game_over(LossCause::Fell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioCue, MusicTrack};
    use crate::sim::level::Platform;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Tuning::default(), true);
        state.start();
        state.drain_cues();
        state
    }

    #[test]
    fn test_menu_ignores_keys() {
        let mut state = GameState::new(Tuning::default(), true);
        let input = TickInput {
            restart: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.world.is_none());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_hero_touching_enemy_ends_run_same_tick() {
        let mut state = playing_state();
        {
            let world = state.world.as_mut().unwrap();
            let enemy_pos = world.enemies[0].body.pos;
            world.hero.body.pos = enemy_pos + Vec2::new(4.0, 0.0);
        }

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.last_loss, Some(LossCause::Caught));
        assert_eq!(
            state.drain_cues(),
            vec![AudioCue::Play(SoundEffect::Hit), AudioCue::StopMusic]
        );
    }

    #[test]
    fn test_falling_off_screen_ends_run() {
        let mut state = playing_state();
        {
            let world = state.world.as_mut().unwrap();
            world.platforms.clear();
            world.enemies.clear();
            world.hero.body.pos.y = SCREEN_HEIGHT + 45.0;
        }

        tick(&mut state, &TickInput::default());
        // 45 + 0.5 is still within the margin
        assert_eq!(state.phase, GamePhase::Playing);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.last_loss, Some(LossCause::Fell));
        assert!(state.drain_cues().contains(&AudioCue::StopMusic));
    }

    #[test]
    fn test_jump_cues_sound() {
        let mut state = playing_state();
        // Let the hero settle on the ground
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.world.as_ref().unwrap().hero.body.grounded);
        state.drain_cues();

        let jump = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut state, &jump);
        assert_eq!(state.drain_cues(), vec![AudioCue::Play(SoundEffect::Jump)]);
    }

    #[test]
    fn test_game_over_restart_and_cancel() {
        let mut state = playing_state();
        state.game_over(LossCause::Fell);
        state.drain_cues();

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_cues(), vec![AudioCue::PlayMusic(MusicTrack::Theme)]);

        state.game_over(LossCause::Fell);
        let cancel = TickInput {
            cancel: true,
            ..Default::default()
        };
        tick(&mut state, &cancel);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.music_on);
    }

    #[test]
    fn test_restart_and_cancel_together_end_at_menu() {
        let mut state = playing_state();
        state.world.as_mut().unwrap().hero.body.pos = Vec2::new(700.0, 100.0);
        state.game_over(LossCause::Caught);
        state.drain_cues();

        let both = TickInput {
            restart: true,
            cancel: true,
            ..Default::default()
        };
        tick(&mut state, &both);

        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.last_loss, None);
        let spawn = crate::sim::level::Level::standard().hero_spawn;
        assert_eq!(state.world.as_ref().unwrap().hero.body.pos, spawn);
        assert_eq!(
            state.drain_cues().last(),
            Some(&AudioCue::PlayMusic(MusicTrack::Theme))
        );
    }

    #[test]
    fn test_start_resets_world() {
        let level_hero = crate::sim::level::Level::standard().hero_spawn;
        let mut state = playing_state();
        let fresh = state.world.clone().unwrap();

        // Mess the world up, then lose
        {
            let world = state.world.as_mut().unwrap();
            world.hero.body.pos = Vec2::new(700.0, 100.0);
            world.enemies.pop();
            world.platforms.push(Platform::new(0.0, 0.0, 10.0, 10.0));
        }
        state.game_over(LossCause::Caught);

        // Restart from game over
        state.start();
        let world = state.world.as_ref().unwrap();
        assert_eq!(world.hero.body.pos, level_hero);
        assert_eq!(world.hero.body.vel, Vec2::ZERO);
        assert_eq!(world.platforms, fresh.platforms);
        assert_eq!(world.enemies.len(), fresh.enemies.len());
        for (a, b) in world.enemies.iter().zip(&fresh.enemies) {
            assert_eq!(a.body, b.body);
            assert_eq!(a.control, b.control);
        }

        // Restart from the menu gives the same layout
        state.return_to_menu();
        state.start();
        let again = state.world.as_ref().unwrap();
        assert_eq!(again.hero.body, fresh.hero.body);
        assert_eq!(again.platforms, fresh.platforms);
    }

    #[test]
    fn test_standard_level_is_survivable_standing_still() {
        // Neither enemy patrol reaches the hero spawn
        let mut state = playing_state();
        for _ in 0..600 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
