//! Game state and phase transitions
//!
//! Everything the game mutates lives in `GameState`: the phase, the music
//! toggle, the current world and the queue of audio cues for the front end.

use super::character::Character;
use super::level::{Level, Platform};
use crate::audio::{AudioCue, MusicTrack, SoundEffect};
use crate::tuning::Tuning;
use crate::ui::menu::{Menu, MenuAction};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen with buttons
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or cancel
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Hero touched an enemy
    Caught,
    /// Hero dropped below the screen
    Fell,
}

/// Per-run entities, rebuilt every time play starts
#[derive(Debug, Clone)]
pub struct World {
    pub hero: Character,
    pub enemies: Vec<Character>,
    pub platforms: Vec<Platform>,
}

impl World {
    pub fn new(level: &Level, tuning: &Tuning) -> Self {
        Self {
            hero: Character::hero(level.hero_spawn, tuning),
            enemies: level
                .enemies
                .iter()
                .map(|spawn| Character::enemy(spawn.pos, spawn.range, tuning))
                .collect(),
            platforms: level.platforms.clone(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Audio on/off toggle
    pub music_on: bool,
    /// Present from the first start onwards
    pub world: Option<World>,
    pub menu: Menu,
    pub level: Level,
    pub tuning: Tuning,
    /// Set by the menu's exit button; the front end stops its loop
    pub quit_requested: bool,
    pub last_loss: Option<LossCause>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Audio requests not yet handed to the front end
    cues: Vec<AudioCue>,
}

impl GameState {
    /// Create the game at the menu; menu music starts if enabled
    pub fn new(tuning: Tuning, music_on: bool) -> Self {
        let mut state = Self {
            phase: GamePhase::Menu,
            music_on,
            world: None,
            menu: Menu::standard(),
            level: Level::standard(),
            tuning,
            quit_requested: false,
            last_loss: None,
            time_ticks: 0,
            cues: Vec::new(),
        };
        state.cue_music();
        state
    }

    /// Take pending audio cues, oldest first
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    /// Queue a sound effect if audio is enabled
    pub(crate) fn cue_sound(&mut self, effect: SoundEffect) {
        if self.music_on {
            self.cues.push(AudioCue::Play(effect));
        }
    }

    /// Queue the theme if audio is enabled
    fn cue_music(&mut self) {
        if self.music_on {
            self.cues.push(AudioCue::PlayMusic(MusicTrack::Theme));
        }
    }

    /// Enter PLAYING with a fresh hero, platforms and enemies
    pub fn start(&mut self) {
        log::info!("Starting run (from {:?})", self.phase);
        self.world = Some(World::new(&self.level, &self.tuning));
        self.phase = GamePhase::Playing;
        self.last_loss = None;
        self.cue_music();
    }

    /// End the run: hit sound, music stops
    pub fn game_over(&mut self, cause: LossCause) {
        log::info!("Game over: {:?}", cause);
        self.phase = GamePhase::GameOver;
        self.last_loss = Some(cause);
        self.cue_sound(SoundEffect::Hit);
        self.cues.push(AudioCue::StopMusic);
    }

    /// Back to the menu; the music toggle is left as it is
    pub fn return_to_menu(&mut self) {
        log::info!("Returning to menu");
        self.phase = GamePhase::Menu;
        self.cue_music();
    }

    /// Flip the audio toggle and start or stop the music right away
    pub fn toggle_music(&mut self) {
        self.music_on = !self.music_on;
        log::info!("Music {}", if self.music_on { "on" } else { "off" });
        if self.music_on {
            self.cue_music();
        } else {
            self.cues.push(AudioCue::StopMusic);
        }
    }

    pub fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Start => self.start(),
            MenuAction::ToggleMusic => self.toggle_music(),
            MenuAction::Exit => {
                log::info!("Exit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Pointer press in screen coordinates. Only the menu reacts; returns
    /// true when a button handled it.
    pub fn pointer_down(&mut self, pos: glam::Vec2) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        match self.menu.click(pos) {
            Some(action) => {
                self.apply_menu_action(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu_with_music() {
        let mut state = GameState::new(Tuning::default(), true);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.world.is_none());
        assert_eq!(state.drain_cues(), vec![AudioCue::PlayMusic(MusicTrack::Theme)]);
        assert!(state.drain_cues().is_empty());
    }

    #[test]
    fn test_muted_state_queues_nothing() {
        let mut state = GameState::new(Tuning::default(), false);
        state.start();
        state.game_over(LossCause::Fell);
        // Stop is always safe to send
        assert_eq!(state.drain_cues(), vec![AudioCue::StopMusic]);
    }

    #[test]
    fn test_toggle_music() {
        let mut state = GameState::new(Tuning::default(), true);
        state.drain_cues();

        state.toggle_music();
        assert!(!state.music_on);
        assert_eq!(state.drain_cues(), vec![AudioCue::StopMusic]);

        state.toggle_music();
        assert!(state.music_on);
        assert_eq!(state.drain_cues(), vec![AudioCue::PlayMusic(MusicTrack::Theme)]);
    }

    #[test]
    fn test_return_to_menu_keeps_toggle() {
        let mut state = GameState::new(Tuning::default(), false);
        state.start();
        state.game_over(LossCause::Caught);
        state.return_to_menu();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.music_on);
    }

    #[test]
    fn test_exit_action_requests_quit() {
        let mut state = GameState::new(Tuning::default(), true);
        state.apply_menu_action(MenuAction::Exit);
        assert!(state.quit_requested);
        assert_eq!(state.phase, GamePhase::Menu);
    }
}
