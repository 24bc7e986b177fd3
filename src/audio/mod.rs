//! Audio cues, sound bank and back ends
//!
//! The simulation never talks to an audio device. It queues `AudioCue`s,
//! which the front end drains into an `AudioService`. Sounds are procedural
//! voices looked up by id in a `SoundBank`; an id without a voice is logged
//! and skipped.

use std::collections::HashMap;

use crate::assets::AssetError;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Sound effect ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Hero leaves the ground
    Jump,
    /// Hero touched an enemy or fell off the screen
    Hit,
}

impl SoundEffect {
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Hit => "hit",
        }
    }
}

/// Background music ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Theme,
}

impl MusicTrack {
    pub fn name(self) -> &'static str {
        match self {
            MusicTrack::Theme => "music",
        }
    }
}

/// A fire-and-forget audio request emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Play(SoundEffect),
    PlayMusic(MusicTrack),
    StopMusic,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One oscillator of a voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Waveform,
    pub freq_start: f32,
    /// Frequency reached at the end of the tone (exponential ramp)
    pub freq_end: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
    /// Seconds after trigger
    pub delay: f64,
    /// Seconds; 0 sustains until stopped (music)
    pub duration: f64,
}

impl Tone {
    const fn new(wave: Waveform, freq_start: f32, freq_end: f32, gain: f32, delay: f64, duration: f64) -> Self {
        Self {
            wave,
            freq_start,
            freq_end,
            gain,
            delay,
            duration,
        }
    }

    pub fn sustained(&self) -> bool {
        self.duration <= 0.0
    }
}

/// Explicit id → voice mapping
#[derive(Debug, Clone)]
pub struct SoundBank {
    effects: HashMap<SoundEffect, Vec<Tone>>,
    music: HashMap<MusicTrack, Vec<Tone>>,
}

impl Default for SoundBank {
    fn default() -> Self {
        use Waveform::*;

        let effects = HashMap::from([
            // Jump - quick upward chirp
            (
                SoundEffect::Jump,
                vec![
                    Tone::new(Square, 220.0, 660.0, 0.15, 0.0, 0.15),
                    Tone::new(Sine, 440.0, 880.0, 0.2, 0.0, 0.12),
                ],
            ),
            // Hit - descending thud with a noisy crack
            (
                SoundEffect::Hit,
                vec![
                    Tone::new(Sawtooth, 300.0, 40.0, 0.4, 0.0, 0.4),
                    Tone::new(Square, 1200.0, 200.0, 0.15, 0.0, 0.1),
                    Tone::new(Sine, 80.0, 40.0, 0.4, 0.05, 0.3),
                ],
            ),
        ]);

        // Theme - a soft sustained chord
        let music = HashMap::from([(
            MusicTrack::Theme,
            vec![
                Tone::new(Sine, 110.0, 110.0, 0.15, 0.0, 0.0),
                Tone::new(Triangle, 164.8, 164.8, 0.08, 0.0, 0.0),
                Tone::new(Sine, 220.0, 220.0, 0.05, 0.0, 0.0),
            ],
        )]);

        Self { effects, music }
    }
}

impl SoundBank {
    /// Remove a sound effect (e.g. asset not shipped)
    pub fn without_effect(mut self, effect: SoundEffect) -> Self {
        self.effects.remove(&effect);
        self
    }

    /// Remove a music track
    pub fn without_music(mut self, track: MusicTrack) -> Self {
        self.music.remove(&track);
        self
    }

    pub fn effect(&self, effect: SoundEffect) -> Result<&[Tone], AssetError> {
        self.effects
            .get(&effect)
            .map(Vec::as_slice)
            .ok_or(AssetError::MissingSound(effect))
    }

    pub fn music(&self, track: MusicTrack) -> Result<&[Tone], AssetError> {
        self.music
            .get(&track)
            .map(Vec::as_slice)
            .ok_or(AssetError::MissingMusic(track))
    }
}

/// Audio device seen by the game; every call is fire-and-forget
pub trait AudioService {
    fn play(&mut self, effect: SoundEffect);
    fn play_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
}

/// Forward queued cues to an audio service, in order
pub fn dispatch<I>(cues: I, audio: &mut dyn AudioService)
where
    I: IntoIterator<Item = AudioCue>,
{
    for cue in cues {
        match cue {
            AudioCue::Play(effect) => audio.play(effect),
            AudioCue::PlayMusic(track) => audio.play_music(track),
            AudioCue::StopMusic => audio.stop_music(),
        }
    }
}

/// Audio back end without a device: resolves voices and records what played
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    bank: SoundBank,
    /// Cues that resolved to a voice, in order
    pub played: Vec<AudioCue>,
    /// Track currently "playing"
    pub music: Option<MusicTrack>,
}

impl HeadlessAudio {
    pub fn new(bank: SoundBank) -> Self {
        Self {
            bank,
            played: Vec::new(),
            music: None,
        }
    }
}

impl AudioService for HeadlessAudio {
    fn play(&mut self, effect: SoundEffect) {
        match self.bank.effect(effect) {
            Ok(voice) => {
                log::debug!("play {} ({} tones)", effect.name(), voice.len());
                self.played.push(AudioCue::Play(effect));
            }
            Err(e) => log::warn!("Skipping playback: {}", e),
        }
    }

    fn play_music(&mut self, track: MusicTrack) {
        match self.bank.music(track) {
            Ok(_) => {
                log::debug!("music {}", track.name());
                self.music = Some(track);
                self.played.push(AudioCue::PlayMusic(track));
            }
            Err(e) => log::warn!("Skipping music: {}", e),
        }
    }

    fn stop_music(&mut self) {
        self.music = None;
        self.played.push(AudioCue::StopMusic);
    }
}
