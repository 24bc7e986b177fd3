//! Audio back end using the Web Audio API
//!
//! Procedurally generated voices - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::{AudioService, MusicTrack, SoundBank, SoundEffect, Tone, Waveform};

/// Web Audio device
pub struct WebAudio {
    ctx: Option<AudioContext>,
    bank: SoundBank,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Oscillators of the running music track
    music: Vec<(OscillatorNode, GainNode, f32)>,
}

impl WebAudio {
    pub fn new(bank: SoundBank, sfx_volume: f32, music_volume: f32) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            bank,
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
            music_volume: music_volume.clamp(0.0, 1.0),
            muted: false,
            music: Vec::new(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Mute/unmute all audio, including running music
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let level = if muted { 0.0 } else { self.music_volume };
        for (_, gain, base) in &self.music {
            gain.gain().set_value(level * base);
        }
    }

    fn context(&self) -> Option<&AudioContext> {
        let ctx = self.ctx.as_ref()?;
        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    /// Create an oscillator with gain envelope
    fn create_osc(ctx: &AudioContext, tone: &Tone) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(match tone.wave {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Triangle => OscillatorType::Triangle,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
        });
        osc.frequency().set_value(tone.freq_start);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// One-shot tone with exponential decay
    fn play_tone(ctx: &AudioContext, tone: &Tone, vol: f32) {
        let Some((osc, gain)) = Self::create_osc(ctx, tone) else {
            return;
        };
        let t = ctx.current_time() + tone.delay;

        gain.gain().set_value_at_time(vol * tone.gain, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
            .ok();
        osc.frequency().set_value_at_time(tone.freq_start, t).ok();
        if tone.freq_end != tone.freq_start {
            osc.frequency()
                .exponential_ramp_to_value_at_time(tone.freq_end, t + tone.duration)
                .ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + tone.duration + 0.05).ok();
    }
}

impl AudioService for WebAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted || self.sfx_volume <= 0.0 {
            return;
        }
        let voice = match self.bank.effect(effect) {
            Ok(voice) => voice,
            Err(e) => {
                log::warn!("Skipping playback: {}", e);
                return;
            }
        };
        let Some(ctx) = self.context() else { return };
        for tone in voice {
            Self::play_tone(ctx, tone, self.sfx_volume);
        }
    }

    fn play_music(&mut self, track: MusicTrack) {
        self.stop_music();
        let voice = match self.bank.music(track) {
            Ok(voice) => voice.to_vec(),
            Err(e) => {
                log::warn!("Skipping music: {}", e);
                return;
            }
        };
        let Some(ctx) = self.context() else { return };
        let level = if self.muted { 0.0 } else { self.music_volume };

        let mut nodes = Vec::with_capacity(voice.len());
        for tone in &voice {
            if let Some((osc, gain)) = Self::create_osc(ctx, tone) {
                gain.gain().set_value(level * tone.gain);
                if osc.start().is_ok() {
                    nodes.push((osc, gain, tone.gain));
                }
            }
        }
        log::info!("Music '{}' started", track.name());
        self.music = nodes;
    }

    fn stop_music(&mut self) {
        for (osc, _, _) in self.music.drain(..) {
            osc.stop().ok();
        }
    }
}
