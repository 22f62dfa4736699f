//! Audio system using Web Audio API
//!
//! Short procedural blips, no sound files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::game::TickUpdate;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Game started or restarted
    Start,
    /// Snake ate food
    Eat,
    /// Tick interval shrank
    SpeedUp,
    /// Pause toggled
    Pause,
    /// Run ended
    GameOver,
    /// Run ended with a new best score
    HighScore,
}

impl SoundEffect {
    /// Most prominent effect for a tick, if any
    pub fn for_tick(update: &TickUpdate) -> Option<Self> {
        if update.new_record {
            Some(SoundEffect::HighScore)
        } else if update.events.game_over() {
            Some(SoundEffect::GameOver)
        } else if update.events.sped_up {
            Some(SoundEffect::SpeedUp)
        } else if update.events.ate_food {
            Some(SoundEffect::Eat)
        } else {
            None
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let vol = self.volume;
        match effect {
            SoundEffect::Start => self.sweep(ctx, 330.0, 660.0, 0.12, OscillatorType::Triangle, vol * 0.3),
            SoundEffect::Eat => self.blip(ctx, 880.0, 0.06, OscillatorType::Square, vol * 0.15),
            SoundEffect::SpeedUp => {
                self.blip(ctx, 660.0, 0.05, OscillatorType::Square, vol * 0.15);
                self.blip_at(ctx, 990.0, 0.08, 0.06, OscillatorType::Square, vol * 0.15);
            }
            SoundEffect::Pause => self.blip(ctx, 440.0, 0.05, OscillatorType::Sine, vol * 0.25),
            SoundEffect::GameOver => self.sweep(ctx, 400.0, 80.0, 0.5, OscillatorType::Sawtooth, vol * 0.25),
            SoundEffect::HighScore => {
                for (i, freq) in [523.25, 659.25, 783.99, 1046.5].into_iter().enumerate() {
                    self.blip_at(ctx, freq, 0.12, i as f64 * 0.1, OscillatorType::Triangle, vol * 0.25);
                }
            }
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    fn blip(&self, ctx: &AudioContext, freq: f32, len: f64, osc_type: OscillatorType, vol: f32) {
        self.blip_at(ctx, freq, len, 0.0, osc_type, vol);
    }

    /// Fixed-pitch tone starting `delay` seconds from now
    fn blip_at(
        &self,
        ctx: &AudioContext,
        freq: f32,
        len: f64,
        delay: f64,
        osc_type: OscillatorType,
        vol: f32,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + delay;

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + len)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + len + 0.02).ok();
    }

    /// Pitch glide from `from` to `to`
    fn sweep(
        &self,
        ctx: &AudioContext,
        from: f32,
        to: f32,
        len: f64,
        osc_type: OscillatorType,
        vol: f32,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, from, osc_type) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + len)
            .ok();
        osc.frequency().set_value_at_time(from, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(to, t + len)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + len + 0.05).ok();
    }
}
