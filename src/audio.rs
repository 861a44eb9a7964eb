use crate::core::pad::{PadPlanner, PadState};
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// The ambient pad: three detuned sine voices through one master gain. The
/// AudioContext is created on first use and reused for the page lifetime;
/// the planner guarantees at most one set of voices is alive.
pub struct AmbientPad {
    planner: PadPlanner,
    audio_ctx: Option<web::AudioContext>,
    base_gain: Option<web::GainNode>,
    oscillators: Vec<web::OscillatorNode>,
}

impl AmbientPad {
    pub fn new() -> Self {
        Self {
            planner: PadPlanner::new(),
            audio_ctx: None,
            base_gain: None,
            oscillators: Vec::new(),
        }
    }

    pub fn sounding(&self) -> bool {
        self.planner.state() == PadState::Sounding
    }

    /// Bring the pad up: build the graph and ramp the master gain in. No-op
    /// while already sounding. Missing WebAudio support degrades to silence.
    pub fn enable(&mut self) {
        if self.audio_ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.audio_ctx = Some(ctx),
                Err(e) => {
                    log::debug!("[audio] AudioContext unavailable: {:?}", e);
                    return;
                }
            }
        }
        let Some(ctx) = self.audio_ctx.clone() else {
            return;
        };
        let Some(plan) = self.planner.enable(ctx.current_time()) else {
            return;
        };
        _ = ctx.resume();

        let Ok(base) = create_gain(&ctx, 0.0, "pad base") else {
            return;
        };
        _ = base.connect_with_audio_node(&ctx.destination());
        for voice in plan.voices.iter() {
            let Ok(osc) = web::OscillatorNode::new(&ctx) else {
                log::debug!("[audio] OscillatorNode unavailable");
                continue;
            };
            osc.set_type(web::OscillatorType::Sine);
            osc.frequency().set_value(voice.frequency_hz);
            osc.detune().set_value(voice.detune_cents);
            _ = osc.connect_with_audio_node(&base);
            _ = osc.start();
            self.oscillators.push(osc);
        }
        let now = ctx.current_time();
        _ = base.gain().set_value_at_time(0.0, now);
        _ = base.gain().linear_ramp_to_value_at_time(plan.level, plan.attack_end);
        self.base_gain = Some(base);
        log::info!("[audio] pad up, {} voices", self.oscillators.len());
    }

    /// Fade the pad out: cancel pending automation, ramp to zero, schedule
    /// every oscillator's stop at the ramp end, then suspend the context.
    /// No-op while already silent.
    pub fn disable(&mut self) {
        let Some(ctx) = self.audio_ctx.clone() else {
            return;
        };
        let Some(plan) = self.planner.disable(ctx.current_time()) else {
            return;
        };
        if let Some(base) = self.base_gain.take() {
            let now = ctx.current_time();
            _ = base.gain().cancel_scheduled_values(now);
            _ = base.gain().linear_ramp_to_value_at_time(0.0, plan.release_end);
        }
        for osc in self.oscillators.drain(..) {
            _ = osc.stop_with_when(plan.release_end);
        }
        _ = ctx.suspend();
        log::info!("[audio] pad down");
    }
}
