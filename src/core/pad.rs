// Ambient pad state machine. Pure: decides what the audio layer should do
// and when, in AudioContext time, without touching WebAudio itself.

/// Frequencies (Hz) and detunes (cents) of the three pad voices. Slight
/// detuning keeps the chord from sounding static.
pub const PAD_VOICES: [PadVoice; 3] = [
    PadVoice {
        frequency_hz: 128.0,
        detune_cents: 4.0,
    },
    PadVoice {
        frequency_hz: 184.0,
        detune_cents: -6.0,
    },
    PadVoice {
        frequency_hz: 246.0,
        detune_cents: 2.0,
    },
];

/// Target master gain while sounding. Deliberately very quiet.
pub const PAD_LEVEL: f32 = 0.04;
/// Linear fade-in duration, seconds.
pub const PAD_ATTACK_SEC: f64 = 1.2;
/// Linear fade-out duration, seconds. Oscillators stop at the ramp end.
pub const PAD_RELEASE_SEC: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadVoice {
    pub frequency_hz: f32,
    pub detune_cents: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PadState {
    #[default]
    Silent,
    Sounding,
}

/// Everything the audio layer needs to bring the pad up: the voices to build
/// and the gain automation endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnablePlan {
    pub voices: [PadVoice; 3],
    pub level: f32,
    pub attack_end: f64,
}

/// Fade-out endpoint; oscillator stops are scheduled here too, never sooner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisablePlan {
    pub release_end: f64,
}

/// Two-state planner. `enable`/`disable` return a plan only on an actual
/// transition, making repeated requests no-ops by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct PadPlanner {
    state: PadState,
}

impl PadPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    /// SILENT -> SOUNDING. `now` is the current AudioContext time.
    pub fn enable(&mut self, now: f64) -> Option<EnablePlan> {
        if self.state == PadState::Sounding {
            return None;
        }
        self.state = PadState::Sounding;
        Some(EnablePlan {
            voices: PAD_VOICES,
            level: PAD_LEVEL,
            attack_end: now + PAD_ATTACK_SEC,
        })
    }

    /// SOUNDING -> SILENT.
    pub fn disable(&mut self, now: f64) -> Option<DisablePlan> {
        if self.state == PadState::Silent {
            return None;
        }
        self.state = PadState::Silent;
        Some(DisablePlan {
            release_end: now + PAD_RELEASE_SEC,
        })
    }
}
