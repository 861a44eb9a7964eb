// Tween scheduling and sampling. Pure and deterministic: a `Timeline` is a
// list of `(channel, from..to, start, duration, ease)` entries over a base
// style, and a `TweenPlayer` moves a playhead through it frame by frame.

use smallvec::SmallVec;

/// Easing curves used by the page's schedules. Input is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadIn,
    CubicOut,
    QuartOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::QuartOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Animatable style channels. Translations are in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
}

/// A resolved visual state, ready to be written to an element's style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Style {
    /// Fully visible, untransformed.
    pub const NEUTRAL: Style = Style {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Opacity => self.opacity = value,
            Channel::TranslateX => self.translate_x = value,
            Channel::TranslateY => self.translate_y = value,
            Channel::Scale => self.scale = value,
        }
    }
}

/// One schedule entry: drive `channel` from `from` to `to`, starting at
/// `start` seconds into the timeline, over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }

    /// Value at absolute timeline time `t`. Zero-duration tweens snap to
    /// their end value once started.
    pub fn value_at(&self, t: f32) -> f32 {
        let progress = if self.duration > 0.0 {
            (t - self.start) / self.duration
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }
}

/// An ordered set of tweens over a base style. Sampling is stateless, so the
/// same timeline can be played forward, reversed, or scrubbed.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub base: Style,
    pub tweens: SmallVec<[Tween; 4]>,
}

impl Timeline {
    pub fn new(base: Style) -> Self {
        Self {
            base,
            tweens: SmallVec::new(),
        }
    }

    pub fn with(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Time at which the last tween finishes.
    pub fn duration(&self) -> f32 {
        self.tweens
            .iter()
            .map(Tween::end)
            .fold(0.0_f32, f32::max)
    }

    /// Resolve the style at time `t`. Per channel, the started tween with the
    /// greatest start time wins (later list entries break ties); channels with
    /// no started tween keep their base value.
    pub fn sample(&self, t: f32) -> Style {
        let mut style = self.base;
        for channel in [
            Channel::Opacity,
            Channel::TranslateX,
            Channel::TranslateY,
            Channel::Scale,
        ] {
            let mut winner: Option<&Tween> = None;
            for tween in self.tweens.iter() {
                if tween.channel != channel || tween.start > t {
                    continue;
                }
                match winner {
                    Some(w) if tween.start < w.start => {}
                    _ => winner = Some(tween),
                }
            }
            if let Some(w) = winner {
                style.set(channel, w.value_at(t));
            }
        }
        style
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Playback head over one timeline. New players rest at the hidden end
/// (head 0, reversed) until `play` is called.
#[derive(Clone, Debug)]
pub struct TweenPlayer {
    pub timeline: Timeline,
    head: f32,
    direction: Direction,
    delay_left: f32,
}

impl TweenPlayer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            head: 0.0,
            direction: Direction::Reverse,
            delay_left: 0.0,
        }
    }

    /// Run toward the end, after an optional lead-in delay. Picks up from the
    /// current head, so interrupting a reverse resumes mid-flight.
    pub fn play(&mut self, delay: f32) {
        self.direction = Direction::Forward;
        self.delay_left = delay.max(0.0);
    }

    /// Run back toward the start. Any pending lead-in delay is discarded.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.delay_left = 0.0;
    }

    /// Snap to the fully-played state.
    pub fn complete(&mut self) {
        self.direction = Direction::Forward;
        self.delay_left = 0.0;
        self.head = self.timeline.duration();
    }

    /// Advance by `dt` seconds and resolve the current style. The lead-in
    /// delay is consumed first; leftover time moves the head.
    pub fn step(&mut self, dt: f32) -> Style {
        let mut dt = dt.max(0.0);
        if self.delay_left > 0.0 {
            let consumed = self.delay_left.min(dt);
            self.delay_left -= consumed;
            dt -= consumed;
        }
        match self.direction {
            Direction::Forward => {
                self.head = (self.head + dt).min(self.timeline.duration());
            }
            Direction::Reverse => {
                self.head = (self.head - dt).max(0.0);
            }
        }
        self.timeline.sample(self.head)
    }

    /// True when stepping further would not change the style.
    pub fn at_rest(&self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.delay_left <= 0.0 && self.head >= self.timeline.duration()
            }
            Direction::Reverse => self.head <= 0.0,
        }
    }

    /// True once the schedule has fully played out forward.
    pub fn finished(&self) -> bool {
        self.direction == Direction::Forward
            && self.delay_left <= 0.0
            && self.head >= self.timeline.duration()
    }

    pub fn head(&self) -> f32 {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
