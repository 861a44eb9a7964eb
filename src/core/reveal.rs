// Scroll-reveal schedules: which elements reveal how, where in the viewport
// they trigger, and what an observer notification should do to the player.

use super::timeline::{Channel, Ease, Style, Timeline, Tween};

pub const STAR_REVEAL_SEC: f32 = 1.2;
pub const PHRASE_REVEAL_SEC: f32 = 1.1;
pub const MOON_REVEAL_SEC: f32 = 1.5;

/// Hidden-state offsets and scale.
pub const PHRASE_RISE_PX: f32 = 60.0;
pub const MOON_RISE_PX: f32 = 40.0;
pub const STAR_HIDDEN_SCALE: f32 = 0.6;

/// Phrase blocks start a little later for each following sibling.
pub const PHRASE_STAGGER_SEC: f32 = 0.12;

/// Categories of scroll-revealed elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Star,
    Phrase,
    MoonOrbit,
}

impl RevealKind {
    /// Viewport-height fraction the element's top must rise above to count as
    /// entered. 1.0 means "any part past the bottom edge".
    pub fn enter_fraction(self) -> f32 {
        match self {
            RevealKind::Star => 1.0,
            RevealKind::Phrase => 0.8,
            RevealKind::MoonOrbit => 0.75,
        }
    }

    /// Lead-in delay for the `index`-th element of this kind.
    pub fn stagger_delay(self, index: usize) -> f32 {
        match self {
            RevealKind::Phrase => PHRASE_STAGGER_SEC * index as f32,
            _ => 0.0,
        }
    }

    /// The hidden-to-visible schedule for this category.
    pub fn timeline(self) -> Timeline {
        match self {
            RevealKind::Star => Timeline::new(Style {
                opacity: 0.0,
                scale: STAR_HIDDEN_SCALE,
                ..Style::NEUTRAL
            })
            .with(Tween {
                channel: Channel::Opacity,
                from: 0.0,
                to: 1.0,
                start: 0.0,
                duration: STAR_REVEAL_SEC,
                ease: Ease::CubicOut,
            })
            .with(Tween {
                channel: Channel::Scale,
                from: STAR_HIDDEN_SCALE,
                to: 1.0,
                start: 0.0,
                duration: STAR_REVEAL_SEC,
                ease: Ease::CubicOut,
            }),
            RevealKind::Phrase => Timeline::new(Style {
                opacity: 0.0,
                translate_y: PHRASE_RISE_PX,
                ..Style::NEUTRAL
            })
            .with(Tween {
                channel: Channel::Opacity,
                from: 0.0,
                to: 1.0,
                start: 0.0,
                duration: PHRASE_REVEAL_SEC,
                ease: Ease::QuartOut,
            })
            .with(Tween {
                channel: Channel::TranslateY,
                from: PHRASE_RISE_PX,
                to: 0.0,
                start: 0.0,
                duration: PHRASE_REVEAL_SEC,
                ease: Ease::QuartOut,
            }),
            RevealKind::MoonOrbit => Timeline::new(Style {
                opacity: 0.0,
                translate_y: MOON_RISE_PX,
                ..Style::NEUTRAL
            })
            .with(Tween {
                channel: Channel::Opacity,
                from: 0.0,
                to: 1.0,
                start: 0.0,
                duration: MOON_REVEAL_SEC,
                ease: Ease::QuartOut,
            })
            .with(Tween {
                channel: Channel::TranslateY,
                from: MOON_RISE_PX,
                to: 0.0,
                start: 0.0,
                duration: MOON_REVEAL_SEC,
                ease: Ease::QuartOut,
            }),
        }
    }
}

/// Bottom root margin, in percent, narrowing the observer's viewport so the
/// trigger line sits at `fraction` of the viewport height.
pub fn root_margin_bottom_pct(fraction: f32) -> f32 {
    -(1.0 - fraction) * 100.0
}

/// What an intersection notification does to the element's player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
    /// Snap to fully played. Covers elements leaving above the viewport and
    /// pages restored with the element already scrolled past.
    Complete,
}

/// Map one observer notification to an action. `top_px` is the element's
/// bounding-rect top relative to the viewport.
pub fn action_for(entering: bool, top_px: f64) -> RevealAction {
    if entering {
        RevealAction::Play
    } else if top_px > 0.0 {
        RevealAction::Reverse
    } else {
        RevealAction::Complete
    }
}
