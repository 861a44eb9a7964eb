// Star field generation. Runs once at startup; the result is rendered as
// absolutely positioned spans and never mutated afterwards.

use rand::Rng;

pub const STAR_COUNT: usize = 42;

pub const STAR_SIZE_MIN_PX: f64 = 1.2;
pub const STAR_SIZE_SPAN_PX: f64 = 3.0;
pub const STAR_TWINKLE_DELAY_MAX_SEC: f64 = 0.4;

/// One decorative star: percentage position within the layer, diameter, and
/// a phase offset for the CSS twinkle loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub top_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub twinkle_delay_sec: f64,
}

pub fn generate_stars(count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            top_pct: rng.gen::<f64>() * 100.0,
            left_pct: rng.gen::<f64>() * 100.0,
            size_px: STAR_SIZE_MIN_PX + rng.gen::<f64>() * STAR_SIZE_SPAN_PX,
            twinkle_delay_sec: rng.gen::<f64>() * STAR_TWINKLE_DELAY_MAX_SEC,
        })
        .collect()
}
