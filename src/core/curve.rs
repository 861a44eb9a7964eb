// Heart-curve geometry and the burst schedule built on top of it. The curve
// is sampled once at startup; every burst reuses the same points.

use rand::Rng;

use super::timeline::{Channel, Ease, Style, Timeline, Tween};

/// Points sampled along the closed curve.
pub const HEART_SEGMENTS: usize = 28;

/// Particles per emission. Targets cycle through the curve points.
pub const BURST_PARTICLE_COUNT: usize = 36;
/// Curve-space to CSS-pixel scale for burst targets.
pub const BURST_RADIUS_PX: f64 = 110.0;
/// Per-axis random offset applied to each target.
pub const BURST_JITTER_PX: f64 = 9.0;

// Burst stage layout, in seconds.
pub const BURST_FADE_IN_SEC: f32 = 0.2;
pub const BURST_TRAVEL_SEC: f32 = 1.4;
pub const BURST_FADE_OUT_SEC: f32 = 0.6;
/// The fade-out starts this long before the travel stage ends.
pub const BURST_FADE_OUT_OVERLAP_SEC: f32 = 0.3;

pub const BURST_SCALE_PEAK: f32 = 1.2;
pub const BURST_SCALE_END: f32 = 0.4;

/// One point of the sampled curve, in unit-ish curve space (y grows downward
/// to match screen coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Sample the classic trigonometric heart, normalized by its widest extent:
/// x(t) = 16 sin³t, y(t) = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t, both
/// divided by 18, with y negated for screen space.
pub fn heart_path(segments: usize) -> Vec<CurvePoint> {
    (0..segments)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / segments as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            CurvePoint {
                x: x / 18.0,
                y: -y / 18.0,
            }
        })
        .collect()
}

/// Pixel-space target for each particle of one emission: curve point
/// `i mod path.len()` scaled by `radius`, plus independent per-axis jitter.
pub fn burst_targets(
    path: &[CurvePoint],
    count: usize,
    radius: f64,
    jitter: f64,
    rng: &mut impl Rng,
) -> Vec<(f64, f64)> {
    if path.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let p = path[i % path.len()];
            let jx = if jitter > 0.0 {
                rng.gen_range(-jitter..jitter)
            } else {
                0.0
            };
            let jy = if jitter > 0.0 {
                rng.gen_range(-jitter..jitter)
            } else {
                0.0
            };
            (p.x * radius + jx, p.y * radius + jy)
        })
        .collect()
}

/// Three-stage schedule for one particle headed to `(target_x, target_y)`:
/// fade in while travelling and swelling, then shrink out shortly before the
/// travel ends. Particles start transparent at natural size.
pub fn particle_timeline(target_x: f32, target_y: f32) -> Timeline {
    let fade_out_start = BURST_TRAVEL_SEC - BURST_FADE_OUT_OVERLAP_SEC;
    Timeline::new(Style {
        opacity: 0.0,
        ..Style::NEUTRAL
    })
    .with(Tween {
        channel: Channel::Opacity,
        from: 0.0,
        to: 1.0,
        start: 0.0,
        duration: BURST_FADE_IN_SEC,
        ease: Ease::CubicOut,
    })
    .with(Tween {
        channel: Channel::TranslateX,
        from: 0.0,
        to: target_x,
        start: 0.0,
        duration: BURST_TRAVEL_SEC,
        ease: Ease::CubicOut,
    })
    .with(Tween {
        channel: Channel::TranslateY,
        from: 0.0,
        to: target_y,
        start: 0.0,
        duration: BURST_TRAVEL_SEC,
        ease: Ease::CubicOut,
    })
    .with(Tween {
        channel: Channel::Scale,
        from: 1.0,
        to: BURST_SCALE_PEAK,
        start: 0.0,
        duration: BURST_TRAVEL_SEC,
        ease: Ease::CubicOut,
    })
    .with(Tween {
        channel: Channel::Opacity,
        from: 1.0,
        to: 0.0,
        start: fade_out_start,
        duration: BURST_FADE_OUT_SEC,
        ease: Ease::QuadIn,
    })
    .with(Tween {
        channel: Channel::Scale,
        from: BURST_SCALE_PEAK,
        to: BURST_SCALE_END,
        start: fade_out_start,
        duration: BURST_FADE_OUT_SEC,
        ease: Ease::QuadIn,
    })
}
