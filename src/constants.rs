/// Interaction and page tuning constants.
///
/// These express intended behavior (cadences, spring feel, clamp thresholds)
/// and keep magic numbers out of the wiring code.
// Moon parallax spring
pub const MOON_SPRING_STIFFNESS: f32 = 120.0;
pub const MOON_SPRING_DAMPING: f32 = 14.0; // underdamped: a little drift past the target
pub const PARALLAX_RANGE_PX: f64 = 60.0; // full swing across the viewport, so ±30 px

// Typewriter cadence (milliseconds)
pub const TYPE_INTRO_INTERVAL_MS: f64 = 52.0;
pub const TYPE_INTRO_TRAIL_HOLD_MS: f64 = 600.0;
pub const TYPE_MESSAGE_INTERVAL_MS: f64 = 48.0;
pub const TYPE_LIFELIKE_JITTER_MS: f64 = 16.0; // intro only; the message line types steadily

// Opacity at or below this also toggles visibility: hidden
pub const HIDDEN_OPACITY_EPSILON: f32 = 0.001;
