// Typewriter schedules: cumulative per-character reveal times at a fixed
// cadence, optionally jittered, with an optional trailing hold before the
// line counts as finished.

use rand::Rng;

/// Reveal times for one typed line, in seconds from its start.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSchedule {
    pub reveal_at_sec: Vec<f64>,
    pub total_sec: f64,
}

/// Build the schedule for `char_count` characters. Each interval is
/// `interval_ms` plus a uniform jitter in `±jitter_ms`, floored at 1 ms so
/// times stay strictly increasing. `trail_hold_ms` extends the completion
/// time past the last character.
pub fn type_schedule(
    char_count: usize,
    interval_ms: f64,
    jitter_ms: f64,
    trail_hold_ms: f64,
    rng: &mut impl Rng,
) -> TypeSchedule {
    let mut t_ms = 0.0;
    let mut reveal_at_sec = Vec::with_capacity(char_count);
    for _ in 0..char_count {
        let jitter = if jitter_ms > 0.0 {
            rng.gen_range(-jitter_ms..jitter_ms)
        } else {
            0.0
        };
        t_ms += (interval_ms + jitter).max(1.0);
        reveal_at_sec.push(t_ms / 1000.0);
    }
    TypeSchedule {
        reveal_at_sec,
        total_sec: (t_ms + trail_hold_ms) / 1000.0,
    }
}

/// How many characters are visible `elapsed_sec` into the schedule.
pub fn revealed_count(schedule: &TypeSchedule, elapsed_sec: f64) -> usize {
    schedule
        .reveal_at_sec
        .iter()
        .take_while(|t| **t <= elapsed_sec)
        .count()
}
