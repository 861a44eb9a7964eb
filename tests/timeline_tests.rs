// Host-side tests for the tween timeline and player.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod timeline {
    include!("../src/core/timeline.rs");
}

use timeline::*;

fn fade(duration: f32) -> Timeline {
    Timeline::new(Style {
        opacity: 0.0,
        ..Style::NEUTRAL
    })
    .with(Tween {
        channel: Channel::Opacity,
        from: 0.0,
        to: 1.0,
        start: 0.0,
        duration,
        ease: Ease::Linear,
    })
}

#[test]
fn ease_midpoints_match_closed_forms() {
    assert!((Ease::Linear.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::QuadIn.apply(0.5) - 0.25).abs() < 1e-6);
    assert!((Ease::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
    assert!((Ease::QuartOut.apply(0.5) - 0.9375).abs() < 1e-6);
}

#[test]
fn ease_endpoints_and_clamping() {
    for ease in [Ease::Linear, Ease::QuadIn, Ease::CubicOut, Ease::QuartOut] {
        assert!((ease.apply(0.0) - 0.0).abs() < 1e-6);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        // Out-of-range inputs clamp instead of extrapolating
        assert!((ease.apply(-2.0) - 0.0).abs() < 1e-6);
        assert!((ease.apply(3.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn tween_interpolates_between_endpoints() {
    let tw = Tween {
        channel: Channel::Opacity,
        from: 0.0,
        to: 10.0,
        start: 1.0,
        duration: 2.0,
        ease: Ease::Linear,
    };
    assert!((tw.value_at(1.0) - 0.0).abs() < 1e-5);
    assert!((tw.value_at(2.0) - 5.0).abs() < 1e-5);
    assert!((tw.value_at(3.0) - 10.0).abs() < 1e-5);
    // Before start and past end clamp to the endpoints
    assert!((tw.value_at(0.0) - 0.0).abs() < 1e-5);
    assert!((tw.value_at(9.0) - 10.0).abs() < 1e-5);
    assert!((tw.end() - 3.0).abs() < 1e-6);
}

#[test]
fn zero_duration_tween_snaps_to_end_value() {
    let tw = Tween {
        channel: Channel::Scale,
        from: 3.0,
        to: 7.0,
        start: 1.0,
        duration: 0.0,
        ease: Ease::Linear,
    };
    assert!((tw.value_at(1.0) - 7.0).abs() < 1e-6);
    assert!((tw.value_at(5.0) - 7.0).abs() < 1e-6);
}

#[test]
fn timeline_duration_is_last_tween_end() {
    let tl = Timeline::new(Style::NEUTRAL)
        .with(Tween {
            channel: Channel::TranslateX,
            from: 0.0,
            to: 50.0,
            start: 0.0,
            duration: 1.4,
            ease: Ease::CubicOut,
        })
        .with(Tween {
            channel: Channel::Opacity,
            from: 1.0,
            to: 0.0,
            start: 1.1,
            duration: 0.6,
            ease: Ease::QuadIn,
        });
    assert!((tl.duration() - 1.7).abs() < 1e-5);
    assert!((Timeline::new(Style::NEUTRAL).duration() - 0.0).abs() < 1e-6);
}

#[test]
fn sample_keeps_base_for_untouched_channels() {
    let tl = fade(1.0);
    let style = tl.sample(0.5);
    assert!((style.opacity - 0.5).abs() < 1e-5);
    assert!((style.translate_x - 0.0).abs() < 1e-6);
    assert!((style.translate_y - 0.0).abs() < 1e-6);
    assert!((style.scale - 1.0).abs() < 1e-6);
}

#[test]
fn later_started_tween_wins_its_channel() {
    let tl = Timeline::new(Style {
        opacity: 0.0,
        ..Style::NEUTRAL
    })
    .with(Tween {
        channel: Channel::Opacity,
        from: 0.0,
        to: 1.0,
        start: 0.0,
        duration: 1.0,
        ease: Ease::Linear,
    })
    .with(Tween {
        channel: Channel::Opacity,
        from: 1.0,
        to: 0.0,
        start: 2.0,
        duration: 1.0,
        ease: Ease::Linear,
    });
    assert!((tl.sample(0.5).opacity - 0.5).abs() < 1e-5);
    // First tween holds its end value until the second starts
    assert!((tl.sample(1.5).opacity - 1.0).abs() < 1e-5);
    assert!((tl.sample(2.5).opacity - 0.5).abs() < 1e-5);
    assert!((tl.sample(3.5).opacity - 0.0).abs() < 1e-5);
}

#[test]
fn equal_start_ties_go_to_the_later_entry() {
    let tl = Timeline::new(Style::NEUTRAL)
        .with(Tween {
            channel: Channel::Scale,
            from: 1.0,
            to: 2.0,
            start: 0.0,
            duration: 1.0,
            ease: Ease::Linear,
        })
        .with(Tween {
            channel: Channel::Scale,
            from: 1.0,
            to: 0.5,
            start: 0.0,
            duration: 1.0,
            ease: Ease::Linear,
        });
    assert!((tl.sample(1.0).scale - 0.5).abs() < 1e-5);
}

#[test]
fn new_player_rests_hidden() {
    let mut player = TweenPlayer::new(fade(1.0));
    assert!(player.at_rest());
    assert!(!player.finished());
    assert_eq!(player.direction(), Direction::Reverse);
    let style = player.step(1.0);
    assert!((player.head() - 0.0).abs() < 1e-6);
    assert!((style.opacity - 0.0).abs() < 1e-6);
}

#[test]
fn play_advances_to_the_end_and_stays() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.play(0.0);
    assert!(!player.at_rest());
    let style = player.step(0.25);
    assert!((style.opacity - 0.25).abs() < 1e-5);
    let style = player.step(10.0);
    assert!((style.opacity - 1.0).abs() < 1e-5);
    assert!((player.head() - 1.0).abs() < 1e-6);
    assert!(player.at_rest());
    assert!(player.finished());
}

#[test]
fn lead_in_delay_is_consumed_before_the_head_moves() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.play(0.5);
    let style = player.step(0.3);
    assert!((player.head() - 0.0).abs() < 1e-6, "still inside the delay");
    assert!((style.opacity - 0.0).abs() < 1e-6);
    let style = player.step(0.3);
    // 0.2s finishes the delay, the remaining 0.1s moves the head
    assert!((player.head() - 0.1).abs() < 1e-4);
    assert!((style.opacity - 0.1).abs() < 1e-4);
}

#[test]
fn reverse_runs_back_from_the_current_head() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.play(0.0);
    player.step(0.6);
    player.reverse();
    assert!(!player.finished());
    let style = player.step(0.2);
    assert!((style.opacity - 0.4).abs() < 1e-5);
    player.step(10.0);
    assert!((player.head() - 0.0).abs() < 1e-6);
    assert!(player.at_rest());
}

#[test]
fn reverse_discards_a_pending_delay() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.play(5.0);
    player.reverse();
    assert!(player.at_rest(), "nothing to run back through");
    player.step(0.1);
    assert!((player.head() - 0.0).abs() < 1e-6);
}

#[test]
fn play_resumes_after_a_partial_reverse() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.play(0.0);
    player.step(0.3);
    player.reverse();
    player.step(0.1);
    assert!((player.head() - 0.2).abs() < 1e-5);
    player.play(0.0);
    player.step(0.1);
    assert!((player.head() - 0.3).abs() < 1e-5);
}

#[test]
fn complete_snaps_to_the_fully_played_state() {
    let mut player = TweenPlayer::new(fade(1.0));
    player.complete();
    assert!((player.head() - 1.0).abs() < 1e-6);
    assert!(player.at_rest());
    assert!(player.finished());
    let style = player.step(0.5);
    assert!((style.opacity - 1.0).abs() < 1e-6);
}
