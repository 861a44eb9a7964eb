// Host-side tests for scroll-reveal schedules and observer actions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timeline {
    include!("../src/core/timeline.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;
use timeline::TweenPlayer;

#[test]
fn entering_always_plays() {
    assert_eq!(action_for(true, 500.0), RevealAction::Play);
    assert_eq!(action_for(true, -50.0), RevealAction::Play);
}

#[test]
fn exiting_below_reverses_exiting_above_completes() {
    // Element dropped back under the trigger line: run the reveal backwards
    assert_eq!(action_for(false, 420.0), RevealAction::Reverse);
    // Element scrolled past the top: hold the fully-played state
    assert_eq!(action_for(false, -300.0), RevealAction::Complete);
    assert_eq!(action_for(false, 0.0), RevealAction::Complete);
}

#[test]
fn enter_fractions_match_the_page_layout() {
    assert!((RevealKind::Star.enter_fraction() - 1.0).abs() < 1e-6);
    assert!((RevealKind::Phrase.enter_fraction() - 0.8).abs() < 1e-6);
    assert!((RevealKind::MoonOrbit.enter_fraction() - 0.75).abs() < 1e-6);
}

#[test]
fn root_margins_narrow_the_viewport_to_the_trigger_line() {
    let pct = |kind: RevealKind| root_margin_bottom_pct(kind.enter_fraction()).round() as i32;
    assert_eq!(pct(RevealKind::Star), 0);
    assert_eq!(pct(RevealKind::Phrase), -20);
    assert_eq!(pct(RevealKind::MoonOrbit), -25);
}

#[test]
fn only_phrases_stagger() {
    assert!((RevealKind::Star.stagger_delay(5) - 0.0).abs() < 1e-6);
    assert!((RevealKind::MoonOrbit.stagger_delay(3) - 0.0).abs() < 1e-6);
    assert!((RevealKind::Phrase.stagger_delay(0) - 0.0).abs() < 1e-6);
    assert!((RevealKind::Phrase.stagger_delay(1) - PHRASE_STAGGER_SEC).abs() < 1e-6);
    assert!((RevealKind::Phrase.stagger_delay(3) - 3.0 * PHRASE_STAGGER_SEC).abs() < 1e-6);
}

#[test]
fn hidden_states_match_each_category() {
    let star = RevealKind::Star.timeline().sample(0.0);
    assert!((star.opacity - 0.0).abs() < 1e-6);
    assert!((star.scale - STAR_HIDDEN_SCALE).abs() < 1e-6);
    assert!((star.translate_y - 0.0).abs() < 1e-6);

    let phrase = RevealKind::Phrase.timeline().sample(0.0);
    assert!((phrase.opacity - 0.0).abs() < 1e-6);
    assert!((phrase.translate_y - PHRASE_RISE_PX).abs() < 1e-6);
    assert!((phrase.scale - 1.0).abs() < 1e-6);

    let moon = RevealKind::MoonOrbit.timeline().sample(0.0);
    assert!((moon.opacity - 0.0).abs() < 1e-6);
    assert!((moon.translate_y - MOON_RISE_PX).abs() < 1e-6);
    assert!((moon.scale - 1.0).abs() < 1e-6);
}

#[test]
fn every_category_ends_neutral() {
    for kind in [RevealKind::Star, RevealKind::Phrase, RevealKind::MoonOrbit] {
        let tl = kind.timeline();
        let end = tl.sample(tl.duration());
        assert!((end.opacity - 1.0).abs() < 1e-5);
        assert!((end.translate_x - 0.0).abs() < 1e-5);
        assert!((end.translate_y - 0.0).abs() < 1e-5);
        assert!((end.scale - 1.0).abs() < 1e-5);
    }
}

#[test]
fn category_durations() {
    assert!((RevealKind::Star.timeline().duration() - STAR_REVEAL_SEC).abs() < 1e-6);
    assert!((RevealKind::Phrase.timeline().duration() - PHRASE_REVEAL_SEC).abs() < 1e-6);
    assert!((RevealKind::MoonOrbit.timeline().duration() - MOON_REVEAL_SEC).abs() < 1e-6);
}

#[test]
fn star_reveal_midpoint_uses_cubic_out() {
    let style = RevealKind::Star.timeline().sample(STAR_REVEAL_SEC / 2.0);
    // CubicOut(0.5) = 0.875
    assert!((style.opacity - 0.875).abs() < 1e-4);
    assert!((style.scale - (STAR_HIDDEN_SCALE + 0.4 * 0.875)).abs() < 1e-4);
}

#[test]
fn staggered_phrase_waits_out_its_delay_before_rising() {
    let delay = RevealKind::Phrase.stagger_delay(2);
    let mut player = TweenPlayer::new(RevealKind::Phrase.timeline());
    player.play(delay);
    let style = player.step(delay);
    assert!((player.head() - 0.0).abs() < 1e-5);
    assert!((style.opacity - 0.0).abs() < 1e-5);
    let style = player.step(PHRASE_REVEAL_SEC / 2.0);
    assert!(style.opacity > 0.9, "quart-out has mostly landed by midpoint");
    assert!(style.translate_y < PHRASE_RISE_PX * 0.1);
}
