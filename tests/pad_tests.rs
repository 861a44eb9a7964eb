// Host-side tests for the ambient pad planner.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod pad {
    include!("../src/core/pad.rs");
}

use pad::*;

#[test]
fn planner_starts_silent() {
    let planner = PadPlanner::new();
    assert_eq!(planner.state(), PadState::Silent);
}

#[test]
fn enable_plans_the_chord_and_attack() {
    let mut planner = PadPlanner::new();
    let plan = planner.enable(10.0).expect("first enable must plan");
    assert_eq!(planner.state(), PadState::Sounding);
    assert_eq!(plan.voices, PAD_VOICES);
    assert!((plan.level - PAD_LEVEL).abs() < 1e-9);
    assert!((plan.attack_end - (10.0 + PAD_ATTACK_SEC)).abs() < 1e-12);
}

#[test]
fn pad_voices_form_the_detuned_chord() {
    let hz: Vec<f32> = PAD_VOICES.iter().map(|v| v.frequency_hz).collect();
    assert_eq!(hz, vec![128.0, 184.0, 246.0]);
    let cents: Vec<f32> = PAD_VOICES.iter().map(|v| v.detune_cents).collect();
    assert_eq!(cents, vec![4.0, -6.0, 2.0]);
}

#[test]
fn enabling_twice_plans_only_once() {
    let mut planner = PadPlanner::new();
    assert!(planner.enable(0.0).is_some());
    assert!(planner.enable(0.5).is_none(), "already sounding");
    assert_eq!(planner.state(), PadState::Sounding);
}

#[test]
fn disable_plans_the_release() {
    let mut planner = PadPlanner::new();
    planner.enable(0.0);
    let plan = planner.disable(4.0).expect("transition must plan");
    assert_eq!(planner.state(), PadState::Silent);
    assert!((plan.release_end - (4.0 + PAD_RELEASE_SEC)).abs() < 1e-12);
}

#[test]
fn disabling_when_silent_does_nothing() {
    let mut planner = PadPlanner::new();
    assert!(planner.disable(0.0).is_none());
    planner.enable(0.0);
    planner.disable(1.0);
    assert!(planner.disable(2.0).is_none(), "already silent");
}

#[test]
fn the_pad_can_cycle_repeatedly() {
    let mut planner = PadPlanner::new();
    for cycle in 0..3 {
        let t = cycle as f64 * 10.0;
        assert!(planner.enable(t).is_some(), "cycle {cycle} enable");
        assert!(planner.disable(t + 5.0).is_some(), "cycle {cycle} disable");
    }
    assert_eq!(planner.state(), PadState::Silent);
}
