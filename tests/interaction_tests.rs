// Host-side tests for the interaction state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
}

use logic::constants::*;
use logic::interaction::*;

fn click(state: &mut InteractionState) -> ClickAction {
    state.on_hotspot_click(50.0, 60.0)
}

#[test]
fn starts_concealed_and_idle() {
    let state = InteractionState::new();
    assert!(!state.revealed);
    assert!(!state.transition_in_flight());
    assert_eq!(state.cursor_mode, CursorMode::Idle);
}

#[test]
fn reveal_defers_flag_until_completion() {
    // The flag must not flip before the overlay covers the viewport.
    let mut state = InteractionState::new();
    let action = state.on_hotspot_click(100.0, 200.0);
    assert!(matches!(action, ClickAction::Reveal(_)));
    assert!(!state.revealed, "flag flipped before growth completed");
    assert!(state.transition_in_flight());

    state.complete_reveal();
    assert!(state.revealed);
    assert!(!state.transition_in_flight());
}

#[test]
fn reveal_plan_carries_click_origin() {
    let mut state = InteractionState::new();
    match state.on_hotspot_click(100.0, 200.0) {
        ClickAction::Reveal(plan) => {
            assert_eq!(plan.origin.x, 100.0);
            assert_eq!(plan.origin.y, 200.0);
        }
        other => panic!("expected Reveal, got {other:?}"),
    }
}

#[test]
fn conceal_flips_immediately_without_animation_phase() {
    let mut state = InteractionState::new();
    click(&mut state);
    state.complete_reveal();
    assert!(state.revealed);

    // Reverse path: no Revealing phase, flag drops at once.
    let action = click(&mut state);
    assert_eq!(action, ClickAction::Conceal);
    assert!(!state.revealed);
    assert!(!state.transition_in_flight());
}

#[test]
fn clicks_during_reveal_are_ignored() {
    let mut state = InteractionState::new();
    assert!(matches!(click(&mut state), ClickAction::Reveal(_)));

    // Single-flight: re-entrant clicks change nothing.
    for _ in 0..5 {
        assert_eq!(click(&mut state), ClickAction::Ignored);
        assert!(!state.revealed);
        assert!(state.transition_in_flight());
    }

    state.complete_reveal();
    assert!(state.revealed);
}

#[test]
fn toggle_parity_over_click_sequence() {
    // After N settled clicks, revealed == N is odd.
    let mut state = InteractionState::new();
    for n in 1..=8 {
        match click(&mut state) {
            ClickAction::Reveal(_) => state.complete_reveal(),
            ClickAction::Conceal => {}
            ClickAction::Ignored => panic!("unexpected Ignored on settled click {n}"),
        }
        assert_eq!(state.revealed, n % 2 == 1, "parity broke at click {n}");
    }
}

#[test]
fn complete_reveal_outside_transition_is_noop() {
    let mut state = InteractionState::new();
    state.complete_reveal();
    assert!(!state.revealed);

    // Also after a full cycle back to concealed.
    click(&mut state);
    state.complete_reveal();
    click(&mut state);
    assert!(!state.revealed);
    state.complete_reveal();
    assert!(!state.revealed, "stray completion re-revealed the page");
}

#[test]
fn hover_enter_magnifies_with_alert_fill_while_concealed() {
    let mut state = InteractionState::new();
    let visual = state.hover_enter();
    assert_eq!(state.cursor_mode, CursorMode::Hovering);
    assert_eq!(visual.scale, HOVER_SCALE);
    assert_eq!(visual.background, CURSOR_ALERT);
    assert_eq!(visual.glyph, HOVER_GLYPH);
    assert_eq!(visual.font_px, HOVER_FONT_PX);
}

#[test]
fn hover_fill_is_neutral_once_revealed() {
    let mut state = InteractionState::new();
    click(&mut state);
    state.complete_reveal();

    let visual = state.hover_enter();
    assert_eq!(visual.background, CURSOR_NEUTRAL);
    assert_eq!(visual.scale, HOVER_SCALE);
}

#[test]
fn hover_leave_restores_idle_visuals() {
    let mut state = InteractionState::new();
    state.hover_enter();
    let visual = state.hover_leave();
    assert_eq!(state.cursor_mode, CursorMode::Idle);
    assert_eq!(visual.scale, 1.0);
    assert_eq!(visual.background, CURSOR_NEUTRAL);
    assert_eq!(visual.glyph, "");
}

#[test]
fn hover_enter_leave_pairs_stay_symmetric() {
    // Every enter followed by a leave lands back on Idle, repeatedly.
    let mut state = InteractionState::new();
    for _ in 0..4 {
        state.hover_enter();
        assert_eq!(state.cursor_mode, CursorMode::Hovering);
        state.hover_leave();
        assert_eq!(state.cursor_mode, CursorMode::Idle);
    }
}

#[test]
fn hovering_does_not_touch_reveal_state() {
    let mut state = InteractionState::new();
    state.hover_enter();
    assert!(!state.revealed);
    click(&mut state);
    state.complete_reveal();
    state.hover_leave();
    assert!(state.revealed);
}

#[test]
fn pointer_moves_record_latest_position() {
    let mut state = InteractionState::new();
    state.pointer_moved(10.0, 20.0);
    state.pointer_moved(300.0, 400.0);
    assert_eq!(state.cursor.x, 300.0);
    assert_eq!(state.cursor.y, 400.0);
}
