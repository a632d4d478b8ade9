// Interaction state machine for the landing page.
//
// Owns the `revealed` flag, the single-flight transition phase and the
// cursor mode. All mutation goes through the methods here; the web-side
// wiring only projects the returned decisions onto the DOM, so every rule
// (toggle parity, single-flight, hover symmetry, flip-after-coverage) is
// testable on the host.
// NOTE: included verbatim by the host-side tests; keep this file free of
// inner attributes and `crate::` paths.

use super::color::Rgb;
use super::constants::{
    CURSOR_ALERT, CURSOR_NEUTRAL, HOVER_FONT_PX, HOVER_GLYPH, HOVER_SCALE,
};
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Idle,
    Hovering,
}

/// Forward reveals animate; there is no `Concealing` phase because the
/// reverse path flips state immediately and only crossfades colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Revealing,
}

/// Where the expanding circle originates: the click location. Consumed by
/// the transition animation, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPlan {
    pub origin: DVec2,
}

/// What a hotspot click should do, decided by the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickAction {
    /// Start the expanding-circle reveal from `origin`. `revealed` stays
    /// false until `complete_reveal` is called.
    Reveal(RevealPlan),
    /// Crossfade back to the idle palette; `revealed` already flipped.
    Conceal,
    /// A transition is in flight; do nothing.
    Ignored,
}

/// Target visual for the cursor indicator after a hover edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorVisual {
    pub scale: f64,
    pub background: Rgb,
    pub glyph: &'static str,
    pub font_px: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionState {
    pub revealed: bool,
    pub phase: TransitionPhase,
    pub cursor: DVec2,
    pub cursor_mode: CursorMode,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pointer position; the indicator tweens toward it.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.cursor = DVec2::new(x, y);
    }

    pub fn transition_in_flight(&self) -> bool {
        self.phase == TransitionPhase::Revealing
    }

    /// Decide what a click on the reveal hotspot does.
    pub fn on_hotspot_click(&mut self, x: f64, y: f64) -> ClickAction {
        if self.transition_in_flight() {
            return ClickAction::Ignored;
        }
        if self.revealed {
            // Reverse path: no geometry animation, flip immediately.
            self.revealed = false;
            ClickAction::Conceal
        } else {
            self.phase = TransitionPhase::Revealing;
            ClickAction::Reveal(RevealPlan {
                origin: DVec2::new(x, y),
            })
        }
    }

    /// Called from the circle-growth completion callback, never earlier:
    /// the flag must not flip before the overlay covers the viewport.
    /// No-op outside a reveal.
    pub fn complete_reveal(&mut self) {
        if self.phase == TransitionPhase::Revealing {
            self.revealed = true;
            self.phase = TransitionPhase::Idle;
        }
    }

    /// Pointer entered the hotspot: magnify, arm the glyph, and pick the
    /// fill for the current side of the reveal.
    pub fn hover_enter(&mut self) -> CursorVisual {
        self.cursor_mode = CursorMode::Hovering;
        CursorVisual {
            scale: HOVER_SCALE,
            background: if self.revealed {
                CURSOR_NEUTRAL
            } else {
                CURSOR_ALERT
            },
            glyph: HOVER_GLYPH,
            font_px: HOVER_FONT_PX,
        }
    }

    /// Pointer left the hotspot: restore the idle indicator. Every
    /// `hover_enter` is expected to be paired with exactly one call here.
    pub fn hover_leave(&mut self) -> CursorVisual {
        self.cursor_mode = CursorMode::Idle;
        CursorVisual {
            scale: 1.0,
            background: CURSOR_NEUTRAL,
            glyph: "",
            font_px: HOVER_FONT_PX,
        }
    }
}
