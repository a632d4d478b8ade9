// Interaction timing, geometry and palette constants.
//
// These express the intended feel of the page (follow lag, crossfade and
// growth durations) and keep magic numbers out of the wiring code.
// NOTE: included verbatim by the host-side tests; keep this file free of
// inner attributes and `crate::` paths.

use super::color::{Palette, Rgb};

// Trailing cursor follow duration (seconds)
pub const CURSOR_FOLLOW_SECS: f64 = 0.6;

// Hover magnification
pub const HOVER_SCALE: f64 = 4.0;
pub const HOVER_FONT_PX: f64 = 15.0;
pub const IDLE_FONT_PX: f64 = 5.0;
pub const HOVER_GLYPH: &str = "\u{1F4A3}";
pub const HOVER_TWEEN_SECS: f64 = 0.3;

// Reveal transition
pub const CROSSFADE_SECS: f64 = 1.2;
pub const CIRCLE_GROWTH_SECS: f64 = 2.0;
// Large enough that a 20px circle exceeds any viewport diagonal.
pub const CIRCLE_GROWTH_SCALE: f64 = 1000.0;

// Page palettes: white-on-black before the reveal, black-on-red after.
pub const IDLE_PALETTE: Palette = Palette {
    foreground: Rgb::new(0xff, 0xff, 0xff),
    background: Rgb::new(0x00, 0x00, 0x00),
};
pub const REVEALED_PALETTE: Palette = Palette {
    foreground: Rgb::new(0x00, 0x00, 0x00),
    background: Rgb::new(0xfd, 0x2c, 0x2a),
};

// Cursor indicator fills
pub const CURSOR_NEUTRAL: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const CURSOR_ALERT: Rgb = Rgb::new(0xfd, 0x2c, 0x2a);
