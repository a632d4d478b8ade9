/// Page shell ids and scroll tuning constants.
///
/// Interaction timing and palettes live in `core::constants`; everything
/// here is specific to the DOM wiring.

// Element ids the page shell must provide.
pub const CURSOR_ID: &str = "cursor";
pub const CIRCLE_ID: &str = "reveal-circle";
pub const HOTSPOT_ID: &str = "hero-title";
pub const MAIN_ID: &str = "main";
pub const SCENE_LAYER_ID_PREFIX: &str = "scene-layer-";

// Smooth scroll damping time constant (seconds)
pub const SCROLL_DAMP_TAU_SEC: f64 = 0.15;

// Wheel delta normalization for line/page delta modes
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;
pub const WHEEL_PAGE_FACTOR: f64 = 800.0;
