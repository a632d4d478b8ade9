pub mod hotspot;
pub mod pointer;

pub use hotspot::{wire_reveal_click, HotspotWiring};
pub use pointer::{wire_hover_magnifier, wire_pointer_tracking, PointerWiring};
