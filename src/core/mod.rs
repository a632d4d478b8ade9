//! Pure, platform-free interaction logic. Nothing here touches `web-sys`,
//! so host-side tests compile these modules directly.

pub mod color;
pub mod constants;
pub mod content;
pub mod easing;
pub mod interaction;
pub mod timeline;
