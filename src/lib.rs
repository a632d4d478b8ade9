#![cfg(target_arch = "wasm32")]
//! Interactive studio landing page.
//!
//! Wires the page shell: a trailing cursor indicator that follows the
//! pointer, a hover magnifier on the hero title, the click-triggered
//! expanding-circle reveal transition, canvas scenes mounted while the page
//! is revealed, and a virtualized smooth scroll.

use crate::constants::{CIRCLE_ID, CURSOR_ID, HOTSPOT_ID, MAIN_ID};
use crate::core::constants::{CURSOR_NEUTRAL, IDLE_FONT_PX, IDLE_PALETTE};
use crate::core::interaction::InteractionState;
use crate::events::{HotspotWiring, PointerWiring};
use crate::scenes::SceneSet;
use crate::scroll::SmoothScroll;
use crate::tween::{Registration, Tweener};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod scenes;
mod scroll;
mod tween;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-landing starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Wiring attaches global listeners; never do it twice.
    static WIRED: AtomicBool = AtomicBool::new(false);
    if WIRED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let cursor = dom::require_element(&document, CURSOR_ID)?;
    let circle = dom::require_element(&document, CIRCLE_ID)?;
    let hotspot = dom::require_element(&document, HOTSPOT_ID)?;
    let main = dom::require_element(&document, MAIN_ID)?;

    let state = Rc::new(RefCell::new(InteractionState::new()));
    let tweener = Rc::new(RefCell::new(Tweener::new()));
    {
        let mut tw = tweener.borrow_mut();
        tw.register(
            &cursor,
            Registration {
                centered: true,
                scale: 1.0,
                font_px: IDLE_FONT_PX,
                background: Some(CURSOR_NEUTRAL),
                foreground: None,
            },
        );
        tw.register(
            &circle,
            Registration {
                scale: 0.0,
                ..Default::default()
            },
        );
        tw.register(
            &body,
            Registration {
                background: Some(IDLE_PALETTE.background),
                foreground: Some(IDLE_PALETTE.foreground),
                ..Default::default()
            },
        );
    }

    let scenes = Rc::new(RefCell::new(SceneSet::new(document.clone())));
    let scroll = SmoothScroll::init(&main);

    let pointer_wiring = PointerWiring {
        state: state.clone(),
        tweener: tweener.clone(),
        cursor: cursor.clone(),
        hotspot: hotspot.clone(),
    };
    events::wire_pointer_tracking(&pointer_wiring);
    events::wire_hover_magnifier(&pointer_wiring);

    events::wire_reveal_click(HotspotWiring {
        state: state.clone(),
        tweener: tweener.clone(),
        scenes: scenes.clone(),
        scroll: scroll.clone(),
        circle,
        body,
        hotspot,
    });

    // Initial sync: nothing mounted while concealed.
    scenes.borrow_mut().sync(state.borrow().revealed);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tweener,
        scroll,
        scenes,
        last_instant: Instant::now(),
        elapsed: 0.0,
    }));
    frame::start_loop(frame_ctx);

    log::info!("studio-landing initialized");
    Ok(())
}
