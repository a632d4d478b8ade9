//! Pointer tracking and hover magnification.
//!
//! The trailing-cursor feel comes from tweening the indicator toward each
//! new pointer position over `CURSOR_FOLLOW_SECS` instead of snapping.
//! Hover edges on the hotspot swap the indicator visual through the state
//! machine so enter/leave stay symmetric.

use crate::core::constants::{CURSOR_FOLLOW_SECS, HOVER_TWEEN_SECS};
use crate::core::easing::Easing;
use crate::core::interaction::{CursorVisual, InteractionState};
use crate::tween::{TweenSpec, Tweener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub state: Rc<RefCell<InteractionState>>,
    pub tweener: Rc<RefCell<Tweener>>,
    pub cursor: web::HtmlElement,
    pub hotspot: web::HtmlElement,
}

/// Follow the pointer with the cursor indicator. Wired once during init.
pub fn wire_pointer_tracking(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        w.state.borrow_mut().pointer_moved(x, y);
        w.tweener.borrow_mut().to(
            &w.cursor,
            TweenSpec {
                x: Some(x),
                y: Some(y),
                duration: CURSOR_FOLLOW_SECS,
                easing: Easing::Power2Out,
                ..Default::default()
            },
        );
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn apply_visual(w: &PointerWiring, visual: CursorVisual) {
    // Glyph swaps are instant; scale/fill/size tween.
    w.cursor.set_inner_html(visual.glyph);
    w.tweener.borrow_mut().to(
        &w.cursor,
        TweenSpec {
            scale: Some(visual.scale),
            background: Some(visual.background),
            font_px: Some(visual.font_px),
            duration: HOVER_TWEEN_SECS,
            easing: Easing::Power2Out,
            ..Default::default()
        },
    );
}

/// Magnify the cursor over the reveal hotspot and restore it on leave.
pub fn wire_hover_magnifier(w: &PointerWiring) {
    let enter = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let visual = enter.state.borrow_mut().hover_enter();
        apply_visual(&enter, visual);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .hotspot
        .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();

    let leave = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let visual = leave.state.borrow_mut().hover_leave();
        apply_visual(&leave, visual);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .hotspot
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
