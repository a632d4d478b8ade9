//! Virtualized smooth scroll.
//!
//! Native scroll is disabled by the page shell; a wheel listener feeds a
//! clamped target offset and each animation frame the visible offset is
//! exponentially damped toward it, applied as a translateY on the main
//! element. Construction is gated to once per page session: re-entering
//! `init` returns a handle to an inert engine instead of wiring a second
//! listener.

use crate::constants::{SCROLL_DAMP_TAU_SEC, WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_FACTOR};
use crate::core::easing::exp_damp;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

static STARTED: AtomicBool = AtomicBool::new(false);

pub struct SmoothScroll {
    main: web::HtmlElement,
    current: f64,
    target: f64,
    limit: f64,
}

impl SmoothScroll {
    /// Wire the engine once per session. A second call logs and returns an
    /// engine that never receives wheel input (no duplicate listeners).
    pub fn init(main: &web::HtmlElement) -> Rc<RefCell<SmoothScroll>> {
        let scroll = Rc::new(RefCell::new(SmoothScroll {
            main: main.clone(),
            current: 0.0,
            target: 0.0,
            limit: 0.0,
        }));
        scroll.borrow_mut().refresh();

        if STARTED.swap(true, Ordering::SeqCst) {
            log::warn!("[scroll] engine already initialized; skipping re-wire");
            return scroll;
        }

        let scroll_wheel = scroll.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let delta = match ev.delta_mode() {
                web::WheelEvent::DOM_DELTA_LINE => ev.delta_y() * WHEEL_LINE_HEIGHT_PX,
                web::WheelEvent::DOM_DELTA_PAGE => ev.delta_y() * WHEEL_PAGE_FACTOR,
                _ => ev.delta_y(),
            };
            let mut s = scroll_wheel.borrow_mut();
            s.target = (s.target + delta).clamp(0.0, s.limit);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            // Non-passive, otherwise prevent_default is ignored for wheel.
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(false);
            _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        }
        closure.forget();

        log::info!("[scroll] smooth scroll engine initialized");
        scroll
    }

    /// Re-measure content height against the viewport. Must be called after
    /// every scene mount/unmount, which changes the page height.
    pub fn refresh(&mut self) {
        let content = self.main.scroll_height() as f64;
        self.limit = (content - dom::viewport_height()).max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    pub fn tick(&mut self, dt_sec: f64) {
        if (self.current - self.target).abs() < 0.05 {
            if self.current != self.target {
                self.current = self.target;
                self.apply();
            }
            return;
        }
        self.current = exp_damp(self.current, self.target, dt_sec, SCROLL_DAMP_TAU_SEC);
        self.apply();
    }

    fn apply(&self) {
        dom::set_style(
            &self.main,
            "transform",
            &format!("translateY({}px)", -self.current),
        );
    }
}
