//! Reveal transition controller.
//!
//! A click on the hotspot asks the state machine what to do, then projects
//! the decision onto the page: the forward path grows the circle overlay
//! from the click point while the palette crossfades, and only the growth
//! completion callback flips `revealed`, mounts the scenes and refreshes
//! the scroll bounds. The reverse path is a plain crossfade with an
//! immediate flip. Clicks during a running reveal are dropped by the state
//! machine, so at most one transition is ever in flight.

use crate::core::constants::{
    CIRCLE_GROWTH_SCALE, CIRCLE_GROWTH_SECS, CROSSFADE_SECS, IDLE_PALETTE, REVEALED_PALETTE,
};
use crate::core::easing::Easing;
use crate::core::interaction::{ClickAction, InteractionState, RevealPlan};
use crate::dom;
use crate::scenes::SceneSet;
use crate::scroll::SmoothScroll;
use crate::tween::{TweenSpec, Tweener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct HotspotWiring {
    pub state: Rc<RefCell<InteractionState>>,
    pub tweener: Rc<RefCell<Tweener>>,
    pub scenes: Rc<RefCell<SceneSet>>,
    pub scroll: Rc<RefCell<SmoothScroll>>,
    pub circle: web::HtmlElement,
    pub body: web::HtmlElement,
    pub hotspot: web::HtmlElement,
}

pub fn wire_reveal_click(w: HotspotWiring) {
    let hotspot = w.hotspot.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let action = w
            .state
            .borrow_mut()
            .on_hotspot_click(ev.client_x() as f64, ev.client_y() as f64);
        match action {
            ClickAction::Reveal(plan) => start_reveal(&w, plan),
            ClickAction::Conceal => start_conceal(&w),
            ClickAction::Ignored => {
                log::debug!("[reveal] click ignored; transition in flight")
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = hotspot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn start_reveal(w: &HotspotWiring, plan: RevealPlan) {
    log::info!(
        "[reveal] growing from ({:.0}, {:.0})",
        plan.origin.x,
        plan.origin.y
    );

    // Park the overlay at the click point with zero footprint.
    dom::set_style(&w.circle, "left", &format!("{}px", plan.origin.x));
    dom::set_style(&w.circle, "top", &format!("{}px", plan.origin.y));
    w.tweener.borrow_mut().set(
        &w.circle,
        TweenSpec {
            scale: Some(0.0),
            ..Default::default()
        },
    );

    // Crossfade and growth start in the same turn but run independently;
    // only the growth completion gates the state flip.
    w.tweener.borrow_mut().to(
        &w.body,
        TweenSpec {
            background: Some(REVEALED_PALETTE.background),
            foreground: Some(REVEALED_PALETTE.foreground),
            duration: CROSSFADE_SECS,
            easing: Easing::Power2InOut,
            ..Default::default()
        },
    );

    let state = w.state.clone();
    let tweener = w.tweener.clone();
    let scenes = w.scenes.clone();
    let scroll = w.scroll.clone();
    let circle = w.circle.clone();
    w.tweener.borrow_mut().to(
        &w.circle,
        TweenSpec {
            scale: Some(CIRCLE_GROWTH_SCALE),
            duration: CIRCLE_GROWTH_SECS,
            easing: Easing::Power2InOut,
            on_complete: Some(Box::new(move || {
                // The overlay now covers the viewport: park it for reuse,
                // then flip the flag and mount in the same turn so no
                // intermediate state is observable.
                tweener.borrow_mut().reset(&circle);
                state.borrow_mut().complete_reveal();
                let revealed = state.borrow().revealed;
                scenes.borrow_mut().sync(revealed);
                scroll.borrow_mut().refresh();
                log::info!("[reveal] complete; revealed={revealed}");
            })),
            ..Default::default()
        },
    );
}

fn start_conceal(w: &HotspotWiring) {
    log::info!("[reveal] concealing");
    w.tweener.borrow_mut().to(
        &w.body,
        TweenSpec {
            background: Some(IDLE_PALETTE.background),
            foreground: Some(IDLE_PALETTE.foreground),
            duration: CROSSFADE_SECS,
            easing: Easing::Power2InOut,
            ..Default::default()
        },
    );
    // `revealed` already flipped; unmount atomically with it.
    w.scenes.borrow_mut().sync(w.state.borrow().revealed);
    w.scroll.borrow_mut().refresh();
}
