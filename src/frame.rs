//! requestAnimationFrame loop driving the tween engine, the smooth scroll
//! and the mounted scene animations.

use crate::scenes::SceneSet;
use crate::scroll::SmoothScroll;
use crate::tween::Tweener;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Skip ahead after a backgrounded tab rather than replaying the gap.
const MAX_FRAME_DT_SEC: f64 = 0.25;

pub struct FrameContext {
    pub tweener: Rc<RefCell<Tweener>>,
    pub scroll: Rc<RefCell<SmoothScroll>>,
    pub scenes: Rc<RefCell<SceneSet>>,
    pub last_instant: Instant,
    pub elapsed: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed += dt_sec;

        // Completion callbacks run after the tweener borrow is released;
        // they may retween, mount scenes or refresh scroll bounds.
        let due = self.tweener.borrow_mut().tick(self.elapsed);
        for callback in due {
            callback();
        }

        self.scroll.borrow_mut().tick(dt_sec);
        self.scenes.borrow_mut().animate(dt_sec);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
