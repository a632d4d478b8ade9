//! Retargetable style tween engine.
//!
//! Each registered element owns one channel per animatable property
//! (translate-x/y, scale, font-size, background and foreground color).
//! Starting a tween captures the channel's *current* animated value as the
//! new `from`, so retargeting mid-flight never snaps; that is what makes
//! the cursor trail instead of jump. A `TweenSpec`-level `on_complete`
//! fires once, when the last of its channels finishes; if the last
//! channel is replaced or reset instead, the callback is dropped.
//!
//! The engine only advances when `tick` is called from the animation-frame
//! loop; completion callbacks are returned to the caller so they run after
//! the `Tweener` borrow is released.

use crate::core::color::Rgb;
use crate::core::easing::Easing;
use crate::core::timeline::{lerp, Callback, CompletionGroup, Tween};
use crate::dom;
use std::rc::Rc;
use web_sys as web;

struct ScalarTrack {
    tween: Tween,
    from: f64,
    to: f64,
    group: Rc<CompletionGroup>,
}

struct ScalarChannel {
    current: f64,
    active: Option<ScalarTrack>,
}

impl ScalarChannel {
    fn new(initial: f64) -> Self {
        Self {
            current: initial,
            active: None,
        }
    }

    fn retarget(&mut self, to: f64, tween: Tween, group: Rc<CompletionGroup>) {
        if let Some(old) = self.active.take() {
            old.group.cancel();
        }
        self.active = Some(ScalarTrack {
            tween,
            from: self.current,
            to,
            group,
        });
    }

    fn jump(&mut self, to: f64) {
        if let Some(old) = self.active.take() {
            old.group.cancel();
        }
        self.current = to;
    }

    /// Advance; returns true when `current` changed this frame.
    fn step(&mut self, now: f64, due: &mut Vec<Callback>) -> bool {
        let Some(track) = &self.active else {
            return false;
        };
        self.current = lerp(track.from, track.to, track.tween.eased(now));
        if track.tween.is_complete(now) {
            let track = self.active.take().unwrap();
            self.current = track.to;
            track.group.complete(due);
        }
        true
    }
}

struct ColorTrack {
    tween: Tween,
    from: Rgb,
    to: Rgb,
    group: Rc<CompletionGroup>,
}

struct ColorChannel {
    current: Option<Rgb>,
    active: Option<ColorTrack>,
}

impl ColorChannel {
    fn new(initial: Option<Rgb>) -> Self {
        Self {
            current: initial,
            active: None,
        }
    }

    fn retarget(&mut self, to: Rgb, tween: Tween, group: Rc<CompletionGroup>) {
        if let Some(old) = self.active.take() {
            old.group.cancel();
        }
        // Unknown starting color (never sampled): start at the target.
        let from = self.current.unwrap_or(to);
        self.active = Some(ColorTrack {
            tween,
            from,
            to,
            group,
        });
    }

    fn jump(&mut self, to: Rgb) {
        if let Some(old) = self.active.take() {
            old.group.cancel();
        }
        self.current = Some(to);
    }

    fn step(&mut self, now: f64, due: &mut Vec<Callback>) -> Option<Rgb> {
        let track = self.active.as_ref()?;
        let value = track.from.lerp(track.to, track.tween.eased(now));
        self.current = Some(value);
        if track.tween.is_complete(now) {
            let track = self.active.take().unwrap();
            self.current = Some(track.to);
            track.group.complete(due);
            return Some(track.to);
        }
        Some(value)
    }
}

/// Initial channel values for an element, captured at registration so
/// `reset` can restore them.
#[derive(Clone, Copy, Debug)]
pub struct Registration {
    /// Compose `translate(-50%, -50%)` into the transform (indicator-style
    /// elements whose anchor is their center).
    pub centered: bool,
    pub scale: f64,
    pub font_px: f64,
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            centered: false,
            scale: 1.0,
            font_px: 0.0,
            background: None,
            foreground: None,
        }
    }
}

/// Property targets for one `to`/`set` call. Unnamed properties keep their
/// in-flight tweens untouched.
#[derive(Default)]
pub struct TweenSpec {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub font_px: Option<f64>,
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub duration: f64,
    pub easing: Easing,
    pub on_complete: Option<Callback>,
}

impl TweenSpec {
    fn track_count(&self) -> usize {
        self.x.is_some() as usize
            + self.y.is_some() as usize
            + self.scale.is_some() as usize
            + self.font_px.is_some() as usize
            + self.background.is_some() as usize
            + self.foreground.is_some() as usize
    }
}

struct ElementAnim {
    el: web::HtmlElement,
    reg: Registration,
    x: ScalarChannel,
    y: ScalarChannel,
    scale: ScalarChannel,
    font_px: ScalarChannel,
    background: ColorChannel,
    foreground: ColorChannel,
}

impl ElementAnim {
    fn new(el: web::HtmlElement, reg: Registration) -> Self {
        Self {
            el,
            x: ScalarChannel::new(0.0),
            y: ScalarChannel::new(0.0),
            scale: ScalarChannel::new(reg.scale),
            font_px: ScalarChannel::new(reg.font_px),
            background: ColorChannel::new(reg.background),
            foreground: ColorChannel::new(reg.foreground),
            reg,
        }
    }

    fn apply_transform(&self) {
        let (x, y, s) = (self.x.current, self.y.current, self.scale.current);
        let value = if self.reg.centered {
            format!("translate({x}px, {y}px) translate(-50%, -50%) scale({s})")
        } else {
            format!("translate({x}px, {y}px) scale({s})")
        };
        dom::set_style(&self.el, "transform", &value);
    }

    fn apply_font(&self) {
        dom::set_style(&self.el, "font-size", &format!("{}px", self.font_px.current));
    }
}

pub struct Tweener {
    items: Vec<ElementAnim>,
    /// Callbacks owed by specs that named no animatable property.
    pending: Vec<Callback>,
    /// Timebase of the last `tick`; new tweens start here, at most one
    /// frame behind the event that requested them.
    now: f64,
}

impl Tweener {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pending: Vec::new(),
            now: 0.0,
        }
    }

    pub fn register(&mut self, el: &web::HtmlElement, reg: Registration) {
        if self.index_of(el).is_none() {
            self.items.push(ElementAnim::new(el.clone(), reg));
        }
    }

    fn index_of(&self, el: &web::HtmlElement) -> Option<usize> {
        self.items.iter().position(|item| item.el == *el)
    }

    fn ensure(&mut self, el: &web::HtmlElement) -> usize {
        match self.index_of(el) {
            Some(i) => i,
            None => {
                self.items.push(ElementAnim::new(el.clone(), Registration::default()));
                self.items.len() - 1
            }
        }
    }

    /// Animate the named properties from their current values, GSAP-style.
    pub fn to(&mut self, el: &web::HtmlElement, mut spec: TweenSpec) {
        let tracks = spec.track_count();
        if tracks == 0 {
            // Nothing to animate; honor the callback anyway.
            if let Some(cb) = spec.on_complete.take() {
                self.pending.push(cb);
            }
            return;
        }
        let group = CompletionGroup::new(tracks, spec.on_complete.take());
        let tween = Tween::new(self.now, spec.duration, spec.easing);
        let idx = self.ensure(el);
        let item = &mut self.items[idx];
        if let Some(v) = spec.x {
            item.x.retarget(v, tween, group.clone());
        }
        if let Some(v) = spec.y {
            item.y.retarget(v, tween, group.clone());
        }
        if let Some(v) = spec.scale {
            item.scale.retarget(v, tween, group.clone());
        }
        if let Some(v) = spec.font_px {
            item.font_px.retarget(v, tween, group.clone());
        }
        if let Some(v) = spec.background {
            item.background.retarget(v, tween, group.clone());
        }
        if let Some(v) = spec.foreground {
            item.foreground.retarget(v, tween, group);
        }
    }

    /// Write the named properties immediately, cancelling their tweens.
    pub fn set(&mut self, el: &web::HtmlElement, spec: TweenSpec) {
        let idx = self.ensure(el);
        let item = &mut self.items[idx];
        let mut transform = false;
        if let Some(v) = spec.x {
            item.x.jump(v);
            transform = true;
        }
        if let Some(v) = spec.y {
            item.y.jump(v);
            transform = true;
        }
        if let Some(v) = spec.scale {
            item.scale.jump(v);
            transform = true;
        }
        if let Some(v) = spec.font_px {
            item.font_px.jump(v);
            item.apply_font();
        }
        if let Some(v) = spec.background {
            item.background.jump(v);
            dom::set_style(&item.el, "background-color", &v.to_css());
        }
        if let Some(v) = spec.foreground {
            item.foreground.jump(v);
            dom::set_style(&item.el, "color", &v.to_css());
        }
        if transform {
            item.apply_transform();
        }
    }

    /// Cancel everything on `el`, restore registration values and drop the
    /// transient inline styles the engine wrote (clearProps equivalent).
    pub fn reset(&mut self, el: &web::HtmlElement) {
        let Some(idx) = self.index_of(el) else {
            return;
        };
        let item = &mut self.items[idx];
        item.x.jump(0.0);
        item.y.jump(0.0);
        item.scale.jump(item.reg.scale);
        item.font_px.jump(item.reg.font_px);
        if let Some(old) = item.background.active.take() {
            old.group.cancel();
        }
        item.background.current = item.reg.background;
        if let Some(old) = item.foreground.active.take() {
            old.group.cancel();
        }
        item.foreground.current = item.reg.foreground;
        for prop in ["transform", "background-color", "color", "font-size"] {
            dom::remove_style(&item.el, prop);
        }
    }

    /// Advance all channels to `now` and project them onto element styles.
    /// Returned callbacks must be run by the caller once its borrow ends.
    pub fn tick(&mut self, now: f64) -> Vec<Callback> {
        self.now = now;
        let mut due = std::mem::take(&mut self.pending);
        for item in &mut self.items {
            let mut transform = false;
            transform |= item.x.step(now, &mut due);
            transform |= item.y.step(now, &mut due);
            transform |= item.scale.step(now, &mut due);
            if item.font_px.step(now, &mut due) {
                item.apply_font();
            }
            if let Some(bg) = item.background.step(now, &mut due) {
                dom::set_style(&item.el, "background-color", &bg.to_css());
            }
            if let Some(fg) = item.foreground.step(now, &mut due) {
                dom::set_style(&item.el, "color", &fg.to_css());
            }
            if transform {
                item.apply_transform();
            }
        }
        due
    }
}
