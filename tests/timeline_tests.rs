// Host-side tests for tween sampling, easing and color blending.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use logic::color::Rgb;
use logic::constants::*;
use logic::easing::{exp_damp, Easing};
use logic::timeline::{lerp, Callback, CompletionGroup, Tween};

#[test]
fn progress_clamps_to_unit_interval() {
    let tw = Tween::new(1.0, 2.0, Easing::Linear);
    assert_eq!(tw.progress(0.0), 0.0); // before start
    assert_eq!(tw.progress(1.0), 0.0);
    assert_eq!(tw.progress(2.0), 0.5);
    assert_eq!(tw.progress(3.0), 1.0);
    assert_eq!(tw.progress(10.0), 1.0); // long after
}

#[test]
fn completion_at_exactly_duration() {
    let tw = Tween::new(0.0, 2.0, Easing::Power2InOut);
    assert!(!tw.is_complete(1.999));
    assert!(tw.is_complete(2.0));
}

#[test]
fn zero_duration_tween_is_complete_at_once() {
    let tw = Tween::new(5.0, 0.0, Easing::Linear);
    assert!(tw.is_complete(5.0));
    assert_eq!(tw.eased(5.0), 1.0);
}

#[test]
fn power2_in_out_midpoint_and_endpoints() {
    let e = Easing::Power2InOut;
    assert_eq!(e.apply(0.0), 0.0);
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    assert_eq!(e.apply(1.0), 1.0);
    // Slow start: first quarter covers less than a quarter of the range.
    assert!(e.apply(0.25) < 0.25);
    // Fast middle, slow end.
    assert!(e.apply(0.75) > 0.75);
}

#[test]
fn eased_progress_is_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::Power2InOut,
    ] {
        let tw = Tween::new(0.0, 1.0, easing);
        let mut prev = -1.0;
        for i in 0..=100 {
            let v = tw.eased(i as f64 / 100.0);
            assert!(v >= prev, "{easing:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn crossfade_settles_before_growth() {
    // Both timelines start in the same turn; the shorter crossfade must be
    // done while the circle is still growing, and the reveal flag waits on
    // the growth completion.
    let start = 0.0;
    let crossfade = Tween::new(start, CROSSFADE_SECS, Easing::Power2InOut);
    let growth = Tween::new(start, CIRCLE_GROWTH_SECS, Easing::Power2InOut);

    let mid = 1.5;
    assert!(crossfade.is_complete(mid));
    assert!(!growth.is_complete(mid));
    assert!(growth.is_complete(CIRCLE_GROWTH_SECS));
}

#[test]
fn growth_scale_samples_from_zero_to_full() {
    let growth = Tween::new(0.0, CIRCLE_GROWTH_SECS, Easing::Power2InOut);
    assert_eq!(lerp(0.0, CIRCLE_GROWTH_SCALE, growth.eased(0.0)), 0.0);
    let full = lerp(0.0, CIRCLE_GROWTH_SCALE, growth.eased(CIRCLE_GROWTH_SECS));
    assert_eq!(full, CIRCLE_GROWTH_SCALE);
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
}

#[test]
fn color_lerp_blends_palettes() {
    let from = IDLE_PALETTE.background; // black
    let to = REVEALED_PALETTE.background; // red
    assert_eq!(from.lerp(to, 0.0), from);
    assert_eq!(from.lerp(to, 1.0), to);
    let mid = from.lerp(to, 0.5);
    assert_eq!(mid.r, 127); // round(0xfd / 2)
    assert!(mid.g > 0 && mid.g < to.g.max(1));
}

#[test]
fn color_css_formatting() {
    assert_eq!(Rgb::new(253, 44, 42).to_css(), "rgb(253, 44, 42)");
    assert_eq!(REVEALED_PALETTE.background, Rgb::new(253, 44, 42));
}

#[test]
fn exp_damp_converges_and_stays_put() {
    let mut current = 0.0;
    for _ in 0..200 {
        current = exp_damp(current, 100.0, 1.0 / 60.0, 0.15);
    }
    assert!((current - 100.0).abs() < 0.5);
    // Already at target: no drift.
    assert_eq!(exp_damp(100.0, 100.0, 1.0 / 60.0, 0.15), 100.0);
}

#[test]
fn exp_damp_zero_tau_snaps() {
    assert_eq!(exp_damp(0.0, 42.0, 0.016, 0.0), 42.0);
}

fn counting_callback() -> (Callback, std::rc::Rc<std::cell::Cell<u32>>) {
    let fired = std::rc::Rc::new(std::cell::Cell::new(0));
    let inner = fired.clone();
    (Box::new(move || inner.set(inner.get() + 1)), fired)
}

#[test]
fn group_callback_fires_once_after_last_channel() {
    let (cb, fired) = counting_callback();
    let group = CompletionGroup::new(2, Some(cb));
    let mut due: Vec<Callback> = Vec::new();

    group.complete(&mut due);
    assert!(due.is_empty(), "callback must wait for the last channel");

    group.complete(&mut due);
    assert_eq!(due.len(), 1);
    for cb in due.drain(..) {
        cb();
    }
    assert_eq!(fired.get(), 1);

    // Overshoot is inert.
    group.complete(&mut due);
    assert!(due.is_empty());
}

#[test]
fn cancelling_last_channel_drops_callback() {
    let (cb, fired) = counting_callback();
    let group = CompletionGroup::new(1, Some(cb));
    let mut due: Vec<Callback> = Vec::new();

    group.cancel();
    group.complete(&mut due);
    assert!(due.is_empty());
    assert_eq!(fired.get(), 0);
}

#[test]
fn survivor_still_completes_after_sibling_cancelled() {
    let (cb, fired) = counting_callback();
    let group = CompletionGroup::new(2, Some(cb));
    let mut due: Vec<Callback> = Vec::new();

    group.cancel();
    group.complete(&mut due);
    assert_eq!(due.len(), 1);
    for cb in due.drain(..) {
        cb();
    }
    assert_eq!(fired.get(), 1);
}
