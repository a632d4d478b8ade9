// Time sampling and completion bookkeeping for in-flight tweens.
//
// A `Tween` is pure data: given "now" it reports progress, eased progress
// and completion. The web-side tween engine owns the per-element channels
// and uses this for the math so it stays host-testable.
// NOTE: included verbatim by the host-side tests; keep this file free of
// inner attributes and `crate::` paths.

use super::easing::Easing;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Raw progress in [0, 1]. Zero-duration tweens are complete at once.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn eased(&self, now: f64) -> f64 {
        self.easing.apply(self.progress(now))
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub type Callback = Box<dyn FnOnce()>;

/// Completion bookkeeping shared by every channel started from one tween
/// request. The callback fires once, when the last surviving channel
/// completes. A cancelled channel (replaced or reset mid-flight) never
/// completes, so if the final channel is cancelled the callback is dropped
/// rather than fired.
pub struct CompletionGroup {
    remaining: Cell<usize>,
    callback: RefCell<Option<Callback>>,
}

impl CompletionGroup {
    pub fn new(tracks: usize, callback: Option<Callback>) -> Rc<Self> {
        Rc::new(Self {
            remaining: Cell::new(tracks),
            callback: RefCell::new(callback),
        })
    }

    /// A channel finished; queues the callback when it was the last one.
    pub fn complete(&self, due: &mut Vec<Callback>) {
        let left = self.remaining.get().saturating_sub(1);
        self.remaining.set(left);
        if left == 0 {
            if let Some(cb) = self.callback.borrow_mut().take() {
                due.push(cb);
            }
        }
    }

    /// A channel was replaced or reset before finishing.
    pub fn cancel(&self) {
        let left = self.remaining.get().saturating_sub(1);
        self.remaining.set(left);
        if left == 0 {
            self.callback.borrow_mut().take();
        }
    }
}
