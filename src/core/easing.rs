/// Easing curves used by the tween engine.
///
/// `Power2InOut` matches the "power2.inOut" curve the page uses for the
/// cursor follow, the palette crossfade and the circle growth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
}

impl Easing {
    /// Apply the curve to a progress value in [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t,
            Easing::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Frame-rate independent exponential damping of `current` toward `target`.
///
/// `tau` is the time constant in seconds; larger values follow more lazily.
/// Used by the smooth-scroll engine.
#[inline]
pub fn exp_damp(current: f64, target: f64, dt_sec: f64, tau_sec: f64) -> f64 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    current + (target - current) * alpha
}
