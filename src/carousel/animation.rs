//! Visual angle easing.
//!
//! The on-screen ring angle chases the controller's accumulated rotation
//! with an exponential approach. The math lives in a pure function of
//! `(current, target, dt)` so the host's tick loop owns all timing; this
//! module never reads a clock.

/// Approach rate per second. Higher settles faster.
const EASE_RATE: f64 = 8.0;

/// Distance in degrees below which the angle snaps to the target.
const SNAP_EPSILON: f64 = 0.05;

/// Move `current` toward `target` by one easing step of `dt_secs`.
///
/// Exponential approach: the remaining distance shrinks by the factor
/// `e^(-EASE_RATE * dt)`. Never overshoots, and `dt = 0` returns
/// `current` unchanged. Within [`SNAP_EPSILON`] of the target the result
/// snaps exactly, so a settled carousel stops redrawing.
pub fn advance_toward_target(current: f64, target: f64, dt_secs: f64) -> f64 {
    let remaining = target - current;
    if remaining.abs() <= SNAP_EPSILON {
        return target;
    }
    let eased = current + remaining * (1.0 - (-EASE_RATE * dt_secs).exp());
    if (target - eased).abs() <= SNAP_EPSILON {
        target
    } else {
        eased
    }
}

/// Render-side angle state, advanced once per tick.
#[derive(Debug, Clone)]
pub struct CarouselMotion {
    visual_angle: f64,
    /// When set, every tick lands on the target immediately.
    reduced_motion: bool,
}

impl CarouselMotion {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            visual_angle: 0.0,
            reduced_motion,
        }
    }

    /// Ease toward `target` by `dt_secs`. Returns whether the angle
    /// moved, which is what drives the redraw flag.
    pub fn tick(&mut self, target: f64, dt_secs: f64) -> bool {
        let next = if self.reduced_motion {
            target
        } else {
            advance_toward_target(self.visual_angle, target, dt_secs)
        };
        if next == self.visual_angle {
            return false;
        }
        self.visual_angle = next;
        true
    }

    pub fn visual_angle(&self) -> f64 {
        self.visual_angle
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.visual_angle == target
    }

    /// Jump straight to `target` without easing.
    pub fn snap_to(&mut self, target: f64) {
        self.visual_angle = target;
    }
}
