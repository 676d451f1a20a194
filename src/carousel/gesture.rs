//! Wheel gesture debouncing.
//!
//! Trackpads and wheels fire dozens of small delta events per physical
//! swipe. [`GestureDebouncer`] collapses that stream into at most one
//! discrete [`Direction`] per cooldown window so a single gesture moves
//! the carousel exactly one step.

use std::time::{Duration, Instant};

use tracing::debug;

/// A single 2-axis input delta, as fed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

impl WheelDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// A purely horizontal delta. The terminal event adapter maps wheel
    /// ticks to these, since most physical wheels only report a vertical
    /// axis.
    pub fn horizontal(dx: f64) -> Self {
        Self { dx, dy: 0.0 }
    }
}

/// Discrete carousel step produced by an accepted gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Rate-limits a stream of wheel deltas into discrete direction signals.
///
/// Rules, in order:
/// - nothing is accepted while `input_enabled` is false (overlay open)
/// - the dominant axis must exceed the magnitude threshold
/// - at most one signal per cooldown window, measured from the last
///   emitted signal; qualifying events inside the window are dropped
/// - direction comes from the sign of `dx`; a zero `dx` emits nothing
///
/// Only emitted signals touch the window timestamp. Sub-threshold noise
/// and suppressed events leave it alone, so a swipe right after the
/// window expires is never penalized by noise that arrived in between.
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    threshold: f64,
    cooldown: Duration,
    /// Timestamp of the last emitted signal, if any.
    last_signal: Option<Instant>,
}

impl GestureDebouncer {
    /// Minimum dominant-axis magnitude for an event to qualify.
    pub const THRESHOLD: f64 = 20.0;

    /// Minimum interval between two emitted signals.
    pub const COOLDOWN: Duration = Duration::from_millis(500);

    pub fn new(threshold: f64, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            last_signal: None,
        }
    }

    /// Feed one timestamped delta through the debouncer.
    ///
    /// `input_enabled` is the caller-owned suppression flag: the app
    /// passes `false` while the detail overlay is open, which drops the
    /// event before any other rule runs.
    pub fn accept(
        &mut self,
        delta: WheelDelta,
        now: Instant,
        input_enabled: bool,
    ) -> Option<Direction> {
        if !input_enabled {
            return None;
        }

        let dominant = if delta.dx.abs() >= delta.dy.abs() {
            delta.dx
        } else {
            delta.dy
        };
        // Also drops NaN deltas: every comparison with NaN is false.
        if !(dominant.abs() > self.threshold) {
            return None;
        }

        if let Some(last) = self.last_signal {
            let since = now.saturating_duration_since(last);
            if since < self.cooldown {
                debug!(elapsed_ms = since.as_millis() as u64, "gesture dropped inside cooldown window");
                return None;
            }
        }

        let direction = if delta.dx > 0.0 {
            Some(Direction::Forward)
        } else if delta.dx < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        };

        if direction.is_some() {
            self.last_signal = Some(now);
        }
        direction
    }

    /// Forget the last signal so the next qualifying event emits
    /// immediately. Called when the carousel section is re-entered.
    pub fn reset(&mut self) {
        self.last_signal = None;
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(Self::THRESHOLD, Self::COOLDOWN)
    }
}
