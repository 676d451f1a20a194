//! Tick-driven text animations.
//!
//! Each effect is a plain state struct advanced by `update(current_tick)`
//! returning whether its visible output changed, which feeds the app's
//! redraw flag. Timings are given in milliseconds and converted to ticks
//! at construction.

pub mod glitch;
pub mod marquee;
pub mod scramble;
pub mod typewriter;

pub use glitch::GlitchState;
pub use marquee::Marquee;
pub use scramble::Scramble;
pub use typewriter::Typewriter;

/// Duration of one app tick (the event loop sleeps 16ms, ~60fps).
pub(crate) const MS_PER_TICK: u64 = 16;

/// Convert a millisecond interval to ticks, rounding to the nearest tick
/// with a floor of one.
pub(crate) fn ms_to_ticks(ms: u64) -> u64 {
    ((ms + MS_PER_TICK / 2) / MS_PER_TICK).max(1)
}
