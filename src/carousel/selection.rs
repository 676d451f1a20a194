//! Selection state for the project carousel.
//!
//! [`SelectionController`] is the sole mutator of the active index and
//! the accumulated rotation. Every transition goes through the shortest
//! path on the ring, and both fields always change together in a single
//! assignment so a renderer can never observe a half-applied step.

use tracing::debug;

use super::rotation::Ring;
use super::CarouselError;

/// The authoritative carousel pair, read by the renderer as one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    /// Index of the item currently at the front, in `[0, len)`.
    pub active_index: usize,
    /// Total signed rotation applied over the session, in degrees.
    ///
    /// Intentionally never wrapped into `[0, 360)`: the visual easing
    /// chases this value, and renormalizing it would send the animation
    /// the long way around at the seam. f64 has range to spare.
    pub accumulated_rotation: f64,
}

/// Owns [`SelectionState`] and serializes all index changes.
#[derive(Debug, Clone)]
pub struct SelectionController {
    ring: Ring,
    state: SelectionState,
}

impl SelectionController {
    /// Create a controller over `len` items, starting at index 0 with no
    /// rotation. Fails with [`CarouselError::EmptyRing`] for `len == 0`.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        let ring = Ring::new(len)?;
        Ok(Self {
            ring,
            state: SelectionState {
                active_index: 0,
                accumulated_rotation: 0.0,
            },
        })
    }

    /// Advance one step forward (wrapping), returning the new index.
    pub fn next(&mut self) -> usize {
        let target = self.ring.wrap_next(self.state.active_index);
        self.go_to(target);
        target
    }

    /// Step backward (wrapping), returning the new index.
    pub fn previous(&mut self) -> usize {
        let target = self.ring.wrap_previous(self.state.active_index);
        self.go_to(target);
        target
    }

    /// Jump directly to `target`, taking the shortest path.
    ///
    /// Out-of-range targets are rejected with
    /// [`CarouselError::IndexOutOfRange`] and leave the state untouched.
    /// Selecting the already-active index is a no-op.
    pub fn select(&mut self, target: usize) -> Result<usize, CarouselError> {
        if target >= self.ring.len() {
            debug!(target, len = self.ring.len(), "selection rejected: out of range");
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                len: self.ring.len(),
            });
        }
        if target != self.state.active_index {
            self.go_to(target);
        }
        Ok(target)
    }

    /// Apply one transition. Both fields of the new state are computed
    /// up front and assigned at once.
    fn go_to(&mut self, target: usize) {
        let delta = self
            .ring
            .rotation_delta(self.state.active_index, target);
        self.state = SelectionState {
            active_index: target,
            accumulated_rotation: self.state.accumulated_rotation + delta,
        };
    }

    /// Snapshot of the index + rotation pair from the same transition.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn accumulated_rotation(&self) -> f64 {
        self.state.accumulated_rotation
    }

    pub fn ring(&self) -> Ring {
        self.ring
    }
}
