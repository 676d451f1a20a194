//! Ring geometry for the project carousel.
//!
//! Pure arithmetic: places N items around a circle and computes the
//! shortest signed path between any two of them. Jumping between distant
//! indices must never spin the long way around, so deltas wrap at half
//! the ring.

use super::CarouselError;

/// Full circle in degrees.
pub const FULL_TURN: f64 = 360.0;

/// A validated ring of carousel slots. `len >= 1` always holds after
/// construction, so angle math can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    len: usize,
}

impl Ring {
    /// Create a ring with `len` slots.
    ///
    /// Returns [`CarouselError::EmptyRing`] for `len == 0`.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyRing);
        }
        Ok(Self { len })
    }

    /// Number of slots on the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A constructed ring is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Angular distance between adjacent slots: `360 / N` degrees.
    pub fn angle_step(&self) -> f64 {
        FULL_TURN / self.len as f64
    }

    /// Base angle of slot `index` on the unrotated ring, in degrees.
    pub fn base_angle(&self, index: usize) -> f64 {
        self.angle_step() * index as f64
    }

    /// Signed index delta from `current` to `target` along the shortest
    /// path around the ring.
    ///
    /// The raw difference wraps once it exceeds half the ring, so the
    /// result always satisfies `|delta| <= N/2`. An exact half-ring jump
    /// (even N) keeps the sign of the raw difference.
    ///
    /// # Example
    /// ```
    /// use folio::carousel::Ring;
    /// let ring = Ring::new(5).unwrap();
    /// assert_eq!(ring.shortest_delta(4, 0), 1); // wrap forward, not -4
    /// assert_eq!(ring.shortest_delta(0, 4), -1);
    /// ```
    pub fn shortest_delta(&self, current: usize, target: usize) -> i64 {
        let n = self.len as i64;
        let half = n / 2;
        let mut raw = target as i64 - current as i64;
        if raw > half {
            raw -= n;
        } else if raw < -half {
            raw += n;
        }
        raw
    }

    /// Rotation applied to the ring when the selection moves from
    /// `current` to `target`, in degrees.
    ///
    /// Negated relative to the index delta: advancing to the next index
    /// rotates the ring backward by one step so the newly active slot
    /// lands at the front (world angle 0).
    pub fn rotation_delta(&self, current: usize, target: usize) -> f64 {
        -(self.shortest_delta(current, target) as f64) * self.angle_step()
    }

    /// Next index with wraparound (`N-1` steps to `0`).
    pub fn wrap_next(&self, index: usize) -> usize {
        (index + 1) % self.len
    }

    /// Previous index with wraparound (`0` steps to `N-1`).
    pub fn wrap_previous(&self, index: usize) -> usize {
        (index + self.len - 1) % self.len
    }
}

/// Normalize an angle in degrees into the half-open range `[-180, 180)`.
///
/// The accumulated rotation grows without bound by design; the renderer
/// calls this per slot when projecting world angles onto the screen.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN / 2.0 {
        wrapped - FULL_TURN
    } else {
        wrapped
    }
}
