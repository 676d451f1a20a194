//! Carousel selection and gesture core.
//!
//! Everything the rotating project ring needs, kept deliberately free of
//! rendering types so it can be driven and tested headless:
//!
//! - [`Ring`]: angle per item and the shortest signed path between slots
//! - [`GestureDebouncer`]: turns raw wheel deltas into discrete steps
//! - [`SelectionController`]: the authoritative index + rotation pair
//! - [`DetailOverlay`]: modal state for a single item, decoupled from
//!   the rotational focus
//! - [`CarouselMotion`]: eases the on-screen angle toward the target
//!
//! The UI layer owns projection (angle to column/depth) and rendering;
//! this module only hands it [`SelectionState`] and a visual angle.

pub mod animation;
pub mod gesture;
pub mod overlay;
pub mod rotation;
pub mod selection;

pub use animation::{advance_toward_target, CarouselMotion};
pub use gesture::{Direction, GestureDebouncer, WheelDelta};
pub use overlay::DetailOverlay;
pub use rotation::{normalize_degrees, Ring, FULL_TURN};
pub use selection::{SelectionController, SelectionState};

use thiserror::Error;

/// Errors from carousel construction and selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The ring was constructed with zero items. Fatal: a carousel with
    /// nothing on it cannot render meaningfully.
    #[error("carousel requires at least one item")]
    EmptyRing,

    /// A selection targeted an index outside `[0, len)`. Recoverable:
    /// the operation is rejected and state is left untouched.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
