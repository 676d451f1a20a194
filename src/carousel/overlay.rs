//! Detail overlay state.
//!
//! A modal for a single project, keyed by its position in the fixed item
//! sequence. Deliberately decoupled from the carousel's rotational
//! focus: opening never touches the active index, and closing restores
//! the view exactly as it was.

use tracing::debug;

/// Which item the overlay is showing, if any.
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    selected: Option<usize>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show details for the item at `index`. Only ever called from an
    /// explicit user action (Enter on the active card, click on a card).
    pub fn open(&mut self, index: usize) {
        debug!(index, "detail overlay opened");
        self.selected = Some(index);
    }

    /// Dismiss the overlay.
    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            debug!("detail overlay closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Suppression flag for the gesture debouncer: carousel input is
    /// only live while no overlay is up.
    pub fn input_enabled(&self) -> bool {
        self.selected.is_none()
    }
}
