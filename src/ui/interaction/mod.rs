//! Mouse interaction layer.
//!
//! Renderers register clickable regions in a [`HitAreaRegistry`] during
//! each frame; the event loop hit-tests mouse clicks against the registry
//! and feeds the resulting [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
