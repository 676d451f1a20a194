//! UI rendering for the folio terminal portfolio
//!
//! Implements the near-black terminal interface with:
//! - Boot screen: BIOS log replay, module loader bar, access banner
//! - Navbar with section tabs and a clock
//! - Hero: typewriter headline, glitch bursts, embedded prompt
//! - About: profile, experience browser, skills marquee
//! - Projects: depth-projected card carousel with a detail overlay
//! - Contact: three-field form wired to the async delivery task
//!
//! ## Responsive Layout System
//!
//! Render functions size themselves through [`LayoutContext`], which
//! wraps the drawing area and answers proportional and breakpoint
//! queries (`bounded_width`, `is_narrow`, `card_width`, ...). Every
//! section builds its context from the rect it was handed, so nested
//! areas degrade consistently on small terminals.
//!
//! ## Hit areas
//!
//! Anything clickable registers a rect in the app's hit registry while
//! it renders. The registry is cleared at the top of [`render`], so the
//! registered regions always describe the frame that is actually on
//! screen. Registration order is z-order: the overlay registers last and
//! shadows the cards beneath it.

mod about;
mod boot;
mod carousel;
mod contact;
mod helpers;
mod hero;
pub mod interaction;
mod layout;
mod navbar;
mod overlay;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CARD_BACK, COLOR_CARD_FRONT, COLOR_CARD_MID, COLOR_DIM,
    COLOR_ERROR, COLOR_GREEN, COLOR_SECONDARY, COLOR_TEXT,
};

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::app::{App, Screen, Section};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    match app.screen {
        Screen::Boot => boot::render_boot(frame, app),
        Screen::Main => render_main(frame, app),
    }

    // Areas were just re-registered; restore the hover index so the
    // next mouse move diffs against the current frame.
    app.hit_registry.refresh_hover();
}

/// Main screen: double-rule outer frame, navbar, one section, hints.
fn render_main(frame: &mut Frame, app: &mut App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(10),   // Section content
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    navbar::render_navbar(frame, chunks[0], app);

    match app.section {
        Section::Hero => hero::render_hero(frame, chunks[1], app),
        Section::About => about::render_about(frame, chunks[1], app),
        Section::Projects => carousel::render_projects(frame, chunks[1], app),
        Section::Contact => contact::render_contact(frame, chunks[1], app),
    }

    navbar::render_hints(frame, chunks[2], app);

    // Painted last so its hit areas shadow the cards beneath.
    if app.overlay.is_open() {
        overlay::render_overlay(frame, chunks[1], app);
    }
}
