//! Color theme constants for the folio UI
//!
//! Defines the near-black terminal palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Terminal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray panel frames
pub const COLOR_BORDER: Color = Color::Rgb(51, 51, 51); // #333

/// Accent color - white for highlights and headings
pub const COLOR_ACCENT: Color = Color::White;

/// Body text - light gray
pub const COLOR_TEXT: Color = Color::Rgb(224, 224, 224); // #e0e0e0

/// Secondary text - mid gray for log lines and summaries
pub const COLOR_SECONDARY: Color = Color::Rgb(170, 170, 170); // #aaa

/// Dim text for chrome and hints
pub const COLOR_DIM: Color = Color::Rgb(102, 102, 102); // #666

/// Terminal green for prompts, cursors and status lights
pub const COLOR_GREEN: Color = Color::Rgb(40, 200, 64); // #28C840

/// Progress bar fill color - white
pub const COLOR_PROGRESS: Color = Color::White;

/// Progress bar background
pub const COLOR_PROGRESS_BG: Color = Color::Rgb(34, 34, 34); // #222

/// Failure states - contact delivery errors, validation messages
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Glitch Echo Colors
// ============================================================================

/// Red half of the glitch echo behind headings
pub const COLOR_GLITCH_RED: Color = Color::Red;

/// Cyan half of the glitch echo behind headings
pub const COLOR_GLITCH_CYAN: Color = Color::Cyan;

// ============================================================================
// Carousel Depth Tiers
// ============================================================================

/// Front-facing card text
pub const COLOR_CARD_FRONT: Color = Color::White;

/// Cards at mid depth
pub const COLOR_CARD_MID: Color = Color::Rgb(140, 140, 140);

/// Cards near the back of the ring
pub const COLOR_CARD_BACK: Color = Color::Rgb(70, 70, 70);

// ============================================================================
// Overlay Colors
// ============================================================================

/// Background color for the project detail overlay
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(5, 5, 5); // #050505

/// Dimmed backdrop behind the overlay
pub const COLOR_BACKDROP: Color = Color::Rgb(40, 40, 40);
