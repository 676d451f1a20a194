//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the current terminal dimensions and answers the
//! sizing questions renderers ask every frame: how wide a carousel card
//! should be, how far the ring throws cards sideways, how to split the
//! experience browser columns.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from a rect's dimensions.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Calculate proportional height with min/max bounds.
    pub fn bounded_height(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_height(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Predicates
    // ========================================================================

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is in a "compact" state (narrow or short).
    ///
    /// Compact state indicates that UI elements should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Folio Layout Decisions
    // ========================================================================

    /// Width of a front-facing carousel card in columns.
    pub fn card_width(&self) -> u16 {
        if self.is_extra_small() {
            18
        } else {
            self.bounded_width(30, 22, 36)
        }
    }

    /// Height of a front-facing carousel card in rows.
    pub fn card_height(&self) -> u16 {
        if self.is_short() {
            7
        } else {
            9
        }
    }

    /// Horizontal throw of the carousel ring in columns.
    ///
    /// Cards at a quarter turn sit this far from center. Leaves a margin
    /// so side cards never clip the panel border.
    pub fn carousel_radius(&self) -> f64 {
        let card = self.card_width();
        let margin = 3;
        (self.width.saturating_sub(card).saturating_sub(margin * 2) / 2).max(4) as f64
    }

    /// Column split for the about section's experience browser.
    ///
    /// Returns `(selector_width, detail_width)`. The selector list gets
    /// more room on wider terminals but never dominates.
    pub fn two_column_widths(&self) -> (u16, u16) {
        if self.width < breakpoints::XS_WIDTH {
            let half = self.width / 2;
            (half, self.width - half)
        } else {
            let left = self.bounded_width(38, 24, 46);
            (left, self.width - left)
        }
    }

    /// Maximum display length for a card title before truncation.
    pub fn max_title_length(&self) -> usize {
        if self.is_extra_small() {
            14
        } else if self.is_narrow() {
            20
        } else {
            28
        }
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout_context() {
        let ctx = LayoutContext::new(120, 40);
        assert_eq!(ctx.width, 120);
        assert_eq!(ctx.height, 40);
    }

    #[test]
    fn test_from_rect() {
        let ctx = LayoutContext::from_rect(Rect::new(5, 5, 90, 30));
        assert_eq!(ctx.width, 90);
        assert_eq!(ctx.height, 30);
    }

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(30), 30);
        assert_eq!(ctx.percent_width(0), 1); // Minimum of 1
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        // 30% of 200 = 60, clamped to max of 50
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        // 10% of 200 = 20, clamped to min of 25
        assert_eq!(ctx.bounded_width(10, 25, 50), 25);
        // 20% of 200 = 40, within bounds
        assert_eq!(ctx.bounded_width(20, 20, 50), 40);
    }

    #[test]
    fn test_is_narrow() {
        assert!(LayoutContext::new(60, 24).is_narrow());
        assert!(LayoutContext::new(79, 24).is_narrow());
        assert!(!LayoutContext::new(80, 24).is_narrow());
    }

    #[test]
    fn test_is_compact() {
        assert!(LayoutContext::new(60, 40).is_compact());
        assert!(LayoutContext::new(120, 16).is_compact());
        assert!(!LayoutContext::new(120, 40).is_compact());
    }

    #[test]
    fn test_card_width_scales() {
        // 30% of 80 = 24, within bounds
        assert_eq!(LayoutContext::new(80, 24).card_width(), 24);
        // 30% of 140 = 42, capped at 36
        assert_eq!(LayoutContext::new(140, 40).card_width(), 36);
        // Extra small gets the fixed floor
        assert_eq!(LayoutContext::new(50, 24).card_width(), 18);
    }

    #[test]
    fn test_carousel_radius_leaves_margin() {
        let ctx = LayoutContext::new(100, 30);
        let radius = ctx.carousel_radius();
        let card = ctx.card_width() as f64;
        // A side card's far edge must stay inside the panel
        assert!(radius + card / 2.0 <= ctx.width as f64 / 2.0);
        assert!(radius >= 4.0);
    }

    #[test]
    fn test_two_column_widths() {
        let (left, right) = LayoutContext::new(100, 30).two_column_widths();
        assert_eq!(left + right, 100);
        assert!(left >= 24 && left <= 46);

        // Very narrow: equal split
        let (left, right) = LayoutContext::new(50, 30).two_column_widths();
        assert_eq!(left, 25);
        assert_eq!(right, 25);
    }

    #[test]
    fn test_max_title_length() {
        assert_eq!(LayoutContext::new(50, 24).max_title_length(), 14);
        assert_eq!(LayoutContext::new(70, 24).max_title_length(), 20);
        assert_eq!(LayoutContext::new(100, 24).max_title_length(), 28);
    }
}
