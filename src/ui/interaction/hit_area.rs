//! Hit area registry for mouse interactions.
//!
//! Components register clickable regions while rendering, and the event
//! loop queries the registry to decide what a mouse click should do.
//! The registry is cleared and rebuilt every frame, so hit areas always
//! match what is actually on screen.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::Section;
use crate::carousel::Direction;
use crate::contact::ContactField;

/// An action triggered by clicking a registered region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Jump straight to a section from the navbar
    GotoSection(Section),
    /// Make the clicked carousel card the active selection
    SelectProject(usize),
    /// Open the detail overlay for the active project
    OpenProjectDetails,
    /// Close the detail overlay (the `[x]` affordance)
    CloseOverlay,
    /// A click inside the overlay body, swallowed so it never reaches
    /// the backdrop dismiss rule
    OverlayBody,
    /// Step the carousel one card via the on-screen arrows
    StepCarousel(Direction),
    /// Move focus to a contact form field
    FocusContactField(ContactField),
    /// Submit the contact form
    SubmitContact,
    /// Highlight an experience entry in the about section
    SelectExperience(usize),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Create a new hit area with a hover style.
    pub fn with_hover_style(rect: Rect, action: ClickAction, hover_style: Style) -> Self {
        Self {
            rect,
            action,
            hover_style: Some(hover_style),
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of all clickable regions on screen.
///
/// Areas are registered during rendering and cleared at the start of each
/// render cycle. Registration order doubles as z-order: later areas sit
/// on top, so the overlay registers after the carousel and wins hit
/// tests over the cards beneath it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
    /// Last known mouse position, kept across frame clears so hover can
    /// be re-resolved once areas are re-registered
    last_mouse: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            areas: Vec::new(),
            hovered: None,
            last_mouse: None,
        }
    }

    /// Clear all registered areas and reset hover state.
    ///
    /// Call this at the start of each render cycle. The last mouse
    /// position is retained; `refresh_hover` restores the hover index
    /// after the frame has re-registered its areas.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for
    /// overlapping regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Register a hit area from an existing HitArea struct.
    pub fn register_area(&mut self, area: HitArea) {
        self.areas.push(area);
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point,
    /// or None if no area was hit. Areas are checked in reverse order
    /// (last registered = highest priority).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        // Reverse so the topmost (last registered) area wins
        for area in self.areas.iter().rev() {
            if area.contains(x, y) {
                return Some(area.action.clone());
            }
        }
        None
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.last_mouse = Some((x, y));
        let new_hovered = self.find_hovered_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Re-resolve the hover index from the last known mouse position.
    ///
    /// Call after a frame has registered all its areas, so hover styling
    /// survives the per-frame clear without waiting for the next mouse
    /// move event.
    pub fn refresh_hover(&mut self) {
        if let Some((x, y)) = self.last_mouse {
            self.hovered = self.find_hovered_index(x, y);
        }
    }

    /// Find the index of the topmost area containing the given point.
    fn find_hovered_index(&self, x: u16, y: u16) -> Option<usize> {
        for (i, area) in self.areas.iter().enumerate().rev() {
            if area.contains(x, y) {
                return Some(i);
            }
        }
        None
    }

    /// Get the hover style for a rect if the mouse is over it.
    ///
    /// Resolved from the last known mouse position against the areas
    /// registered so far, so render code can register a region and then
    /// query its style in the same frame. Register before querying, or
    /// the rect will not be found.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let (x, y) = self.last_mouse?;
        let topmost = self.areas.iter().rev().find(|area| area.contains(x, y))?;
        if topmost.rect == rect {
            topmost.hover_style
        } else {
            None
        }
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
