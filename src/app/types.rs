//! Type definitions for the application state.
//!
//! Contains enums used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Section`] - Which content section is active on the main screen

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Boot sequence shown once at startup
    #[default]
    Boot,
    /// Main portfolio screen with section navigation
    Main,
}

/// A content section on the main screen.
///
/// Sections are ordered; Tab and bracket keys walk them in this order
/// and wrap at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// The section after this one, wrapping past the end.
    pub fn next(&self) -> Section {
        match self {
            Section::Hero => Section::About,
            Section::About => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::Hero,
        }
    }

    /// The section before this one, wrapping past the start.
    pub fn previous(&self) -> Section {
        match self {
            Section::Hero => Section::Contact,
            Section::About => Section::Hero,
            Section::Projects => Section::About,
            Section::Contact => Section::Projects,
        }
    }

    /// Position of this section in [`Section::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    /// Heading that scrambles in when the section is entered.
    /// The hero has no heading; its headline types itself in instead.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::About => Some("ARCHITECTING DIGITAL ECOSYSTEMS"),
            Section::Projects => Some("SELECTED WORKS"),
            Section::Contact => Some("LET'S WORK TOGETHER"),
        }
    }
}
