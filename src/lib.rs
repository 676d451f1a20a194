//! folio - an animated developer portfolio for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod boot;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod effects;
pub mod logging;
pub mod prompt;
pub mod ui;
pub mod widgets;
