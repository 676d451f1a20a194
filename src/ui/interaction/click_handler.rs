//! Click action dispatch.
//!
//! Translates [`ClickAction`]s from the hit area registry into App state
//! mutations. Called from the event loop when a mouse click lands on a
//! registered region.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::carousel::Direction;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    // Every click action at least dirties the frame
    app.mark_dirty();

    match action {
        ClickAction::GotoSection(section) => {
            app.goto_section(section);
            tracing::debug!(?section, "click: goto section");
        }
        ClickAction::SelectProject(index) => {
            // Clicking the focused card opens it; clicking a side card
            // rotates it into focus.
            if index == app.carousel.active_index() {
                app.open_project_details();
                tracing::debug!(index, "click: opened active card");
            } else {
                app.carousel_select(index);
                tracing::debug!(index, "click: selected card");
            }
        }
        ClickAction::OpenProjectDetails => {
            app.open_project_details();
            tracing::debug!("click: open project details");
        }
        ClickAction::CloseOverlay => {
            app.close_overlay();
            tracing::debug!("click: close overlay");
        }
        ClickAction::OverlayBody => {
            // Swallowed so a click inside the overlay never falls
            // through to the backdrop dismiss rule.
        }
        ClickAction::StepCarousel(direction) => {
            match direction {
                Direction::Forward => app.carousel_next(),
                Direction::Backward => app.carousel_previous(),
            }
            tracing::debug!(?direction, "click: carousel step");
        }
        ClickAction::FocusContactField(field) => {
            app.contact.set_focus(field);
            tracing::debug!(?field, "click: focus contact field");
        }
        ClickAction::SubmitContact => {
            app.submit_contact();
            tracing::debug!("click: submit contact");
        }
        ClickAction::SelectExperience(index) => {
            app.select_experience(index);
            tracing::debug!(index, "click: select experience");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::Section;
    use crate::config::FolioConfig;
    use crate::contact::{ContactField, OutboxSender, SubmitStatus};

    fn test_app() -> App {
        let mut app = App::with_sender(
            FolioConfig::default().with_skip_boot(true),
            Arc::new(OutboxSender::with_path(
                std::env::temp_dir().join("folio-test-outbox.jsonl"),
            )),
        )
        .unwrap();
        app.needs_redraw = false;
        app
    }

    #[test]
    fn test_any_click_marks_dirty() {
        let mut app = test_app();
        assert!(!app.needs_redraw);

        handle_click_action(&mut app, ClickAction::OverlayBody);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_goto_section_switches() {
        let mut app = test_app();
        assert_eq!(app.section, Section::Hero);

        handle_click_action(&mut app, ClickAction::GotoSection(Section::Contact));
        assert_eq!(app.section, Section::Contact);
    }

    #[test]
    fn test_side_card_click_selects() {
        let mut app = test_app();
        app.goto_section(Section::Projects);

        handle_click_action(&mut app, ClickAction::SelectProject(2));
        assert_eq!(app.carousel.active_index(), 2);
        assert!(!app.overlay.is_open());
    }

    #[test]
    fn test_active_card_click_opens_overlay() {
        let mut app = test_app();
        app.goto_section(Section::Projects);

        handle_click_action(&mut app, ClickAction::SelectProject(0));
        assert!(app.overlay.is_open());
        assert_eq!(app.overlay.selected(), Some(0));
    }

    #[test]
    fn test_close_overlay_click() {
        let mut app = test_app();
        app.goto_section(Section::Projects);
        app.open_project_details();
        assert!(app.overlay.is_open());

        handle_click_action(&mut app, ClickAction::CloseOverlay);
        assert!(!app.overlay.is_open());
    }

    #[test]
    fn test_overlay_body_click_keeps_overlay_open() {
        let mut app = test_app();
        app.goto_section(Section::Projects);
        app.open_project_details();

        handle_click_action(&mut app, ClickAction::OverlayBody);
        assert!(app.overlay.is_open());
    }

    #[test]
    fn test_carousel_step_arrows() {
        let mut app = test_app();
        app.goto_section(Section::Projects);

        handle_click_action(&mut app, ClickAction::StepCarousel(Direction::Forward));
        assert_eq!(app.carousel.active_index(), 1);

        handle_click_action(&mut app, ClickAction::StepCarousel(Direction::Backward));
        assert_eq!(app.carousel.active_index(), 0);
    }

    #[test]
    fn test_focus_contact_field() {
        let mut app = test_app();
        app.goto_section(Section::Contact);

        handle_click_action(
            &mut app,
            ClickAction::FocusContactField(ContactField::Message),
        );
        assert_eq!(app.contact.focus(), ContactField::Message);
    }

    #[test]
    fn test_submit_empty_form_fails_validation() {
        let mut app = test_app();
        app.goto_section(Section::Contact);

        // All fields empty: validation rejects before any delivery starts
        handle_click_action(&mut app, ClickAction::SubmitContact);
        assert!(matches!(app.contact.status(), SubmitStatus::Failed { .. }));
    }

    #[test]
    fn test_select_experience() {
        let mut app = test_app();
        app.goto_section(Section::About);

        handle_click_action(&mut app, ClickAction::SelectExperience(1));
        assert_eq!(app.experience_index, 1);
    }
}
