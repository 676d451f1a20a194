//! Keyboard and mouse dispatch.
//!
//! The main loop feeds raw crossterm events here; this module turns
//! them into App mutations. Wheel events become [`WheelDelta`]s for the
//! gesture debouncers. Most physical wheels only report a vertical
//! notch, so the adapter synthesizes the horizontal component the
//! debouncer reads direction from: scroll down/right means forward,
//! scroll up/left means back.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, Screen, Section};
use crate::carousel::{Direction, WheelDelta};
use crate::prompt::PromptEffect;
use crate::ui::interaction::handle_click_action;

/// Synthetic horizontal magnitude of one wheel notch. Comfortably above
/// the gesture threshold so a single notch counts as one swipe.
pub const WHEEL_TICK_DX: f64 = 24.0;

impl App {
    /// Handle a keyboard event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, regardless of screen or focus.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // Any key fast-forwards the boot sequence.
        if self.screen == Screen::Boot {
            self.boot.skip();
            self.enter_main();
            return;
        }

        // Section switching works everywhere except the contact form,
        // where Tab walks the fields instead.
        match key.code {
            KeyCode::Tab if self.section != Section::Contact => {
                self.next_section();
                return;
            }
            KeyCode::BackTab if self.section != Section::Contact => {
                self.previous_section();
                return;
            }
            KeyCode::PageDown => {
                self.next_section();
                return;
            }
            KeyCode::PageUp => {
                self.previous_section();
                return;
            }
            _ => {}
        }

        match self.section {
            Section::Hero => self.handle_hero_key(key),
            Section::About => self.handle_about_key(key),
            Section::Projects => self.handle_projects_key(key),
            Section::Contact => self.handle_contact_key(key),
        }
    }

    /// Hero keys all go to the embedded prompt.
    fn handle_hero_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let PromptEffect::Navigate(section) = self.prompt.submit(&self.content) {
                    self.goto_section(section);
                }
                self.mark_dirty();
            }
            KeyCode::Up => {
                self.prompt.recall_previous();
                self.mark_dirty();
            }
            KeyCode::Down => {
                self.prompt.recall_next();
                self.mark_dirty();
            }
            KeyCode::Backspace => {
                self.prompt.input.backspace();
                self.mark_dirty();
            }
            KeyCode::Delete => {
                self.prompt.input.delete_char();
                self.mark_dirty();
            }
            KeyCode::Left => {
                self.prompt.input.move_cursor_left();
                self.mark_dirty();
            }
            KeyCode::Right => {
                self.prompt.input.move_cursor_right();
                self.mark_dirty();
            }
            KeyCode::Home => {
                self.prompt.input.move_cursor_home();
                self.mark_dirty();
            }
            KeyCode::End => {
                self.prompt.input.move_cursor_end();
                self.mark_dirty();
            }
            KeyCode::Char(c) => {
                self.prompt.input.insert_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.experience_index > 0 {
                    self.select_experience(self.experience_index - 1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_experience(self.experience_index + 1);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.goto_section(Section::ALL[index]);
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        if self.overlay.is_open() {
            // The overlay captures everything; only closing gets through.
            match key.code {
                KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') | KeyCode::Enter => {
                    self.close_overlay();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.carousel_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.carousel_next(),
            KeyCode::Enter => self.open_project_details(),
            // Digits jump straight to a card; out of range is a no-op.
            KeyCode::Char(c @ '1'..='9') => {
                self.carousel_select(c as usize - '1' as usize);
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.contact.focus_next();
                self.mark_dirty();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.contact.focus_previous();
                self.mark_dirty();
            }
            KeyCode::Enter => {
                // Enter advances through the fields and submits from the
                // last one, like walking a paper form.
                if self.contact.focus() == crate::contact::ContactField::Message {
                    self.submit_contact();
                } else {
                    self.contact.focus_next();
                    self.mark_dirty();
                }
            }
            KeyCode::Backspace if self.contact.can_edit() => {
                self.contact.focused_field_mut().backspace();
                self.mark_dirty();
            }
            KeyCode::Delete if self.contact.can_edit() => {
                self.contact.focused_field_mut().delete_char();
                self.mark_dirty();
            }
            KeyCode::Left if self.contact.can_edit() => {
                self.contact.focused_field_mut().move_cursor_left();
                self.mark_dirty();
            }
            KeyCode::Right if self.contact.can_edit() => {
                self.contact.focused_field_mut().move_cursor_right();
                self.mark_dirty();
            }
            KeyCode::Home if self.contact.can_edit() => {
                self.contact.focused_field_mut().move_cursor_home();
                self.mark_dirty();
            }
            KeyCode::End if self.contact.can_edit() => {
                self.contact.focused_field_mut().move_cursor_end();
                self.mark_dirty();
            }
            KeyCode::Char(c) if self.contact.can_edit() => {
                self.contact.focused_field_mut().insert_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.screen == Screen::Boot {
                    self.boot.skip();
                    self.enter_main();
                    return;
                }
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                } else if self.overlay.is_open() {
                    // Clicking the dimmed backdrop dismisses the overlay.
                    self.close_overlay();
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.handle_wheel(WheelDelta::horizontal(WHEEL_TICK_DX));
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.handle_wheel(WheelDelta::horizontal(-WHEEL_TICK_DX));
            }
            _ => {}
        }
    }

    /// Route a wheel delta to whichever debouncer owns the section.
    ///
    /// On the projects section the wheel drives the carousel and is
    /// suppressed while the overlay is open. Everywhere else it pages
    /// between sections.
    pub fn handle_wheel(&mut self, delta: WheelDelta) {
        if self.screen != Screen::Main {
            return;
        }
        let now = Instant::now();
        if self.section == Section::Projects {
            let enabled = self.overlay.input_enabled();
            if let Some(direction) = self.carousel_debouncer.accept(delta, now, enabled) {
                match direction {
                    Direction::Forward => self.carousel_next(),
                    Direction::Backward => self.carousel_previous(),
                }
            }
        } else if let Some(direction) = self.section_debouncer.accept(delta, now, true) {
            match direction {
                Direction::Forward => self.next_section(),
                Direction::Backward => self.previous_section(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::FolioConfig;
    use crate::contact::{ContactField, OutboxSender, SubmitStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_on(section: Section) -> App {
        let mut app = App::with_sender(
            FolioConfig::default().with_skip_boot(true),
            Arc::new(OutboxSender::with_path(
                std::env::temp_dir().join("folio-test-outbox.jsonl"),
            )),
        )
        .unwrap();
        app.goto_section(section);
        app
    }

    #[test]
    fn test_any_key_skips_boot() {
        let mut app = App::with_sender(
            FolioConfig::default(),
            Arc::new(OutboxSender::with_path(
                std::env::temp_dir().join("folio-test-outbox.jsonl"),
            )),
        )
        .unwrap();
        assert_eq!(app.screen, Screen::Boot);
        app.handle_key_event(key(KeyCode::Char(' ')));
        assert_eq!(app.screen, Screen::Main);
        assert!(app.boot.is_complete());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for section in Section::ALL {
            let mut app = app_on(section);
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert!(app.should_quit, "Ctrl+C should quit from {:?}", section);
        }
    }

    #[test]
    fn test_tab_cycles_sections_outside_contact() {
        let mut app = app_on(Section::Hero);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::About);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Projects);
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.section, Section::About);
    }

    #[test]
    fn test_tab_in_contact_cycles_fields_not_sections() {
        let mut app = app_on(Section::Contact);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Contact);
        assert_eq!(app.contact.focus(), ContactField::Email);
        // PageDown still leaves the section.
        app.handle_key_event(key(KeyCode::PageDown));
        assert_eq!(app.section, Section::Hero);
    }

    #[test]
    fn test_projects_arrows_step_carousel() {
        let mut app = app_on(Section::Projects);
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.carousel.active_index(), 1);
        app.handle_key_event(key(KeyCode::Left));
        app.handle_key_event(key(KeyCode::Left));
        let last = app.content.projects.len() - 1;
        assert_eq!(app.carousel.active_index(), last, "left from 0 wraps to the seam");
    }

    #[test]
    fn test_projects_digit_selects_card() {
        let mut app = app_on(Section::Projects);
        app.handle_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.carousel.active_index(), 2);
        // A digit past the ring is swallowed without moving anything.
        app.handle_key_event(key(KeyCode::Char('9')));
        assert_eq!(app.carousel.active_index(), 2);
    }

    #[test]
    fn test_overlay_captures_keys_until_closed() {
        let mut app = app_on(Section::Projects);
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.overlay.is_open());
        assert_eq!(app.overlay.selected(), Some(0));

        // Arrows must not move the selection while the overlay is up.
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.carousel.active_index(), 0);

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.overlay.is_open());
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.carousel.active_index(), 1);
    }

    #[test]
    fn test_hero_typing_reaches_prompt() {
        let mut app = app_on(Section::Hero);
        for c in "help".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.prompt.input.content(), "help");
        let lines_before = app.prompt.lines().len();
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.prompt.lines().len() > lines_before);
        assert!(app.prompt.input.is_empty());
    }

    #[test]
    fn test_prompt_cd_navigates_sections() {
        let mut app = app_on(Section::Hero);
        for c in "cd projects".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.section, Section::Projects);
    }

    #[test]
    fn test_contact_typing_and_submit_path() {
        let mut app = app_on(Section::Contact);
        for c in "Mayank".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.contact.name.content(), "Mayank");

        // Enter from a non-final field advances focus instead of submitting.
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.contact.focus(), ContactField::Email);
        assert_eq!(*app.contact.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_contact_submit_with_empty_fields_fails_validation() {
        let mut app = app_on(Section::Contact);
        app.contact.set_focus(ContactField::Message);
        app.handle_key_event(key(KeyCode::Enter));
        assert!(
            matches!(app.contact.status(), SubmitStatus::Failed { .. }),
            "empty form should fail validation, not spawn a send"
        );
    }

    #[test]
    fn test_wheel_in_projects_steps_once_per_burst() {
        let mut app = app_on(Section::Projects);
        for _ in 0..10 {
            app.handle_wheel(WheelDelta::horizontal(WHEEL_TICK_DX));
        }
        assert_eq!(
            app.carousel.active_index(),
            1,
            "a burst of wheel notches should advance exactly one card"
        );
    }

    #[test]
    fn test_wheel_suppressed_while_overlay_open() {
        let mut app = app_on(Section::Projects);
        app.open_project_details();
        app.handle_wheel(WheelDelta::horizontal(WHEEL_TICK_DX));
        assert_eq!(app.carousel.active_index(), 0);
        assert_eq!(app.carousel.accumulated_rotation(), 0.0);
    }

    #[test]
    fn test_wheel_outside_projects_changes_section() {
        let mut app = app_on(Section::About);
        app.handle_wheel(WheelDelta::horizontal(WHEEL_TICK_DX));
        assert_eq!(app.section, Section::Projects);
    }
}
