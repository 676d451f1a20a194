//! Navigation methods for the App.

use super::{App, Screen, Section};
use crate::effects::Scramble;

impl App {
    /// Switch to a section.
    ///
    /// Re-entering the current section is a no-op. A switch closes the
    /// overlay, resets both gesture debouncers and restarts the heading
    /// scramble so the new heading decodes in.
    pub fn goto_section(&mut self, section: Section) {
        if self.screen != Screen::Main || self.section == section {
            return;
        }

        if self.overlay.is_open() {
            self.overlay.close();
        }
        self.section = section;
        self.carousel_debouncer.reset();
        self.section_debouncer.reset();
        if let Some(heading) = section.heading() {
            self.heading_scramble = Scramble::new(heading);
            if self.config.reduced_motion {
                self.heading_scramble.skip_to_end();
            } else {
                self.heading_scramble.restart(self.tick_count);
            }
        }
        tracing::debug!(?section, "section changed");
        self.mark_dirty();
    }

    /// Move to the next section, wrapping at the end.
    pub fn next_section(&mut self) {
        self.goto_section(self.section.next());
    }

    /// Move to the previous section, wrapping at the start.
    pub fn previous_section(&mut self) {
        self.goto_section(self.section.previous());
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
