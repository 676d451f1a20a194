//! The embedded command prompt on the hero screen.
//!
//! A tiny shell over the portfolio content: `ls` the sections, `cd` to
//! navigate, `whoami`/`skills`/`contact` to read the profile. Commands
//! run synchronously against [`Content`] and hand the app a
//! [`PromptEffect`] to apply.

use chrono::Local;
use tracing::debug;

use crate::app::Section;
use crate::content::Content;
use crate::widgets::InputField;

/// Scrollback cap; oldest lines drop off first.
const MAX_SCROLLBACK: usize = 200;

/// Command history cap for Up/Down recall.
const MAX_COMMAND_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLineKind {
    /// A line the user typed, rendered behind the prompt label.
    User,
    /// Output from a command or the banner.
    System,
}

#[derive(Debug, Clone)]
pub struct PromptLine {
    pub kind: PromptLineKind,
    pub text: String,
}

/// What the app should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEffect {
    None,
    Navigate(Section),
}

#[derive(Debug, Clone)]
pub struct PromptState {
    pub input: InputField,
    lines: Vec<PromptLine>,
    command_history: Vec<String>,
    /// Position while recalling history; `None` means editing fresh input.
    recall: Option<usize>,
}

impl PromptState {
    /// `banner` becomes the first scrollback line (cleared by `clear`
    /// like everything else).
    pub fn new(banner: &str) -> Self {
        let mut lines = Vec::new();
        if !banner.is_empty() {
            lines.push(PromptLine {
                kind: PromptLineKind::System,
                text: banner.to_string(),
            });
        }
        Self {
            input: InputField::new(),
            lines,
            command_history: Vec::new(),
            recall: None,
        }
    }

    pub fn lines(&self) -> &[PromptLine] {
        &self.lines
    }

    /// The last `n` scrollback lines, for a fixed-height panel.
    pub fn visible_tail(&self, n: usize) -> &[PromptLine] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    /// Run whatever is in the input field. Always echoes the typed line;
    /// pushes output lines and returns the navigation effect, if any.
    pub fn submit(&mut self, content: &Content) -> PromptEffect {
        let raw = self.input.take();
        self.push(PromptLineKind::User, raw.clone());
        self.remember(&raw);
        self.recall = None;

        let cleaned = raw.trim().to_lowercase();
        debug!(command = %cleaned, "prompt command");

        let (output, effect) = match cleaned.as_str() {
            "" => (String::new(), PromptEffect::None),
            "help" => (
                [
                    "Available commands:",
                    "  ls          - List sections",
                    "  cd [dir]    - Go to section",
                    "  whoami      - My Profile",
                    "  skills      - Tech Stack",
                    "  contact     - Socials",
                    "  date        - Local time",
                    "  clear       - Clear",
                ]
                .join("\n"),
                PromptEffect::None,
            ),
            "ls" => ("about/    projects/    contact/".to_string(), PromptEffect::None),
            "whoami" => (content.profile.tagline.clone(), PromptEffect::None),
            "skills" => (content.skills.join(", "), PromptEffect::None),
            "contact" => (content.profile.email.clone(), PromptEffect::None),
            "date" => (
                Local::now().format("%a %b %e %Y %H:%M:%S").to_string(),
                PromptEffect::None,
            ),
            "clear" => {
                self.lines.clear();
                return PromptEffect::None;
            }
            _ if cleaned.starts_with("cd ") => {
                let target = cleaned.split_whitespace().nth(1).unwrap_or("");
                match target {
                    "about" => (
                        "Navigating to about...".to_string(),
                        PromptEffect::Navigate(Section::About),
                    ),
                    "projects" => (
                        "Navigating to projects...".to_string(),
                        PromptEffect::Navigate(Section::Projects),
                    ),
                    "contact" => (
                        "Navigating to contact...".to_string(),
                        PromptEffect::Navigate(Section::Contact),
                    ),
                    "~" | "home" => (
                        "Navigating to home...".to_string(),
                        PromptEffect::Navigate(Section::Hero),
                    ),
                    ".." => ("At root.".to_string(), PromptEffect::None),
                    _ => (format!("cd: no such dir: {}", target), PromptEffect::None),
                }
            }
            _ => (format!("Not found: {}", raw.trim()), PromptEffect::None),
        };

        if !output.is_empty() {
            for line in output.lines() {
                self.push(PromptLineKind::System, line.to_string());
            }
        }
        effect
    }

    /// Up arrow: walk back through typed commands.
    pub fn recall_previous(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let next = match self.recall {
            None => self.command_history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.recall = Some(next);
        self.input.set_content(self.command_history[next].clone());
    }

    /// Down arrow: walk forward; past the newest entry clears the input.
    pub fn recall_next(&mut self) {
        match self.recall {
            None => {}
            Some(i) if i + 1 < self.command_history.len() => {
                self.recall = Some(i + 1);
                self.input.set_content(self.command_history[i + 1].clone());
            }
            Some(_) => {
                self.recall = None;
                self.input.clear();
            }
        }
    }

    fn push(&mut self, kind: PromptLineKind, text: String) {
        self.lines.push(PromptLine { kind, text });
        if self.lines.len() > MAX_SCROLLBACK {
            let excess = self.lines.len() - MAX_SCROLLBACK;
            self.lines.drain(..excess);
        }
    }

    fn remember(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.command_history.push(raw.to_string());
        if self.command_history.len() > MAX_COMMAND_HISTORY {
            let excess = self.command_history.len() - MAX_COMMAND_HISTORY;
            self.command_history.drain(..excess);
        }
    }
}
