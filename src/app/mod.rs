//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Section`] - Which content section is active on the main screen
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod input;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, Section};

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::boot::BootSequence;
use crate::carousel::{CarouselMotion, DetailOverlay, GestureDebouncer, SelectionController};
use crate::config::FolioConfig;
use crate::contact::{ContactForm, NotificationSender, OutboxSender, SubmitStatus};
use crate::content::Content;
use crate::effects::{GlitchState, Marquee, Scramble, Typewriter};
use crate::prompt::PromptState;
use crate::ui::interaction::HitAreaRegistry;

/// Tick interval of the main loop in milliseconds (~60fps).
pub const TICK_RATE_MS: u64 = 16;

/// Tick interval in seconds, the time step fed to the carousel motion.
pub const TICK_DT_SECS: f64 = 0.016;

/// Keystroke cadence of the hero headline typewriters.
const HERO_TYPE_SPEED_MS: u64 = 80;
/// Delay before the first headline line starts typing.
const HERO_TYPE_DELAY_MS: u64 = 500;
/// Extra start delay per subsequent headline line.
const HERO_TYPE_STAGGER_MS: u64 = 700;
/// Keystroke cadence of the role line.
const ROLE_TYPE_SPEED_MS: u64 = 40;
/// Delay before the role line starts typing, after the headline.
const ROLE_TYPE_DELAY_MS: u64 = 2000;

/// Main application state
pub struct App {
    /// Runtime configuration
    pub config: FolioConfig,
    /// Loaded portfolio content
    pub content: Content,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Active content section on the main screen
    pub section: Section,
    /// Boot sequence state, driven while on the boot screen
    pub boot: BootSequence,
    /// Project selection and accumulated ring rotation
    pub carousel: SelectionController,
    /// Eased visual angle chasing the accumulated rotation
    pub carousel_motion: CarouselMotion,
    /// Project detail overlay
    pub overlay: DetailOverlay,
    /// Debouncer for wheel gestures driving the carousel
    pub carousel_debouncer: GestureDebouncer,
    /// Debouncer for wheel gestures driving section navigation
    pub section_debouncer: GestureDebouncer,
    /// Hero headline typewriters, one per line
    pub hero_typewriters: Vec<Typewriter>,
    /// Role line typewriter under the headline
    pub role_typewriter: Typewriter,
    /// Scramble effect for the current section heading
    pub heading_scramble: Scramble,
    /// Periodic glitch bursts on the hero name
    pub glitch: GlitchState,
    /// Skills marquee in the about section
    pub marquee: Marquee,
    /// Selected entry in the about section experience list
    pub experience_index: usize,
    /// Embedded terminal prompt on the hero section
    pub prompt: PromptState,
    /// Contact form state
    pub contact: ContactForm,
    /// Delivery backend for contact form submissions (shared with async tasks)
    pub sender: Arc<dyn NotificationSender>,
    /// Receiver for async messages (delivery results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
}

impl App {
    /// Create a new App instance with the default outbox sender.
    pub fn new(config: FolioConfig) -> Result<Self> {
        let sender = Arc::new(OutboxSender::new()?);
        Self::with_sender(config, sender)
    }

    /// Create a new App instance with a custom notification sender.
    ///
    /// Content and carousel construction are fatal here: an unreadable
    /// content file or an empty project list leaves nothing to render.
    pub fn with_sender(config: FolioConfig, sender: Arc<dyn NotificationSender>) -> Result<Self> {
        let content = Content::load(config.content_path.as_deref())?;
        let carousel = SelectionController::new(content.projects.len())?;
        let carousel_motion = CarouselMotion::new(config.reduced_motion);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let screen = if config.skip_boot || config.reduced_motion {
            Screen::Main
        } else {
            Screen::Boot
        };

        let mut hero_typewriters: Vec<Typewriter> = content
            .profile
            .hero_lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                Typewriter::new(
                    line.clone(),
                    HERO_TYPE_SPEED_MS,
                    HERO_TYPE_DELAY_MS + i as u64 * HERO_TYPE_STAGGER_MS,
                )
                .hide_cursor_on_complete()
            })
            .collect();
        let mut role_typewriter = Typewriter::new(
            content.profile.role.clone(),
            ROLE_TYPE_SPEED_MS,
            ROLE_TYPE_DELAY_MS,
        );
        if config.reduced_motion {
            // Reveal effects start on their final frame.
            for tw in &mut hero_typewriters {
                tw.skip_to_end();
            }
            role_typewriter.skip_to_end();
        }
        let prompt = PromptState::new(&content.profile.terminal_banner);
        let marquee = Marquee::new(content.skills.clone());

        Ok(Self {
            config,
            content,
            should_quit: false,
            screen,
            section: Section::Hero,
            boot: BootSequence::new(),
            carousel,
            carousel_motion,
            overlay: DetailOverlay::new(),
            carousel_debouncer: GestureDebouncer::default(),
            section_debouncer: GestureDebouncer::default(),
            hero_typewriters,
            role_typewriter,
            heading_scramble: Scramble::new(""),
            glitch: GlitchState::new(),
            marquee,
            experience_index: 0,
            prompt,
            contact: ContactForm::new(),
            sender,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true, // Start with redraw needed
            hit_registry: HitAreaRegistry::new(),
            terminal_width: 0,
            terminal_height: 0,
        })
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw on the next frame.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Record the current terminal size for layout decisions.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    /// Advance the tick counter and every animation that is on screen.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let mut changed = false;
        match self.screen {
            Screen::Boot => {
                changed |= self.boot.update(self.tick_count);
                if self.boot.is_complete() {
                    self.enter_main();
                    changed = true;
                }
            }
            Screen::Main => match self.section {
                Section::Hero => {
                    for typewriter in &mut self.hero_typewriters {
                        changed |= typewriter.update(self.tick_count);
                    }
                    changed |= self.role_typewriter.update(self.tick_count);
                    changed |= self.glitch.update(self.tick_count);
                }
                Section::About => {
                    changed |= self.heading_scramble.update(self.tick_count);
                    changed |= self.marquee.update(self.tick_count);
                }
                Section::Projects => {
                    changed |= self.heading_scramble.update(self.tick_count);
                    changed |= self
                        .carousel_motion
                        .tick(self.carousel.accumulated_rotation(), TICK_DT_SECS);
                }
                Section::Contact => {
                    changed |= self.heading_scramble.update(self.tick_count);
                    // Keep the spinner frames moving while a send is in flight.
                    if matches!(self.contact.status(), SubmitStatus::Sending) {
                        changed = true;
                    }
                }
            },
        }

        if changed {
            self.mark_dirty();
        }
    }

    /// Leave the boot screen for the main screen.
    pub fn enter_main(&mut self) {
        self.screen = Screen::Main;
        self.mark_dirty();
    }

    /// Step the carousel forward one card.
    pub fn carousel_next(&mut self) {
        let index = self.carousel.next();
        tracing::debug!(index, "carousel step forward");
        self.mark_dirty();
    }

    /// Step the carousel back one card.
    pub fn carousel_previous(&mut self) {
        let index = self.carousel.previous();
        tracing::debug!(index, "carousel step back");
        self.mark_dirty();
    }

    /// Jump the carousel to a specific card. Out-of-range targets are a
    /// logged no-op, so stale click regions cannot corrupt the selection.
    pub fn carousel_select(&mut self, index: usize) {
        if self.carousel.select(index).is_ok() {
            self.mark_dirty();
        }
    }

    /// Open the detail overlay on the active card.
    pub fn open_project_details(&mut self) {
        self.overlay.open(self.carousel.active_index());
        self.mark_dirty();
    }

    /// Close the detail overlay if it is open.
    pub fn close_overlay(&mut self) {
        if self.overlay.is_open() {
            self.overlay.close();
            self.mark_dirty();
        }
    }

    /// Move the experience selector in the about section.
    pub fn select_experience(&mut self, index: usize) {
        if index < self.content.experience.len() && index != self.experience_index {
            self.experience_index = index;
            self.mark_dirty();
        }
    }

    /// Validate the contact form and spawn the delivery task.
    ///
    /// The form flips to `Sending` synchronously; the result comes back
    /// through the message channel as [`AppMessage::DeliveryComplete`]
    /// or [`AppMessage::DeliveryFailed`].
    pub fn submit_contact(&mut self) {
        let Some(message) = self.contact.begin_submit() else {
            // Validation failed or a send is already running; the form
            // status carries the reason.
            self.mark_dirty();
            return;
        };

        tracing::info!(id = %message.id, "contact submission accepted, delivering");
        let sender = Arc::clone(&self.sender);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match sender.send(&message).await {
                Ok(receipt) => {
                    let _ = tx.send(AppMessage::DeliveryComplete {
                        id: receipt.message_id,
                    });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DeliveryFailed {
                        reason: e.to_string(),
                    });
                }
            }
        });
        self.mark_dirty();
    }
}
