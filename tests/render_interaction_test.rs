//! Integration tests for the render + mouse pipeline.
//!
//! Renders real frames into a [`TestBackend`], then drives clicks and
//! hover moves against the hit areas that frame registered, the same
//! round trip the event loop performs. Tests locate their targets by
//! scanning the registry instead of hard-coding coordinates, so layout
//! changes do not invalidate them.

use std::sync::Arc;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::app::{App, Section};
use folio::carousel::Direction;
use folio::config::FolioConfig;
use folio::contact::{ContactField, OutboxSender, SubmitStatus};
use folio::ui;
use folio::ui::interaction::ClickAction;
use folio::ui::{COLOR_DIM, COLOR_SECONDARY};
use ratatui::{backend::TestBackend, Terminal};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn app_on(section: Section) -> App {
    let mut app = App::with_sender(
        FolioConfig::default().with_skip_boot(true),
        Arc::new(OutboxSender::with_path(
            std::env::temp_dir().join("folio-render-outbox.jsonl"),
        )),
    )
    .expect("app should build from embedded content");
    app.goto_section(section);
    app
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("draw should succeed");
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal")
}

/// First cell whose registered action equals `want`.
fn find_action(app: &App, want: &ClickAction) -> (u16, u16) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if app.hit_registry.hit_test(x, y).as_ref() == Some(want) {
                return (x, y);
            }
        }
    }
    panic!("no hit area registered for {:?}", want);
}

/// First content cell with no hit area under it (the overlay backdrop).
fn find_dead_cell(app: &App) -> (u16, u16) {
    for y in 3..HEIGHT - 3 {
        for x in 1..WIDTH - 1 {
            if app.hit_registry.hit_test(x, y).is_none() {
                return (x, y);
            }
        }
    }
    panic!("every content cell has a hit area");
}

fn click(app: &mut App, (x, y): (u16, u16)) {
    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
}

fn move_to(app: &mut App, (x, y): (u16, u16)) {
    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Moved,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
}

// ==================== Navbar ====================

#[test]
fn test_clicking_a_navbar_tab_switches_sections() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Hero);
    draw(&mut terminal, &mut app);

    let tab = find_action(&app, &ClickAction::GotoSection(Section::Projects));
    click(&mut app, tab);
    assert_eq!(app.section, Section::Projects);

    // The next frame registers the contact tab too.
    draw(&mut terminal, &mut app);
    let tab = find_action(&app, &ClickAction::GotoSection(Section::Contact));
    click(&mut app, tab);
    assert_eq!(app.section, Section::Contact);
}

#[test]
fn test_hover_restyles_the_tab_under_the_cursor() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Hero);
    draw(&mut terminal, &mut app);

    let (x, y) = find_action(&app, &ClickAction::GotoSection(Section::About));
    let cell_fg = |terminal: &Terminal<TestBackend>| {
        terminal.backend().buffer().content()[(y as usize) * (WIDTH as usize) + x as usize]
            .style()
            .fg
    };
    assert_eq!(
        cell_fg(&terminal),
        Some(COLOR_DIM),
        "an idle inactive tab renders dim"
    );

    app.needs_redraw = false;
    move_to(&mut app, (x, y));
    assert!(app.needs_redraw, "entering a hover region should dirty the frame");
    draw(&mut terminal, &mut app);
    assert_eq!(
        cell_fg(&terminal),
        Some(COLOR_SECONDARY),
        "the hovered tab should pick up its hover style on the next frame"
    );

    // Moving off restores the idle style.
    move_to(&mut app, (x, HEIGHT - 1));
    draw(&mut terminal, &mut app);
    assert_eq!(cell_fg(&terminal), Some(COLOR_DIM));
}

// ==================== Carousel ====================

#[test]
fn test_clicking_the_footer_arrows_steps_the_carousel() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    draw(&mut terminal, &mut app);

    let arrow = find_action(&app, &ClickAction::StepCarousel(Direction::Forward));
    click(&mut app, arrow);
    assert_eq!(app.carousel.active_index(), 1);

    draw(&mut terminal, &mut app);
    let arrow = find_action(&app, &ClickAction::StepCarousel(Direction::Backward));
    click(&mut app, arrow);
    assert_eq!(app.carousel.active_index(), 0);
}

#[test]
fn test_clicking_a_side_card_rotates_it_into_focus() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    draw(&mut terminal, &mut app);

    let card = find_action(&app, &ClickAction::SelectProject(1));
    click(&mut app, card);
    assert_eq!(app.carousel.active_index(), 1);
    assert!(!app.overlay.is_open(), "side card click focuses, never opens");
}

#[test]
fn test_clicking_the_front_card_opens_its_overlay() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    draw(&mut terminal, &mut app);

    let card = find_action(&app, &ClickAction::SelectProject(0));
    click(&mut app, card);
    assert!(app.overlay.is_open());
    assert_eq!(app.overlay.selected(), Some(0));
}

#[test]
fn test_cards_are_not_clickable_behind_the_overlay() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    draw(&mut terminal, &mut app);
    let card = find_action(&app, &ClickAction::SelectProject(0));
    click(&mut app, card);

    // Re-render with the overlay up: no card or arrow regions remain.
    draw(&mut terminal, &mut app);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let action = app.hit_registry.hit_test(x, y);
            assert!(
                !matches!(
                    action,
                    Some(ClickAction::SelectProject(_)) | Some(ClickAction::StepCarousel(_))
                ),
                "({}, {}) still exposes {:?} behind the overlay",
                x,
                y,
                action
            );
        }
    }
}

// ==================== Overlay dismissal ====================

#[test]
fn test_overlay_close_button() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    app.open_project_details();
    draw(&mut terminal, &mut app);

    let close = find_action(&app, &ClickAction::CloseOverlay);
    click(&mut app, close);
    assert!(!app.overlay.is_open());
}

#[test]
fn test_clicking_the_backdrop_dismisses_the_overlay() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    app.open_project_details();
    draw(&mut terminal, &mut app);

    let backdrop = find_dead_cell(&app);
    click(&mut app, backdrop);
    assert!(!app.overlay.is_open());
}

#[test]
fn test_clicking_inside_the_overlay_keeps_it_open() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    app.open_project_details();
    draw(&mut terminal, &mut app);

    let body = find_action(&app, &ClickAction::OverlayBody);
    click(&mut app, body);
    assert!(app.overlay.is_open(), "body clicks must not fall through to dismiss");
}

// ==================== Contact and about ====================

#[test]
fn test_clicking_a_contact_field_focuses_it() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Contact);
    draw(&mut terminal, &mut app);

    let field = find_action(&app, &ClickAction::FocusContactField(ContactField::Message));
    click(&mut app, field);
    assert_eq!(app.contact.focus(), ContactField::Message);
}

#[test]
fn test_clicking_transmit_runs_validation() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Contact);
    draw(&mut terminal, &mut app);

    let submit = find_action(&app, &ClickAction::SubmitContact);
    click(&mut app, submit);
    assert!(
        matches!(app.contact.status(), SubmitStatus::Failed { .. }),
        "an empty form should fail validation on click"
    );
}

#[test]
fn test_clicking_an_experience_row_selects_it() {
    let mut terminal = terminal();
    let mut app = app_on(Section::About);
    draw(&mut terminal, &mut app);

    let row = find_action(&app, &ClickAction::SelectExperience(1));
    click(&mut app, row);
    assert_eq!(app.experience_index, 1);
}

// ==================== Registry lifecycle ====================

#[test]
fn test_click_regions_rebuild_every_frame() {
    let mut terminal = terminal();
    let mut app = app_on(Section::Projects);
    draw(&mut terminal, &mut app);
    assert!(!app.hit_registry.is_empty());
    let arrow = find_action(&app, &ClickAction::StepCarousel(Direction::Forward));

    // After switching sections and re-rendering, the projects regions
    // are gone and clicks on their old coordinates go nowhere.
    app.goto_section(Section::Hero);
    draw(&mut terminal, &mut app);
    let stale = app.hit_registry.hit_test(arrow.0, arrow.1);
    assert!(
        !matches!(stale, Some(ClickAction::StepCarousel(_))),
        "stale projects regions must not survive into the hero frame"
    );

    click(&mut app, arrow);
    assert_eq!(app.carousel.active_index(), 0, "stale click must not step");
}
