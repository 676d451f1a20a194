//! Top navigation bar and bottom hint line
//!
//! The navbar shows the terminal brand, one clickable tab per section
//! and a clock. The hint line at the bottom of the frame spells out the
//! keys that matter for whatever the user is looking at.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Section};

use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_GREEN, COLOR_SECONDARY};

const BRAND: &str = "DEV.PORTFOLIO";

/// Render the navigation bar.
pub fn render_navbar(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);
    let brand_width = if ctx.is_narrow() { 3 } else { BRAND.len() as u16 + 4 };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(brand_width),
            Constraint::Min(10),
            Constraint::Length(7),
        ])
        .split(area);

    let mut brand_spans = vec![Span::styled(">_", Style::default().fg(COLOR_GREEN))];
    if !ctx.is_narrow() {
        brand_spans.push(Span::styled(
            format!(" {BRAND}"),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(brand_spans)), chunks[0]);

    render_tabs(frame, chunks[1], app);

    let clock = Local::now().format("%H:%M").to_string();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            clock,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Right),
        chunks[2],
    );
}

/// One clickable tab per section. Each tab registers its own rect so a
/// click can jump straight there.
fn render_tabs(frame: &mut Frame, area: Rect, app: &mut App) {
    let active = app.section;
    let mut x = area.x;
    let mut spans: Vec<Span> = Vec::new();

    for section in Section::ALL {
        let cell = format!(" {} ", section.label());
        let width = cell.len() as u16;
        if x + width > area.x + area.width {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        app.hit_registry.register(
            rect,
            ClickAction::GotoSection(section),
            Some(Style::default().fg(COLOR_SECONDARY)),
        );

        let style = if section == active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            app.hit_registry
                .get_hover_style(rect)
                .unwrap_or_else(|| Style::default().fg(COLOR_DIM))
        };
        spans.push(Span::styled(cell, style));
        x += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the contextual key hints along the bottom edge.
pub fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints: Vec<&str> = Vec::new();
    match app.section {
        Section::Hero => {
            hints.push("tab sections");
            hints.push("type in the prompt, enter runs");
            hints.push("up/down history");
        }
        Section::About => {
            hints.push("tab sections");
            hints.push("j/k walk experience");
            hints.push("1-4 jump");
        }
        Section::Projects => {
            hints.push("tab sections");
            if app.overlay.is_open() {
                hints.push("esc closes the overlay");
            } else {
                hints.push("h/l swipe");
                hints.push("enter opens");
            }
        }
        Section::Contact => {
            hints.push("pgup/pgdn sections");
            hints.push("tab cycles fields");
        }
    }
    hints.push("ctrl+c quits");

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints.join(" · "),
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
