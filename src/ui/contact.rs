//! Contact section rendering
//!
//! Three-field form with Tab-cycled focus, a transmit button and a
//! status line that follows the async delivery. While a send is in
//! flight the form locks and the status line animates a spinner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::contact::{ContactField, SubmitStatus};

use super::helpers::{inner_rect, SPINNER_FRAMES};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GREEN, COLOR_SECONDARY, COLOR_TEXT,
};

/// Render the contact section.
pub fn render_contact(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);
    let content = inner_rect(area, 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Eyebrow
            Constraint::Length(2), // Scrambled heading
            Constraint::Min(11),   // Channels + form
        ])
        .split(content);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "// AVAILABLE FOR WORK",
            Style::default().fg(COLOR_GREEN),
        ))),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.heading_scramble.display().to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[1],
    );

    if ctx.is_narrow() {
        render_form(frame, chunks[2], app);
    } else {
        let (info_width, _) = ctx.two_column_widths();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(info_width), Constraint::Min(30)])
            .split(chunks[2]);
        render_channels(frame, columns[0], app);
        render_form(frame, columns[1], app);
    }
}

/// Static contact channels beside the form.
fn render_channels(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" channels ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = &app.content.profile;
    let label = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_TEXT);
    let lines = vec![
        Line::from(Span::styled(
            "open for freelance work and full-time roles",
            Style::default().fg(COLOR_SECONDARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("mail      ", label),
            Span::styled(profile.email.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("github    ", label),
            Span::styled(profile.github.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("linkedin  ", label),
            Span::styled(profile.linkedin.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("base      ", label),
            Span::styled(profile.location.clone(), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Message
            Constraint::Length(1), // Transmit button
            Constraint::Length(1), // Status
        ])
        .split(area);

    render_field(frame, rows[0], app, ContactField::Name);
    render_field(frame, rows[1], app, ContactField::Email);
    render_field(frame, rows[2], app, ContactField::Message);
    render_transmit(frame, rows[3], app);
    render_status(frame, rows[4], app);
}

/// One bordered input row. The focused field gets a green frame and a
/// blinking block cursor; the others stay dim.
fn render_field(frame: &mut Frame, rect: Rect, app: &mut App, field: ContactField) {
    let focused = app.contact.focus() == field;
    let locked = !app.contact.can_edit();

    app.hit_registry.register(
        rect,
        ClickAction::FocusContactField(field),
        Some(Style::default().fg(COLOR_SECONDARY)),
    );
    let border_style = if focused && !locked {
        Style::default().fg(COLOR_GREEN)
    } else {
        app.hit_registry
            .get_hover_style(rect)
            .unwrap_or_else(|| Style::default().fg(COLOR_BORDER))
    };
    let label_style = if focused && !locked {
        Style::default().fg(COLOR_GREEN)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", field.label()), label_style));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.width < 2 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize - 1;
    let (visible, cursor_col) = app.contact.field_mut(field).visible_window(width);

    let mut spans: Vec<Span> = Vec::new();
    if focused && !locked {
        let split_at = visible
            .char_indices()
            .nth(cursor_col)
            .map(|(i, _)| i)
            .unwrap_or(visible.len());
        let (before, after) = visible.split_at(split_at);
        spans.push(Span::styled(before.to_string(), Style::default().fg(COLOR_TEXT)));
        if (app.tick_count / 30) % 2 == 0 {
            spans.push(Span::styled("█", Style::default().fg(COLOR_GREEN)));
            spans.push(Span::styled(
                after.chars().skip(1).collect::<String>(),
                Style::default().fg(COLOR_TEXT),
            ));
        } else {
            spans.push(Span::styled(after.to_string(), Style::default().fg(COLOR_TEXT)));
        }
    } else {
        spans.push(Span::styled(visible, Style::default().fg(COLOR_SECONDARY)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_transmit(frame: &mut Frame, rect: Rect, app: &mut App) {
    let sending = *app.contact.status() == SubmitStatus::Sending;

    app.hit_registry.register(
        rect,
        ClickAction::SubmitContact,
        Some(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    );
    let style = if sending {
        Style::default().fg(COLOR_DIM)
    } else {
        app.hit_registry
            .get_hover_style(rect)
            .unwrap_or_else(|| Style::default().fg(COLOR_TEXT))
    };

    let label = if sending {
        let spinner = SPINNER_FRAMES[(app.tick_count / 3) as usize % SPINNER_FRAMES.len()];
        format!("[ {spinner} SENDING ]")
    } else {
        "[ TRANSMIT ]".to_string()
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
}

fn render_status(frame: &mut Frame, rect: Rect, app: &App) {
    let line = match app.contact.status() {
        SubmitStatus::Idle => Line::from(Span::styled(
            "tab cycles fields · enter walks forward and transmits from message",
            Style::default().fg(COLOR_DIM),
        )),
        SubmitStatus::Sending => Line::from(Span::styled(
            "TRANSMITTING...",
            Style::default().fg(COLOR_SECONDARY),
        )),
        SubmitStatus::Sent { id } => Line::from(vec![
            Span::styled("MESSAGE SENT", Style::default().fg(COLOR_GREEN)),
            Span::styled(format!(" · ref {id}"), Style::default().fg(COLOR_DIM)),
        ]),
        SubmitStatus::Failed { reason } => Line::from(vec![
            Span::styled("SEND FAILED: ", Style::default().fg(COLOR_ERROR)),
            Span::styled(reason.clone(), Style::default().fg(COLOR_SECONDARY)),
        ]),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), rect);
}
