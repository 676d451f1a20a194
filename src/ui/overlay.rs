//! Project detail overlay
//!
//! Modal pinned to whichever card was open when it was summoned; the
//! carousel can keep rotating behind it without the overlay following.
//! Rendered after the cards so its hit areas shadow theirs: a click on
//! the modal body is swallowed, the close button dismisses, and anything
//! outside falls through to the backdrop dismiss rule in the input layer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::centered_rect;
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_GREEN, COLOR_OVERLAY_BG, COLOR_SECONDARY, COLOR_TEXT,
};

/// Render the detail modal for the overlay's pinned project, if open.
pub fn render_overlay(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(index) = app.overlay.selected() else {
        return;
    };
    let Some(project) = app.content.project(index) else {
        return;
    };
    let project = project.clone();

    let ctx = LayoutContext::from_rect(area);
    let modal = centered_rect(
        area,
        ctx.bounded_width(80, 44, 90),
        ctx.bounded_height(75, 16, 28),
    );

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_OVERLAY_BG))
        .title(Span::styled(
            format!(" {:02} / {} ", index + 1, app.carousel.ring().len()),
            Style::default().fg(COLOR_DIM),
        ));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    // Body first so the close button's hit area lands on top of it
    app.hit_registry
        .register(modal, ClickAction::OverlayBody, None);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title row
            Constraint::Length(1), // Tech row
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Details
            Constraint::Length(1), // Links
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let title_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(chunks[0]);

    let mut title_spans = vec![Span::styled(
        project.title.clone(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if project.featured {
        title_spans.push(Span::styled(" ★", Style::default().fg(COLOR_GREEN)));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title_row[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[x]",
            Style::default().fg(COLOR_SECONDARY),
        )))
        .alignment(Alignment::Right),
        title_row[1],
    );
    app.hit_registry.register(
        title_row[1],
        ClickAction::CloseOverlay,
        Some(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
    );

    if !project.tech.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                project.tech.join(" · ").to_uppercase(),
                Style::default().fg(COLOR_GREEN),
            ))),
            chunks[1],
        );
    }

    let mut detail_lines: Vec<Line> = vec![Line::from(Span::styled(
        project.summary.clone(),
        Style::default().fg(COLOR_TEXT),
    ))];
    for paragraph in &project.details {
        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(COLOR_SECONDARY),
        )));
    }
    frame.render_widget(
        Paragraph::new(detail_lines).wrap(Wrap { trim: true }),
        chunks[3],
    );

    let mut link_spans: Vec<Span> = Vec::new();
    if let Some(repo) = &project.repo {
        link_spans.push(Span::styled("</> ", Style::default().fg(COLOR_GREEN)));
        link_spans.push(Span::styled(repo.clone(), Style::default().fg(COLOR_DIM)));
    }
    if let Some(live) = &project.live {
        if !link_spans.is_empty() {
            link_spans.push(Span::raw("   "));
        }
        link_spans.push(Span::styled("◉ ", Style::default().fg(COLOR_GREEN)));
        link_spans.push(Span::styled(live.clone(), Style::default().fg(COLOR_DIM)));
    }
    if !link_spans.is_empty() {
        frame.render_widget(Paragraph::new(Line::from(link_spans)), chunks[4]);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "esc or [x] to close",
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Right),
        chunks[5],
    );
}
