//! About section rendering
//!
//! Scrambled heading, bio card, and the experience browser: a selectable
//! list of positions with a detail pane for the highlighted entry. A
//! skills marquee crawls along the bottom edge.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::{inner_rect, truncate_string};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GREEN, COLOR_SECONDARY, COLOR_TEXT,
};

/// Render the about section.
pub fn render_about(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);
    let content = inner_rect(area, 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Eyebrow
            Constraint::Length(2), // Scrambled heading
            Constraint::Min(8),    // Bio + experience columns
            Constraint::Length(1), // Skills marquee
        ])
        .split(content);

    let eyebrow = Paragraph::new(Line::from(Span::styled(
        "// EXPLORE MY WORLD",
        Style::default().fg(COLOR_GREEN),
    )));
    frame.render_widget(eyebrow, chunks[0]);

    let heading = Paragraph::new(Line::from(Span::styled(
        app.heading_scramble.display().to_string(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[1]);

    let (left_width, _) = ctx.two_column_widths();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Min(20)])
        .split(chunks[2]);

    render_bio(frame, columns[0], app);
    render_experience(frame, columns[1], app);

    let marquee = Paragraph::new(Line::from(Span::styled(
        app.marquee.window(chunks[3].width as usize),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(marquee, chunks[3]);
}

fn render_bio(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" profile ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = &app.content.profile;
    let mut lines: Vec<Line> = Vec::new();
    for paragraph in &profile.bio {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(COLOR_TEXT),
        )));
        lines.push(Line::from(""));
    }
    if !profile.location.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("base   ", Style::default().fg(COLOR_DIM)),
            Span::styled(profile.location.clone(), Style::default().fg(COLOR_SECONDARY)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("mail   ", Style::default().fg(COLOR_DIM)),
        Span::styled(profile.email.clone(), Style::default().fg(COLOR_SECONDARY)),
    ]));
    if !profile.github.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("github ", Style::default().fg(COLOR_DIM)),
            Span::styled(profile.github.clone(), Style::default().fg(COLOR_SECONDARY)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// The experience browser: list on top, detail pane for the highlighted
/// entry below. List rows are clickable.
fn render_experience(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " WORK EXPERIENCE ",
            Style::default().fg(COLOR_DIM),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || app.content.experience.is_empty() {
        return;
    }

    let list_rows = (app.content.experience.len() as u16).min(inner.height / 2);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(list_rows), Constraint::Min(2)])
        .split(inner);

    let mut list_lines: Vec<Line> = Vec::new();
    for (i, exp) in app.content.experience.iter().enumerate() {
        if i as u16 >= list_rows {
            break;
        }
        let row = Rect::new(parts[0].x, parts[0].y + i as u16, parts[0].width, 1);
        app.hit_registry.register(
            row,
            ClickAction::SelectExperience(i),
            Some(Style::default().fg(COLOR_ACCENT)),
        );

        let selected = i == app.experience_index;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            app.hit_registry
                .get_hover_style(row)
                .unwrap_or_else(|| Style::default().fg(COLOR_SECONDARY))
        };
        list_lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_GREEN)),
            Span::styled(format!("{}  ", exp.period), Style::default().fg(COLOR_DIM)),
            Span::styled(
                truncate_string(
                    &format!("{} @ {}", exp.role, exp.org),
                    (parts[0].width as usize).saturating_sub(exp.period.len() + 4),
                ),
                style,
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(list_lines), parts[0]);

    if let Some(exp) = app.content.experience.get(app.experience_index) {
        let mut detail: Vec<Line> = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    exp.role.clone(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" @ {}", exp.org), Style::default().fg(COLOR_SECONDARY)),
            ]),
        ];
        if !exp.kind.is_empty() {
            detail.push(Line::from(Span::styled(
                format!("[{}]", exp.kind),
                Style::default().fg(COLOR_GREEN),
            )));
        }
        detail.push(Line::from(Span::styled(
            exp.summary.clone(),
            Style::default().fg(COLOR_TEXT),
        )));
        if !exp.tech.is_empty() {
            detail.push(Line::from(vec![
                Span::styled("stack: ", Style::default().fg(COLOR_DIM)),
                Span::styled(exp.tech.join(" · "), Style::default().fg(COLOR_SECONDARY)),
            ]));
        }
        for achievement in &exp.achievements {
            detail.push(Line::from(vec![
                Span::styled("- ", Style::default().fg(COLOR_DIM)),
                Span::styled(achievement.clone(), Style::default().fg(COLOR_SECONDARY)),
            ]));
        }
        frame.render_widget(Paragraph::new(detail).wrap(Wrap { trim: true }), parts[1]);
    }
}
