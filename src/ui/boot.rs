//! Boot screen rendering
//!
//! Draws the fake-BIOS sequence: bootloader header, scrolling log lines
//! with a blinking cursor, the module loader bar, and the access splash.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::boot::{BootPhase, MEM_CHECK_TAG};

use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_SECONDARY,
};

/// Render the full boot screen.
pub fn render_boot(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let ctx = LayoutContext::from_rect(size);

    // The sequence renders in a centered column, like a BIOS on a large
    // monitor.
    let column_width = ctx.bounded_width(70, 40, 64).min(size.width);
    let column = Rect {
        x: size.x + (size.width.saturating_sub(column_width)) / 2,
        y: size.y + 1,
        width: column_width,
        height: size.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Bootloader header with underline
            Constraint::Min(4),    // Log output
            Constraint::Length(3), // Loader bar
            Constraint::Length(3), // Access splash
            Constraint::Length(1), // Skip hint
        ])
        .split(column);

    render_header(frame, chunks[0], app);
    render_logs(frame, chunks[1], app);
    if app.boot.phase() != BootPhase::Bios {
        render_loader(frame, chunks[2], app);
    }
    if app.boot.phase() == BootPhase::Access {
        render_access(frame, chunks[3]);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "press any key to skip",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(hint, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            app.content.profile.boot_header.clone(),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(app.content.profile.boot_header.len())
                .saturating_sub(MEM_CHECK_TAG.len()),
        )),
        Span::styled(MEM_CHECK_TAG, Style::default().fg(COLOR_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

fn render_logs(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.boot.visible_logs();
    // Tail the log so the newest lines stay on screen
    let capacity = area.height as usize;
    let start = visible.len().saturating_sub(capacity.saturating_sub(1));

    let mut lines: Vec<Line> = visible[start..]
        .iter()
        .map(|log| {
            Line::from(Span::styled(
                format!("> {}", log),
                Style::default().fg(COLOR_SECONDARY),
            ))
        })
        .collect();

    // Blinking cursor while the BIOS is still printing
    if app.boot.phase() == BootPhase::Bios && (app.tick_count / 30) % 2 == 0 {
        lines.push(Line::from(Span::styled(
            "_",
            Style::default().fg(COLOR_SECONDARY),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_loader(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.boot.progress();
    let label_line = Line::from(vec![
        Span::styled("LOADING_MODULES", Style::default().fg(COLOR_ACCENT)),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub("LOADING_MODULES".len())
                .saturating_sub(4),
        )),
        Span::styled(format!("{:>3}%", progress), Style::default().fg(COLOR_ACCENT)),
    ]);

    let filled = (area.width as u32 * progress as u32 / 100) as usize;
    let empty = (area.width as usize).saturating_sub(filled);
    let bar_line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(COLOR_PROGRESS)),
        Span::styled("░".repeat(empty), Style::default().fg(COLOR_PROGRESS_BG)),
    ]);

    frame.render_widget(
        Paragraph::new(vec![label_line, Line::from(""), bar_line]),
        area,
    );
}

fn render_access(frame: &mut Frame, area: Rect) {
    let splash = Paragraph::new(Line::from(Span::styled(
        "A C C E S S   G R A N T E D",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(splash, area);
}
