//! Projects carousel rendering
//!
//! Projects the ring onto the terminal: each card's world angle becomes
//! a horizontal offset (`sin`) and a depth (`cos`). Depth picks the card
//! tier: front cards are wide and bright, rear cards shrink and fade.
//! Cards are painted back to front so nearer cards overlap farther ones,
//! and hit areas are registered in the same order so the front card wins
//! clicks.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::carousel::{normalize_degrees, Direction as StepDirection};

use super::helpers::{inner_rect, truncate_string};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CARD_BACK, COLOR_CARD_FRONT, COLOR_CARD_MID, COLOR_DIM,
    COLOR_GREEN, COLOR_SECONDARY,
};

/// One card's projected placement on screen.
#[derive(Debug, Clone, Copy)]
struct Projection {
    index: usize,
    /// Horizontal center offset in columns, negative = left of center
    x_offset: f64,
    /// `cos` of the world angle: 1.0 front, -1.0 rear
    depth: f64,
}

/// Render the projects section.
pub fn render_projects(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);
    let content = inner_rect(area, 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Scrambled heading
            Constraint::Min(7),    // Card strip
            Constraint::Length(1), // Position dots
            Constraint::Length(1), // Arrows + hints
        ])
        .split(content);

    let heading = Paragraph::new(Line::from(Span::styled(
        app.heading_scramble.display().to_string(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    render_cards(frame, chunks[1], app, &ctx);
    render_dots(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);
}

/// Project every slot and paint the strip back to front.
fn render_cards(frame: &mut Frame, strip: Rect, app: &mut App, ctx: &LayoutContext) {
    let ring = app.carousel.ring();
    let visual = app.carousel_motion.visual_angle();
    let radius = ctx.carousel_radius();

    let mut projections: Vec<Projection> = (0..ring.len())
        .map(|index| {
            let theta = normalize_degrees(ring.base_angle(index) + visual).to_radians();
            Projection {
                index,
                x_offset: theta.sin() * radius,
                depth: theta.cos(),
            }
        })
        .collect();
    // Painter's order: farthest first
    projections.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let overlay_open = app.overlay.is_open();
    for projection in projections {
        render_card(frame, strip, app, ctx, projection, overlay_open);
    }
}

fn render_card(
    frame: &mut Frame,
    strip: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    projection: Projection,
    overlay_open: bool,
) {
    let Some(project) = app.content.project(projection.index) else {
        return;
    };

    // Depth tiers: the front arc gets the full card, the sides shrink,
    // the rear shrinks further and dims.
    let full_width = ctx.card_width();
    let full_height = ctx.card_height().min(strip.height);
    let (width, height, color) = if projection.depth > 0.85 {
        (full_width, full_height, COLOR_CARD_FRONT)
    } else if projection.depth > 0.0 {
        (
            full_width.saturating_sub(8).max(12),
            full_height.saturating_sub(2).max(4),
            COLOR_CARD_MID,
        )
    } else {
        (
            full_width.saturating_sub(12).max(10),
            full_height.saturating_sub(4).max(3),
            COLOR_CARD_BACK,
        )
    };

    let center_x = strip.x as f64 + strip.width as f64 / 2.0 + projection.x_offset;
    let left = (center_x - width as f64 / 2.0)
        .round()
        .clamp(strip.x as f64, (strip.x + strip.width.saturating_sub(width)) as f64);
    let top = strip.y + (strip.height.saturating_sub(height)) / 2;
    let rect = Rect::new(left as u16, top, width, height);

    // Erase whatever a farther card painted underneath
    frame.render_widget(Clear, rect);

    let is_front = projection.depth > 0.85;
    let title_style = if is_front {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let mut title = truncate_string(&project.title, ctx.max_title_length());
    if project.featured {
        title.push_str(" ★");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_front {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {:02} ", projection.index + 1),
            Style::default().fg(COLOR_DIM),
        ));
    let card_inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(title, title_style))];
    if is_front && card_inner.height > 3 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            project.summary.clone(),
            Style::default().fg(COLOR_SECONDARY),
        )));
        if !project.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                project.tech.join(" · ").to_uppercase(),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), card_inner);

    // Cards are not clickable behind the overlay
    if !overlay_open {
        app.hit_registry
            .register(rect, ClickAction::SelectProject(projection.index), None);
    }
}

fn render_dots(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.carousel.active_index();
    let spans: Vec<Span> = (0..app.carousel.ring().len())
        .map(|i| {
            if i == active {
                Span::styled("● ", Style::default().fg(COLOR_GREEN))
            } else {
                Span::styled("· ", Style::default().fg(COLOR_BORDER))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Clickable step arrows with the key hints between them.
fn render_footer(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    let arrow_style = Style::default().fg(COLOR_SECONDARY);
    let hover = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);

    // The arrows go dark behind the overlay, where a click outside the
    // modal means dismiss rather than step.
    let overlay_open = app.overlay.is_open();
    for (rect, glyph, step) in [
        (chunks[0], " ◀ ", StepDirection::Backward),
        (chunks[2], " ▶ ", StepDirection::Forward),
    ] {
        let style = if overlay_open {
            Style::default().fg(COLOR_DIM)
        } else {
            app.hit_registry
                .register(rect, ClickAction::StepCarousel(step), Some(hover));
            app.hit_registry.get_hover_style(rect).unwrap_or(arrow_style)
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(glyph, style))), rect);
    }

    let hint = if overlay_open {
        "esc close · click outside to dismiss"
    } else {
        "scroll or h/l to swipe · enter opens · 1-9 jumps"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))))
            .alignment(ratatui::layout::Alignment::Center),
        chunks[1],
    );
}
