//! Hero screen rendering
//!
//! The landing view: a `$ whoami` eyebrow, the typed-out name with its
//! glitch echo, the role line, a short intro, and the embedded command
//! prompt at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::prompt::PromptLineKind;

use super::helpers::inner_rect;
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GLITCH_CYAN, COLOR_GLITCH_RED, COLOR_GREEN,
    COLOR_SECONDARY, COLOR_TEXT,
};

/// Render the hero section.
pub fn render_hero(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);
    let name_rows = app.hero_typewriters.len().max(1) as u16;
    let intro_rows = app.content.profile.intro.len().min(3) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // $ whoami eyebrow
            Constraint::Length(name_rows + 1), // Typed name lines
            Constraint::Length(1),             // Role line
            Constraint::Length(1),             // Spacer
            Constraint::Length(intro_rows),    // Intro paragraph
            Constraint::Min(5),                // Embedded prompt
        ])
        .split(inner_rect(area, 1));

    let eyebrow = Paragraph::new(Line::from(Span::styled(
        "$ whoami",
        Style::default().fg(COLOR_GREEN),
    )));
    frame.render_widget(eyebrow, chunks[0]);

    render_name(frame, chunks[1], app, &ctx);
    render_role(frame, chunks[2], app);
    render_intro(frame, chunks[4], app);
    render_prompt(frame, chunks[5], app);
}

/// The typed name, letter-spaced on roomy terminals, with the glitch
/// echo jittering it sideways in red or cyan.
fn render_name(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let glitching = app.glitch.is_glitching();
    let offset = app.glitch.echo_offset(app.tick_count);

    let mut lines: Vec<Line> = Vec::new();
    for tw in &app.hero_typewriters {
        let mut text = if ctx.is_compact() {
            tw.visible().to_string()
        } else {
            spaced_letters(tw.visible())
        };
        if tw.cursor_visible() {
            text.push('█');
        }

        let line = if glitching && !text.is_empty() {
            let color = if offset < 0 {
                COLOR_GLITCH_RED
            } else {
                COLOR_GLITCH_CYAN
            };
            let pad = " ".repeat(offset.unsigned_abs() as usize);
            Line::from(vec![
                Span::raw(pad),
                Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        } else {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_role(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(COLOR_GREEN)),
        Span::styled(
            app.role_typewriter.visible().to_string(),
            Style::default().fg(COLOR_SECONDARY),
        ),
    ];
    if app.role_typewriter.cursor_visible() {
        spans.push(Span::styled("█", Style::default().fg(COLOR_GREEN)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_intro(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .content
        .profile
        .intro
        .iter()
        .map(|p| Line::from(Span::styled(p.clone(), Style::default().fg(COLOR_SECONDARY))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// The embedded prompt panel: scrollback tail plus the live input line.
fn render_prompt(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = Line::from(vec![
        Span::styled("● ", Style::default().fg(COLOR_GREEN)),
        Span::styled(
            app.content.profile.prompt_label.clone(),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Scrollback fills all but the last row; the input line gets that row.
    let scrollback_rows = inner.height as usize - 1;
    let label = app.content.profile.prompt_label.clone();

    let mut lines: Vec<Line> = app
        .prompt
        .visible_tail(scrollback_rows)
        .iter()
        .map(|line| match line.kind {
            PromptLineKind::User => Line::from(vec![
                Span::styled(format!("{} ", label), Style::default().fg(COLOR_GREEN)),
                Span::styled(line.text.clone(), Style::default().fg(COLOR_TEXT)),
            ]),
            PromptLineKind::System => Line::from(Span::styled(
                line.text.clone(),
                Style::default().fg(COLOR_SECONDARY),
            )),
        })
        .collect();

    let input_width = (inner.width as usize).saturating_sub(label.len() + 3);
    let (visible_input, cursor_col) = app.prompt.input.visible_window(input_width);
    let (before, after) = visible_input.split_at(
        visible_input
            .char_indices()
            .nth(cursor_col)
            .map(|(i, _)| i)
            .unwrap_or(visible_input.len()),
    );
    let mut input_spans = vec![
        Span::styled(format!("{} ", label), Style::default().fg(COLOR_GREEN)),
        Span::styled(before.to_string(), Style::default().fg(COLOR_TEXT)),
    ];
    if (app.tick_count / 30) % 2 == 0 {
        input_spans.push(Span::styled("█", Style::default().fg(COLOR_GREEN)));
        input_spans.push(Span::styled(
            after.chars().skip(1).collect::<String>(),
            Style::default().fg(COLOR_TEXT),
        ));
    } else {
        input_spans.push(Span::styled(after.to_string(), Style::default().fg(COLOR_TEXT)));
    }
    lines.push(Line::from(input_spans));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// "MAYANK" becomes "M A Y A N K" for the headline.
fn spaced_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_letters() {
        assert_eq!(spaced_letters("MAYANK"), "M A Y A N K");
        assert_eq!(spaced_letters(""), "");
        assert_eq!(spaced_letters("A"), "A");
    }
}
