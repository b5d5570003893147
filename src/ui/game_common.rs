//! Shared layout and chrome helpers for the game scene.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas for the game screen.
pub struct GameLayout {
    /// Play area, top left inside the outer border.
    pub play_area: Rect,
    /// Two-line status bar under the play area.
    pub status_bar: Rect,
    /// Info panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Split the screen into play area, status bar, and info panel, drawing the
/// outer border.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        play_area: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render the two-line status bar: a message on top, key hints below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_color: Color,
    hints: &[(&str, &str)],
) {
    let mut hint_spans = Vec::new();
    for (i, (keys, action)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::raw("  "));
        }
        hint_spans.push(Span::styled(*keys, Style::default().fg(Color::Cyan)));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));
    }

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(message_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(hint_spans),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the info panel border and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a centered modal overlay with a title line, body lines, and a
/// bottom prompt.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    body: &[String],
    prompt: &str,
) {
    let height = (body.len() as u16 + 6).min(area.height);
    let width = 44.min(area.width);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for entry in body {
        lines.push(Line::from(entry.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        prompt.to_string(),
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
