//! Rendering for the game scene: play area, status bar, info panel, and the
//! game-over overlay.

use crate::core::session::GameSession;
use crate::ui::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole game screen for one frame.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, best_score: u32) {
    let layout = create_game_layout(frame, area, " Sky Hopper ", Color::Cyan, 24);

    render_play_area(frame, layout.play_area, session);
    render_status(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session, best_score);

    if session.is_over() {
        render_crash_overlay(frame, area, session, best_score);
    }
}

/// Map field coordinates onto terminal cells and draw obstacles and bird.
///
/// Each cell samples the field at its center. The field's y axis points up
/// while terminal rows grow downward, so rows are flipped.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let cols = area.width as usize;
    let rows = area.height as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    let config = &session.config;
    let bird = session.bird.rect();
    let obstacle_width = session.field.obstacle_width();

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let field_y = config.field_height * (1.0 - (row as f64 + 0.5) / rows as f64);
        let mut spans = Vec::with_capacity(cols);

        for col in 0..cols {
            let field_x = config.field_width * (col as f64 + 0.5) / cols as f64;

            if bird.contains(field_x, field_y) {
                let glyph = if session.bird.is_flapping() {
                    "▲"
                } else {
                    "▼"
                };
                spans.push(Span::styled(
                    glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let mut filled = false;
            for pair in &session.field.pairs {
                if field_x < pair.x || field_x > pair.x + obstacle_width {
                    continue;
                }
                let in_top = field_y >= config.field_height - pair.top_height;
                let in_bottom = field_y <= pair.bottom_height;
                if in_top || in_bottom {
                    filled = true;
                }
                break;
            }

            if filled {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    render_status_bar(
        frame,
        area,
        &format!("Score: {}", session.score),
        Color::Green,
        &[
            ("[Space/\u{2191}/Click]", "Flap"),
            ("[Esc]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, best_score: u32) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let config = &session.config;
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", best_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", config.gap_size),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/tick", config.scroll_speed),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_crash_overlay(frame: &mut Frame, area: Rect, session: &GameSession, best_score: u32) {
    let body = vec![
        format!("You passed {} obstacle pairs.", session.score),
        format!("Session best: {}", best_score.max(session.score)),
    ];
    render_game_over_overlay(
        frame,
        area,
        "CRASH!",
        Color::Red,
        &body,
        "Play again?  [Y]es   [N]o",
    );
}
