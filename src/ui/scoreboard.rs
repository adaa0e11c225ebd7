use ratatui::prelude::*;
use ratatui::widgets::*;

use alien_invasion::game::stats::GameStats;

/// Round to the nearest ten and group thousands: 12345 → "12,350".
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two HUD rows: ships, high score and score on top, level under the score.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, stats: &GameStats) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let ships = Paragraph::new(Line::from(Span::styled(
        format!(" {}", "\u{25b2} ".repeat(stats.ships_left as usize)),
        Style::default().fg(Color::Rgb(80, 140, 255)).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(ships, cols[0]);

    let high = Paragraph::new(Line::from(vec![
        Span::styled("High ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_score(stats.high_score),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(high, cols[1]);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", format_score(stats.score)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(score, cols[2]);

    let level = Paragraph::new(Line::from(vec![
        Span::styled("Level ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", stats.level),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(level, rows[1]);
}
