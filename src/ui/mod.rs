pub mod button;
pub mod field;
pub mod scoreboard;
pub mod viewport;

use ratatui::prelude::*;
use ratatui::widgets::*;

use alien_invasion::GameState;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Scoreboard
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help line
        ])
        .split(inner);

    let game = &app.game;
    scoreboard::render_scoreboard(frame, chunks[0], &game.stats);

    let field_area = chunks[1];
    if field_area.width > 0 && field_area.height > 0 {
        let lines = field::render_field(game, &app.stars, field_area.width as usize, field_area.height as usize);
        frame.render_widget(Paragraph::new(lines), field_area);
    }

    match game.state() {
        GameState::Inactive => {
            button::render_button(frame, field_area, &game.settings, &game.play_button);
        }
        GameState::Paused => render_paused(frame, field_area),
        GameState::Running => {}
    }

    render_help(frame, chunks[2], app);

    app.field_area = field_area;
}

fn render_paused(frame: &mut Frame, area: Rect) {
    let w = 34u16.min(area.width);
    let h = 3u16.min(area.height);
    let overlay = Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    );
    frame.render_widget(Clear, overlay);
    let msg = Paragraph::new(Line::from(Span::styled(
        "Paused. Press 'R' to resume.",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double))
    .style(Style::default().bg(Color::Black));
    frame.render_widget(msg, overlay);
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));

    let line = match app.game.state() {
        GameState::Inactive => Line::from(vec![
            Span::styled(" S", key),
            Span::styled(" or click ", dim),
            Span::styled("Play", key),
            Span::styled(" to start ", dim),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ]),
        GameState::Paused => Line::from(vec![
            Span::styled(" R", key),
            Span::styled(" Resume ", dim),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ]),
        GameState::Running => Line::from(vec![
            Span::styled(" \u{2190}\u{2192} Move ", dim),
            Span::styled("| ", sep),
            Span::styled("Space Shoot ", key),
            Span::styled("| ", sep),
            Span::styled("P Pause ", dim),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
