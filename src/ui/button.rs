use ratatui::prelude::*;
use ratatui::widgets::*;

use alien_invasion::game::button::Button;
use alien_invasion::Settings;

use crate::ui::viewport;

/// Draw the button over the playfield at its world position.
pub fn render_button(frame: &mut Frame, field: Rect, settings: &Settings, button: &Button) {
    let area = viewport::world_to_cells(field, settings, &button.bounds);
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (r, g, b) = button.button_color;
    let (tr, tg, tb) = button.text_color;
    let bg = Style::default().bg(Color::Rgb(r, g, b));

    let mut lines = vec![Line::from(""); (area.height as usize - 1) / 2];
    lines.push(Line::from(Span::styled(
        button.label.clone(),
        Style::default().fg(Color::Rgb(tr, tg, tb)).add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center).style(bg), area);
}
