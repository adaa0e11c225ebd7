//! Mapping between world units and terminal cells of the playfield.

use ratatui::layout::{Position, Rect};

use alien_invasion::game::bounds::Bounds;
use alien_invasion::Settings;

/// World position at the center of a terminal cell, or `None` when the cell
/// lies outside the playfield.
pub fn cell_to_world(area: Rect, settings: &Settings, column: u16, row: u16) -> Option<(f32, f32)> {
    if area.width == 0 || area.height == 0 || !area.contains(Position::new(column, row)) {
        return None;
    }
    let sx = settings.screen_width / area.width as f32;
    let sy = settings.screen_height / area.height as f32;
    let x = ((column - area.x) as f32 + 0.5) * sx;
    let y = ((row - area.y) as f32 + 0.5) * sy;
    Some((x, y))
}

/// The cells covered by a world rectangle, at least one cell in each
/// direction and clipped to the playfield.
pub fn world_to_cells(area: Rect, settings: &Settings, bounds: &Bounds) -> Rect {
    let sx = area.width as f32 / settings.screen_width;
    let sy = area.height as f32 / settings.screen_height;
    let x0 = (bounds.left() * sx).round().max(0.0) as u16;
    let y0 = (bounds.top() * sy).round().max(0.0) as u16;
    let x1 = (bounds.right() * sx).round().max(0.0) as u16;
    let y1 = (bounds.bottom() * sy).round().max(0.0) as u16;
    let rect = Rect::new(
        area.x + x0,
        area.y + y0,
        x1.saturating_sub(x0).max(1),
        y1.saturating_sub(y0).max(1),
    );
    rect.intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_centers_map_into_world() {
        let s = Settings::default();
        let area = Rect::new(2, 3, 120, 40);
        assert_eq!(cell_to_world(area, &s, 2, 3), Some((5.0, 10.0)));
        assert_eq!(cell_to_world(area, &s, 121, 42), Some((1195.0, 790.0)));
        assert_eq!(cell_to_world(area, &s, 1, 3), None);
        assert_eq!(cell_to_world(area, &s, 122, 3), None);
    }

    #[test]
    fn play_button_covers_its_cells() {
        let s = Settings::default();
        let area = Rect::new(0, 0, 120, 40);
        let button = Bounds::new(500.0, 375.0, 200.0, 50.0);
        let cells = world_to_cells(area, &s, &button);
        assert_eq!(cells.x, 50);
        assert_eq!(cells.width, 20);
        assert!(cells.height >= 2);
        // every covered cell maps back inside the button's row band
        let (x, y) = cell_to_world(area, &s, cells.x, cells.y).unwrap();
        assert!(button.contains(x, y));
    }
}
