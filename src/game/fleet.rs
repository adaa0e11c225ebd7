//! Fleet layout and the shared left-right-drop movement.

use crate::game::alien::Alien;
use crate::settings::Settings;

/// Build a full fleet. Aliens are packed left to right with one alien width
/// between them, rows one alien height apart, leaving a margin of one alien
/// on the left and top, two on the right and three at the bottom (room for
/// the ship).
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let (w, h) = (settings.alien_width, settings.alien_height);
    let max_x = settings.screen_width - 2.0 * w;
    let max_y = settings.screen_height - 3.0 * h;

    let mut aliens = Vec::new();
    let mut y = h;
    while y < max_y {
        let mut x = w;
        while x < max_x {
            aliens.push(Alien::new(x, y, w, h));
            x += 2.0 * w;
        }
        y += 2.0 * h;
    }
    aliens
}

pub fn fleet_hits_edge(aliens: &[Alien], screen_width: f32) -> bool {
    aliens.iter().any(|a| a.check_edges(screen_width))
}

/// Drop the whole fleet and reverse its heading.
pub fn change_fleet_direction(aliens: &mut [Alien], settings: &mut Settings) {
    for alien in aliens.iter_mut() {
        alien.bounds.y += settings.fleet_drop_speed;
    }
    settings.dynamic.fleet_direction = -settings.dynamic.fleet_direction;
}

/// One fleet step: bounce off an edge if touching one, then slide.
pub fn update_fleet(aliens: &mut [Alien], settings: &mut Settings) {
    if fleet_hits_edge(aliens, settings.screen_width) {
        change_fleet_direction(aliens, settings);
    }
    let speed = settings.dynamic.alien_speed;
    let direction = settings.dynamic.fleet_direction;
    for alien in aliens.iter_mut() {
        alien.update(speed, direction);
    }
}
