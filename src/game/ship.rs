use crate::game::bounds::Bounds;
use crate::settings::Settings;

/// The player's ship. Only its horizontal position ever changes.
#[derive(Clone, Debug)]
pub struct Ship {
    pub bounds: Bounds,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship parked at the bottom center of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            bounds: Bounds::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.bounds.x = (settings.screen_width - self.bounds.width) / 2.0;
        self.bounds.y = settings.screen_height - self.bounds.height;
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }

    /// Move by the current ship speed, never leaving the screen.
    pub fn update(&mut self, settings: &Settings) {
        let speed = settings.dynamic.ship_speed;
        let max_x = settings.screen_width - self.bounds.width;
        if self.moving_right && self.bounds.right() < settings.screen_width {
            self.bounds.x = (self.bounds.x + speed).min(max_x);
        }
        if self.moving_left && self.bounds.left() > 0.0 {
            self.bounds.x = (self.bounds.x - speed).max(0.0);
        }
    }
}
