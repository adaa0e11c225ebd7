use crate::game::bounds::Bounds;
use crate::game::ship::Ship;
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Bullet {
    pub bounds: Bounds,
}

impl Bullet {
    /// Fired from the ship's nose: the bullet's midtop sits on the ship's.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let x = ship.bounds.center_x() - settings.bullet_width / 2.0;
        Self {
            bounds: Bounds::new(x, ship.bounds.top(), settings.bullet_width, settings.bullet_height),
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.bounds.y -= speed;
    }

    pub fn off_screen(&self) -> bool {
        self.bounds.bottom() <= 0.0
    }
}
