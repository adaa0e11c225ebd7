use crate::game::bounds::Bounds;

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub bounds: Bounds,
}

impl Alien {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::new(x, y, width, height),
        }
    }

    /// True when touching either side of the screen.
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.bounds.right() >= screen_width || self.bounds.left() <= 0.0
    }

    pub fn update(&mut self, speed: f32, direction: f32) {
        self.bounds.x += speed * direction;
    }
}
