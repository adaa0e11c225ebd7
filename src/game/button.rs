use crate::game::bounds::Bounds;
use crate::settings::Settings;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// A labelled rectangle centered on the screen.
#[derive(Clone, Debug)]
pub struct Button {
    pub bounds: Bounds,
    pub label: String,
    pub button_color: (u8, u8, u8),
    pub text_color: (u8, u8, u8),
}

impl Button {
    pub fn new(settings: &Settings, label: &str) -> Self {
        let x = (settings.screen_width - BUTTON_WIDTH) / 2.0;
        let y = (settings.screen_height - BUTTON_HEIGHT) / 2.0;
        Self {
            bounds: Bounds::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            label: label.to_string(),
            button_color: (0, 135, 0),
            text_color: (255, 255, 255),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }
}
