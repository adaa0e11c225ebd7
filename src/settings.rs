use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SettingsError;
use crate::game::fleet;

/// Environment variable naming an optional JSON settings file.
pub const CONFIG_ENV: &str = "ALIEN_INVASION_CONFIG";

/// Values that reset on every new game and escalate each cleared fleet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1.0 = right, -1.0 = left
    pub fleet_direction: f32,
    pub alien_points: u32,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: 1.5,
            bullet_speed: 2.5,
            alien_speed: 1.0,
            fleet_direction: 1.0,
            alien_points: 50,
        }
    }
}

/// All tunables of the game, in world units (pixels of a virtual screen).
///
/// `base` is what a config file sets; `dynamic` is the live copy the
/// simulation reads and mutates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: (u8, u8, u8),

    pub ship_limit: u32,
    pub ship_width: f32,
    pub ship_height: f32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: (u8, u8, u8),
    pub bullets_allowed: usize,

    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop_speed: f32,

    /// Ticks the simulation holds still after the ship is hit.
    pub hit_pause_ticks: u32,

    /// How quickly the game speeds up per cleared fleet
    pub speedup_scale: f32,
    /// How quickly alien point values grow per cleared fleet
    pub score_scale: f32,

    pub base: DynamicSettings,
    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let base = DynamicSettings::default();
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            bg_color: (230, 230, 230),
            ship_limit: 3,
            ship_width: 60.0,
            ship_height: 48.0,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,
            alien_width: 60.0,
            alien_height: 58.0,
            fleet_drop_speed: 10.0,
            hit_pause_ticks: 30,
            speedup_scale: 1.1,
            score_scale: 1.5,
            base,
            dynamic: base,
        }
    }
}

impl Settings {
    /// Load settings from the file named by [`CONFIG_ENV`], or defaults when
    /// the variable is unset.
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Read a JSON settings file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        settings.initialize_dynamic_settings();
        debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("base.ship_speed", self.base.ship_speed),
            ("base.bullet_speed", self.base.bullet_speed),
            ("base.alien_speed", self.base.alien_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(field, format!("must be positive, got {value}")));
            }
        }
        if self.fleet_drop_speed < 0.0 {
            return Err(SettingsError::invalid("fleet_drop_speed", "must not be negative"));
        }
        if self.bullets_allowed == 0 {
            return Err(SettingsError::invalid("bullets_allowed", "must be at least 1"));
        }
        if self.ship_limit == 0 {
            return Err(SettingsError::invalid("ship_limit", "must be at least 1"));
        }
        if self.base.fleet_direction.abs() != 1.0 {
            return Err(SettingsError::invalid("base.fleet_direction", "must be 1 or -1"));
        }
        if self.speedup_scale <= 1.0 {
            return Err(SettingsError::invalid("speedup_scale", "must be greater than 1"));
        }
        if self.score_scale < 1.0 {
            return Err(SettingsError::invalid("score_scale", "must be at least 1"));
        }
        if self.ship_width > self.screen_width || self.ship_height > self.screen_height {
            return Err(SettingsError::invalid("ship_width", "ship does not fit on the screen"));
        }
        // An empty fleet would count as cleared on every tick.
        if fleet::create_fleet(self).is_empty() {
            return Err(SettingsError::invalid(
                "alien_width",
                format!(
                    "no fleet fits a {}x{} screen with {}x{} aliens",
                    self.screen_width, self.screen_height, self.alien_width, self.alien_height
                ),
            ));
        }
        Ok(())
    }

    /// Reset the dynamic values to their base for a new game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = self.base;
    }

    /// Escalate after a cleared fleet. The fleet heads off in the base
    /// direction again, like a fresh fleet does.
    pub fn increase_speed(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.bullet_speed *= self.speedup_scale;
        d.alien_speed *= self.speedup_scale;
        d.alien_points = (d.alien_points as f32 * self.score_scale) as u32;
        d.fleet_direction = self.base.fleet_direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn increase_speed_scales_every_dynamic_value() {
        let mut s = Settings::default();
        s.dynamic.fleet_direction = -1.0;
        s.increase_speed();
        assert_relative_eq!(s.dynamic.ship_speed, 1.65, epsilon = 1e-5);
        assert_relative_eq!(s.dynamic.bullet_speed, 2.75, epsilon = 1e-5);
        assert_relative_eq!(s.dynamic.alien_speed, 1.1, epsilon = 1e-5);
        assert_eq!(s.dynamic.alien_points, 75);
        assert_eq!(s.dynamic.fleet_direction, 1.0);
        // base is untouched
        assert_eq!(s.base, DynamicSettings::default());
    }

    #[test]
    fn initialize_restores_base() {
        let mut s = Settings::default();
        s.increase_speed();
        s.increase_speed();
        s.initialize_dynamic_settings();
        assert_eq!(s.dynamic, s.base);
    }

    #[test]
    fn validate_rejects_zero_bullets() {
        let s = Settings {
            bullets_allowed: 0,
            ..Settings::default()
        };
        let err = s.validate().unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "bullets_allowed", .. }));
    }

    #[test]
    fn validate_rejects_flat_speedup() {
        let s = Settings {
            speedup_scale: 1.0,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_screen_without_room_for_a_fleet() {
        let narrow = Settings {
            screen_width: 150.0,
            ..Settings::default()
        };
        assert!(matches!(narrow.validate(), Err(SettingsError::Invalid { field: "alien_width", .. })));

        let short = Settings {
            screen_height: 4.0 * 58.0,
            ..Settings::default()
        };
        assert!(short.validate().is_err());

        // one alien still fits: 3 widths across, just over 4 heights down
        let tight = Settings {
            screen_width: 181.0,
            screen_height: 233.0,
            ship_width: 60.0,
            ..Settings::default()
        };
        assert!(tight.validate().is_ok());
    }

    #[test]
    fn validate_rejects_ship_wider_than_screen() {
        let s = Settings {
            ship_width: 1300.0,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(SettingsError::Invalid { field: "ship_width", .. })));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "bullets_allowed": 5, "base": { "alien_points": 10 } }"#).unwrap();
        assert_eq!(s.bullets_allowed, 5);
        assert_eq!(s.base.alien_points, 10);
        assert_relative_eq!(s.base.ship_speed, 1.5);
        assert_relative_eq!(s.screen_width, 1200.0);
    }
}
