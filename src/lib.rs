//! Core of the Alien Invasion shooter: settings, entities, collision rules
//! and the play/pause/game-over state machine.
//!
//! Nothing in this crate touches the terminal. The binary drives
//! [`game::AlienInvasion`] with input commands and ticks, and draws whatever
//! state it exposes.

pub mod error;
pub mod game;
pub mod settings;

pub use error::SettingsError;
pub use game::{AlienInvasion, GameState};
pub use settings::Settings;
