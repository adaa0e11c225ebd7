use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::layout::Rect;
use tracing::debug;

use alien_invasion::{AlienInvasion, GameState, Settings};

use crate::ui::viewport;

/// Without key-release reports a held arrow key only shows up as a burst of
/// presses: one, a pause of up to ~500 ms, then auto-repeats. A movement key
/// counts as released after this many ticks without a fresh press.
const HOLD_WINDOW: u64 = 36;

const STAR_COUNT: usize = 120;

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Where the playfield was last drawn, for mapping mouse clicks.
    pub field_area: Rect,
    /// Background speckle in world coordinates.
    pub stars: Vec<(f32, f32)>,
    key_release: bool,
    left_seen: Option<u64>,
    right_seen: Option<u64>,
    /// Event-loop ticks, counted in every state. Only clocks the hold
    /// window; `AlienInvasion::ticks` stops while paused or inactive.
    tick: u64,
}

impl App {
    /// `key_release` tells whether the terminal reports key releases.
    pub fn new(settings: Settings, key_release: bool) -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..STAR_COUNT)
            .map(|_| {
                (
                    rng.gen_range(0.0..settings.screen_width),
                    rng.gen_range(0.0..settings.screen_height),
                )
            })
            .collect();
        Self {
            should_quit: false,
            game: AlienInvasion::new(settings),
            field_area: Rect::default(),
            stars,
            key_release,
            left_seen: None,
            right_seen: None,
            tick: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick += 1;
        if !self.key_release {
            self.expire_held_keys();
        }
        self.game.tick();
    }

    fn expire_held_keys(&mut self) {
        let tick = self.tick;
        let stale = |seen: Option<u64>| seen.is_some_and(|t| tick.saturating_sub(t) > HOLD_WINDOW);
        if stale(self.left_seen) {
            self.left_seen = None;
            self.game.set_moving_left(false);
        }
        if stale(self.right_seen) {
            self.right_seen = None;
            self.game.set_moving_right(false);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.kind {
            KeyEventKind::Release => self.on_key_up(key.code),
            KeyEventKind::Press | KeyEventKind::Repeat => self.on_key_down(key),
        }
    }

    fn on_key_down(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return;
        }

        // Paused: only resume and quit get through.
        if self.game.state() == GameState::Paused {
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                self.game.resume();
            }
            return;
        }

        match key.code {
            KeyCode::Left => {
                self.game.set_moving_left(true);
                self.left_seen = Some(self.tick);
            }
            KeyCode::Right => {
                self.game.set_moving_right(true);
                self.right_seen = Some(self.tick);
            }
            KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
                self.game.fire_bullet();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if !self.game.is_active() {
                    self.game.start();
                    self.left_seen = None;
                    self.right_seen = None;
                }
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.game.pause();
            }
            _ => {}
        }
    }

    /// Releasing a key stops only the movement that key started.
    fn on_key_up(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.game.set_moving_left(false);
                self.left_seen = None;
            }
            KeyCode::Right => {
                self.game.set_moving_right(false);
                self.right_seen = None;
            }
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((x, y)) =
            viewport::cell_to_world(self.field_area, &self.game.settings, mouse.column, mouse.row)
        else {
            return;
        };
        if self.game.click(x, y) {
            debug!(x, y, "play button clicked");
            self.left_seen = None;
            self.right_seen = None;
        }
    }
}
