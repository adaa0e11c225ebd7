pub mod alien;
pub mod bounds;
pub mod bullet;
pub mod button;
pub mod collision;
pub mod fleet;
pub mod ship;
pub mod stats;

use tracing::{debug, info};

use crate::settings::Settings;
use alien::Alien;
use bullet::Bullet;
use button::Button;
use ship::Ship;
use stats::GameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Before the first game, or after the last ship is lost.
    Inactive,
    Running,
    Paused,
}

/// The whole game: entities, stats and the play/pause/game-over state
/// machine. Input arrives as method calls, time as [`AlienInvasion::tick`].
pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    state: GameState,
    hit_pause: u32,
    cursor_visible: bool,
    ticks: u64,
}

impl AlienInvasion {
    pub fn new(settings: Settings) -> Self {
        let mut settings = settings;
        settings.initialize_dynamic_settings();
        let stats = GameStats::new(&settings);
        let ship = Ship::new(&settings);
        let aliens = fleet::create_fleet(&settings);
        let play_button = Button::new(&settings, "Play");
        Self {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            aliens,
            play_button,
            state: GameState::Inactive,
            hit_pause: 0,
            cursor_visible: true,
            ticks: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != GameState::Inactive
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// True while the simulation is frozen after losing a ship.
    pub fn in_hit_pause(&self) -> bool {
        self.hit_pause > 0
    }

    /// Ticks simulated since the process started; drives sprite animation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // ── State transitions ───────────────────────────────────────────────

    /// Start a new game. Does nothing while a game is in progress.
    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.state = GameState::Running;
        self.hit_pause = 0;
        self.bullets.clear();
        self.aliens.clear();
        self.create_fleet();
        self.ship.center_ship(&self.settings);
        self.ship.stop();
        self.cursor_visible = false;
        info!(ships = self.stats.ships_left, high_score = self.stats.high_score, "game started");
        true
    }

    /// A click at world position (`x`, `y`). Starts the game when it lands on
    /// the play button while inactive.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        if self.play_button.contains(x, y) && !self.is_active() {
            self.start()
        } else {
            false
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Running {
            return false;
        }
        self.state = GameState::Paused;
        info!(score = self.stats.score, "paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.state = GameState::Running;
        info!("resumed");
        true
    }

    // ── Ship controls ───────────────────────────────────────────────────

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    /// Fire a bullet if the game is running and fewer than
    /// `bullets_allowed` are in flight.
    pub fn fire_bullet(&mut self) -> bool {
        if self.state != GameState::Running || self.in_hit_pause() {
            return false;
        }
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    // ── Simulation ──────────────────────────────────────────────────────

    /// Advance one tick. Only a running game moves, and not while the
    /// post-hit pause is counting down.
    pub fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }
        self.ticks += 1;
        if self.hit_pause > 0 {
            self.hit_pause -= 1;
            return;
        }
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    fn update_bullets(&mut self) {
        let speed = self.settings.dynamic.bullet_speed;
        for bullet in &mut self.bullets {
            bullet.update(speed);
        }
        self.bullets.retain(|b| !b.off_screen());
        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let destroyed = collision::resolve_bullet_hits(&mut self.bullets, &mut self.aliens);
        if destroyed > 0 {
            self.stats
                .add_score(self.settings.dynamic.alien_points * destroyed as u32);
            if self.stats.check_high_score() {
                debug!(high_score = self.stats.high_score, "new high score");
            }
        }

        if self.aliens.is_empty() {
            self.bullets.clear();
            self.create_fleet();
            self.settings.increase_speed();
            self.stats.level_up();
            info!(
                level = self.stats.level,
                alien_speed = self.settings.dynamic.alien_speed,
                alien_points = self.settings.dynamic.alien_points,
                "fleet cleared"
            );
        }
    }

    fn update_aliens(&mut self) {
        fleet::update_fleet(&mut self.aliens, &mut self.settings);

        if collision::any_alien_overlaps(&self.ship.bounds, &self.aliens) {
            debug!("alien rammed the ship");
            self.ship_hit();
            return;
        }
        if collision::any_alien_at_bottom(&self.aliens, self.settings.screen_height) {
            debug!("alien reached the bottom");
            self.ship_hit();
        }
    }

    /// Lose a ship. With ships in reserve the board is reset and the game
    /// holds still for a moment; with none left, the game ends.
    fn ship_hit(&mut self) {
        if self.stats.ships_left > 0 {
            let remaining = self.stats.lose_ship();
            self.bullets.clear();
            self.aliens.clear();
            self.create_fleet();
            self.ship.center_ship(&self.settings);
            self.hit_pause = self.settings.hit_pause_ticks;
            info!(ships_left = remaining, "ship hit");
        } else {
            self.state = GameState::Inactive;
            self.hit_pause = 0;
            self.ship.stop();
            self.cursor_visible = true;
            info!(score = self.stats.score, high_score = self.stats.high_score, "game over");
        }
    }

    fn create_fleet(&mut self) {
        self.aliens = fleet::create_fleet(&self.settings);
        debug!(aliens = self.aliens.len(), "fleet created");
    }
}
