mod app;
mod event;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use alien_invasion::Settings;
use app::App;
use event::{Event, EventHandler};

const TICK_RATE_MS: u64 = 16; // ~60 FPS
const LOG_FILE: &str = "alien-invasion.log";

/// The terminal belongs to the game, so logs go to a file, and only when
/// `RUST_LOG` asks for them.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let settings = Settings::load().context("loading settings")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Ask for key-release events so held arrow keys behave; terminals
    // without the kitty protocol fall back to expiring holds.
    let key_release = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if key_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    info!(key_release, "terminal ready");
    let result = run(&mut terminal, App::new(settings, key_release));

    let restored = restore_terminal(&mut terminal, key_release);
    finish(result, restored)
}

/// Undo the setup. Every step runs even if an earlier one fails; the first
/// failure is returned.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    key_release: bool,
) -> io::Result<()> {
    let pop = if key_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let cursor = terminal.show_cursor();
    pop.and(raw).and(screen).and(cursor)
}

/// A failed game loop is reported ahead of a failed restore.
fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result?;
    restored.context("restoring terminal")
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let event_handler = EventHandler::new(TICK_RATE_MS);
    let mut mouse_captured = true;

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            break;
        }

        // The mouse only matters while the play button is up.
        let cursor_visible = app.game.cursor_visible();
        if cursor_visible != mouse_captured {
            if cursor_visible {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = cursor_visible;
        }
    }

    info!(high_score = app.game.stats.high_score, "quit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_error_wins_over_restore_error() {
        let result = finish(
            Err(anyhow::anyhow!("draw failed")),
            Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
        );
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_reported_after_clean_loop() {
        let result = finish(Ok(()), Err(io::Error::new(io::ErrorKind::Other, "tty gone")));
        assert_eq!(result.unwrap_err().to_string(), "restoring terminal");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
