use std::{io, time::Duration};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;

pub fn run(app: &mut App) -> io::Result<()> {
    if app.is_empty() {
        app.cancel();
        return Ok(());
    }

    enable_raw_mode()?;
    // From here on every return path, including setup failures, restores the terminal.
    let _restore = RestoreOnDrop::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if let Some(key) = poll_key()? {
            handle_key_event(app, key);
        }
    }
}

struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!("failed to leave raw mode: {err}");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!("failed to restore the screen: {err}");
    }
}

fn poll_key() -> io::Result<Option<KeyEvent>> {
    if event::poll(Duration::from_millis(200))? {
        if let Event::Key(key) = event::read()? {
            return Ok(Some(key));
        }
    }
    Ok(None)
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.cancel(),
        KeyCode::Char('q') | KeyCode::Esc => app.cancel(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char(' ') => {
            app.toggle_current();
            app.clear_message();
        }
        KeyCode::Char('a') => {
            app.toggle_all();
            app.clear_message();
        }
        KeyCode::Enter => app.confirm(),
        _ => {}
    }
}
