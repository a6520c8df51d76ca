use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{cursor::Show, execute};
use dialoguer::Confirm;

use crate::app::{App, Choice};
use crate::error::{Error, Result};

/// Set while a confirm prompt owns the terminal.
static IN_PROMPT: AtomicBool = AtomicBool::new(false);

pub trait Prompter {
    /// Yes/no question. A cancelled or interrupted prompt answers "no".
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Multi-select over `choices`, returning the chosen names in list order.
    /// A cancelled prompt returns an empty selection.
    fn select(&mut self, message: &str, choices: Vec<Choice>) -> Result<Vec<String>>;
}

/// `dialoguer` confirms plus the full-screen branch list.
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        install_interrupt_handler();
        Self
    }
}

/// Ctrl+C at a confirm is read as "no"; anywhere else it ends the run with 130.
fn install_interrupt_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(err) = ctrlc::set_handler(|| {
        if !IN_PROMPT.load(Ordering::SeqCst) {
            let _ = execute!(io::stderr(), Show);
            std::process::exit(130);
        }
    }) {
        tracing::warn!("could not install Ctrl+C handler: {err}");
    }
}

fn confirm_answer(result: std::result::Result<Option<bool>, dialoguer::Error>) -> Result<bool> {
    match result {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(Error::Prompt(io::Error::other(err))),
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        IN_PROMPT.store(true, Ordering::SeqCst);
        let result = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt();
        IN_PROMPT.store(false, Ordering::SeqCst);

        if result.is_err() {
            // dialoguer hides the cursor while reading and leaves it hidden on error.
            let _ = execute!(io::stderr(), Show);
            eprintln!();
        }
        confirm_answer(result)
    }

    fn select(&mut self, message: &str, choices: Vec<Choice>) -> Result<Vec<String>> {
        let mut app = App::new(message, choices);
        app.set_message("Use space to toggle branches. Press enter to confirm deletion.");
        crate::tui::run(&mut app).map_err(Error::Prompt)?;
        Ok(app.selection())
    }
}
