mod app;
mod cli;
mod delete;
mod differ;
mod error;
mod git;
mod locate;
mod prompt;
mod session;
mod sync;
#[cfg(test)]
mod testing;
mod tui;
mod ui;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::git::GitRepository;
use crate::prompt::TerminalPrompter;
use crate::session::{Options, Outcome, Session};
use crate::sync::GitCommand;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    report(run(cli), &mut io::stderr())
}

/// Maps the run result to the process exit code, printing `error: <message>` on failure.
fn report<W: Write>(result: Result<()>, err_out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.repo {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            locate::find_repo_root(&cwd)?
        }
    };
    tracing::info!(root = %root.display(), "using repository");

    let repo = GitRepository::open(&root)?;
    let sync = GitCommand::new(repo.workdir());
    let options = Options {
        dry_run: cli.dry_run,
        list_only: cli.list_only,
    };

    let mut session = Session::new(repo, sync, TerminalPrompter::new(), options);
    match session.run(&mut io::stdout())? {
        Outcome::NothingToPrune => tracing::debug!("nothing to prune"),
        Outcome::Listed(candidates) => tracing::debug!(count = candidates.len(), "listed candidates"),
        Outcome::Finished(results) => {
            for result in &results {
                tracing::debug!(branch = %result.name, status = ?result.status, "processed");
            }
        }
    }

    Ok(())
}
