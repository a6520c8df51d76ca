use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

#[derive(Debug, Parser)]
#[command(
    name = "prune-local-branches",
    about = "Interactively delete local Git branches whose remote-tracking branch on origin is gone",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Repository root to use as-is (defaults to searching upward from the current directory).
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub repo: Option<PathBuf>,

    /// Only list the prune candidates without selecting or deleting.
    #[arg(long)]
    pub list_only: bool,

    /// Show what would happen without deleting.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
