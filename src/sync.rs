use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

pub trait RemoteSync {
    /// `git fetch` against the default remote.
    fn fetch(&mut self) -> Result<()>;

    /// `git remote prune <remote>`.
    fn prune(&mut self, remote: &str) -> Result<()>;
}

/// Runs the system `git` binary inside the repository root.
pub struct GitCommand {
    program: String,
    workdir: PathBuf,
}

impl GitCommand {
    pub fn new(workdir: &Path) -> Self {
        Self::with_program("git", workdir)
    }

    pub fn with_program(program: impl Into<String>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let command = std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(%command, dir = %self.workdir.display(), "running git");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::GitCommand { command, status })
        }
    }
}

impl RemoteSync for GitCommand {
    fn fetch(&mut self) -> Result<()> {
        self.run(&["fetch"])
    }

    fn prune(&mut self, remote: &str) -> Result<()> {
        self.run(&["remote", "prune", remote])
    }
}
