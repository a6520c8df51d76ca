//! In-memory stand-ins for the repository, the git binary and the terminal.

use std::collections::VecDeque;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use crate::app::Choice;
use crate::error::{Error, Result};
use crate::git::{Reference, ReferenceStore};
use crate::prompt::Prompter;
use crate::sync::RemoteSync;

#[derive(Debug, Default)]
pub struct MemoryStore {
    local: Vec<Reference>,
    remote: Vec<Reference>,
    deleted: Vec<String>,
    fail_listing: bool,
}

impl MemoryStore {
    pub fn new(local: &[&str], remote: &[&str]) -> Self {
        Self {
            local: local.iter().map(|name| Reference::local(*name)).collect(),
            remote: remote.iter().map(|name| Reference::remote(*name)).collect(),
            ..Self::default()
        }
    }

    pub fn failing_listing() -> Self {
        Self {
            fail_listing: true,
            ..Self::default()
        }
    }

    pub fn local_names(&self) -> Vec<String> {
        self.local.iter().map(|r| r.short_name.clone()).collect()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.clone()
    }

    fn check_listing(&self, kind: &'static str) -> Result<()> {
        if self.fail_listing {
            return Err(Error::ListReferences {
                kind,
                source: git2::Error::from_str("reference store unreadable"),
            });
        }
        Ok(())
    }
}

impl ReferenceStore for MemoryStore {
    fn local_branches(&self) -> Result<Vec<Reference>> {
        self.check_listing("local")?;
        Ok(self.local.clone())
    }

    fn remote_branches(&self) -> Result<Vec<Reference>> {
        self.check_listing("remote-tracking")?;
        Ok(self.remote.clone())
    }

    fn delete_branch(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.local.iter().position(|r| r.short_name == name) else {
            return Err(Error::DeleteBranch {
                name: name.to_string(),
                source: git2::Error::from_str("branch not found"),
            });
        };
        self.local.remove(index);
        self.deleted.push(name.to_string());
        Ok(())
    }
}

/// Records which git commands would have been spawned.
#[derive(Debug, Default)]
pub struct FakeSync {
    pub calls: Vec<String>,
    pub fetch_exit_code: Option<i32>,
    pub prune_exit_code: Option<i32>,
}

impl FakeSync {
    fn finish(&mut self, command: String, exit_code: Option<i32>) -> Result<()> {
        self.calls.push(command.clone());
        match exit_code {
            Some(code) if code != 0 => Err(Error::GitCommand {
                command,
                status: ExitStatus::from_raw(code << 8),
            }),
            _ => Ok(()),
        }
    }
}

impl RemoteSync for FakeSync {
    fn fetch(&mut self) -> Result<()> {
        self.finish("git fetch".to_string(), self.fetch_exit_code)
    }

    fn prune(&mut self, remote: &str) -> Result<()> {
        self.finish(format!("git remote prune {remote}"), self.prune_exit_code)
    }
}

/// Answers prompts from a script. `selection: None` behaves like a cancelled list.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub confirms: VecDeque<bool>,
    pub selection: Option<Vec<String>>,
    pub asked: Vec<String>,
    pub offered: Vec<String>,
    pub fail_confirm: bool,
}

impl ScriptedPrompter {
    pub fn new(confirms: &[bool], selection: &[&str]) -> Self {
        Self {
            confirms: confirms.iter().copied().collect(),
            selection: Some(selection.iter().map(|n| n.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn cancelling(confirms: &[bool]) -> Self {
        Self {
            confirms: confirms.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.asked.push(message.to_string());
        if self.fail_confirm {
            return Err(Error::Prompt(io::Error::other("not a terminal")));
        }
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn select(&mut self, message: &str, choices: Vec<Choice>) -> Result<Vec<String>> {
        self.asked.push(message.to_string());
        self.offered = choices.into_iter().map(|choice| choice.name).collect();
        Ok(self.selection.clone().unwrap_or_default())
    }
}
