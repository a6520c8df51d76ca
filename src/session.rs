use std::io::Write;

use crate::app::Choice;
use crate::delete::{DeleteResult, DeleteStatus, delete_branches};
use crate::differ::prune_candidates;
use crate::error::Result;
use crate::git::{REMOTE, ReferenceStore};
use crate::prompt::Prompter;
use crate::sync::RemoteSync;

pub const FETCH_PROMPT: &str = "Do you want to fetch the remote repository?";
pub const PRUNE_PROMPT: &str = "Do you want to prune the remote repository?";
pub const SELECT_PROMPT: &str = "Select the local branches to delete:";

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub dry_run: bool,
    pub list_only: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NothingToPrune,
    Listed(Vec<String>),
    Finished(Vec<DeleteResult>),
}

/// Everything one run needs: the reference store, the git binary and the terminal.
pub struct Session<S, R, P> {
    store: S,
    sync: R,
    prompter: P,
    options: Options,
}

impl<S, R, P> Session<S, R, P>
where
    S: ReferenceStore,
    R: RemoteSync,
    P: Prompter,
{
    pub fn new(store: S, sync: R, prompter: P, options: Options) -> Self {
        Self {
            store,
            sync,
            prompter,
            options,
        }
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        if self.prompter.confirm(FETCH_PROMPT)? {
            self.sync.fetch()?;
        }
        if self.prompter.confirm(PRUNE_PROMPT)? {
            self.sync.prune(REMOTE)?;
        }

        let candidates = prune_candidates(&self.store)?;
        if candidates.is_empty() {
            writeln!(out, "No local branches to prune.")?;
            return Ok(Outcome::NothingToPrune);
        }

        if self.options.list_only {
            writeln!(out, "Local branches without a remote counterpart on '{REMOTE}':")?;
            for name in &candidates {
                writeln!(out, "  {name}")?;
            }
            return Ok(Outcome::Listed(candidates));
        }

        let choices = candidates
            .into_iter()
            .map(|name| Choice {
                details: self.store.branch_details(&name),
                name,
            })
            .collect();
        let selected = self.prompter.select(SELECT_PROMPT, choices)?;
        tracing::info!(selected = selected.len(), "branches selected");

        if selected.is_empty() {
            writeln!(out, "No branches selected - nothing to do.")?;
            return Ok(Outcome::Finished(Vec::new()));
        }

        let results = delete_branches(&mut self.store, &selected, self.options.dry_run, out)?;
        if results.iter().any(|r| r.status == DeleteStatus::DryRun) {
            writeln!(out, "Dry run - no branches were deleted.")?;
        }
        Ok(Outcome::Finished(results))
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, R, P) {
        (self.store, self.sync, self.prompter)
    }
}
