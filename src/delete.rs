use std::io::Write;

use crate::error::Result;
use crate::git::ReferenceStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub name: String,
    pub status: DeleteStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    DryRun,
}

/// Deletes `branches` in order, stopping at the first failure.
///
/// Branches deleted before the failure stay deleted; the rest are left alone.
pub fn delete_branches<S, W>(
    store: &mut S,
    branches: &[String],
    dry_run: bool,
    out: &mut W,
) -> Result<Vec<DeleteResult>>
where
    S: ReferenceStore + ?Sized,
    W: Write + ?Sized,
{
    let mut results = Vec::with_capacity(branches.len());

    for name in branches {
        writeln!(out, "Remove branch: {name}")?;

        let status = if dry_run {
            tracing::debug!(branch = %name, "dry run, keeping branch");
            DeleteStatus::DryRun
        } else {
            store.delete_branch(name)?;
            DeleteStatus::Deleted
        };

        results.push(DeleteResult {
            name: name.clone(),
            status,
        });
    }

    Ok(results)
}
