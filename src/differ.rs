use std::collections::HashSet;

use crate::error::Result;
use crate::git::{REMOTE, ReferenceStore};

/// `origin/feature` -> `feature`. Names from other remotes are returned unchanged,
/// so they never match a local branch.
pub fn strip_remote_prefix(short_name: &str) -> &str {
    short_name
        .strip_prefix(REMOTE)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(short_name)
}

/// Local branch names with no remote-tracking counterpart, in enumeration order.
pub fn prune_candidates<S: ReferenceStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    let remote: Vec<String> = store
        .remote_branches()?
        .iter()
        .map(|reference| strip_remote_prefix(&reference.short_name).to_string())
        .collect();

    let local: Vec<String> = store
        .local_branches()?
        .into_iter()
        .inspect(|reference| tracing::trace!(reference = %reference.full_name, "local branch"))
        .map(|reference| reference.short_name)
        .collect();

    let candidates = difference(local, &remote);
    tracing::info!(
        remote = remote.len(),
        candidates = candidates.len(),
        "computed prune candidates"
    );
    Ok(candidates)
}

/// Items of `a` not present in `b`, keeping the order of `a` and dropping repeats.
pub fn difference(a: Vec<String>, b: &[String]) -> Vec<String> {
    let excluded: HashSet<&str> = b.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    a.into_iter()
        .filter(|item| !excluded.contains(item.as_str()))
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
