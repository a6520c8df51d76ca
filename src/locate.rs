use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const GIT_DIR: &str = ".git";

/// Walks upward from `start` until a directory containing a `.git` entry is found.
///
/// `.git` may be a directory or a file (worktrees and submodules use the latter).
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if dir.join(GIT_DIR).exists() {
            tracing::debug!(root = %dir.display(), "found repository root");
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }

    Err(Error::RepositoryNotFound {
        start: start.to_path_buf(),
    })
}
