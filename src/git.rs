use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use git2::{BranchType, ErrorCode, Repository};

use crate::error::{Error, Result};

/// The only remote whose tracking branches are compared against.
pub const REMOTE: &str = "origin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Local,
    Remote,
}

impl ReferenceKind {
    fn label(self) -> &'static str {
        match self {
            ReferenceKind::Local => "local",
            ReferenceKind::Remote => "remote-tracking",
        }
    }

    fn namespace(self) -> &'static str {
        match self {
            ReferenceKind::Local => "refs/heads/",
            ReferenceKind::Remote => "refs/remotes/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    /// `main` for a local branch, `origin/main` for a remote-tracking one.
    pub short_name: String,
    pub full_name: String,
}

impl Reference {
    pub fn new(kind: ReferenceKind, short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        let full_name = format!("{}{short_name}", kind.namespace());
        Self {
            kind,
            short_name,
            full_name,
        }
    }

    #[cfg(test)]
    pub fn local(short_name: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Local, short_name)
    }

    #[cfg(test)]
    pub fn remote(short_name: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Remote, short_name)
    }
}

/// Display-only metadata about a branch tip.
#[derive(Debug, Clone, Default)]
pub struct BranchDetails {
    pub summary: Option<String>,
    pub commit_timestamp: Option<i64>,
}

impl BranchDetails {
    pub fn age(&self, now: SystemTime) -> Option<Duration> {
        let timestamp = self.commit_timestamp?;
        let commit_time = UNIX_EPOCH.checked_add(Duration::from_secs(timestamp as u64))?;
        now.duration_since(commit_time).ok()
    }
}

pub trait ReferenceStore {
    fn local_branches(&self) -> Result<Vec<Reference>>;

    fn remote_branches(&self) -> Result<Vec<Reference>>;

    /// Deletes the branch and makes sure `refs/heads/<name>` is gone afterwards.
    fn delete_branch(&mut self, name: &str) -> Result<()>;

    fn branch_details(&self, _name: &str) -> Option<BranchDetails> {
        None
    }
}

pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|source| Error::OpenRepository {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { repo })
    }

    pub fn workdir(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// Removes `refs/heads/<name>` if it is still present. Branch deletion usually
    /// takes it along already, in which case this is a no-op.
    fn remove_branch_reference(&self, name: &str) -> Result<()> {
        let remove_error = |source| Error::RemoveReference {
            name: name.to_string(),
            source,
        };
        match self.repo.find_reference(&format!("refs/heads/{name}")) {
            Ok(mut reference) => reference.delete().map_err(remove_error),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(()),
            Err(err) => Err(remove_error(err)),
        }
    }

    fn branches_of(&self, kind: ReferenceKind) -> Result<Vec<Reference>> {
        let list_error = |source| Error::ListReferences {
            kind: kind.label(),
            source,
        };
        let branch_type = match kind {
            ReferenceKind::Local => BranchType::Local,
            ReferenceKind::Remote => BranchType::Remote,
        };

        let mut references = Vec::new();
        for branch_result in self.repo.branches(Some(branch_type)).map_err(list_error)? {
            let (branch, _) = branch_result.map_err(list_error)?;
            let short_name = match branch.name() {
                Ok(Some(name)) => name.to_string(),
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!("skipping branch with invalid UTF-8 name: {err}");
                    continue;
                }
            };
            let mut reference = Reference::new(kind, short_name);
            if let Some(name) = branch.get().name() {
                reference.full_name = name.to_string();
            }
            references.push(reference);
        }

        tracing::debug!(kind = kind.label(), count = references.len(), "enumerated branches");
        Ok(references)
    }
}

impl ReferenceStore for GitRepository {
    fn local_branches(&self) -> Result<Vec<Reference>> {
        self.branches_of(ReferenceKind::Local)
    }

    fn remote_branches(&self) -> Result<Vec<Reference>> {
        self.branches_of(ReferenceKind::Remote)
    }

    fn delete_branch(&mut self, name: &str) -> Result<()> {
        let delete_error = |source| Error::DeleteBranch {
            name: name.to_string(),
            source,
        };
        let mut branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .map_err(delete_error)?;
        branch.delete().map_err(delete_error)?;
        self.remove_branch_reference(name)?;

        tracing::info!(branch = name, "deleted branch");
        Ok(())
    }

    fn branch_details(&self, name: &str) -> Option<BranchDetails> {
        let branch = self.repo.find_branch(name, BranchType::Local).ok()?;
        let commit = branch.get().peel_to_commit().ok()?;

        let timestamp = commit.time().seconds();

        Some(BranchDetails {
            summary: commit.summary().map(|s| s.trim().to_string()),
            commit_timestamp: (timestamp >= 0).then_some(timestamp),
        })
    }
}
