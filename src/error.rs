use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no git repository found in {} or any parent directory", start.display())]
    RepositoryNotFound { start: PathBuf },

    #[error("failed to open git repository at {}", path.display())]
    OpenRepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}")]
    GitCommand { command: String, status: ExitStatus },

    #[error("failed to enumerate {kind} branches")]
    ListReferences {
        kind: &'static str,
        #[source]
        source: git2::Error,
    },

    #[error("failed to delete branch '{name}'")]
    DeleteBranch {
        name: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to remove reference 'refs/heads/{name}'")]
    RemoveReference {
        name: String,
        #[source]
        source: git2::Error,
    },

    #[error("terminal prompt failed")]
    Prompt(#[source] std::io::Error),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
