pub mod cli_ops;

pub use cli_ops::CliOps;

use crate::error::GitError;

/// Commit message used for every documentation run.
pub const COMMIT_MESSAGE: &str = "docs: Add Doxygen comments via Ollama LLM automation

- Generated comprehensive documentation for undocumented entities
- Used DoxLLM-IT tool for parsing and updating
- Applied consistent formatting";

/// Abstraction over the git operations a documentation run needs.
/// Implemented by CliOps (shelling out to git).
pub trait GitOps {
    /// Whether the working directory is inside a git work tree.
    fn is_repository(&self) -> bool;

    /// Whether a local branch with this name exists.
    fn branch_exists(&self, branch: &str) -> Result<bool, GitError>;

    /// Switch to an existing branch.
    fn checkout(&self, branch: &str) -> Result<(), GitError>;

    /// Create a branch from HEAD and switch to it.
    fn create_branch(&self, branch: &str) -> Result<(), GitError>;

    /// Stage every change in the work tree.
    fn add_all(&self) -> Result<(), GitError>;

    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Switch to `branch`, creating it first if needed.
    fn ensure_branch(&self, branch: &str) -> Result<(), GitError> {
        if self.branch_exists(branch)? {
            tracing::info!("checking out existing branch: {branch}");
            self.checkout(branch)
        } else {
            tracing::info!("creating new branch: {branch}");
            self.create_branch(branch)
        }
    }
}
