use std::path::PathBuf;
use std::process::Command;

use crate::error::git_error::CommandFailedSnafu;
use crate::error::GitError;
use crate::git::GitOps;

/// Git operations implemented by shelling out to the `git` CLI.
pub struct CliOps {
    pub repo_dir: PathBuf,
}

impl CliOps {
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }

    /// Run a git command and return stdout on success, or an error with stderr.
    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let (success, stdout, stderr) = self.run_git_raw(args)?;
        if success {
            Ok(stdout)
        } else {
            Err(CommandFailedSnafu {
                message: stderr.trim().to_string(),
            }
            .build())
        }
    }

    /// Run git and return (success, stdout, stderr) without failing on non-zero exit.
    fn run_git_raw(&self, args: &[&str]) -> Result<(bool, String, String), GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| {
                CommandFailedSnafu {
                    message: format!("failed to run git: {e}"),
                }
                .build()
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        Ok((output.status.success(), stdout, stderr))
    }
}

impl GitOps for CliOps {
    fn is_repository(&self) -> bool {
        matches!(
            self.run_git_raw(&["rev-parse", "--is-inside-work-tree"]),
            Ok((true, ref stdout, _)) if stdout.trim() == "true"
        )
    }

    fn branch_exists(&self, branch: &str) -> Result<bool, GitError> {
        let stdout = self.run_git(&["branch", "--list", branch])?;
        Ok(!stdout.trim().is_empty())
    }

    fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run_git(&["checkout", branch])?;
        Ok(())
    }

    fn create_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run_git(&["checkout", "-b", branch])?;
        Ok(())
    }

    fn add_all(&self) -> Result<(), GitError> {
        self.run_git(&["add", "."])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message])?;
        Ok(())
    }
}
