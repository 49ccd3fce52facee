//! Live git adapter using `git` CLI commands.

use std::process::Command;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

fn run_git(args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {stderr}", args.join(" ")).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl GitRepo for LiveGitRepo {
    fn current_branch(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?.trim().to_string())
    }

    fn current_commit(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(run_git(&["rev-parse", "HEAD"])?.trim().to_string())
    }

    fn has_changes(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let status = run_git(&["status", "--porcelain"])?;
        Ok(!status.trim().is_empty())
    }

    fn stage_all(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(&["add", "-A"]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(&["commit", "-m", message]).map(|_| ())
    }

    fn push(
        &self,
        remote: &str,
        branch: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(&["push", remote, branch]).map(|_| ())
    }
}
