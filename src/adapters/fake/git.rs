//! Fake git repository recording operations.

use crate::adapters::fake::CallLog;
use crate::ports::git::GitRepo;

/// Git fake with a scripted branch, dirtiness, and push outcome.
pub struct FakeGitRepo {
    branch: String,
    commit: String,
    dirty: bool,
    push_error: Option<String>,
    log: CallLog,
}

impl FakeGitRepo {
    /// A repository on `main` with a clean working tree.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            branch: "main".to_string(),
            commit: "abc1234def".to_string(),
            dirty: false,
            push_error: None,
            log: CallLog::new(),
        }
    }

    /// A repository on `main` with uncommitted changes.
    #[must_use]
    pub fn dirty() -> Self {
        Self { dirty: true, ..Self::clean() }
    }

    /// Overrides the checked-out branch name.
    #[must_use]
    pub fn on_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    /// Makes pushes fail with the given message.
    #[must_use]
    pub fn rejecting_push(mut self, message: &str) -> Self {
        self.push_error = Some(message.to_string());
        self
    }

    /// A handle to the operation log, valid after the fake is boxed.
    #[must_use]
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl GitRepo for FakeGitRepo {
    fn current_branch(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.branch.clone())
    }

    fn current_commit(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.commit.clone())
    }

    fn has_changes(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.dirty)
    }

    fn stage_all(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log.record("stage_all");
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log.record(format!("commit {message}"));
        Ok(())
    }

    fn push(
        &self,
        remote: &str,
        branch: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log.record(format!("push {remote} {branch}"));
        match &self.push_error {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}
