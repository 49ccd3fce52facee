//! Git repository port for version-control queries and push automation.

/// Provides access to the project's git repository.
///
/// Abstracting git access lets the push automation be tested against a
/// fake repository that records operations instead of mutating history.
pub trait GitRepo: Send + Sync {
    /// Returns the name of the currently checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not a git repository or HEAD
    /// is detached.
    fn current_branch(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the hash of the current HEAD commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits or is invalid.
    fn current_commit(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the working tree has staged or unstaged changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails.
    fn has_changes(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// Stages every change in the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn stage_all(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Creates a commit with the given message from the staged changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be created (e.g. nothing
    /// staged, missing identity configuration).
    fn commit(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Pushes the given branch to the given remote.
    ///
    /// # Errors
    ///
    /// Returns an error if the push is rejected or the remote is
    /// unreachable.
    fn push(
        &self,
        remote: &str,
        branch: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
