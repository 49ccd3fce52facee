//! Railway CLI port for deployment operations.

/// Invokes the Railway platform CLI.
///
/// Abstracting the CLI lets the deploy sequence be tested with scripted
/// login states, variable lists, and upload outcomes.
pub trait RailwayCli: Send + Sync {
    /// Returns the identity of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the CLI is missing or no user is logged in.
    fn whoami(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the names of the environment variables configured on the
    /// linked service.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not linked or the query fails.
    fn variable_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Uploads and deploys the current directory, returning the CLI
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if the deployment is rejected or the upload
    /// fails.
    fn up(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the current project/deployment status output.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not linked or the query fails.
    fn status(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
