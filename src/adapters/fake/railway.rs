//! Fake Railway CLI with scripted login state and outputs.

use crate::adapters::fake::CallLog;
use crate::ports::railway::RailwayCli;

/// Railway CLI fake recording calls.
pub struct FakeRailwayCli {
    user: Option<String>,
    variables: Vec<String>,
    up_error: Option<String>,
    status_output: String,
    log: CallLog,
}

impl FakeRailwayCli {
    /// A CLI logged in as the given user with no variables configured.
    #[must_use]
    pub fn logged_in(user: &str) -> Self {
        Self {
            user: Some(user.to_string()),
            variables: Vec::new(),
            up_error: None,
            status_output: "project: example (production)".to_string(),
            log: CallLog::new(),
        }
    }

    /// A CLI with no logged-in user.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { user: None, ..Self::logged_in("") }
    }

    /// Sets the configured variable names.
    #[must_use]
    pub fn with_variables(mut self, names: &[&str]) -> Self {
        self.variables = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    /// Makes `up` fail with the given message.
    #[must_use]
    pub fn failing_up(mut self, message: &str) -> Self {
        self.up_error = Some(message.to_string());
        self
    }

    /// A handle to the call log, valid after the fake is boxed.
    #[must_use]
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl RailwayCli for FakeRailwayCli {
    fn whoami(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.log.record("whoami");
        match &self.user {
            Some(user) => Ok(user.clone()),
            None => Err("Unauthorized. Please login with `railway login`".into()),
        }
    }

    fn variable_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        self.log.record("variables");
        Ok(self.variables.clone())
    }

    fn up(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.log.record("up");
        match &self.up_error {
            Some(message) => Err(message.clone().into()),
            None => Ok("Deploy complete".to_string()),
        }
    }

    fn status(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.log.record("status");
        Ok(self.status_output.clone())
    }
}
