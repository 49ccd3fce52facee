//! Check settings: what the validator expects of the project.
//!
//! Defaults describe the backend this tool grew up around: a FastAPI
//! service in `app/` deployed to Railway. An optional `preflight.yaml`
//! at the project root overrides any subset of fields.

use std::path::Path;

use serde::Deserialize;

use crate::ports::FileSystem;

/// Name of the optional settings file at the project root.
pub const SETTINGS_FILE: &str = "preflight.yaml";

/// Expected project layout and check thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Application subdirectory, relative to the project root.
    pub app_dir: String,
    /// Application entry-point file, relative to the project root.
    pub entry_file: String,
    /// Settings module file, relative to the project root.
    pub config_file: String,
    /// Dependency manifest file at the project root.
    pub requirements_file: String,
    /// Platform configuration file at the project root.
    pub platform_config: String,
    /// Route-declaration marker counted in the entry file.
    pub route_marker: String,
    /// Minimum number of route declarations expected.
    pub min_endpoints: usize,
    /// Expected `deploy.healthcheckTimeout` value, in seconds.
    pub expected_healthcheck_timeout: u64,
    /// Paths that must be declared in the entry file.
    pub critical_endpoints: Vec<String>,
    /// Name of the application object exported by the entry module.
    pub app_object: String,
    /// Name of the settings object exported by the config module.
    pub settings_object: String,
    /// Interpreter command used for syntax and import checks.
    pub interpreter: String,
    /// Wall-clock timeout applied to each interpreter invocation.
    pub interpreter_timeout_secs: u64,
    /// Environment variables that must be configured before deploying.
    pub required_variables: Vec<String>,
    /// Health endpoint URL probed after a deploy, if known.
    pub health_url: Option<String>,
    /// Number of post-deploy probe attempts.
    pub probe_attempts: u32,
    /// Delay between probe attempts, in seconds.
    pub probe_delay_secs: u64,
    /// Git remote pushed to by the release automation.
    pub remote: String,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            app_dir: "app".to_string(),
            entry_file: "app/main.py".to_string(),
            config_file: "app/config.py".to_string(),
            requirements_file: "requirements.txt".to_string(),
            platform_config: "railway.json".to_string(),
            route_marker: "@app.".to_string(),
            min_endpoints: 12,
            expected_healthcheck_timeout: 60,
            critical_endpoints: vec![
                "/health".to_string(),
                "/auth/register".to_string(),
                "/auth/login".to_string(),
                "/practices/daily".to_string(),
                "/user/progress".to_string(),
            ],
            app_object: "app".to_string(),
            settings_object: "settings".to_string(),
            interpreter: "python3".to_string(),
            interpreter_timeout_secs: 30,
            required_variables: vec!["DATABASE_URL".to_string(), "SECRET_KEY".to_string()],
            health_url: None,
            probe_attempts: 5,
            probe_delay_secs: 10,
            remote: "origin".to_string(),
        }
    }
}

impl CheckSettings {
    /// Loads settings from `<root>/preflight.yaml`, falling back to the
    /// defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Self, String> {
        let path = root.join(SETTINGS_FILE);
        if !fs.exists(&path) {
            return Ok(Self::default());
        }
        let contents = fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read {SETTINGS_FILE}: {e}"))?;
        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse {SETTINGS_FILE}: {e}"))
    }

    /// The one-line program handed to the interpreter's import check:
    /// imports the application and settings objects from their modules.
    #[must_use]
    pub fn import_program(&self) -> String {
        format!(
            "from {} import {}; from {} import {}",
            module_path(&self.entry_file),
            self.app_object,
            module_path(&self.config_file),
            self.settings_object,
        )
    }
}

/// Converts a source file path into a dotted module path
/// (`app/main.py` → `app.main`).
fn module_path(file: &str) -> String {
    file.trim_end_matches(".py").replace('/', ".")
}
