//! Railway platform configuration (`railway.json`).
//!
//! The timeout check parses this structure and compares the field value
//! exactly; a substring scan of the raw file is easily fooled by stray
//! digits elsewhere in the config.

use serde::{Deserialize, Serialize};

/// Parsed `railway.json`. Unknown fields are tolerated; sections the
/// project does not declare stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayConfig {
    /// JSON schema reference emitted by the Railway tooling.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Build configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSection>,
    /// Deploy configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<DeploySection>,
}

/// The `build` section of `railway.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSection {
    /// Builder used for the image (e.g. `NIXPACKS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,
}

/// The `deploy` section of `railway.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySection {
    /// Command run to start the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
    /// Path polled by the platform's health checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_path: Option<String>,
    /// Health-check timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_timeout: Option<u64>,
    /// Restart policy (e.g. `ON_FAILURE`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy_type: Option<String>,
    /// Maximum restart attempts under the restart policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy_max_retries: Option<u64>,
}

impl RailwayConfig {
    /// Parses a `railway.json` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not valid JSON for this
    /// schema.
    pub fn parse(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| format!("invalid railway config: {e}"))
    }

    /// The declared health-check timeout, if any.
    #[must_use]
    pub fn healthcheck_timeout(&self) -> Option<u64> {
        self.deploy.as_ref().and_then(|d| d.healthcheck_timeout)
    }

    /// The canonical config written by `preflight config --write`:
    /// NIXPACKS build, uvicorn start command, 60-second health checks on
    /// `/health`, restart on failure.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            schema: Some("https://railway.app/railway.schema.json".to_string()),
            build: Some(BuildSection { builder: Some("NIXPACKS".to_string()) }),
            deploy: Some(DeploySection {
                start_command: Some(
                    "uvicorn app.main:app --host 0.0.0.0 --port $PORT".to_string(),
                ),
                healthcheck_path: Some("/health".to_string()),
                healthcheck_timeout: Some(60),
                restart_policy_type: Some("ON_FAILURE".to_string()),
                restart_policy_max_retries: Some(10),
            }),
        }
    }

    /// Renders the config as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("failed to render railway config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deploy_timeout() {
        let config = RailwayConfig::parse(
            r#"{"deploy": {"healthcheckPath": "/health", "healthcheckTimeout": 80}}"#,
        )
        .unwrap();
        assert_eq!(config.healthcheck_timeout(), Some(80));
    }

    #[test]
    fn tolerates_unknown_fields_and_missing_sections() {
        let config =
            RailwayConfig::parse(r#"{"build": {"builder": "NIXPACKS", "watchPatterns": []}}"#)
                .unwrap();
        assert_eq!(config.healthcheck_timeout(), None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(RailwayConfig::parse("{").is_err());
    }

    #[test]
    fn canonical_config_round_trips_with_sixty_second_timeout() {
        let rendered = RailwayConfig::canonical().render().unwrap();
        let parsed = RailwayConfig::parse(&rendered).unwrap();
        assert_eq!(parsed, RailwayConfig::canonical());
        assert_eq!(parsed.healthcheck_timeout(), Some(60));
    }
}
