//! Live health probe using reqwest.

use reqwest::Client;

use crate::ports::probe::{HealthProbe, ProbeFuture, ProbeResponse};

/// Live HTTP probe backed by a reqwest client.
pub struct LiveHealthProbe {
    client: Client,
}

impl LiveHealthProbe {
    /// Creates a new live probe.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveHealthProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthProbe for LiveHealthProbe {
    fn get(&self, url: &str) -> ProbeFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("health probe request to {url} failed: {e}").into()
                })?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read health probe response from {url}: {e}").into()
                },
            )?;

            Ok(ProbeResponse { status, body })
        })
    }
}
