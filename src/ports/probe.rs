//! Health probe port for checking a deployed service over HTTP.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`HealthProbe`] to keep the trait
/// dyn-compatible.
pub type ProbeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ProbeResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// The response from one health probe request.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: String,
}

impl ProbeResponse {
    /// Returns `true` if the service answered with a 2xx status.
    #[must_use]
    pub fn healthy(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends HTTP GET requests to a deployed service's health endpoint.
pub trait HealthProbe: Send + Sync {
    /// Requests the given URL and returns the status and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level
    /// (DNS, connection refused, timeout). A non-2xx status is a
    /// successful probe with an unhealthy response.
    fn get(&self, url: &str) -> ProbeFuture<'_>;
}
