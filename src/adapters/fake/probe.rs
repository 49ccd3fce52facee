//! Fake health probe serving scripted responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::probe::{HealthProbe, ProbeFuture, ProbeResponse};

/// One scripted probe outcome.
pub type ScriptedResponse = Result<ProbeResponse, String>;

/// Health probe fake returning a queue of scripted responses.
///
/// When the queue is exhausted the last response repeats, so a probe
/// configured with a single healthy answer can serve any number of
/// retries.
pub struct FakeHealthProbe {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    last: Mutex<Option<ScriptedResponse>>,
}

impl FakeHealthProbe {
    /// A probe that always answers 200 with a healthy body.
    #[must_use]
    pub fn healthy() -> Self {
        Self::sequence(vec![Ok(ProbeResponse {
            status: 200,
            body: r#"{"status":"healthy"}"#.to_string(),
        })])
    }

    /// A probe that always answers with the given status code.
    #[must_use]
    pub fn answering(status: u16) -> Self {
        Self::sequence(vec![Ok(ProbeResponse { status, body: String::new() })])
    }

    /// A probe that fails at the transport level.
    #[must_use]
    pub fn unreachable(message: &str) -> Self {
        Self::sequence(vec![Err(message.to_string())])
    }

    /// A probe serving the given responses in order, repeating the last.
    #[must_use]
    pub fn sequence(responses: Vec<ScriptedResponse>) -> Self {
        Self { responses: Mutex::new(responses.into()), last: Mutex::new(None) }
    }
}

impl HealthProbe for FakeHealthProbe {
    fn get(&self, _url: &str) -> ProbeFuture<'_> {
        let next = {
            let mut queue = self.responses.lock().unwrap();
            match queue.pop_front() {
                Some(response) => {
                    *self.last.lock().unwrap() = Some(response.clone());
                    response
                }
                None => self
                    .last
                    .lock()
                    .unwrap()
                    .clone()
                    .expect("FakeHealthProbe has no scripted responses"),
            }
        };
        Box::pin(async move { next.map_err(Into::into) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_scripted_sequence_in_order() {
        let probe = FakeHealthProbe::sequence(vec![
            Ok(ProbeResponse { status: 503, body: String::new() }),
            Ok(ProbeResponse { status: 200, body: "ok".to_string() }),
        ]);
        assert_eq!(probe.get("http://x/health").await.unwrap().status, 503);
        assert!(probe.get("http://x/health").await.unwrap().healthy());
    }

    #[tokio::test]
    async fn repeats_last_response_when_queue_runs_dry() {
        let probe = FakeHealthProbe::answering(503);
        let _ = probe.get("http://x/health").await.unwrap();
        let again = probe.get("http://x/health").await.unwrap();
        assert!(!again.healthy());
    }

    #[tokio::test]
    async fn unreachable_probe_errors() {
        let probe = FakeHealthProbe::unreachable("connection refused");
        let err = probe.get("http://x/health").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
