//! In-memory transport serving canned responses.
//!
//! Lets hosts and tests drive a provider without a network. Every request is
//! recorded so callers can assert on what the provider sent.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use octoauth_application::ports::{HttpTransport, TransportError, TransportFuture};
use octoauth_domain::{TransportRequest, TransportResponse};

/// Transport answering from a queue of canned responses per URL.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<BTreeMap<String, VecDeque<TransportResponse>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    /// Creates a transport with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for requests to `url` (query string ignored).
    ///
    /// Responses for the same URL are served in the order queued.
    #[must_use]
    pub fn respond(self, url: impl Into<String>, response: TransportResponse) -> Self {
        lock(&self.responses)
            .entry(url.into())
            .or_default()
            .push_back(response);
        self
    }

    /// Queues a JSON response.
    #[must_use]
    pub fn respond_json(
        self,
        url: impl Into<String>,
        status: u16,
        body: &serde_json::Value,
    ) -> Self {
        self.respond(url, TransportResponse::new(status, body.to_string()))
    }

    /// Requests sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        let key = request
            .url
            .split_once('?')
            .map_or(request.url.as_str(), |(base, _)| base)
            .to_string();

        lock(&self.requests).push(request);

        let response = lock(&self.responses)
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                TransportError::ConnectionFailed(format!("no canned response for {key}"))
            });

        Box::pin(async move { response })
    }
}
