//! Scripted mock HTTP transport

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gittraining_core::error::StoreError;
use gittraining_core::store::{HttpRequest, HttpResponse, HttpTransport};

/// [`HttpTransport`] that serves scripted responses keyed by URL and
/// records every request it sees.
///
/// A request for an unscripted URL reports a transport error, the same
/// way an unreachable host would.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: script the response for `url`.
    pub fn with_response(mut self, url: &str, response: HttpResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .get(&url)
            .cloned()
            .ok_or_else(|| StoreError::Transport {
                url,
                message: "no scripted response".to_string(),
            })
    }
}
