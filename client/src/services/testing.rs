//! Scripted transport for unit tests.

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::core::error::{ApiError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

enum Scripted {
    Response(ApiResponse),
    NetworkError(String),
}

/// Replays queued responses in order and records every request.
///
/// An exhausted queue answers with a network error, which is also what an
/// unreachable backend looks like.
#[derive(Default)]
pub struct MockTransport {
    queue: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, body.to_string().into_bytes());
    }

    pub fn push_raw(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.queue.lock().push_back(Scripted::Response(ApiResponse {
            status,
            body: body.into(),
        }));
    }

    pub fn push_network_error(&self, message: &str) {
        self.queue
            .lock()
            .push_back(Scripted::NetworkError(message.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request);
        match self.queue.lock().pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::NetworkError(message)) => Err(ApiError::Network(message)),
            None => Err(ApiError::Network("connection refused".to_string())),
        }
    }
}
