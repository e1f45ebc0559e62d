//! Scripted extraction service for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{ExtractionError, ExtractionFuture, ExtractionService};
use crate::document::Document;
use crate::fields::ExtractedFields;

/// A configurable mock response for [`MockService`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a 200 with these fields.
    Fields(ExtractedFields),
    /// Simulate a non-success status with an optional `error` message.
    Status { status: u16, message: Option<String> },
    /// Simulate a request that never got a response in time.
    Timeout,
}

/// A hand-rolled mock implementing [`ExtractionService`].
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency.
/// - Call counting via [`call_count()`](MockService::call_count).
pub struct MockService {
    /// Pending responses in reverse order so `pop()` yields the next one.
    responses: Mutex<Vec<MockResponse>>,
    fallback: MockResponse,
    delay: Option<Duration>,
    call_count: AtomicUsize,
    documents: Mutex<Vec<String>>,
}

impl MockService {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            delay: None,
            call_count: AtomicUsize::new(0),
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    ///
    /// An empty sequence behaves like a service that always times out.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        let fallback = responses.last().cloned().unwrap_or(MockResponse::Timeout);
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            ..Self::new(fallback)
        }
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `extract()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Names of the documents submitted so far, in call order.
    pub fn submitted(&self) -> Vec<String> {
        self.documents
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    fn next_response(&self) -> MockResponse {
        match self.responses.lock() {
            Ok(mut seq) => seq.pop().unwrap_or_else(|| self.fallback.clone()),
            Err(_) => self.fallback.clone(),
        }
    }
}

impl ExtractionService for MockService {
    fn name(&self) -> &str {
        "mock"
    }

    fn extract<'a>(&'a self, document: &'a Document) -> ExtractionFuture<'a> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut docs) = self.documents.lock() {
            docs.push(document.name.clone());
        }
        let response = self.next_response();
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }

            match response {
                MockResponse::Fields(fields) => Ok(fields),
                MockResponse::Status { status, message } => {
                    Err(ExtractionError::Service { status, message })
                }
                MockResponse::Timeout => Err(ExtractionError::Timeout),
            }
        })
    }
}
