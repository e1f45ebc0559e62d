//! Extraction service trait and implementations.

pub mod http;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::document::Document;
use crate::fields::ExtractedFields;

/// Shown when the service fails without providing a reason.
pub const SERVICE_FALLBACK_MESSAGE: &str = "Something went wrong";

/// Shown when the request could not complete at all.
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload resume";

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("service returned HTTP {status}")]
    Service { status: u16, message: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("extraction worker is not running")]
    Disconnected,
}

impl ExtractionError {
    /// Reason shown in the error banner: the service's own message if it
    /// sent one, otherwise a fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service {
                message: Some(m), ..
            } => m.clone(),
            Self::Service { message: None, .. } => SERVICE_FALLBACK_MESSAGE.to_string(),
            _ => UPLOAD_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Boxed future returned by [`ExtractionService::extract`].
pub type ExtractionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ExtractedFields, ExtractionError>> + Send + 'a>>;

/// A remote endpoint that turns a document into structured fields.
pub trait ExtractionService: Send + Sync {
    /// Short name for logs (e.g. the endpoint URL).
    fn name(&self) -> &str;

    /// Submit `document` and wait for the extracted fields.
    fn extract<'a>(&'a self, document: &'a Document) -> ExtractionFuture<'a>;
}
