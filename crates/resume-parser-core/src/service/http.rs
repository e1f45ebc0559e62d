use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use super::{ExtractionError, ExtractionFuture, ExtractionService};
use crate::document::Document;
use crate::fields::ExtractedFields;

/// Extraction service reached over HTTP.
///
/// Sends the document as a multipart form with a single `file` field and
/// reads back a JSON body.
pub struct HttpExtractionService {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpExtractionService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ExtractionError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("resume-parser/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

impl ExtractionService for HttpExtractionService {
    fn name(&self) -> &str {
        &self.endpoint
    }

    fn extract<'a>(&'a self, document: &'a Document) -> ExtractionFuture<'a> {
        Box::pin(async move {
            let part = Part::bytes(document.bytes.to_vec())
                .file_name(document.name.clone())
                .mime_str(&document.media_type)?;
            let form = Form::new().part("file", part);

            let resp = self
                .client
                .post(&self.endpoint)
                .multipart(form)
                .timeout(self.timeout)
                .send()
                .await
                .map_err(classify)?;

            let status = resp.status();
            let body = resp.bytes().await.map_err(classify)?;
            tracing::debug!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                bytes = body.len(),
                "extraction response received"
            );

            interpret_response(status, &body)
        })
    }
}

fn classify(err: reqwest::Error) -> ExtractionError {
    if err.is_timeout() {
        ExtractionError::Timeout
    } else {
        ExtractionError::Transport(err)
    }
}

/// Map a status and raw body to extracted fields or an error.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<ExtractedFields, ExtractionError> {
    if !status.is_success() {
        return Err(ExtractionError::Service {
            status: status.as_u16(),
            message: error_message(body),
        });
    }
    Ok(ExtractedFields::from_json(body)?)
}

/// The service's `error` string, if the body carries a non-empty one.
fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let message = value.get("error")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_string())
}
