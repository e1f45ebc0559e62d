//! Client-side workflow for the resume parser: document selection, local
//! preview handles, submission to the extraction service, and the mapping
//! from workflow state to a render description.

pub mod document;
pub mod fields;
pub mod preview;
pub mod render;
pub mod selection;
pub mod service;
pub mod submission;
pub mod workflow;

// Re-export for convenience
pub use document::{ACCEPTED_MEDIA_TYPE, Candidate, CandidateSource, Document, media_type_for_name};
pub use fields::{ExtractedFields, Field};
pub use preview::{HandleId, PreviewError, PreviewHandle, PreviewManager};
pub use render::{RenderModel, ResultPanel, present};
pub use selection::{DragState, Selection, SelectionError, SelectionId, SelectionOrigin};
pub use service::http::HttpExtractionService;
pub use service::mock::{MockResponse, MockService};
pub use service::{ExtractionError, ExtractionService};
pub use submission::{Completion, SubmissionRequest, SubmissionState, SubmitError, Ticket};
pub use workflow::Workflow;

/// Default location of the extraction endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload-resume";

/// Default per-request timeout for the extraction service, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
