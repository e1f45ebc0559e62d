use thiserror::Error;

use crate::document::Document;
use crate::fields::ExtractedFields;
use crate::selection::SelectionId;

/// Tags one submission with the selection it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub selection: SelectionId,
}

/// Lifecycle of the current extraction request.
///
/// `Idle -> InFlight -> Succeeded | Failed`, and `Succeeded | Failed ->
/// InFlight` on resubmission. There is no terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight(Ticket),
    Succeeded(ExtractedFields),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight(_) => "in-flight",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Everything the backend needs to perform one extraction request.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub ticket: Ticket,
    pub document: Document,
}

/// Why `submit` did not start a request. `Display` is the user-facing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select a resume PDF first")]
    NoSelection,
    #[error("a submission is already in flight")]
    AlreadyInFlight,
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome became the new submission state.
    Applied,
    /// The selection changed while in flight; the outcome was discarded.
    Stale,
    /// The ticket does not match the in-flight request.
    Ignored,
}
