use resume_parser_core::{ExtractedFields, ExtractionError, SubmissionRequest, Ticket};

/// Commands sent from the TUI to the backend.
pub enum BackendCommand {
    /// Upload the document and extract its fields.
    Submit(SubmissionRequest),
}

/// Events flowing from the backend task to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// The request identified by `ticket` finished, one way or another.
    SubmissionFinished {
        ticket: Ticket,
        outcome: Result<ExtractedFields, ExtractionError>,
    },
}
