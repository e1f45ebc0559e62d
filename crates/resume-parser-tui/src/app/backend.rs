use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SubmissionFinished { ticket, outcome } => {
                // Stale and mismatched tickets are resolved by the workflow.
                let completion = self.workflow.complete_submission(ticket, outcome);
                tracing::debug!(ticket = ticket.id, ?completion, "submission finished");
            }
        }
    }
}
