//! The central state container.
//!
//! [`Workflow`] owns the selection, the preview handle, the preview flag,
//! the submission state and the error message. It is mutated only through
//! the operations below; the presentation layer reads it through `&self`.

use crate::document::Candidate;
use crate::fields::ExtractedFields;
use crate::preview::{PreviewHandle, PreviewManager};
use crate::selection::{self, DragState, Selection, SelectionError, SelectionId, SelectionOrigin};
use crate::service::{ExtractionError, ExtractionService};
use crate::submission::{Completion, SubmissionRequest, SubmissionState, SubmitError, Ticket};

#[derive(Debug, Default)]
pub struct Workflow {
    selection: Option<Selection>,
    previews: PreviewManager,
    preview_visible: bool,
    drag: DragState,
    submission: SubmissionState,
    error: Option<String>,
    next_selection: u64,
    next_ticket: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn preview_handle(&self) -> Option<&PreviewHandle> {
        self.previews.current()
    }

    /// The user's preview toggle, independent of whether a handle exists.
    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Whether the preview is actually rendered: toggle on and a live handle.
    pub fn preview_shown(&self) -> bool {
        self.preview_visible && self.previews.current().is_some()
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_active()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn previews(&self) -> &PreviewManager {
        &self.previews
    }

    // ── Selection ───────────────────────────────────────────────

    /// A file chosen through the picker.
    pub fn on_pick(&mut self, candidate: Candidate) -> Result<SelectionId, SelectionError> {
        self.offer(candidate, SelectionOrigin::Picker)
    }

    /// A file dropped on the drop zone. Ends any drag in progress.
    pub fn on_drop(&mut self, candidate: Candidate) -> Result<SelectionId, SelectionError> {
        self.drag.dropped();
        self.offer(candidate, SelectionOrigin::Drop)
    }

    pub fn drag_enter(&mut self) {
        self.drag.enter();
    }

    pub fn drag_over(&mut self) {
        self.drag.over();
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Drop the current selection, its preview handle and any finished result.
    ///
    /// An in-flight request keeps running; its response is discarded as stale.
    pub fn clear_selection(&mut self) {
        self.previews.revoke_current();
        if let Some(old) = self.selection.take() {
            tracing::debug!(selection = old.id.get(), "selection cleared");
        }
        self.preview_visible = false;
        if !self.submission.is_in_flight() {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Flip the preview toggle. Returns the new value.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_visible = !self.preview_visible;
        self.preview_visible
    }

    fn offer(
        &mut self,
        candidate: Candidate,
        origin: SelectionOrigin,
    ) -> Result<SelectionId, SelectionError> {
        let document = match selection::accept(&candidate) {
            Ok(document) => document,
            Err(e) => {
                tracing::debug!(
                    origin = origin.as_str(),
                    name = %candidate.name,
                    media_type = candidate.media_type.as_deref().unwrap_or(""),
                    error = %e,
                    "candidate rejected"
                );
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        // The old handle goes before anything new exists.
        self.previews.revoke_current();

        self.next_selection += 1;
        let id = SelectionId::new(self.next_selection);
        self.error = None;
        self.preview_visible = false;

        if let Err(e) = self.previews.derive(id, &document) {
            tracing::warn!(document = %document.name, error = %e, "preview unavailable");
        }

        tracing::debug!(
            origin = origin.as_str(),
            selection = id.get(),
            name = %document.name,
            bytes = document.len(),
            "selection accepted"
        );
        self.selection = Some(Selection { id, document });
        Ok(id)
    }

    // ── Submission ──────────────────────────────────────────────

    /// Start a submission for the current selection.
    ///
    /// On success the state is already `InFlight` when this returns; the
    /// caller performs the request and hands the outcome back through
    /// [`complete_submission`](Self::complete_submission).
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, SubmitError> {
        if self.submission.is_in_flight() {
            tracing::debug!("submit ignored: request already in flight");
            return Err(SubmitError::AlreadyInFlight);
        }

        let Some((selection, document)) = self
            .selection
            .as_ref()
            .map(|s| (s.id, s.document.clone()))
        else {
            let err = SubmitError::NoSelection;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.next_ticket += 1;
        let ticket = Ticket {
            id: self.next_ticket,
            selection,
        };
        self.error = None;
        self.submission = SubmissionState::InFlight(ticket);
        tracing::debug!(ticket = ticket.id, selection = selection.get(), "submission started");

        Ok(SubmissionRequest { ticket, document })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        outcome: Result<ExtractedFields, ExtractionError>,
    ) -> Completion {
        match &self.submission {
            SubmissionState::InFlight(current) if *current == ticket => {}
            other => {
                tracing::debug!(ticket = ticket.id, state = other.label(), "completion ignored");
                return Completion::Ignored;
            }
        }

        let current_selection = self.selection.as_ref().map(|s| s.id);
        if current_selection != Some(ticket.selection) {
            tracing::warn!(
                ticket = ticket.id,
                issued_for = ticket.selection.get(),
                current = current_selection.map(|s| s.get()),
                "discarding response for a replaced selection"
            );
            self.submission = SubmissionState::Idle;
            return Completion::Stale;
        }

        match outcome {
            Ok(fields) => {
                tracing::info!(ticket = ticket.id, "extraction succeeded");
                self.submission = SubmissionState::Succeeded(fields);
            }
            Err(e) => {
                let reason = e.user_message();
                tracing::info!(ticket = ticket.id, error = %e, "extraction failed");
                self.error = Some(reason.clone());
                self.submission = SubmissionState::Failed(reason);
            }
        }
        Completion::Applied
    }

    /// Submit and wait for the outcome in one call.
    pub async fn submit<S>(&mut self, service: &S) -> Result<Completion, SubmitError>
    where
        S: ExtractionService + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = service.extract(&request.document).await;
        Ok(self.complete_submission(request.ticket, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> Candidate {
        Candidate::from_bytes(name, Some("application/pdf"), b"%PDF-1.4 test".to_vec())
    }

    fn text(name: &str) -> Candidate {
        Candidate::from_bytes(name, Some("text/plain"), b"hello".to_vec())
    }

    #[test]
    fn starts_idle_and_empty() {
        let wf = Workflow::new();
        assert!(wf.selection().is_none());
        assert!(wf.preview_handle().is_none());
        assert_eq!(wf.submission(), &SubmissionState::Idle);
        assert!(wf.error().is_none());
        assert!(!wf.preview_visible());
    }

    #[test]
    fn pick_derives_one_handle() {
        let mut wf = Workflow::new();
        let id = wf.on_pick(pdf("a.pdf")).unwrap();
        let handle = wf.preview_handle().unwrap();
        assert_eq!(handle.selection(), id);
        assert_eq!(wf.previews().live_count(), 1);
    }

    #[test]
    fn replacing_selection_revokes_previous_handle() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let old_path = wf.preview_handle().unwrap().path().to_path_buf();

        let id = wf.on_drop(pdf("b.pdf")).unwrap();
        assert!(!old_path.exists());
        assert_eq!(wf.preview_handle().unwrap().selection(), id);
        assert_eq!(wf.previews().live_count(), 1);
        assert_eq!(wf.selection().unwrap().document.name, "b.pdf");
    }

    #[test]
    fn new_selection_resets_preview_and_error() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        assert!(wf.toggle_preview());
        assert!(wf.preview_shown());
        let _ = wf.on_drop(text("x.txt"));
        assert!(wf.error().is_some());

        wf.on_pick(pdf("b.pdf")).unwrap();
        assert!(!wf.preview_visible());
        assert!(!wf.preview_shown());
        assert!(wf.error().is_none());
    }

    #[test]
    fn rejection_keeps_selection_and_handle() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let handle_id = wf.preview_handle().unwrap().id();

        let err = wf.on_pick(text("notes.txt")).unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedType { .. }));
        assert_eq!(wf.error(), Some("Please upload a PDF file."));
        assert_eq!(wf.selection().unwrap().document.name, "a.pdf");
        assert_eq!(wf.preview_handle().unwrap().id(), handle_id);
        assert_eq!(wf.previews().derived_count(), 1);
    }

    #[test]
    fn drop_ends_drag_even_when_rejected() {
        let mut wf = Workflow::new();
        wf.drag_enter();
        wf.drag_over();
        assert!(wf.drag_active());
        let _ = wf.on_drop(text("x.txt"));
        assert!(!wf.drag_active());
        assert!(wf.selection().is_none());
    }

    #[test]
    fn drag_never_touches_selection() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        wf.drag_enter();
        wf.drag_leave();
        assert!(!wf.drag_active());
        assert_eq!(wf.selection().unwrap().document.name, "a.pdf");
    }

    #[test]
    fn clear_revokes_and_hides_preview() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        wf.toggle_preview();
        let path = wf.preview_handle().unwrap().path().to_path_buf();

        wf.clear_selection();
        assert!(wf.selection().is_none());
        assert!(wf.preview_handle().is_none());
        assert!(!wf.preview_visible());
        assert!(!path.exists());

        // Clearing again is harmless.
        wf.clear_selection();
        assert_eq!(wf.previews().revoked_count(), 1);
    }

    #[test]
    fn clear_drops_finished_result() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();
        wf.complete_submission(req.ticket, Ok(ExtractedFields::default()));

        wf.clear_selection();
        assert_eq!(wf.submission(), &SubmissionState::Idle);

        assert_eq!(wf.begin_submit().unwrap_err(), SubmitError::NoSelection);
        assert_eq!(wf.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn clear_while_in_flight_discards_response() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();

        wf.clear_selection();
        assert!(wf.submission().is_in_flight());

        let done = wf.complete_submission(req.ticket, Ok(ExtractedFields::default()));
        assert_eq!(done, Completion::Stale);
        assert_eq!(wf.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn preview_needs_both_flag_and_handle() {
        let mut wf = Workflow::new();
        assert!(wf.toggle_preview());
        assert!(!wf.preview_shown());
    }

    #[test]
    fn submit_without_selection_is_a_local_error() {
        let mut wf = Workflow::new();
        assert_eq!(wf.begin_submit().unwrap_err(), SubmitError::NoSelection);
        assert_eq!(wf.error(), Some("Please select a resume PDF first"));
        assert_eq!(wf.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn begin_submit_is_synchronously_in_flight() {
        let mut wf = Workflow::new();
        let sel = wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();
        assert_eq!(req.ticket.selection, sel);
        assert_eq!(req.document.name, "a.pdf");
        assert_eq!(wf.submission(), &SubmissionState::InFlight(req.ticket));
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let first = wf.begin_submit().unwrap();
        assert_eq!(wf.begin_submit().unwrap_err(), SubmitError::AlreadyInFlight);
        assert_eq!(wf.submission(), &SubmissionState::InFlight(first.ticket));
        assert!(wf.error().is_none());
    }

    #[test]
    fn failure_sets_error_and_allows_retry() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();
        let outcome = Err(ExtractionError::Service {
            status: 500,
            message: Some("unreadable file".into()),
        });
        assert_eq!(wf.complete_submission(req.ticket, outcome), Completion::Applied);
        assert_eq!(wf.submission(), &SubmissionState::Failed("unreadable file".into()));
        assert_eq!(wf.error(), Some("unreadable file"));

        let retry = wf.begin_submit().unwrap();
        assert_ne!(retry.ticket, req.ticket);
        assert!(wf.error().is_none());
        assert!(wf.submission().is_in_flight());
    }

    #[test]
    fn success_replaces_previous_result() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();
        let fields = ExtractedFields {
            name: Some("Jane".into()),
            ..Default::default()
        };
        wf.complete_submission(req.ticket, Ok(fields.clone()));
        assert_eq!(wf.submission(), &SubmissionState::Succeeded(fields));

        // Resubmitting clears the old result immediately.
        wf.begin_submit().unwrap();
        assert!(wf.submission().is_in_flight());
    }

    #[test]
    fn response_for_replaced_selection_is_discarded() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();

        // Selection changes mid-flight; the request is not cancelled.
        wf.on_pick(pdf("b.pdf")).unwrap();
        assert!(wf.submission().is_in_flight());

        let outcome = Ok(ExtractedFields {
            name: Some("Old".into()),
            ..Default::default()
        });
        assert_eq!(wf.complete_submission(req.ticket, outcome), Completion::Stale);
        assert_eq!(wf.submission(), &SubmissionState::Idle);
        assert!(wf.error().is_none());
    }

    #[test]
    fn response_after_clear_is_discarded() {
        let mut wf = Workflow::new();
        wf.on_pick(pdf("a.pdf")).unwrap();
        let req = wf.begin_submit().unwrap();
        wf.clear_selection();
        let outcome = Err(ExtractionError::Timeout);
        assert_eq!(wf.complete_submission(req.ticket, outcome), Completion::Stale);
        assert_eq!(wf.submission(), &SubmissionState::Idle);
        assert!(wf.error().is_none());
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut wf = Workflow::new();
        let sel = wf.on_pick(pdf("a.pdf")).unwrap();
        let bogus = Ticket { id: 99, selection: sel };
        assert_eq!(
            wf.complete_submission(bogus, Err(ExtractionError::Timeout)),
            Completion::Ignored
        );
        assert_eq!(wf.submission(), &SubmissionState::Idle);

        let req = wf.begin_submit().unwrap();
        wf.complete_submission(req.ticket, Err(ExtractionError::Timeout));
        // A duplicate completion for an already-resolved ticket changes nothing.
        assert_eq!(
            wf.complete_submission(req.ticket, Ok(ExtractedFields::default())),
            Completion::Ignored
        );
        assert_eq!(
            wf.submission(),
            &SubmissionState::Failed("Failed to upload resume".into())
        );
    }

    #[test]
    fn dropping_workflow_revokes_live_handle() {
        let path = {
            let mut wf = Workflow::new();
            wf.on_pick(pdf("a.pdf")).unwrap();
            wf.preview_handle().unwrap().path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
