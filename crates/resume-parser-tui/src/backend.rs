use std::sync::Arc;

use resume_parser_core::{ExtractionService, SubmissionRequest};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Receive commands from the app until the channel closes or `cancel` fires.
///
/// Each submission runs as its own task so the listener keeps draining
/// commands while a request is in flight.
pub async fn listen(
    service: Arc<dyn ExtractionService>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
) {
    loop {
        let cmd = tokio::select! {
            _ = cancel.cancelled() => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
        };
        match cmd {
            BackendCommand::Submit(request) => {
                let service = Arc::clone(&service);
                let tx = tx.clone();
                tokio::spawn(async move {
                    run_submission(service.as_ref(), request, &tx).await;
                });
            }
        }
    }
    tracing::debug!("backend listener stopped");
}

/// Perform one extraction request and report its outcome.
pub async fn run_submission(
    service: &dyn ExtractionService,
    request: SubmissionRequest,
    tx: &mpsc::UnboundedSender<BackendEvent>,
) {
    let SubmissionRequest { ticket, document } = request;
    tracing::info!(
        ticket = ticket.id,
        service = service.name(),
        document = %document.name,
        bytes = document.len(),
        "uploading resume"
    );
    let outcome = service.extract(&document).await;
    // The app may have exited already.
    let _ = tx.send(BackendEvent::SubmissionFinished { ticket, outcome });
}
