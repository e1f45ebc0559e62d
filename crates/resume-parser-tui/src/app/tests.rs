use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;
use resume_parser_core::{ExtractedFields, SubmissionState};

/// Create a minimal App for testing (no backend).
fn test_app() -> App {
    App::new(Theme::default())
}

fn write_pdf(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"%PDF-1.4 resume").unwrap();
    path
}

fn with_backend(app: &mut App) -> mpsc::UnboundedReceiver<BackendCommand> {
    let (tx, rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(tx);
    rx
}

// ── Drop target ─────────────────────────────────────────────────

#[test]
fn pasted_pdf_path_is_selected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(&dir, "resume.pdf");
    let mut app = test_app();

    app.update(Action::DropText(format!("'{}'", path.display())));

    assert_eq!(app.workflow.selection().unwrap().document.name, "resume.pdf");
    assert!(!app.workflow.drag_active());
    assert!(app.workflow.error().is_none());
}

#[test]
fn pasted_non_pdf_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();
    let mut app = test_app();

    app.update(Action::DropText(path.display().to_string()));

    assert!(app.workflow.selection().is_none());
    assert_eq!(app.workflow.error(), Some("Please upload a PDF file."));
    assert!(!app.workflow.drag_active());
}

#[test]
fn blank_paste_leaves_drop_zone_idle() {
    let mut app = test_app();
    app.update(Action::DropText("   \n".into()));
    assert!(app.workflow.selection().is_none());
    assert!(app.workflow.error().is_none());
    assert!(!app.workflow.drag_active());
}

#[test]
fn drop_prompt_hovers_until_cancelled() {
    let mut app = test_app();

    app.update(Action::StartDrop);
    assert_eq!(app.input_mode, InputMode::DropPath);
    assert!(app.workflow.drag_active());

    app.update(Action::PromptInput('/'));
    app.update(Action::PromptInput('q'));
    assert_eq!(app.drop_buffer, "/q");
    assert!(app.workflow.drag_active());
    assert!(!app.should_quit);

    app.update(Action::PromptCancel);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.workflow.drag_active());
    assert!(app.workflow.selection().is_none());
}

#[test]
fn drop_prompt_confirm_selects_typed_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(&dir, "cv.pdf");
    let mut app = test_app();

    app.update(Action::StartDrop);
    for ch in path.display().to_string().chars() {
        app.update(Action::PromptInput(ch));
    }
    app.update(Action::PromptBackspace);
    app.update(Action::PromptInput('f'));
    app.update(Action::PromptConfirm);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.drop_buffer.is_empty());
    assert_eq!(app.workflow.selection().unwrap().document.name, "cv.pdf");
}

// ── Preview and selection ──────────────────────────────────────

#[test]
fn preview_toggle_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    app.select_path(&write_pdf(&dir, "resume.pdf"));

    app.update(Action::TogglePreview);
    assert!(app.workflow.preview_shown());
    let scratch = app.workflow.preview_handle().unwrap().path().to_path_buf();
    assert!(scratch.exists());

    app.update(Action::ClearSelection);
    assert!(app.workflow.selection().is_none());
    assert!(!app.workflow.preview_visible());
    assert!(!scratch.exists());
}

#[test]
fn copy_link_without_preview_sets_notice() {
    let mut app = test_app();
    app.update(Action::CopyLink);
    assert_eq!(app.notice.as_deref(), Some("No preview available"));

    for _ in 0..App::NOTICE_TICKS {
        app.update(Action::Tick);
    }
    assert!(app.notice.is_none());
}

#[test]
fn osc52_sequence_wraps_base64() {
    assert_eq!(osc52_sequence("file:///tmp/a.pdf"), "\x1b]52;c;ZmlsZTovLy90bXAvYS5wZGY=\x07");
}

// ── Submission ─────────────────────────────────────────────────

#[test]
fn submit_without_selection_shows_prompt() {
    let mut app = test_app();
    let mut rx = with_backend(&mut app);

    app.update(Action::Submit);

    assert_eq!(app.workflow.error(), Some("Please select a resume PDF first"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn submit_sends_request_and_applies_result() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    let mut rx = with_backend(&mut app);
    app.select_path(&write_pdf(&dir, "resume.pdf"));

    app.update(Action::DrillIn);
    assert!(app.workflow.submission().is_in_flight());

    // A second press while in flight sends nothing
    app.update(Action::Submit);
    let BackendCommand::Submit(request) = rx.try_recv().unwrap();
    assert!(rx.try_recv().is_err());
    assert_eq!(request.document.name, "resume.pdf");

    let fields = ExtractedFields {
        name: Some("Jane Doe".into()),
        ..Default::default()
    };
    app.handle_backend_event(BackendEvent::SubmissionFinished {
        ticket: request.ticket,
        outcome: Ok(fields.clone()),
    });
    assert_eq!(app.workflow.submission(), &SubmissionState::Succeeded(fields));
}

#[test]
fn missing_backend_fails_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    app.select_path(&write_pdf(&dir, "resume.pdf"));

    app.update(Action::Submit);

    assert_eq!(
        app.workflow.submission(),
        &SubmissionState::Failed("Failed to upload resume".into())
    );
}

#[test]
fn result_for_replaced_selection_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    let mut rx = with_backend(&mut app);
    app.select_path(&write_pdf(&dir, "old.pdf"));
    app.update(Action::Submit);
    let BackendCommand::Submit(request) = rx.try_recv().unwrap();

    app.update(Action::DropText(write_pdf(&dir, "new.pdf").display().to_string()));
    app.handle_backend_event(BackendEvent::SubmissionFinished {
        ticket: request.ticket,
        outcome: Ok(ExtractedFields::default()),
    });

    assert_eq!(app.workflow.submission(), &SubmissionState::Idle);
    assert!(app.workflow.error().is_none());
    assert_eq!(app.workflow.selection().unwrap().document.name, "new.pdf");
}

// ── Quit ───────────────────────────────────────────────────────

#[test]
fn quit_when_idle_is_immediate() {
    let mut app = test_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn quit_while_in_flight_asks_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    let _rx = with_backend(&mut app);
    app.select_path(&write_pdf(&dir, "resume.pdf"));
    app.update(Action::Submit);

    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);

    app.update(Action::NavigateBack);
    assert!(!app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn force_quit_skips_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    let _rx = with_backend(&mut app);
    app.select_path(&write_pdf(&dir, "resume.pdf"));
    app.update(Action::Submit);

    assert!(app.update(Action::ForceQuit));
}

// ── File picker ────────────────────────────────────────────────

#[test]
fn picker_lists_directories_and_pdfs_only() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir, "b.pdf");
    write_pdf(&dir, "A.PDF");
    std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    std::fs::write(dir.path().join(".hidden.pdf"), b"x").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let picker = FilePickerState::at(dir.path());
    let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["..", "sub", "A.PDF", "b.pdf"]);
}

#[test]
fn picker_enter_selects_pdf_and_returns() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir, "resume.pdf");
    let mut app = test_app();
    app.file_picker = FilePickerState::at(dir.path());
    app.screen = Screen::FilePicker;

    app.update(Action::GoBottom);
    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.workflow.selection().unwrap().document.name, "resume.pdf");
}

#[test]
fn picker_enter_on_directory_descends() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("inner")).unwrap();
    let mut app = test_app();
    app.file_picker = FilePickerState::at(dir.path());
    app.screen = Screen::FilePicker;

    app.update(Action::MoveDown);
    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::FilePicker);
    assert_eq!(app.file_picker.current_dir, dir.path().join("inner"));
    assert!(app.workflow.selection().is_none());
}

#[test]
fn browse_then_escape_returns_to_main() {
    let mut app = test_app();
    app.update(Action::Browse);
    assert_eq!(app.screen, Screen::FilePicker);
    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Main);
}

// ── Help ───────────────────────────────────────────────────────

#[test]
fn help_overlay_swallows_actions() {
    let mut app = test_app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    app.update(Action::Browse);
    assert_eq!(app.screen, Screen::Main);

    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}
