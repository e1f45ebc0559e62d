mod backend;
mod update;
mod update_file_picker;
mod util;
use util::*;

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;

use resume_parser_core::{Candidate, ExtractionError, SubmitError, Workflow};

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Main,
    FilePicker,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a path into the drop prompt.
    DropPath,
}

/// State for the file picker screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then PDFs).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::at(current_dir)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let mut state = Self {
            current_dir: dir.into(),
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    ///
    /// Only directories and `.pdf` files are listed; hidden entries are skipped.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            let mut dirs = Vec::new();
            let mut files = Vec::new();

            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                if name.starts_with('.') {
                    continue;
                }

                if path.is_dir() {
                    dirs.push(FileEntry {
                        name,
                        path,
                        is_dir: true,
                    });
                } else if is_pdf_path(&path) {
                    files.push(FileEntry {
                        name,
                        path,
                        is_dir: false,
                    });
                }
            }

            dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            entries.extend(dirs);
            entries.extend(files);
        }

        self.entries = entries;
        self.cursor = 0;
    }

    pub fn current(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub workflow: Workflow,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Height of the visible list area (set on resize, used for page up/down).
    pub visible_rows: usize,

    pub input_mode: InputMode,
    /// Path typed into the drop prompt so far.
    pub drop_buffer: String,
    /// Short-lived notice shown in the footer (e.g. after copying a link).
    pub notice: Option<String>,
    pub(super) notice_tick: usize,

    pub file_picker: FilePickerState,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Main,
            workflow: Workflow::new(),
            tick: 0,
            theme,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            visible_rows: 20,
            input_mode: InputMode::Normal,
            drop_buffer: String::new(),
            notice: None,
            notice_tick: 0,
            file_picker: FilePickerState::new(),
            backend_cmd_tx: None,
        }
    }

    /// Select a file from disk through the picker path.
    pub fn select_path(&mut self, path: &Path) {
        // Failures land in the workflow's error message.
        let _ = self.workflow.on_pick(Candidate::from_path(path));
    }

    /// Treat `text` as a completed drop: enter, then drop.
    pub(super) fn drop_text(&mut self, text: &str) {
        self.workflow.drag_enter();
        match Candidate::from_dropped_text(text) {
            Some(candidate) => {
                let _ = self.workflow.on_drop(candidate);
            }
            None => self.workflow.drag_leave(),
        }
    }

    /// Start a submission and hand it to the backend.
    pub(super) fn submit(&mut self) {
        let request = match self.workflow.begin_submit() {
            Ok(request) => request,
            Err(SubmitError::AlreadyInFlight) | Err(SubmitError::NoSelection) => return,
        };
        let ticket = request.ticket;

        let sent = match &self.backend_cmd_tx {
            Some(tx) => tx.send(BackendCommand::Submit(request)).is_ok(),
            None => false,
        };
        if !sent {
            tracing::warn!(ticket = ticket.id, "backend unavailable");
            self.workflow
                .complete_submission(ticket, Err(ExtractionError::Disconnected));
        }
    }

    pub(super) fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.notice_tick = self.tick;
    }

    /// Ticks a notice stays visible (about three seconds at 10 fps).
    const NOTICE_TICKS: usize = 30;

    pub(super) fn expire_notice(&mut self) {
        if self.notice.is_some() && self.tick.wrapping_sub(self.notice_tick) >= Self::NOTICE_TICKS
        {
            self.notice = None;
        }
    }

    pub fn view(&self, f: &mut ratatui::Frame) {
        if self.screen == Screen::FilePicker {
            crate::view::file_picker::render(f, self);
        } else {
            crate::view::home::render(f, self);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
