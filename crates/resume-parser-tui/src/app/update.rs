use super::{App, InputMode, Screen};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::ForceQuit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.expire_notice();
                return false;
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(8);
                return false;
            }
            _ => {}
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                _ => {}
            }
            return false;
        }

        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => return self.request_quit(),
                _ => {}
            }
            return false;
        }

        if self.input_mode == InputMode::DropPath {
            self.handle_drop_prompt_action(action);
            return false;
        }

        if self.screen == Screen::FilePicker {
            return self.handle_file_picker_action(action);
        }

        match action {
            Action::Quit => return self.request_quit(),
            Action::Browse => {
                self.file_picker.refresh_entries();
                self.screen = Screen::FilePicker;
            }
            Action::StartDrop => {
                self.drop_buffer.clear();
                self.input_mode = InputMode::DropPath;
                self.workflow.drag_enter();
            }
            Action::DropText(text) => self.drop_text(&text),
            Action::TogglePreview => {
                self.workflow.toggle_preview();
            }
            Action::Submit | Action::DrillIn => self.submit(),
            Action::ClearSelection => self.workflow.clear_selection(),
            Action::CopyLink => self.copy_preview_link(),
            Action::ToggleHelp => self.show_help = true,
            _ => {}
        }
        false
    }

    /// Quit now, or ask first while a request is in flight.
    pub(super) fn request_quit(&mut self) -> bool {
        if self.workflow.submission().is_in_flight() {
            self.confirm_quit = true;
            false
        } else {
            self.should_quit = true;
            true
        }
    }

    /// The drop prompt models a drag: typing hovers, Enter drops, Esc leaves.
    fn handle_drop_prompt_action(&mut self, action: Action) {
        match action {
            Action::PromptInput(ch) => {
                self.drop_buffer.push(ch);
                self.workflow.drag_over();
            }
            Action::PromptBackspace => {
                self.drop_buffer.pop();
                self.workflow.drag_over();
            }
            Action::PromptConfirm => {
                let text = std::mem::take(&mut self.drop_buffer);
                self.input_mode = InputMode::Normal;
                self.drop_text(&text);
            }
            Action::PromptCancel => {
                self.drop_buffer.clear();
                self.input_mode = InputMode::Normal;
                self.workflow.drag_leave();
            }
            Action::DropText(text) => {
                self.drop_buffer.clear();
                self.input_mode = InputMode::Normal;
                self.drop_text(&text);
            }
            _ => {}
        }
    }

    fn copy_preview_link(&mut self) {
        let url = self
            .workflow
            .preview_handle()
            .map(|h| h.url().to_string());
        match url {
            Some(url) => {
                super::osc52_copy(&url);
                self.set_notice("Preview link copied to clipboard");
            }
            None => self.set_notice("No preview available"),
        }
    }
}
