use super::{App, Screen};
use crate::action::Action;

impl App {
    /// Handle input while on the file picker screen.
    /// Returns true if the app should quit.
    pub(super) fn handle_file_picker_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return self.request_quit(),
            Action::NavigateBack => {
                self.screen = Screen::Main;
            }
            Action::MoveDown => {
                let max = self.file_picker.entries.len().saturating_sub(1);
                if self.file_picker.cursor < max {
                    self.file_picker.cursor += 1;
                }
            }
            Action::MoveUp => {
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1);
                let max = self.file_picker.entries.len().saturating_sub(1);
                self.file_picker.cursor = (self.file_picker.cursor + page).min(max);
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1);
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(page);
            }
            Action::GoTop => {
                self.file_picker.cursor = 0;
            }
            Action::GoBottom => {
                self.file_picker.cursor = self.file_picker.entries.len().saturating_sub(1);
            }
            Action::DrillIn => {
                // Enter on a directory opens it, on a PDF picks it
                if !self.file_picker.enter_directory()
                    && let Some(path) = self.file_picker.current().map(|e| e.path.clone())
                {
                    self.select_path(&path);
                    self.screen = Screen::Main;
                }
            }
            Action::DropText(text) => {
                self.screen = Screen::Main;
                self.drop_text(&text);
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            _ => {}
        }
        false
    }
}
