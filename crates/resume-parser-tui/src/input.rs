use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::ForceQuit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::DropPath => map_key_drop_path(key),
            }
        }
        // Terminals paste the path of a file dragged onto them.
        Event::Paste(text) => Action::DropText(text.clone()),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Char('s') => Action::Submit,
        KeyCode::Char('o') | KeyCode::Char('b') => Action::Browse,
        KeyCode::Char('d') => Action::StartDrop,
        KeyCode::Char('p') => Action::TogglePreview,
        KeyCode::Char('x') | KeyCode::Delete => Action::ClearSelection,
        KeyCode::Char('y') => Action::CopyLink,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

fn map_key_drop_path(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::PromptCancel,
        KeyCode::Enter => Action::PromptConfirm,
        KeyCode::Backspace => Action::PromptBackspace,
        KeyCode::Char(c) => Action::PromptInput(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn paste_is_a_drop() {
        let evt = Event::Paste("/tmp/resume.pdf".to_string());
        assert_eq!(
            map_event(&evt, &InputMode::Normal),
            Action::DropText("/tmp/resume.pdf".to_string())
        );
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let evt = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&evt, &InputMode::Normal), Action::ForceQuit);
        assert_eq!(map_event(&evt, &InputMode::DropPath), Action::ForceQuit);
    }

    #[test]
    fn prompt_captures_letters_that_are_shortcuts_elsewhere() {
        assert_eq!(map_event(&press(KeyCode::Char('q')), &InputMode::Normal), Action::Quit);
        assert_eq!(
            map_event(&press(KeyCode::Char('q')), &InputMode::DropPath),
            Action::PromptInput('q')
        );
        assert_eq!(
            map_event(&press(KeyCode::Esc), &InputMode::DropPath),
            Action::PromptCancel
        );
    }

    #[test]
    fn normal_mode_shortcuts() {
        let m = InputMode::Normal;
        assert_eq!(map_event(&press(KeyCode::Char('p')), &m), Action::TogglePreview);
        assert_eq!(map_event(&press(KeyCode::Char('s')), &m), Action::Submit);
        assert_eq!(map_event(&press(KeyCode::Delete), &m), Action::ClearSelection);
        assert_eq!(map_event(&press(KeyCode::Char('d')), &m), Action::StartDrop);
    }
}
