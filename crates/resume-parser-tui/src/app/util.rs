use std::io::Write;
use std::path::Path;

/// Copy text to the system clipboard using the OSC 52 escape sequence.
/// Works in most modern terminals (iTerm2, kitty, alacritty, WezTerm, etc.).
pub(super) fn osc52_copy(text: &str) {
    let _ = std::io::stdout().write_all(osc52_sequence(text).as_bytes());
    let _ = std::io::stdout().flush();
}

pub(super) fn osc52_sequence(text: &str) -> String {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

pub(super) fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
