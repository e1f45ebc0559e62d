/// Everything the app reacts to, after terminal events have been mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Quit without confirmation.
    ForceQuit,
    NavigateBack,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    DrillIn,

    /// Open the file picker.
    Browse,
    /// Open the drop-path prompt.
    StartDrop,
    /// Text dropped onto the terminal (bracketed paste).
    DropText(String),
    TogglePreview,
    Submit,
    ClearSelection,
    CopyLink,
    ToggleHelp,

    // Drop-path prompt editing
    PromptInput(char),
    PromptBackspace,
    PromptConfirm,
    PromptCancel,

    Tick,
    Resize(u16, u16),
    None,
}
