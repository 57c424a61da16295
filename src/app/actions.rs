use super::state::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    Resize,

    FocusNext,
    FocusPrev,
    SetFocus(Focus),

    // Theme input
    InputChar(char),
    Backspace,
    ClearInput,
    Submit,

    // Examples and cards
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    /// Enter on the focused area: submit, pick example or copy.
    Activate,
    SelectExample(usize),
    CopySelected,
}
