use crate::model::{ItemId, SortBy};
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Next,
    Previous,
    JumpForward(usize),
    JumpBackward(usize),

    // Form
    StartAdding,
    CancelAdding,
    InputChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    QuantityUp,
    QuantityDown,
    Submit,

    // List
    ToggleItem(ItemId),
    DeleteItem(ItemId),
    SetSort(SortBy),
    NextSort,
    PreviousSort,
    RequestClear,
    AnswerClear(bool),

    Quit,
}

const PAGE: usize = 10;

/// Maps a key press to an action for the current mode. Item actions carry
/// the id under the cursor so they survive a re-sort.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.mode {
        InputMode::Adding => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::CancelAdding),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Up => Some(Action::QuantityUp),
            KeyCode::Down => Some(Action::QuantityDown),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        },
        InputMode::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::AnswerClear(true))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Action::AnswerClear(false))
            }
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::StartAdding),

            // Navigation
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Next),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Previous),
            KeyCode::PageDown => Some(Action::JumpForward(PAGE)),
            KeyCode::PageUp => Some(Action::JumpBackward(PAGE)),

            // Sorting
            KeyCode::Char('s') => Some(Action::NextSort),
            KeyCode::Char('S') => Some(Action::PreviousSort),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                Some(Action::SetSort(SortBy::ALL[idx]))
            }

            KeyCode::Char('c') => Some(Action::RequestClear),

            // Actions on the selected item
            KeyCode::Char(' ') | KeyCode::Char('x') => state.selected_id().map(Action::ToggleItem),
            KeyCode::Char('d') | KeyCode::Delete => state.selected_id().map(Action::DeleteItem),
            _ => None,
        },
    }
}
