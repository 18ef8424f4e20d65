//! Key event handlers for UI modes and dialogs

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::message::{EditOp, Message};
use crate::sections::SectionId;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode.
///
/// Modals capture input first: the alert on screen, then the confirm dialog.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_interrupt() {
        return Some(Message::Quit);
    }
    if state.alerts.current().is_some() {
        return handle_key_alert(key);
    }
    if let Some(dialog) = &state.confirm_dialog {
        return handle_key_confirm_dialog(dialog, key);
    }
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Editing => handle_key_editing(key),
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_confirm_dialog(dialog: &ConfirmDialogState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(dialog.on_accept.clone()),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(dialog.on_decline.clone()),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Char('v') => Some(Message::Validate),
        InputKey::Char('s') => Some(Message::Submit),
        InputKey::Char('e') => Some(Message::StartEditing),
        InputKey::Char('l') => Some(Message::ReloadContent),
        InputKey::Char('r') => Some(Message::RefreshSubmissions),
        InputKey::Char('p') => Some(Message::TogglePolling),
        InputKey::Char('c') => Some(Message::CopySelectedBlock),
        InputKey::Char('x') => Some(Message::HideBanner),

        InputKey::Tab => Some(Message::FocusNextSection),
        InputKey::BackTab => Some(Message::FocusPrevSection),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFocusedSection),
        InputKey::PageDown => Some(Message::ScrollPageDown),
        InputKey::PageUp => Some(Message::ScrollPageUp),

        InputKey::Up | InputKey::Char('k') => match state.sections.focused() {
            SectionId::Usage => Some(Message::SelectPrevBlock),
            SectionId::Submissions => Some(Message::ScrollTableUp),
            SectionId::Submission => None,
        },
        InputKey::Down | InputKey::Char('j') => match state.sections.focused() {
            SectionId::Usage => Some(Message::SelectNextBlock),
            SectionId::Submissions => Some(Message::ScrollTableDown),
            SectionId::Submission => None,
        },

        _ => None,
    }
}

fn handle_key_editing(key: InputKey) -> Option<Message> {
    let op = match key {
        InputKey::Esc => return Some(Message::StopEditing),
        InputKey::Char(c) => EditOp::Insert(c),
        InputKey::Enter => EditOp::Newline,
        InputKey::Backspace => EditOp::Backspace,
        InputKey::Delete => EditOp::Delete,
        InputKey::Left => EditOp::Left,
        InputKey::Right => EditOp::Right,
        InputKey::Up => EditOp::Up,
        InputKey::Down => EditOp::Down,
        InputKey::Home => EditOp::Home,
        InputKey::End => EditOp::End,
        _ => return None,
    };
    Some(Message::EditContent(op))
}
