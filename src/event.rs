//! Keyboard event handling for the conversion form.
//!
//! Normal mode:
//! - `i`: start typing into the sequence area
//! - `Tab` / `j` / `Down`: next input type
//! - `Shift+Tab` / `k` / `Up`: previous input type
//! - `Enter`: submit
//! - `x`: clear input and results
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:s` or `:submit`: submit
//!   - `:dna`, `:rna`, `:peptide`: select the input type
//!   - `:clear`: clear input and results
//!   - `:h` or `:help`: show help
//!
//! Insert mode:
//! - any character: appended to the sequence area
//! - `Enter`: new line
//! - `Backspace`: delete last character
//! - `Ctrl+S`: submit
//! - `Esc`: back to normal mode

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Start typing into the sequence area
    EnterInsertMode,
    /// Stop typing
    LeaveInsertMode,
    /// Append a character to the input
    InsertChar(char),
    /// Append a line break to the input
    InsertNewline,
    /// Delete the last input character
    DeleteChar,
    /// Select the next input type
    NextKind,
    /// Select the previous input type
    PreviousKind,
    /// Run the conversion
    Submit,
    /// Clear input and results
    Clear,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            handle_key_event(key_event, mode, show_help)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Insert => handle_insert_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('i') => Action::EnterInsertMode,

        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => Action::NextKind,
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => Action::PreviousKind,

        KeyCode::Enter => Action::Submit,
        KeyCode::Char('x') => Action::Clear,

        KeyCode::Char(':') => Action::EnterCommandMode,

        _ => Action::None,
    }
}

/// Handles key events in insert mode.
fn handle_insert_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Action::Submit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::LeaveInsertMode,
        KeyCode::Enter => Action::InsertNewline,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Char(c) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None | Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::EnterInsertMode => {
            state.enter_insert_mode();
        }
        Action::LeaveInsertMode => {
            state.leave_insert_mode();
        }
        Action::InsertChar(c) => {
            state.insert_char(c);
        }
        Action::InsertNewline => {
            state.insert_char('\n');
        }
        Action::DeleteChar => {
            state.delete_char();
        }
        Action::NextKind => {
            state.select_next_kind();
        }
        Action::PreviousKind => {
            state.select_previous_kind();
        }
        Action::Submit => {
            state.submit();
        }
        Action::Clear => {
            state.clear();
        }
        Action::EnterCommandMode => {
            state.enter_command_mode();
        }
        Action::CommandChar(c) => {
            state.command_input(c);
        }
        Action::ExecuteCommand => {
            state.execute_command();
        }
        Action::CancelCommand => {
            state.cancel_command();
        }
        Action::CommandBackspace => {
            state.command_backspace();
        }
        Action::DismissHelp => {
            state.show_help = false;
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SequenceKind;
    use crate::pipeline::ConvertOptions;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_keys() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('i')), &mode, false), Action::EnterInsertMode);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &mode, false), Action::NextKind);
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), &mode, false), Action::PreviousKind);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::Submit);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &mode, false), Action::Clear);
        assert_eq!(handle_key_event(key(KeyCode::Char(':')), &mode, false), Action::EnterCommandMode);
        assert_eq!(handle_key_event(key(KeyCode::Char('A')), &mode, false), Action::None);
    }

    #[test]
    fn test_insert_mode_keys() {
        let mode = AppMode::Insert;
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &mode, false), Action::InsertChar('j'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::InsertNewline);
        assert_eq!(handle_key_event(key(KeyCode::Backspace), &mode, false), Action::DeleteChar);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::LeaveInsertMode);
        assert_eq!(handle_key_event(ctrl('s'), &mode, false), Action::Submit);
    }

    #[test]
    fn test_command_mode_input() {
        let mode = AppMode::Command(String::new());
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mode, false), Action::CommandChar('q'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::ExecuteCommand);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::CancelCommand);
    }

    #[test]
    fn test_ctrl_c_quit() {
        for mode in [AppMode::Normal, AppMode::Insert, AppMode::Command(String::new())] {
            assert_eq!(handle_key_event(ctrl('c'), &mode, false), Action::Quit);
        }
    }

    #[test]
    fn test_dismiss_help() {
        let action = handle_key_event(key(KeyCode::Char('j')), &AppMode::Normal, true);
        assert_eq!(action, Action::DismissHelp);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Char('i'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release), &AppMode::Normal, false), Action::None);
        assert_eq!(handle_event(Event::Resize(80, 24), &AppMode::Normal, false), Action::Resize(80, 24));
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut state = AppState::new(SequenceKind::Dna, ConvertOptions::default());

        apply_action(&mut state, Action::EnterInsertMode);
        for c in ">s1".chars() {
            apply_action(&mut state, Action::InsertChar(c));
        }
        apply_action(&mut state, Action::InsertNewline);
        for c in "atgaaatag".chars() {
            apply_action(&mut state, Action::InsertChar(c));
        }
        assert!(apply_action(&mut state, Action::Submit));

        let conversion = state.conversion.as_ref().unwrap();
        assert_eq!(conversion.name, ">s1");
        assert_eq!(conversion.peptide, "MK.");
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut state = AppState::new(SequenceKind::Dna, ConvertOptions::default());
        assert!(!apply_action(&mut state, Action::Quit));
    }
}
