//! Data model for the converter.
//!
//! This module contains:
//! - The immutable [`Sequence`] value produced by the cleaner
//! - The state of the interactive conversion form

use crate::alphabet::SequenceKind;
use crate::error::ConvertError;
use crate::pipeline::{convert, ConvertOptions, Conversion};

/// A named sequence of residues.
///
/// Residues are uppercased on construction and the value is never mutated
/// afterwards. The length is always derived from the residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    residues: String,
}

impl Sequence {
    /// Creates a new sequence, uppercasing the residues.
    pub fn new(name: impl Into<String>, residues: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            residues: residues.as_ref().to_ascii_uppercase(),
        }
    }

    /// The header line this sequence came from (empty if there was none).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The uppercased residue string.
    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Number of residues (characters).
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    /// Returns true if the sequence has no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Fraction of `G` and `C` residues, 0.0 for an empty sequence.
    pub fn gc_content(&self) -> f64 {
        gc_content(&self.residues)
    }
}

/// Fraction of `G`/`C` symbols in `residues` (case-insensitive).
pub fn gc_content(residues: &str) -> f64 {
    let total = residues.chars().count();
    if total == 0 {
        return 0.0;
    }
    let gc = residues
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count();
    gc as f64 / total as f64
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Navigation mode: pick the input type, submit, clear
    #[default]
    Normal,
    /// Typing into the sequence text area (after pressing 'i')
    Insert,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// The complete state of the conversion form.
#[derive(Debug)]
pub struct AppState {
    /// Declared type of the input text
    pub kind: SequenceKind,
    /// Raw text typed by the user
    pub input: String,
    /// Result of the last successful submission
    pub conversion: Option<Conversion>,
    /// Conversion settings
    pub options: ConvertOptions,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates an empty form.
    pub fn new(kind: SequenceKind, options: ConvertOptions) -> Self {
        Self {
            kind,
            input: String::new(),
            conversion: None,
            options,
            mode: AppMode::Normal,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Creates a form pre-filled with `input`.
    pub fn with_input(kind: SequenceKind, options: ConvertOptions, input: impl Into<String>) -> Self {
        let mut state = Self::new(kind, options);
        state.input = input.into();
        state
    }

    /// Selects the next input type.
    pub fn select_next_kind(&mut self) {
        self.set_kind(self.kind.next());
    }

    /// Selects the previous input type.
    pub fn select_previous_kind(&mut self) {
        self.set_kind(self.kind.previous());
    }

    /// Sets the input type. Previous results no longer apply and are cleared.
    pub fn set_kind(&mut self, kind: SequenceKind) {
        if self.kind != kind {
            self.kind = kind;
            self.conversion = None;
        }
        self.status_message = Some(format!("Input type: {}", kind));
    }

    /// Enters insert mode.
    pub fn enter_insert_mode(&mut self) {
        self.mode = AppMode::Insert;
    }

    /// Leaves insert mode.
    pub fn leave_insert_mode(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Appends a character to the input text.
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character of the input text.
    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    /// Clears the input text and the results.
    pub fn clear(&mut self) {
        self.input.clear();
        self.conversion = None;
        self.status_message = None;
    }

    /// Runs the conversion on the current input.
    pub fn submit(&mut self) {
        match convert(self.kind, &self.input, &self.options) {
            Ok(conversion) => {
                self.status_message = conversion
                    .gc_content()
                    .map(|gc| format!("GC content: {:.2}%", gc * 100.0));
                self.conversion = Some(conversion);
            }
            Err(e @ ConvertError::InvalidAlphabet { .. }) => {
                self.conversion = None;
                self.status_message = Some(format!(
                    "{} Check that your sequence matches the input type and try again.",
                    e
                ));
            }
            Err(e) => {
                self.conversion = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(cmd) = std::mem::take(&mut self.mode) {
            match cmd.trim() {
                "q" | "quit" => self.should_quit = true,
                "s" | "submit" => self.submit(),
                "clear" => self.clear(),
                "h" | "help" => self.show_help = true,
                other => match other.parse::<SequenceKind>() {
                    Ok(kind) => self.set_kind(kind),
                    Err(_) => self.status_message = Some(format!("Unknown command: {}", other)),
                },
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }
}
