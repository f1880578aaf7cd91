//! Application controller.
//!
//! This module orchestrates the interactive form:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - State updates and rendering

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, poll_event};
use crate::model::AppState;
use crate::ui::render;

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    state: AppState,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Creates a new application with the given state.
    pub fn new(state: AppState) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive form ({} input)", self.state.kind);

        loop {
            self.terminal.draw(|frame| {
                render(frame, &self.state);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, &self.state.mode, self.state.show_help);
                if !apply_action(&mut self.state, action) {
                    break;
                }
            }
        }

        info!("Leaving interactive form");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the interactive form until the user quits.
pub fn run_app(state: AppState) -> Result<()> {
    let mut app = App::new(state)?;
    app.run()
}
