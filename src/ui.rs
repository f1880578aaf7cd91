//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Sidebar with the input type selection
//! - Sequence text area
//! - DNA, RNA and peptide output panels titled with their lengths
//! - Status bar with mode, messages and command line
//! - Help overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::alphabet::SequenceKind;
use crate::model::{AppMode, AppState};

/// Width of the input type sidebar (including borders).
const SIDEBAR_WIDTH: u16 = 18;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Per-residue coloring.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// Nucleotide color scheme (DNA and RNA).
pub struct NucleotideColorScheme;

impl ColorScheme for NucleotideColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' | 'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Amino acid color scheme, grouped by physicochemical properties.
pub struct AminoAcidColorScheme;

impl ColorScheme for AminoAcidColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            // Hydrophobic
            'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Color::Yellow,
            // Polar
            'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' => Color::Green,
            // Charged positive
            'K' | 'R' | 'H' => Color::Blue,
            // Charged negative
            'D' | 'E' => Color::Red,
            // Stop
            '.' => Color::DarkGray,
            _ => Color::Gray,
        }
    }
}

const HELP_TEXT: &[&str] = &[
    "Normal mode",
    "  i            type into the sequence area",
    "  Tab / j / k  change input type",
    "  Enter        convert",
    "  x            clear",
    "  :            command line",
    "",
    "Insert mode",
    "  Esc          back to normal mode",
    "  Ctrl+S       convert",
    "",
    "Commands",
    "  :dna :rna :peptide  select input type",
    "  :s :clear :q :h",
    "",
    "A leading '>' line is read as the sequence name.",
    "Press any key to close.",
];

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: content area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    // Split content area: sidebar (left) + form (right)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(main_layout[0]);

    let form_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ])
        .split(content_layout[1]);

    render_sidebar(frame, state, content_layout[0]);
    render_input(frame, state, form_layout[0]);
    render_outputs(frame, state, &form_layout[1..]);
    render_status_bar(frame, state, main_layout[1]);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Renders the input type selection.
fn render_sidebar(frame: &mut Frame, state: &AppState, area: Rect) {
    let lines: Vec<Line> = SequenceKind::ALL
        .iter()
        .map(|&kind| {
            if kind == state.kind {
                Line::from(Span::styled(
                    format!("(*) {}", kind),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(format!("( ) {}", kind), Style::default().fg(Color::White)))
            }
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Input type");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the sequence text area.
fn render_input(frame: &mut Frame, state: &AppState, area: Rect) {
    let editing = state.mode == AppMode::Insert;
    let mut text = state.input.clone();
    if editing {
        text.push('▏');
    }

    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = format!("{} sequence (only the first '>' header is used)", state.kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Colors each residue of `residues`.
fn colored_line<'a>(residues: &'a str, scheme: &dyn ColorScheme) -> Line<'a> {
    let spans: Vec<Span> = residues
        .char_indices()
        .map(|(i, c)| {
            Span::styled(
                &residues[i..i + c.len_utf8()],
                Style::default().fg(Color::Black).bg(scheme.get_color(c)),
            )
        })
        .collect();
    Line::from(spans)
}

/// Renders the DNA, RNA and peptide panels.
fn render_outputs(frame: &mut Frame, state: &AppState, areas: &[Rect]) {
    let conversion = state.conversion.as_ref();
    let panels = [
        (SequenceKind::Dna, conversion.map(|c| c.dna.as_str())),
        (SequenceKind::Rna, conversion.map(|c| c.rna.as_str())),
        (SequenceKind::Peptide, conversion.map(|c| c.peptide.as_str())),
    ];

    for (&area, (kind, residues)) in areas.iter().zip(panels) {
        let title = match residues {
            Some(residues) => format!("{}: {} {}", kind, residues.len(), kind.unit()),
            None => kind.to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        let line = match (kind, residues) {
            (SequenceKind::Peptide, Some(residues)) => colored_line(residues, &AminoAcidColorScheme),
            (_, Some(residues)) => colored_line(residues, &NucleotideColorScheme),
            (_, None) => Line::from(""),
        };

        let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Insert => ("INSERT", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let input_info = format!("{} chars | :h help ", state.input.chars().count());

    // Show status message when not typing a command
    let message = state.status_message.as_deref().unwrap_or("");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + input_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            input_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Renders the help overlay centered in `area`.
fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, HELP_TEXT.len() as u16 + 2, area);
    let lines: Vec<Line> = HELP_TEXT.iter().map(|&l| Line::from(l)).collect();
    let block = Block::default().borders(Borders::ALL).title("Help");

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A rectangle of at most `width` x `height` centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ConvertOptions;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_nucleotide_colors() {
        let scheme = NucleotideColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('T'), Color::Blue);
        assert_eq!(scheme.get_color('U'), Color::Blue);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_amino_acid_colors() {
        let scheme = AminoAcidColorScheme;
        assert_eq!(scheme.get_color('K'), Color::Blue);
        assert_eq!(scheme.get_color('d'), Color::Red);
        assert_eq!(scheme.get_color('.'), Color::DarkGray);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 20, area);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));

        // Clamped to the available area
        let rect = centered_rect(200, 80, area);
        assert_eq!(rect, area);
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_conversion() {
        let mut state = AppState::with_input(SequenceKind::Dna, ConvertOptions::default(), "ATGAAATAG");
        state.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("DNA: 9 bases"));
        assert!(text.contains("RNA: 9 bases"));
        assert!(text.contains("Peptide: 3 amino acids"));
        assert!(text.contains("(*) DNA"));
    }

    #[test]
    fn test_render_help() {
        let mut state = AppState::new(SequenceKind::Rna, ConvertOptions::default());
        state.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        assert!(buffer_text(&terminal).contains("Press any key to close."));
    }
}
