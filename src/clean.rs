//! Cleaning of raw, optionally FASTA-style, text input.
//!
//! Input may start with a header line:
//!
//! ```text
//! >seq1 optional description
//! ATGAAA
//! TAG
//! ```
//!
//! The first line containing `>` becomes the sequence name and is removed;
//! the remaining lines are joined without separators.

use crate::error::{ConvertError, ConvertResult};
use crate::model::Sequence;

/// Header marker.
const HEADER_MARKER: char = '>';

/// How the cleaner treats header lines after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Strip the first header only; later headers stay in the body.
    FirstOnly,
    /// Fail with [`ConvertError::MalformedHeader`] on a second header.
    #[default]
    Reject,
}

fn is_header(line: &str) -> bool {
    line.contains(HEADER_MARKER)
}

/// Splits `raw` into (name, body lines), stripping the first header only.
fn split_header(raw: &str) -> (String, Vec<&str>) {
    let mut lines: Vec<&str> = raw.lines().collect();
    let name = match lines.iter().position(|line| is_header(line)) {
        Some(index) => lines.remove(index).to_string(),
        None => String::new(),
    };
    (name, lines)
}

/// Builds a [`Sequence`] from raw text, stripping the first header line.
///
/// Only the first header is removed. A second `>` line is left in the body,
/// where it will make the alphabet check fail.
pub fn clean_sequence(raw: &str) -> Sequence {
    let (name, lines) = split_header(raw);
    Sequence::new(name, lines.concat())
}

/// Same as [`clean_sequence`], but rejects input with more than one header.
pub fn clean_sequence_strict(raw: &str) -> ConvertResult<Sequence> {
    if let Some((index, _)) = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| is_header(line))
        .nth(1)
    {
        return Err(ConvertError::MalformedHeader { line: index + 1 });
    }
    Ok(clean_sequence(raw))
}

/// Cleans `raw` according to `policy`.
pub fn clean_with_policy(raw: &str, policy: HeaderPolicy) -> ConvertResult<Sequence> {
    match policy {
        HeaderPolicy::FirstOnly => Ok(clean_sequence(raw)),
        HeaderPolicy::Reject => clean_sequence_strict(raw),
    }
}
