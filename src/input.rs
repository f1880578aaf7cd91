//! Reading raw sequence text.
//!
//! Input is plain text, optionally FASTA-style with a single `>` header line.
//! It is read whole; the cleaner takes care of headers and line breaks.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] io::Error),

    #[error("Empty input")]
    EmptyInput,
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Reads all text from `reader`.
///
/// Input made only of whitespace is rejected.
pub fn read_input<R: Read>(mut reader: R) -> InputResult<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }

    Ok(content)
}

/// Reads a file, or standard input when `path` is `-`.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> InputResult<String> {
    let path = path.as_ref();
    if path == Path::new(STDIN_PATH) {
        return read_input(io::stdin().lock());
    }

    let file = File::open(path)?;
    read_input(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_from_reader() {
        let content = read_input(">seq1\nATG\n".as_bytes()).unwrap();
        assert_eq!(content, ">seq1\nATG\n");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read_input("".as_bytes()), Err(InputError::EmptyInput)));
        assert!(matches!(read_input(" \n\n".as_bytes()), Err(InputError::EmptyInput)));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">seq1\nATGAAA\nTAG\n").unwrap();

        let content = read_input_file(file.path()).unwrap();
        assert_eq!(content, ">seq1\nATGAAA\nTAG\n");
    }

    #[test]
    fn test_missing_file() {
        let result = read_input_file("definitely/not/here.fa");
        assert!(matches!(result, Err(InputError::IoError(_))));
    }
}
