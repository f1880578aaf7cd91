//! Error types for sequence conversion.
//!
//! Every check performed by the core (alphabet gate, header scan, codon
//! decoding, direction) reports its failure through [`ConvertError`].

use thiserror::Error;

use crate::alphabet::SequenceKind;

/// Errors that can occur while cleaning, validating or converting a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid {kind} input: unexpected symbol '{symbol}' at position {position}")]
    InvalidAlphabet {
        kind: SequenceKind,
        symbol: char,
        position: usize,
    },

    #[error("Malformed header: more than one '>' line (second header at line {line})")]
    MalformedHeader { line: usize },

    #[error("Truncated codon: length {length} is not a multiple of 3 ({leftover} trailing bases)")]
    TruncatedCodon { length: usize, leftover: usize },

    #[error("Unknown codon '{codon}' at position {position}")]
    UnknownCodon { codon: String, position: usize },

    #[error("Conversion from {from} is not supported (reverse translation is not implemented)")]
    UnsupportedDirection { from: SequenceKind },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_check() {
        let err = ConvertError::InvalidAlphabet {
            kind: SequenceKind::Dna,
            symbol: 'X',
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid DNA input: unexpected symbol 'X' at position 4"
        );

        let err = ConvertError::UnsupportedDirection {
            from: SequenceKind::Peptide,
        };
        assert!(err.to_string().contains("Peptide"));

        let err = ConvertError::TruncatedCodon { length: 7, leftover: 1 };
        assert!(err.to_string().starts_with("Truncated codon"));
    }
}
