//! Alphabet definitions and classification.
//!
//! Three alphabets are recognised:
//! - DNA: `A`, `T`, `G`, `C`
//! - RNA: `A`, `U`, `G`, `C`
//! - Peptide: the 20 standard amino acids plus the stop symbol `.`
//!
//! Matching is case-insensitive. The empty string belongs to every alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, ConvertResult};

/// DNA nucleotides.
pub const DNA_NUCLEOTIDES: &[u8] = b"ATGC";

/// RNA nucleotides.
pub const RNA_NUCLEOTIDES: &[u8] = b"AUGC";

/// Stop symbol emitted by translation.
pub const STOP: char = '.';

/// Amino acid residues, stop symbol included.
pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY.";

/// The kind of sequence a piece of text is declared to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceKind {
    #[default]
    Dna,
    Rna,
    Peptide,
}

impl SequenceKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [SequenceKind; 3] = [SequenceKind::Dna, SequenceKind::Rna, SequenceKind::Peptide];

    /// Returns the symbols allowed for this kind (uppercase).
    pub fn symbols(self) -> &'static [u8] {
        match self {
            SequenceKind::Dna => DNA_NUCLEOTIDES,
            SequenceKind::Rna => RNA_NUCLEOTIDES,
            SequenceKind::Peptide => AMINO_ACIDS,
        }
    }

    /// Returns true if `c` belongs to this alphabet, ignoring case.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c.to_ascii_uppercase() as u8))
    }

    /// Unit used when reporting lengths ("bases" or "amino acids").
    pub fn unit(self) -> &'static str {
        match self {
            SequenceKind::Dna | SequenceKind::Rna => "bases",
            SequenceKind::Peptide => "amino acids",
        }
    }

    /// Next kind in [`SequenceKind::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            SequenceKind::Dna => SequenceKind::Rna,
            SequenceKind::Rna => SequenceKind::Peptide,
            SequenceKind::Peptide => SequenceKind::Dna,
        }
    }

    /// Previous kind in [`SequenceKind::ALL`], wrapping around.
    pub fn previous(self) -> Self {
        match self {
            SequenceKind::Dna => SequenceKind::Peptide,
            SequenceKind::Rna => SequenceKind::Dna,
            SequenceKind::Peptide => SequenceKind::Rna,
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Dna => write!(f, "DNA"),
            SequenceKind::Rna => write!(f, "RNA"),
            SequenceKind::Peptide => write!(f, "Peptide"),
        }
    }
}

impl FromStr for SequenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dna" => Ok(SequenceKind::Dna),
            "rna" => Ok(SequenceKind::Rna),
            "peptide" | "protein" | "aa" => Ok(SequenceKind::Peptide),
            other => Err(format!("Unknown sequence type: {}", other)),
        }
    }
}

/// Checks that every character of `text` belongs to the alphabet of `kind`.
///
/// On failure, reports the first offending symbol and its character position.
pub fn check(kind: SequenceKind, text: &str) -> ConvertResult<()> {
    match text.chars().enumerate().find(|&(_, c)| !kind.contains(c)) {
        Some((position, symbol)) => Err(ConvertError::InvalidAlphabet {
            kind,
            symbol,
            position,
        }),
        None => Ok(()),
    }
}

/// Returns true if `text` is made only of symbols from the alphabet of `kind`.
pub fn classify(kind: SequenceKind, text: &str) -> bool {
    check(kind, text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_dna() {
        assert!(classify(SequenceKind::Dna, "ATGC"));
        assert!(classify(SequenceKind::Dna, "atgc"));
        assert!(classify(SequenceKind::Dna, "AtGc"));
        assert!(!classify(SequenceKind::Dna, "AUGC"));
        assert!(!classify(SequenceKind::Dna, "ATG C"));
        assert!(!classify(SequenceKind::Dna, "ATGN"));
    }

    #[test]
    fn test_classify_rna() {
        assert!(classify(SequenceKind::Rna, "AUGC"));
        assert!(classify(SequenceKind::Rna, "augc"));
        assert!(!classify(SequenceKind::Rna, "ATGC"));
    }

    #[test]
    fn test_classify_peptide() {
        assert!(classify(SequenceKind::Peptide, "MK."));
        assert!(classify(SequenceKind::Peptide, "acdefghiklmnpqrstvwy"));
        assert!(!classify(SequenceKind::Peptide, "MKB"));
        assert!(!classify(SequenceKind::Peptide, "MK*"));
    }

    #[test]
    fn test_empty_string_is_accepted() {
        // Quirk kept on purpose: nothing to reject means the gate passes.
        for kind in SequenceKind::ALL {
            assert!(classify(kind, ""));
        }
    }

    #[test]
    fn test_check_reports_first_offender() {
        let err = check(SequenceKind::Dna, "ACGUU").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidAlphabet {
                kind: SequenceKind::Dna,
                symbol: 'U',
                position: 3,
            }
        );
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!classify(SequenceKind::Dna, "ACGÅ"));
        let err = check(SequenceKind::Rna, "éA").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidAlphabet { symbol: 'é', position: 0, .. }));
    }

    #[test]
    fn test_kind_parsing_and_display() {
        assert_eq!("DNA".parse::<SequenceKind>(), Ok(SequenceKind::Dna));
        assert_eq!(" rna ".parse::<SequenceKind>(), Ok(SequenceKind::Rna));
        assert_eq!("Peptide".parse::<SequenceKind>(), Ok(SequenceKind::Peptide));
        assert!("xna".parse::<SequenceKind>().is_err());
        assert_eq!(SequenceKind::Peptide.to_string(), "Peptide");
    }

    #[test]
    fn test_kind_cycling() {
        let mut kind = SequenceKind::Dna;
        for _ in 0..3 {
            kind = kind.next();
        }
        assert_eq!(kind, SequenceKind::Dna);
        assert_eq!(SequenceKind::Dna.previous(), SequenceKind::Peptide);
    }

    proptest! {
        #[test]
        fn prop_dna_strings_classify(s in "[ATGCatgc]{0,64}") {
            prop_assert!(classify(SequenceKind::Dna, &s));
        }

        #[test]
        fn prop_foreign_symbol_rejected(
            prefix in "[ATGC]{0,16}",
            bad in "[^ATGCatgc]",
            suffix in "[ATGC]{0,16}"
        ) {
            let s = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!classify(SequenceKind::Dna, &s));
        }
    }
}
