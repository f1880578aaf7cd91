//! Conversion pipeline.
//!
//! Raw text goes through the cleaner, the alphabet gate, and then one of the
//! conversion paths:
//! - DNA: RNA is transcribed from the input, the peptide translated from RNA
//! - RNA: DNA is back-converted from the input, the peptide translated from it
//! - Peptide: unsupported, reverse translation is not implemented

use std::fmt;

use log::{debug, warn};

use crate::alphabet::{check, SequenceKind};
use crate::bases::{dna_to_rna, rna_to_dna};
use crate::clean::{clean_with_policy, HeaderPolicy};
use crate::error::{ConvertError, ConvertResult};
use crate::genetic_code::{translate_with_policy, TrailingBases};
use crate::model::{gc_content, Sequence};

/// Settings for a conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Treatment of extra header lines
    pub header: HeaderPolicy,
    /// Treatment of bases after the last full codon
    pub trailing: TrailingBases,
}

/// The three representations derived from one input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Header line of the input (empty if none)
    pub name: String,
    /// Declared type of the input
    pub input_kind: SequenceKind,
    pub dna: String,
    pub rna: String,
    pub peptide: String,
}

impl Conversion {
    pub fn dna_len(&self) -> usize {
        self.dna.len()
    }

    pub fn rna_len(&self) -> usize {
        self.rna.len()
    }

    pub fn peptide_len(&self) -> usize {
        self.peptide.len()
    }

    /// GC content of the nucleotide sequence, `None` when it is empty.
    pub fn gc_content(&self) -> Option<f64> {
        if self.dna.is_empty() {
            None
        } else {
            Some(gc_content(&self.dna))
        }
    }

    /// Name without the leading `>` and description, for record identifiers.
    pub fn id(&self) -> Option<&str> {
        self.name
            .trim_start_matches('>')
            .split_whitespace()
            .next()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DNA: {} {}", self.dna_len(), SequenceKind::Dna.unit())?;
        writeln!(f, "{}", self.dna)?;
        writeln!(f, "RNA: {} {}", self.rna_len(), SequenceKind::Rna.unit())?;
        writeln!(f, "{}", self.rna)?;
        writeln!(f, "Peptide: {} {}", self.peptide_len(), SequenceKind::Peptide.unit())?;
        write!(f, "{}", self.peptide)
    }
}

/// Cleans, validates and converts raw text declared as `kind`.
///
/// # Examples
///
/// ```
/// use seqconvert::alphabet::SequenceKind;
/// use seqconvert::pipeline::{convert, ConvertOptions};
///
/// let conversion = convert(SequenceKind::Dna, "ATGAAATAG", &ConvertOptions::default()).unwrap();
/// assert_eq!(conversion.rna, "AUGAAAUAG");
/// assert_eq!(conversion.peptide, "MK.");
/// ```
pub fn convert(kind: SequenceKind, raw: &str, options: &ConvertOptions) -> ConvertResult<Conversion> {
    let sequence = clean_with_policy(raw, options.header)?;
    convert_sequence(kind, &sequence, options)
}

/// Validates and converts an already cleaned sequence.
pub fn convert_sequence(
    kind: SequenceKind,
    sequence: &Sequence,
    options: &ConvertOptions,
) -> ConvertResult<Conversion> {
    let residues = sequence.residues();
    check(kind, residues)?;

    let (dna, rna) = match kind {
        SequenceKind::Dna => (residues.to_string(), dna_to_rna(residues)),
        SequenceKind::Rna => (rna_to_dna(residues), residues.to_string()),
        SequenceKind::Peptide => return Err(ConvertError::UnsupportedDirection { from: kind }),
    };

    let leftover = rna.len() % 3;
    if leftover != 0 && options.trailing == TrailingBases::Ignore {
        warn!(
            "{} bases is not a multiple of 3, ignoring {} trailing base(s)",
            rna.len(),
            leftover
        );
    }
    let peptide = translate_with_policy(&rna, options.trailing)?;

    debug!(
        "Converted {} input '{}': {} bases, {} amino acids",
        kind,
        sequence.name(),
        rna.len(),
        peptide.len()
    );

    Ok(Conversion {
        name: sequence.name().to_string(),
        input_kind: kind,
        dna,
        rna,
        peptide,
    })
}
