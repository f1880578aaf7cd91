//! Standard genetic code and RNA to peptide translation.
//!
//! Translation is table driven. A 4x4 table indexed by the first and second
//! base of a codon gives either a single amino acid or an ordered list of
//! candidates. Candidates are resolved with a reverse table (amino acid to
//! codons): the first candidate whose codon set holds the exact codon wins.
//!
//! ```text
//!            second
//!  first    A        C   G          U
//!    A    (N, K)     T  (S, R)     (I, M)
//!    C    (H, Q)     P   R          L
//!    G    (D, E)     A   G          V
//!    U    (Y, .)     S  (C, W, .)  (F, L)
//! ```

use std::collections::HashSet;

use crate::alphabet::STOP;
use crate::error::{ConvertError, ConvertResult};

/// Bases in table order.
const BASES: [char; 4] = ['A', 'C', 'G', 'U'];

/// A cell of the primary codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonCell {
    /// The first two bases determine the amino acid.
    Single(char),
    /// The third base decides between these candidates, in order.
    Ambiguous(&'static [char]),
}

use self::CodonCell::{Ambiguous, Single};

/// Primary table: `CODON_TABLE[first][second]`, bases ordered `A, C, G, U`.
pub static CODON_TABLE: [[CodonCell; 4]; 4] = [
    // A
    [Ambiguous(&['N', 'K']), Single('T'), Ambiguous(&['S', 'R']), Ambiguous(&['I', 'M'])],
    // C
    [Ambiguous(&['H', 'Q']), Single('P'), Single('R'), Single('L')],
    // G
    [Ambiguous(&['D', 'E']), Single('A'), Single('G'), Single('V')],
    // U
    [Ambiguous(&['Y', STOP]), Single('S'), Ambiguous(&['C', 'W', STOP]), Ambiguous(&['F', 'L'])],
];

/// Reverse table: amino acid (or stop) to the codons encoding it.
pub static AMINO_ACID_CODONS: [(char, &[&str]); 21] = [
    ('A', &["GCU", "GCC", "GCA", "GCG"]),
    ('C', &["UGU", "UGC"]),
    ('D', &["GAU", "GAC"]),
    ('E', &["GAA", "GAG"]),
    ('F', &["UUU", "UUC"]),
    ('G', &["GGU", "GGC", "GGA", "GGG"]),
    ('H', &["CAU", "CAC"]),
    ('I', &["AUU", "AUC", "AUA"]),
    ('K', &["AAA", "AAG"]),
    ('L', &["CUU", "CUC", "CUA", "CUG", "UUA", "UUG"]),
    ('M', &["AUG"]),
    ('N', &["AAU", "AAC"]),
    ('P', &["CCU", "CCC", "CCA", "CCG"]),
    ('Q', &["CAA", "CAG"]),
    ('R', &["AGA", "AGG", "CGU", "CGC", "CGA", "CGG"]),
    ('S', &["AGU", "AGC", "UCU", "UCC", "UCA", "UCG"]),
    ('T', &["ACU", "ACC", "ACA", "ACG"]),
    ('V', &["GUU", "GUC", "GUA", "GUG"]),
    ('W', &["UGG"]),
    ('Y', &["UAU", "UAC"]),
    (STOP, &["UAG", "UAA", "UGA"]),
];

/// What to do with the 1 or 2 bases left after the last full codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBases {
    /// Drop them silently.
    #[default]
    Ignore,
    /// Fail with [`ConvertError::TruncatedCodon`].
    Reject,
}

/// Returns the codons encoding `symbol`, or `None` for an unknown symbol.
pub fn codons_for(symbol: char) -> Option<&'static [&'static str]> {
    let symbol = symbol.to_ascii_uppercase();
    AMINO_ACID_CODONS
        .iter()
        .find(|(aa, _)| *aa == symbol)
        .map(|(_, codons)| *codons)
}

/// Table index of an RNA base (case-insensitive).
fn base_index(base: char) -> Option<usize> {
    let base = base.to_ascii_uppercase();
    BASES.iter().position(|&b| b == base)
}

fn unknown_codon(codon: &[char], position: usize) -> ConvertError {
    ConvertError::UnknownCodon {
        codon: codon.iter().collect(),
        position,
    }
}

/// Translates a codon found at char `position` in the source sequence.
fn translate_codon_at(codon: &[char], position: usize) -> ConvertResult<char> {
    let indices: Vec<usize> = match codon.iter().map(|&b| base_index(b)).collect::<Option<Vec<usize>>>() {
        Some(indices) if indices.len() == 3 => indices,
        _ => return Err(unknown_codon(codon, position)),
    };

    match CODON_TABLE[indices[0]][indices[1]] {
        Single(aa) => Ok(aa),
        Ambiguous(candidates) => {
            let upper: String = codon.iter().map(|c| c.to_ascii_uppercase()).collect();
            candidates
                .iter()
                .copied()
                .find(|&aa| codons_for(aa).is_some_and(|codons| codons.iter().any(|c| *c == upper)))
                .ok_or_else(|| unknown_codon(codon, position))
        }
    }
}

/// Translates a single RNA codon into an amino acid (or [`STOP`]).
///
/// # Examples
///
/// ```
/// use seqconvert::genetic_code::translate_codon;
///
/// assert_eq!(translate_codon("AGU").unwrap(), 'S');
/// assert_eq!(translate_codon("AGA").unwrap(), 'R');
/// assert!(translate_codon("AGT").is_err());
/// ```
pub fn translate_codon(codon: &str) -> ConvertResult<char> {
    let codon: Vec<char> = codon.chars().collect();
    translate_codon_at(&codon, 0)
}

/// Translates RNA into a peptide, dropping any trailing partial codon.
///
/// The peptide is one residue per three characters of `rna`.
pub fn translate_rna_to_peptide(rna: &str) -> ConvertResult<String> {
    translate_with_policy(rna, TrailingBases::Ignore)
}

/// Translates RNA into a peptide with an explicit policy for trailing bases.
///
/// Lengths and positions are counted in characters.
pub fn translate_with_policy(rna: &str, trailing: TrailingBases) -> ConvertResult<String> {
    let bases: Vec<char> = rna.chars().collect();
    let leftover = bases.len() % 3;

    if leftover != 0 && trailing == TrailingBases::Reject {
        return Err(ConvertError::TruncatedCodon {
            length: bases.len(),
            leftover,
        });
    }

    bases
        .chunks_exact(3)
        .enumerate()
        .map(|(i, codon)| translate_codon_at(codon, i * 3))
        .collect()
}

/// Checks that the primary and reverse tables agree.
///
/// Every codon of the reverse table must be listed once, all 64 codons must
/// be covered, and each must translate back to the symbol it is filed under.
pub fn verify_tables() -> Result<(), String> {
    let mut seen = HashSet::new();

    for (aa, codons) in AMINO_ACID_CODONS.iter() {
        for codon in codons.iter() {
            if !seen.insert(*codon) {
                return Err(format!("codon {} is listed more than once", codon));
            }
            match translate_codon(codon) {
                Ok(resolved) if resolved == *aa => {}
                Ok(resolved) => {
                    return Err(format!(
                        "codon {} is filed under '{}' but resolves to '{}'",
                        codon, aa, resolved
                    ))
                }
                Err(e) => return Err(format!("codon {} does not resolve: {}", codon, e)),
            }
        }
    }

    if seen.len() != 64 {
        return Err(format!("reverse table covers {} codons, expected 64", seen.len()));
    }

    Ok(())
}
