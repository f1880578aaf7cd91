//! # SeqConvert - DNA / RNA / peptide converter
//!
//! Converts a nucleotide sequence into its DNA, RNA and peptide forms using
//! the standard genetic code.
//!
//! ## Architecture
//!
//! Conversion core:
//! - `alphabet`: sequence kinds and alphabet classification
//! - `model`: the immutable `Sequence` value and the form state
//! - `clean`: header stripping of raw text input
//! - `bases`: DNA <-> RNA base substitution
//! - `genetic_code`: codon tables and RNA to peptide translation
//! - `pipeline`: orchestration of the conversion paths
//! - `error`: error types
//!
//! Shells:
//! - `input`: reading raw text from files or stdin
//! - `event`: keyboard event handling (Vim-style modes)
//! - `ui`: TUI rendering with ratatui
//! - `controller`: main loop of the interactive form

pub mod alphabet;
pub mod bases;
pub mod clean;
pub mod controller;
pub mod error;
pub mod event;
pub mod genetic_code;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod ui;

pub use alphabet::{check, classify, SequenceKind};
pub use bases::{dna_to_rna, rna_to_dna};
pub use clean::{clean_sequence, clean_sequence_strict, HeaderPolicy};
pub use error::{ConvertError, ConvertResult};
pub use genetic_code::{translate_codon, translate_rna_to_peptide, translate_with_policy, TrailingBases};
pub use model::Sequence;
pub use pipeline::{convert, convert_sequence, ConvertOptions, Conversion};
