//! SeqConvert - DNA / RNA / peptide converter
//!
//! ## Usage
//!
//! ```bash
//! seqconvert                              # interactive form
//! seqconvert -t dna input.fa              # print DNA, RNA and peptide
//! echo AUGAAAUAG | seqconvert -t rna -    # read stdin
//! seqconvert -t dna --format fasta -o out.fa input.fa
//! ```
//!
//! Input is plain text, optionally with one leading `>` header line.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use seqconvert::alphabet::SequenceKind;
use seqconvert::clean::HeaderPolicy;
use seqconvert::controller::run_app;
use seqconvert::genetic_code::TrailingBases;
use seqconvert::input::read_input_file;
use seqconvert::model::AppState;
use seqconvert::pipeline::{convert, ConvertOptions, Conversion};

/// Default line width of FASTA output.
const FASTA_WIDTH: usize = 60;

/// Sequence type specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// DNA nucleotides (A, T, G, C)
    Dna,
    /// RNA nucleotides (A, U, G, C)
    Rna,
    /// Amino acids (conversion not supported)
    Peptide,
}

impl From<KindArg> for SequenceKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Dna => SequenceKind::Dna,
            KindArg::Rna => SequenceKind::Rna,
            KindArg::Peptide => SequenceKind::Peptide,
        }
    }
}

/// Output format specification for command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// "DNA: N bases" style report
    Report,
    /// One FASTA record per representation
    Fasta,
}

/// Trailing bases policy for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrailingArg {
    /// Drop bases after the last full codon (with a warning)
    Ignore,
    /// Fail if the length is not a multiple of 3
    Reject,
}

impl From<TrailingArg> for TrailingBases {
    fn from(arg: TrailingArg) -> Self {
        match arg {
            TrailingArg::Ignore => TrailingBases::Ignore,
            TrailingArg::Reject => TrailingBases::Reject,
        }
    }
}

/// SeqConvert - convert DNA, RNA and peptide sequences
///
/// When run without FILE, opens an interactive form.
/// With FILE, runs in CLI mode and writes the DNA, RNA and peptide
/// sequences to stdout (or to -o/--output).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw sequence file, optionally with one '>' header line. Use "-" for stdin.
    file: Option<PathBuf>,

    /// Declared input type
    #[arg(short = 't', long = "type", value_enum, default_value = "dna")]
    kind: KindArg,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "report")]
    format: FormatArg,

    /// Wrap sequence lines at this width (0 = no wrapping; FASTA defaults to 60)
    #[arg(short = 'w', long = "width")]
    width: Option<usize>,

    /// What to do with bases after the last full codon
    #[arg(long = "trailing", value_enum, default_value = "ignore")]
    trailing: TrailingArg,

    /// Only strip the first '>' line instead of rejecting extra headers
    #[arg(long = "allow-extra-headers")]
    allow_extra_headers: bool,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            header: if self.allow_extra_headers {
                HeaderPolicy::FirstOnly
            } else {
                HeaderPolicy::Reject
            },
            trailing: self.trailing.into(),
        }
    }

    fn width(&self) -> usize {
        match (self.width, self.format) {
            (Some(width), _) => width,
            (None, FormatArg::Fasta) => FASTA_WIDTH,
            (None, FormatArg::Report) => 0,
        }
    }
}

/// Wraps a residue string at `width` columns (0 disables wrapping).
fn wrap_residues(residues: &str, width: usize) -> String {
    if width == 0 {
        return residues.to_string();
    }
    let options = textwrap::Options::new(width)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .break_words(true);
    textwrap::fill(residues, options)
}

/// Formats a conversion for output.
fn format_conversion(conversion: &Conversion, format: FormatArg, width: usize) -> String {
    let sections = [
        (SequenceKind::Dna, "dna", &conversion.dna),
        (SequenceKind::Rna, "rna", &conversion.rna),
        (SequenceKind::Peptide, "peptide", &conversion.peptide),
    ];

    let mut out = String::new();
    for (kind, suffix, residues) in sections {
        match format {
            FormatArg::Report => {
                out.push_str(&format!("{}: {} {}\n", kind, residues.len(), kind.unit()));
            }
            FormatArg::Fasta => {
                let id = conversion.id().unwrap_or("sequence");
                out.push_str(&format!(">{}_{}\n", id, suffix));
            }
        }
        out.push_str(&wrap_residues(residues, width));
        out.push('\n');
    }
    out
}

/// Runs CLI mode: read input, convert, and write to output.
fn run_cli_mode(file_path: &Path, args: &Args) -> Result<()> {
    let raw = read_input_file(file_path)
        .with_context(|| format!("Cannot read {}", file_path.display()))?;

    let kind: SequenceKind = args.kind.into();
    let conversion = convert(kind, &raw, &args.options())?;
    let text = format_conversion(&conversion, args.format, args.width());

    match &args.output {
        Some(output) => {
            let mut file = File::create(output)
                .with_context(|| format!("Cannot create {}", output.display()))?;
            file.write_all(text.as_bytes())?;
            info!("Wrote conversion to {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

/// Log file for the interactive form, only when `RUST_LOG` asks for logs.
fn tui_log_path(rust_log: Option<&OsStr>) -> Option<PathBuf> {
    rust_log.filter(|filter| !filter.is_empty())?;
    Some(std::env::temp_dir().join(format!("seqconvert-{:08x}.log", rand::random::<u32>())))
}

/// Sends log output to a file so it does not garble the terminal UI.
///
/// Without `RUST_LOG` no logger is installed and no file is created.
fn init_tui_logging() -> Result<Option<PathBuf>> {
    let Some(path) = tui_log_path(std::env::var_os("RUST_LOG").as_deref()) else {
        return Ok(None);
    };
    let file = File::create(&path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(Some(path))
}

fn main() -> Result<()> {
    let args = Args::parse();

    match &args.file {
        Some(file_path) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
            run_cli_mode(file_path, &args)?;
        }
        None => {
            if let Some(log_path) = init_tui_logging()? {
                info!("Logging to {}", log_path.display());
            }
            run_app(AppState::new(args.kind.into(), args.options()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna_conversion(raw: &str) -> Conversion {
        convert(SequenceKind::Dna, raw, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_wrap_residues() {
        assert_eq!(wrap_residues("ATGAAATAG", 3), "ATG\nAAA\nTAG");
        assert_eq!(wrap_residues("ATGAAATAG", 0), "ATGAAATAG");
        assert_eq!(wrap_residues("ATG", 10), "ATG");
    }

    #[test]
    fn test_report_output() {
        let conversion = dna_conversion("ATGAAATAG");
        let text = format_conversion(&conversion, FormatArg::Report, 0);
        assert_eq!(
            text,
            "DNA: 9 bases\nATGAAATAG\nRNA: 9 bases\nAUGAAAUAG\nPeptide: 3 amino acids\nMK.\n"
        );
    }

    #[test]
    fn test_fasta_output() {
        let conversion = dna_conversion(">gene1 test\nATGAAATAG");
        let text = format_conversion(&conversion, FormatArg::Fasta, 6);
        assert_eq!(
            text,
            ">gene1_dna\nATGAAA\nTAG\n>gene1_rna\nAUGAAA\nUAG\n>gene1_peptide\nMK.\n"
        );
    }

    #[test]
    fn test_fasta_default_id() {
        let conversion = dna_conversion("ATG");
        let text = format_conversion(&conversion, FormatArg::Fasta, 60);
        assert!(text.starts_with(">sequence_dna\n"));
    }

    #[test]
    fn test_tui_log_file_only_with_rust_log() {
        assert_eq!(tui_log_path(None), None);
        assert_eq!(tui_log_path(Some(OsStr::new(""))), None);

        let path = tui_log_path(Some(OsStr::new("debug"))).unwrap();
        assert!(path.starts_with(std::env::temp_dir()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("seqconvert-") && name.ends_with(".log"));
        // Deciding on a path does not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_args_mapping() {
        let args = Args::parse_from(["seqconvert", "-t", "rna", "--trailing", "reject", "--allow-extra-headers", "in.fa"]);
        assert!(matches!(args.kind, KindArg::Rna));
        let options = args.options();
        assert_eq!(options.header, HeaderPolicy::FirstOnly);
        assert_eq!(options.trailing, TrailingBases::Reject);
        assert_eq!(args.width(), 0);

        let args = Args::parse_from(["seqconvert", "--format", "fasta"]);
        assert!(args.file.is_none());
        assert_eq!(args.width(), FASTA_WIDTH);
        assert_eq!(args.options(), ConvertOptions::default());
    }
}
