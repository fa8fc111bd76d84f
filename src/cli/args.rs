//! Command line argument parsing for the Klinker CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::text::pipeline::Variant;

/// Klinker - Dutch grapheme-to-phoneme frontend for speech synthesis
#[derive(Parser, Debug, Clone)]
#[command(name = "klinker")]
#[command(about = "Dutch grapheme-to-phoneme frontend for speech synthesis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KlinkerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KlinkerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Pipeline variant selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantArg {
    /// Base refinement output
    Base,
    /// Reserved alternative transcription (currently equal to base)
    Alternative,
    /// Base plus final-devoicing marks
    FinalDevoicing,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Base => Variant::Base,
            VariantArg::Alternative => Variant::Alternative,
            VariantArg::FinalDevoicing => Variant::FinalDevoicing,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Phonemize literal text (or stdin lines when no text is given)
    Phonemize(PhonemizeArgs),

    /// Convert a path|text filelist to path|phonemes
    #[command(name = "convert-filelist")]
    ConvertFilelist(ConvertFilelistArgs),

    /// Validate filelist text against the closed symbol vocabulary
    Validate(ValidateArgs),

    /// Print the symbol vocabulary with indices
    Symbols(SymbolsArgs),
}

/// Arguments for phonemizing text
#[derive(Parser, Debug, Clone)]
pub struct PhonemizeArgs {
    /// Text to phonemize; reads lines from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Pipeline variant
    #[arg(long, default_value = "base")]
    pub variant: VariantArg,

    /// eSpeak voice
    #[arg(long, default_value = "nl", env = "KLINKER_VOICE")]
    pub voice: String,

    /// Per-invocation engine timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,
}

/// Arguments for filelist conversion
#[derive(Parser, Debug, Clone)]
pub struct ConvertFilelistArgs {
    /// Input filelist (path|text)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output filelist (path|phonemes)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Pipeline variant
    #[arg(long, default_value = "base")]
    pub variant: VariantArg,

    /// eSpeak voice
    #[arg(long, default_value = "nl", env = "KLINKER_VOICE")]
    pub voice: String,

    /// Per-invocation engine timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Skip records whose conversion fails instead of aborting
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for filelist validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Filelist whose text column must be vocabulary-clean
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for the symbols dump
#[derive(Parser, Debug, Clone)]
pub struct SymbolsArgs {}
