//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KlinkerArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a single phonemization.
#[derive(Debug, Serialize, Deserialize)]
pub struct PhonemizeResult {
    pub text: String,
    pub phonemes: String,
}

/// Result structure for filelist conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    pub records: usize,
    pub converted: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// A record that failed vocabulary validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvalidRecord {
    pub line: usize,
    pub path: String,
    pub unknown_symbols: Vec<char>,
}

/// Result structure for filelist validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub records: usize,
    pub invalid: Vec<InvalidRecord>,
}

/// One symbol table entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub index: usize,
    pub symbol: char,
}

/// Serialize a result as JSON, honoring `--pretty`.
pub fn to_json<T: Serialize>(value: &T, cli_args: &KlinkerArgs) -> Result<String> {
    Ok(if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Print a result either as JSON or through the given human formatter.
pub fn print_result<T, F>(value: &T, cli_args: &KlinkerArgs, human: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match cli_args.output_format {
        OutputFormat::Json => println!("{}", to_json(value, cli_args)?),
        OutputFormat::Human => human(value),
    }
    Ok(())
}
