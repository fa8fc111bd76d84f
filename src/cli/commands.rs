//! Command implementations for the Klinker CLI.

use std::io::{self, BufRead};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{KlinkerError, Result};
use crate::filelist::{FilelistEntry, read_filelist, write_filelist};
use crate::phonemizer::espeak::EspeakPhonemizer;
use crate::symbols::DEFAULT_SYMBOL_TABLE;
use crate::text::pipeline::{G2pPipeline, Variant};

/// Execute a CLI command.
pub fn execute_command(args: KlinkerArgs) -> Result<()> {
    match &args.command {
        Command::Phonemize(cmd_args) => phonemize(cmd_args.clone(), &args),
        Command::ConvertFilelist(cmd_args) => convert_filelist(cmd_args.clone(), &args),
        Command::Validate(cmd_args) => validate(cmd_args.clone(), &args),
        Command::Symbols(_) => symbols(&args),
    }
}

fn build_pipeline(voice: &str, timeout_secs: u64) -> Result<G2pPipeline> {
    let engine = EspeakPhonemizer::new()
        .with_voice(voice)
        .with_timeout(Duration::from_secs(timeout_secs));
    G2pPipeline::with_engine(engine)
}

/// Prefix a `path:line` record context onto the message-carrying error
/// variants without changing which variant the caller sees.
fn with_record_context(err: KlinkerError, input: &std::path::Path, line: usize) -> KlinkerError {
    let context = format!("{}:{}", input.display(), line);
    match err {
        KlinkerError::EngineInvocation(m) => {
            KlinkerError::EngineInvocation(format!("{context}: {m}"))
        }
        KlinkerError::EngineUnavailable(m) => {
            KlinkerError::EngineUnavailable(format!("{context}: {m}"))
        }
        KlinkerError::Analysis(m) => KlinkerError::Analysis(format!("{context}: {m}")),
        KlinkerError::Filelist(m) => KlinkerError::Filelist(format!("{context}: {m}")),
        other => other,
    }
}

/// Convert one sentence, retrying a failed engine invocation once.
///
/// A missing engine is an environment defect and is never retried.
fn convert_with_retry(pipeline: &G2pPipeline, text: &str, variant: Variant) -> Result<String> {
    match pipeline.convert_variant(text, variant) {
        Err(KlinkerError::EngineInvocation(_)) => pipeline.convert_variant(text, variant),
        other => other,
    }
}

/// Phonemize literal text or stdin lines.
fn phonemize(args: PhonemizeArgs, cli_args: &KlinkerArgs) -> Result<()> {
    let pipeline = build_pipeline(&args.voice, args.timeout_secs)?;
    let variant = Variant::from(args.variant);

    let emit = |text: &str| -> Result<()> {
        let phonemes = convert_with_retry(&pipeline, text, variant)?;
        let result = PhonemizeResult {
            text: text.to_string(),
            phonemes,
        };
        print_result(&result, cli_args, |r| {
            if cli_args.verbosity() > 1 {
                println!("{} -> {}", r.text, r.phonemes);
            } else {
                println!("{}", r.phonemes);
            }
        })
    };

    match &args.text {
        Some(text) => emit(text)?,
        None => {
            for line in io::stdin().lock().lines() {
                emit(&line?)?;
            }
        }
    }
    Ok(())
}

/// Convert a path|text filelist to path|phonemes.
fn convert_filelist(args: ConvertFilelistArgs, cli_args: &KlinkerArgs) -> Result<()> {
    let pipeline = build_pipeline(&args.voice, args.timeout_secs)?;
    let variant = Variant::from(args.variant);

    let entries = read_filelist(&args.input)?;
    if cli_args.verbosity() > 0 {
        println!(
            "Converting {} records from {}",
            entries.len(),
            args.input.display()
        );
    }

    let start = Instant::now();

    // One engine process per sentence; sentences are independent, so
    // record order only matters when writing the output back.
    let results: Vec<(usize, Result<String>)> = entries
        .par_iter()
        .enumerate()
        .map(|(i, entry)| (i, convert_with_retry(&pipeline, &entry.text, variant)))
        .collect();

    let mut converted = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for (i, result) in results {
        match result {
            Ok(phonemes) => converted.push(FilelistEntry::new(entries[i].path.clone(), phonemes)),
            Err(e @ KlinkerError::EngineUnavailable(_)) => return Err(e),
            Err(e) => {
                if !args.keep_going {
                    return Err(with_record_context(e, &args.input, i + 1));
                }
                eprintln!("skipping {} (line {}): {e}", entries[i].path, i + 1);
                skipped += 1;
            }
        }
    }

    write_filelist(&args.output, &converted)?;

    let result = ConversionResult {
        records: entries.len(),
        converted: converted.len(),
        skipped,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    print_result(&result, cli_args, |r| {
        println!(
            "Converted {}/{} records in {} ms ({} skipped)",
            r.converted, r.records, r.duration_ms, r.skipped
        );
    })
}

/// Check every record's text against the closed symbol vocabulary.
fn validate(args: ValidateArgs, cli_args: &KlinkerArgs) -> Result<()> {
    let entries = read_filelist(&args.input)?;

    let mut invalid = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let mut unknown: Vec<char> = entry
            .text
            .chars()
            .filter(|&ch| !DEFAULT_SYMBOL_TABLE.contains(ch))
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        if !unknown.is_empty() {
            invalid.push(InvalidRecord {
                line: i + 1,
                path: entry.path.clone(),
                unknown_symbols: unknown,
            });
        }
    }

    let result = ValidationResult {
        records: entries.len(),
        invalid,
    };
    print_result(&result, cli_args, |r| {
        if r.invalid.is_empty() {
            println!("All {} records are vocabulary-clean", r.records);
        } else {
            for record in &r.invalid {
                println!(
                    "line {} ({}): unknown symbols {:?}",
                    record.line, record.path, record.unknown_symbols
                );
            }
        }
    })?;

    if result.invalid.is_empty() {
        Ok(())
    } else {
        Err(KlinkerError::invalid_input(format!(
            "{} of {} records contain out-of-vocabulary symbols",
            result.invalid.len(),
            result.records
        )))
    }
}

/// Print the symbol vocabulary with indices.
fn symbols(cli_args: &KlinkerArgs) -> Result<()> {
    let entries: Vec<SymbolEntry> = DEFAULT_SYMBOL_TABLE
        .symbols()
        .iter()
        .enumerate()
        .map(|(index, &symbol)| SymbolEntry { index, symbol })
        .collect();

    print_result(&entries, cli_args, |list| {
        for entry in list {
            println!("{}\t{:?}", entry.index, entry.symbol);
        }
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_validate_clean_filelist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "a.wav|dˈɪt ʔɪs ʔən tˈɛst.\n").unwrap();

        let args = KlinkerArgs::try_parse_from([
            "klinker",
            "validate",
            path.to_str().unwrap(),
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "a.wav|tˈɛst ψ\n").unwrap();

        let args = KlinkerArgs::try_parse_from([
            "klinker",
            "-q",
            "validate",
            path.to_str().unwrap(),
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_record_context_preserves_variant() {
        let input = std::path::Path::new("lists/train.txt");

        let err = with_record_context(
            KlinkerError::engine_invocation("engine exited with 1"),
            input,
            7,
        );
        match err {
            KlinkerError::EngineInvocation(m) => {
                assert!(m.starts_with("lists/train.txt:7: "))
            }
            other => panic!("variant changed: {other:?}"),
        }

        // Variants without a message slot pass through unchanged.
        let err = with_record_context(KlinkerError::UnknownSymbol('ψ'), input, 7);
        assert!(matches!(err, KlinkerError::UnknownSymbol('ψ')));
    }

    #[test]
    fn test_convert_empty_filelist_writes_empty_output() {
        // An empty filelist never invokes the engine, so conversion
        // succeeds even without espeak installed.
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "").unwrap();

        let args = KlinkerArgs::try_parse_from([
            "klinker",
            "-q",
            "convert-filelist",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
        assert!(output.exists());
    }
}
