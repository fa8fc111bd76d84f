//! Line-oriented `path|text` filelist records.
//!
//! Training corpora reach the frontend as flat filelists: one utterance
//! per line, the audio path and its transcript separated by the first
//! `|`. This module only reads and writes the records; audio checking
//! and dataset cleaning live outside this crate.
//!
//! # Examples
//!
//! ```no_run
//! use klinker::filelist::read_filelist;
//!
//! let entries = read_filelist("filelists/train.txt")?;
//! for entry in &entries {
//!     println!("{} -> {}", entry.path, entry.text);
//! }
//! # Ok::<(), klinker::error::KlinkerError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KlinkerError, Result};

/// One `path|text` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilelistEntry {
    /// Audio file path, verbatim from the record.
    pub path: String,
    /// Utterance text. May contain further `|` characters; only the
    /// first one separates the fields.
    pub text: String,
}

impl FilelistEntry {
    /// Create an entry.
    pub fn new<P: Into<String>, T: Into<String>>(path: P, text: T) -> Self {
        FilelistEntry {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Parse one record line. Blank lines are the caller's concern.
pub fn parse_line(line: &str) -> Result<FilelistEntry> {
    match line.split_once('|') {
        Some((path, text)) => Ok(FilelistEntry::new(path, text)),
        None => Err(KlinkerError::filelist(format!(
            "missing '|' separator in record: {line:?}"
        ))),
    }
}

/// Read all records from a filelist, skipping blank lines.
pub fn read_filelist<P: AsRef<Path>>(path: P) -> Result<Vec<FilelistEntry>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_line(&line).map_err(|e| {
            KlinkerError::filelist(format!(
                "{}:{}: {e}",
                path.as_ref().display(),
                number + 1
            ))
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Write records as `path|text` lines.
pub fn write_filelist<P: AsRef<Path>>(path: P, entries: &[FilelistEntry]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{}|{}", entry.path, entry.text)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let entry = parse_line("nl_audio/0001.wav|Dit is een test.").unwrap();
        assert_eq!(entry.path, "nl_audio/0001.wav");
        assert_eq!(entry.text, "Dit is een test.");
    }

    #[test]
    fn test_parse_line_keeps_later_pipes() {
        let entry = parse_line("a.wav|links | rechts").unwrap();
        assert_eq!(entry.text, "links | rechts");
    }

    #[test]
    fn test_parse_line_without_separator() {
        assert!(parse_line("no separator here").is_err());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let entries = vec![
            FilelistEntry::new("a.wav", "Hallo."),
            FilelistEntry::new("b.wav", "Dag!"),
        ];
        write_filelist(&path, &entries).unwrap();
        assert_eq!(read_filelist(&path).unwrap(), entries);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "a.wav|Hallo.\n\n\nb.wav|Dag!\n").unwrap();
        assert_eq!(read_filelist(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_bad_record_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "a.wav|Hallo.\nkapot\n").unwrap();
        let err = read_filelist(&path).unwrap_err();
        assert!(err.to_string().contains(":2:"));
    }
}
