//! Command-line interface for the Klinker frontend.
//!
//! The CLI wraps the library pipeline for corpus preparation work:
//! phonemizing ad-hoc text, converting `path|text` filelists to
//! `path|phonemes`, validating cleaned text against the closed symbol
//! vocabulary, and dumping the vocabulary itself.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Command, KlinkerArgs, OutputFormat};
pub use commands::execute_command;
