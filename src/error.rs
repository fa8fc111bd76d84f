//! Error types for the Klinker library.
//!
//! This module provides error handling for all Klinker operations. All
//! errors are represented by the [`KlinkerError`] enum.
//!
//! # Examples
//!
//! ```
//! use klinker::error::{KlinkerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KlinkerError::invalid_input("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Klinker operations.
///
/// The first four variants form the pipeline's error taxonomy; the rest
/// cover the CLI and filelist surface. It uses the `thiserror` crate for
/// automatic `Error` trait implementation and provides convenient
/// constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum KlinkerError {
    /// A pipeline output character is not a member of the closed symbol
    /// vocabulary. This indicates a rule-table or segmentation defect,
    /// not a bad runtime input.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),

    /// The external G2P engine executable could not be found. This is an
    /// environment defect; callers must not retry.
    #[error("G2P engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The external G2P engine ran and failed (nonzero exit status or
    /// timeout). Carries the engine's diagnostic output. Callers may
    /// retry once at the sentence level.
    #[error("G2P engine invocation failed: {0}")]
    EngineInvocation(String),

    /// The input sentence was empty where a non-empty one was required.
    #[error("empty input")]
    EmptyInput,

    /// Analysis/pipeline configuration errors (bad pattern, bad voice,
    /// etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Filelist parsing errors.
    #[error("Filelist error: {0}")]
    Filelist(String),

    /// Invalid input to a CLI command.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors (file operations, subprocess pipes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl KlinkerError {
    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        KlinkerError::Analysis(message.into())
    }

    /// Create a filelist error.
    pub fn filelist<S: Into<String>>(message: S) -> Self {
        KlinkerError::Filelist(message.into())
    }

    /// Create an invalid-input error.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        KlinkerError::InvalidInput(message.into())
    }

    /// Create an engine-invocation error.
    pub fn engine_invocation<S: Into<String>>(message: S) -> Self {
        KlinkerError::EngineInvocation(message.into())
    }
}

/// A specialized Result type for Klinker operations.
pub type Result<T> = std::result::Result<T, KlinkerError>;
