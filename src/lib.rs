//! # Klinker
//!
//! A Dutch grapheme-to-phoneme (G2P) text frontend for speech synthesis.
//!
//! ## Features
//!
//! - Deterministic normalization of raw Dutch sentences into IPA-style
//!   phoneme strings
//! - Closed output vocabulary with stable symbol indices
//! - Segmentation that preserves punctuation across phonemization
//! - Ordered phonetic refinement rules with a contractual rule order
//! - Pluggable G2P engine (eSpeak NG subprocess or test fixture)
//! - Filelist conversion tooling for TTS corpora

pub mod cli;
pub mod error;
pub mod filelist;
pub mod phonemizer;
pub mod symbols;
pub mod text;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
