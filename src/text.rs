//! Text normalization pipeline for Dutch speech synthesis.
//!
//! This module turns raw Dutch sentences into phoneme strings drawn from
//! the closed vocabulary in [`crate::symbols`]. The stages run strictly
//! in sequence per sentence:
//!
//! ```text
//! raw text → presub → segment → phonemize per segment → reassemble
//!          → stress normalize → refine (→ variant stage)
//! ```
//!
//! Punctuation is transliterated and carried through; only alphabetic
//! segments reach the G2P engine.

pub mod devoice;
pub mod pipeline;
pub mod presub;
pub mod refine;
pub mod segment;
pub mod stress;
pub mod translit;
