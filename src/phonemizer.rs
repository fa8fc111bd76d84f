//! Grapheme-to-phoneme engine abstraction.
//!
//! The pipeline never talks to eSpeak NG directly; it goes through the
//! [`Phonemizer`] trait so that the refinement and reassembly stages can
//! be tested without spawning any external process.
//!
//! # Available Implementations
//!
//! - [`espeak::EspeakPhonemizer`] - Production backend, shells out to
//!   `espeak-ng` once per alphabetic segment
//! - [`fixture::FixturePhonemizer`] - Test double backed by a recorded
//!   segment → phoneme map
//!
//! # Examples
//!
//! ```
//! use klinker::phonemizer::Phonemizer;
//! use klinker::phonemizer::fixture::FixturePhonemizer;
//!
//! let engine = FixturePhonemizer::new().with("hallo", "h'Alo:");
//! assert_eq!(engine.phonemize("hallo").unwrap(), "h'Alo:");
//! assert_eq!(engine.phonemize("").unwrap(), "");
//! ```

pub mod espeak;
pub mod fixture;

use crate::error::Result;

/// Trait for engines that convert one alphabetic text segment into the
/// engine's phonetic+stress notation.
///
/// Implementations are invoked once per alphabetic segment, never batched
/// across a sentence: segment boundaries must line up with the points
/// where punctuation is re-inserted.
///
/// The trait requires `Send + Sync` so independent pipeline instances can
/// phonemize sentences in parallel (each invocation owns its own engine
/// process; the engine is not assumed reentrant).
pub trait Phonemizer: Send + Sync {
    /// Convert a text segment to the engine's phonetic notation.
    ///
    /// An empty segment returns an empty string without invoking the
    /// engine. Engine failures surface as
    /// [`KlinkerError::EngineUnavailable`] (executable missing, do not
    /// retry) or [`KlinkerError::EngineInvocation`] (nonzero exit or
    /// timeout, may be retried once at the sentence level).
    ///
    /// [`KlinkerError::EngineUnavailable`]: crate::error::KlinkerError::EngineUnavailable
    /// [`KlinkerError::EngineInvocation`]: crate::error::KlinkerError::EngineInvocation
    fn phonemize(&self, segment: &str) -> Result<String>;

    /// Get the name of this phonemizer backend.
    fn name(&self) -> &'static str;
}
