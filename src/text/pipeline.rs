//! The Dutch G2P pipeline and its named variants.
//!
//! Composes the stages in strict order: pre-substitution, segmentation,
//! per-segment phonemization, reassembly with transliterated marks,
//! stress normalization, refinement, and optionally the devoicing
//! variant stage. All configuration (compiled patterns, rule tables) is
//! built in the constructor; a pipeline instance holds no mutable state
//! and can be shared across threads, with each phonemizer call spawning
//! its own engine process.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use klinker::phonemizer::fixture::FixturePhonemizer;
//! use klinker::text::pipeline::G2pPipeline;
//!
//! let engine = FixturePhonemizer::new().with("test", "t'Est");
//! let pipeline = G2pPipeline::new(Arc::new(engine)).unwrap();
//! assert_eq!(pipeline.convert("test.").unwrap(), "tˈɛst.");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::phonemizer::Phonemizer;
use crate::phonemizer::espeak::EspeakPhonemizer;
use crate::text::devoice::DevoicingFilter;
use crate::text::presub::SymbolSubstitution;
use crate::text::refine::RefinementEngine;
use crate::text::segment::{Segmenter, reassemble};
use crate::text::stress::StressNormalizer;

/// Named pipeline variants. Variants are pure post-processing on the
/// base output; they never alter earlier stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The refinement output, unchanged.
    #[default]
    Base,
    /// Reserved alternative transcription. Currently a pass-through copy
    /// of [`Variant::Base`]; kept as an explicit extension point for
    /// dialect or simplification rules.
    Alternative,
    /// Base plus final-devoicing marks.
    FinalDevoicing,
}

/// The end-to-end Dutch text → IPA pipeline.
pub struct G2pPipeline {
    presub: SymbolSubstitution,
    segmenter: Segmenter,
    phonemizer: Arc<dyn Phonemizer>,
    stress: StressNormalizer,
    refine: RefinementEngine,
    devoice: DevoicingFilter,
}

impl G2pPipeline {
    /// Build a pipeline around the given phonemizer backend.
    pub fn new(phonemizer: Arc<dyn Phonemizer>) -> Result<Self> {
        Ok(G2pPipeline {
            presub: SymbolSubstitution::new(),
            segmenter: Segmenter::new()?,
            phonemizer,
            stress: StressNormalizer::new(),
            refine: RefinementEngine::new()?,
            devoice: DevoicingFilter::new()?,
        })
    }

    /// Build a pipeline backed by a default eSpeak NG subprocess engine.
    pub fn with_espeak() -> Result<Self> {
        Self::new(Arc::new(EspeakPhonemizer::new()))
    }

    /// Build a pipeline backed by a configured eSpeak engine.
    pub fn with_engine(engine: EspeakPhonemizer) -> Result<Self> {
        Self::new(Arc::new(engine))
    }

    /// The backend name, for diagnostics.
    pub fn engine_name(&self) -> &'static str {
        self.phonemizer.name()
    }

    /// Run pre-substitution, segmentation, per-segment phonemization and
    /// reassembly. The result carries the engine's raw stress notation.
    ///
    /// A phonemizer failure aborts this sentence; nothing partial is
    /// returned.
    pub fn phonemes_with_stress(&self, text: &str) -> Result<String> {
        let text = self.presub.apply(text);
        let segmentation = self.segmenter.segment(&text);

        let mut outputs = Vec::with_capacity(segmentation.pieces.len());
        for piece in &segmentation.pieces {
            if self.segmenter.is_alphabetic(piece) {
                outputs.push(Some(self.phonemizer.phonemize(piece.trim())?));
            } else {
                outputs.push(None);
            }
        }

        Ok(reassemble(&outputs, &segmentation.marks))
    }

    /// Convert one sentence to the base IPA transcription.
    ///
    /// An empty sentence short-circuits to an empty result without
    /// touching the engine.
    pub fn convert(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let annotated = self.phonemes_with_stress(text)?;
        let normalized = self.stress.apply(&annotated);
        Ok(self.refine.apply(&normalized))
    }

    /// Convert one sentence with the selected variant.
    pub fn convert_variant(&self, text: &str, variant: Variant) -> Result<String> {
        let base = self.convert(text)?;
        Ok(match variant {
            Variant::Base | Variant::Alternative => base,
            Variant::FinalDevoicing => self.devoice.apply(&base),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemizer::fixture::FixturePhonemizer;

    fn pipeline(engine: FixturePhonemizer) -> G2pPipeline {
        G2pPipeline::new(Arc::new(engine)).unwrap()
    }

    #[test]
    fn test_marks_only_input_skips_engine() {
        // An empty fixture fails on any invocation, so success proves
        // the engine was never consulted.
        let p = pipeline(FixturePhonemizer::new());
        assert_eq!(p.convert("...!?").unwrap(), "...!?");
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let p = pipeline(FixturePhonemizer::new());
        assert_eq!(p.convert("").unwrap(), "");
    }

    #[test]
    fn test_single_word_sentence() {
        let engine = FixturePhonemizer::new().with("test", "t'Est");
        let p = pipeline(engine);
        assert_eq!(p.convert("test.").unwrap(), "tˈɛst.");
    }

    #[test]
    fn test_mark_between_pieces() {
        let engine = FixturePhonemizer::new()
            .with("ja", "j'a:")
            .with("nee", "n'e:");
        let p = pipeline(engine);
        assert_eq!(p.convert("ja, nee!").unwrap(), "jˈaː, nˈeː!");
    }

    #[test]
    fn test_currency_reaches_engine_as_word() {
        let engine = FixturePhonemizer::new().with("5euro", "v'Eif '9ro:");
        let p = pipeline(engine);
        let out = p.convert("5€").unwrap();
        assert!(!out.contains('€'));
        assert!(out.contains("œy"));
    }

    #[test]
    fn test_engine_failure_aborts_sentence() {
        let p = pipeline(FixturePhonemizer::new());
        assert!(p.convert("onbekend woord.").is_err());
    }

    #[test]
    fn test_alternative_variant_matches_base() {
        let engine = FixturePhonemizer::new().with("test", "t'Est");
        let p = pipeline(engine);
        let base = p.convert_variant("test.", Variant::Base).unwrap();
        let alt = p.convert_variant("test.", Variant::Alternative).unwrap();
        assert_eq!(base, alt);
    }

    #[test]
    fn test_devoicing_variant() {
        let engine = FixturePhonemizer::new().with("bed", "b'Ed");
        let p = pipeline(engine);
        assert_eq!(p.convert_variant("bed", Variant::Base).unwrap(), "bˈɛd");
        assert_eq!(
            p.convert_variant("bed", Variant::FinalDevoicing).unwrap(),
            "bˈɛd\u{0325}"
        );
    }

    #[test]
    fn test_leading_whitespace_piece_is_still_phonemized() {
        // The piece after a mark starts with a space; it must still
        // reach the engine (trimmed).
        let engine = FixturePhonemizer::new()
            .with("ja", "j'a:")
            .with("zeker", "z'e:k@r");
        let p = pipeline(engine);
        assert_eq!(p.convert("ja, zeker").unwrap(), "jˈaː, zˈeːkər");
    }
}
