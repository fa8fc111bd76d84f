//! Final-devoicing variant stage.
//!
//! Dutch devoices obstruents at the end of an utterance and before a
//! pause. This stage marks that with the combining ring below (U+0325):
//! first on a final `b`, `d` or `g` (dropping trailing whitespace), then
//! on `b d g v z` wherever whitespace or end-of-string follows. The
//! consonant sets are part of the contract and deliberately approximate;
//! the base pipeline already maps `g` to `ɣ`, so the `g` entries mostly
//! cover engine output that skipped refinement.
//!
//! This is pure post-processing on refined text; it never alters
//! earlier stages.
//!
//! # Examples
//!
//! ```
//! use klinker::text::devoice::DevoicingFilter;
//!
//! let devoice = DevoicingFilter::new().unwrap();
//! assert_eq!(devoice.apply("bɛd"), "bɛd\u{0325}");
//! assert_eq!(devoice.apply("hʏiz ɛn"), "hʏiz\u{0325} ɛn");
//! ```

use regex::Regex;

use crate::error::{KlinkerError, Result};

/// Marks devoiced obstruents at utterance-final and pre-pause positions.
#[derive(Debug, Clone)]
pub struct DevoicingFilter {
    final_stop: Regex,
    pre_boundary: Regex,
}

impl DevoicingFilter {
    /// Compile the two devoicing patterns.
    pub fn new() -> Result<Self> {
        let final_stop = Regex::new(r"([bdg])\s*$")
            .map_err(|e| KlinkerError::analysis(format!("Invalid regex pattern: {e}")))?;
        let pre_boundary = Regex::new(r"([bdgvz])(\s|$)")
            .map_err(|e| KlinkerError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(DevoicingFilter {
            final_stop,
            pre_boundary,
        })
    }

    /// Apply both devoicing rules in order.
    pub fn apply(&self, text: &str) -> String {
        let text = self.final_stop.replace_all(text, "${1}\u{0325}");
        self.pre_boundary
            .replace_all(&text, "${1}\u{0325}${2}")
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> DevoicingFilter {
        DevoicingFilter::new().unwrap()
    }

    #[test]
    fn test_final_stop_gains_ring() {
        assert_eq!(filter().apply("bɛd"), "bɛd\u{0325}");
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        assert_eq!(filter().apply("bɛd  "), "bɛd\u{0325}");
    }

    #[test]
    fn test_pre_boundary_fricative() {
        assert_eq!(filter().apply("hʏiz ɛn"), "hʏiz\u{0325} ɛn");
        assert_eq!(filter().apply("lɛːv dɑn"), "lɛːv\u{0325} dɑn");
    }

    #[test]
    fn test_no_double_marking() {
        // A final 'd' already marked by the first rule is followed by
        // the combining ring, so the boundary rule must not fire again.
        assert_eq!(filter().apply("bɛd"), "bɛd\u{0325}");
        let once = filter().apply("bɛd");
        assert_eq!(filter().apply(&once), once);
    }

    #[test]
    fn test_voiceless_consonants_untouched() {
        assert_eq!(filter().apply("kat"), "kat");
        assert_eq!(filter().apply("stɔp"), "stɔp");
    }

    #[test]
    fn test_mid_word_untouched() {
        assert_eq!(filter().apply("bɛdɛn"), "bɛdɛn");
    }
}
