//! Stress marker normalization.
//!
//! eSpeak NG annotates primary stress with an ASCII apostrophe and
//! secondary stress with `%`. Downstream rules and the symbol table work
//! with the IPA marks `ˈ` and `ˌ`, so this stage rewrites both. The two
//! substitutions are disjoint single characters; the rewrite is pure,
//! total and idempotent on already-normalized text.
//!
//! # Examples
//!
//! ```
//! use klinker::text::stress::StressNormalizer;
//!
//! let stress = StressNormalizer::new();
//! assert_eq!(stress.apply("h'Alo: w%e:rEld"), "hˈAlo: wˌe:rEld");
//! ```

/// eSpeak's primary-stress marker and its IPA form.
const PRIMARY: (char, char) = ('\'', 'ˈ');

/// eSpeak's secondary-stress marker and its IPA form.
const SECONDARY: (char, char) = ('%', 'ˌ');

/// Rewrites eSpeak's ASCII stress notation into IPA stress marks.
#[derive(Debug, Clone, Default)]
pub struct StressNormalizer;

impl StressNormalizer {
    /// Create the normalization stage.
    pub fn new() -> Self {
        StressNormalizer
    }

    /// Apply both stress substitutions.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match ch {
                c if c == PRIMARY.0 => PRIMARY.1,
                c if c == SECONDARY.0 => SECONDARY.1,
                c => c,
            })
            .collect()
    }
}
