//! Currency and special-symbol pre-substitution.
//!
//! Rewrites symbols that should be spoken as words before segmentation
//! runs, so the replacement words are treated as alphabetic content
//! instead of being carried along as punctuation. Matching is literal;
//! the pairs do not overlap, so their relative order carries no meaning.
//!
//! # Examples
//!
//! ```
//! use klinker::text::presub::SymbolSubstitution;
//!
//! let presub = SymbolSubstitution::new();
//! assert_eq!(presub.apply("dat kost 5€"), "dat kost 5euro");
//! ```

/// The fixed symbol → Dutch word pairs.
const SYMBOL_WORDS: &[(&str, &str)] = &[("€", "euro"), ("$", "dollar"), ("£", "pond")];

/// Replaces currency and similar symbols with their Dutch word
/// equivalents.
#[derive(Debug, Clone, Default)]
pub struct SymbolSubstitution;

impl SymbolSubstitution {
    /// Create the substitution stage.
    pub fn new() -> Self {
        SymbolSubstitution
    }

    /// Apply all pairs to the input.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (symbol, word) in SYMBOL_WORDS {
            if out.contains(symbol) {
                out = out.replace(symbol, word);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euro() {
        let presub = SymbolSubstitution::new();
        assert_eq!(presub.apply("€100"), "euro100");
    }

    #[test]
    fn test_dollar_is_literal() {
        // '$' must match the character, not act as an end anchor.
        let presub = SymbolSubstitution::new();
        assert_eq!(presub.apply("10$ graag"), "10dollar graag");
        assert_eq!(presub.apply("geen valuta"), "geen valuta");
    }

    #[test]
    fn test_pond() {
        let presub = SymbolSubstitution::new();
        assert_eq!(presub.apply("£5 en £6"), "pond5 en pond6");
    }

    #[test]
    fn test_no_op() {
        let presub = SymbolSubstitution::new();
        assert_eq!(presub.apply("Dit is een test."), "Dit is een test.");
    }
}
