//! Punctuation transliteration to the closed ASCII mark set.
//!
//! Mark runs are not phonemized; they are carried into the output as
//! symbols. Anything outside ASCII is mapped here to a closest-ASCII
//! form that the symbol table covers: a fixed table for the punctuation
//! the corpus actually contains, then an NFKD compatibility decomposition
//! keeping the ASCII parts, then silent removal. Removal is intentional
//! lossy normalization; an exotic mark must never leak an
//! out-of-vocabulary character downstream.
//!
//! # Examples
//!
//! ```
//! use klinker::text::translit::transliterate;
//!
//! assert_eq!(transliterate("«ja»"), "<<ja>>");
//! assert_eq!(transliterate("…"), "...");
//! assert_eq!(transliterate("½"), "12");
//! ```

use unicode_normalization::UnicodeNormalization;

/// Fixed Unicode-punctuation → ASCII pairs. Quotation marks are dropped
/// outright: the plain double quote is not a vocabulary member, and an
/// apostrophe would later be rewritten into the primary-stress mark,
/// giving quoted text phantom stress. (Earlier releases mapped them to
/// the apostrophe.)
const PUNCTUATION_MAP: &[(char, &str)] = &[
    ('¡', "!"),
    ('¿', "?"),
    ('—', "--"),
    ('–', "-"),
    ('…', "..."),
    ('«', "<<"),
    ('»', ">>"),
    ('“', ""),
    ('”', ""),
    ('‘', ""),
    ('’', ""),
    ('„', ","),
    ('‚', ","),
    ('·', "."),
];

/// Transliterate a mark run to its ASCII representation.
pub fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            result.push(ch);
            continue;
        }
        if let Some((_, replacement)) = PUNCTUATION_MAP.iter().find(|(c, _)| *c == ch) {
            result.push_str(replacement);
            continue;
        }
        // Compatibility decomposition salvages digits and letters hidden
        // in composed forms; whatever stays non-ASCII is dropped.
        for decomposed in ch.nfkd() {
            if decomposed.is_ascii() {
                result.push(decomposed);
            }
        }
    }
    result
}
