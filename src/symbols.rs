//! The closed symbol vocabulary for the Dutch synthesis frontend.
//!
//! Every character the G2P pipeline can emit must be a member of this
//! table; the downstream acoustic model indexes its input through it, so
//! an out-of-vocabulary character is a defect in the rule tables, not a
//! bad input. The table is built once from fixed literal sections and is
//! immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use klinker::symbols::{SymbolTable, DEFAULT_SYMBOL_TABLE};
//!
//! let table = SymbolTable::new();
//! assert_eq!(table.space_id(), 0);
//! assert!(table.contains('ʔ'));
//!
//! // The process-wide table is identical.
//! assert_eq!(DEFAULT_SYMBOL_TABLE.len(), table.len());
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{KlinkerError, Result};

/// Whitespace comes first so that its index is stable for padding logic.
const WHITESPACE: &str = " ";

/// Padding symbol used by downstream sequence batching.
const PAD: &str = "_";

/// Punctuation retained (transliterated) in pipeline output.
const PUNCTUATION: &str = ";:,.!?¡¿—…«»“”+-–()[]{}<>/\\|@#&*~`<>^%$=";

/// Plain ASCII letters.
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Dutch accented letters that may survive into engine input.
const ACCENTED_LETTERS: &str = "áéíóúýäëïöüÿàèòùâêôû";

/// The Dutch IPA inventory. The trailing `ʔχʏ` section covers symbols the
/// refinement rules emit (glottal stop, voiceless uvular fricative, and
/// the short-u vowel); duplicates elsewhere are redundant but harmless,
/// lookups resolve to the first occurrence.
const DUTCH_IPA: &str = "' ()abdefhijklmnoprstuvwxyzøŋœɑɒɔəɛɜɡɣɪɲɵɹɾʃʊʋʌʒʲˈˌː'' ()abdefhijklmnoprstvwyzŋœɑɔəɛɜɡɪʃʊʋˈˌːθ'ʔχʏ";

/// Stress marks, the length mark and the combining diacritics (ring
/// below, syllabic mark, nasalization tilde).
const DIACRITICS: &str = "ˈˌː\u{0325}\u{0329}\u{0303}";

/// The process-wide symbol table.
///
/// Construction is deterministic, so separately built [`SymbolTable`]
/// instances are interchangeable with this one; sharing the static just
/// avoids rebuilding the index per call site.
pub static DEFAULT_SYMBOL_TABLE: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::new);

/// The closed, ordered vocabulary of output symbols.
///
/// Duplicate characters are permitted in the definition; [`index_of`]
/// resolves to the first occurrence, matching a linear scan of the
/// definition order.
///
/// [`index_of`]: SymbolTable::index_of
///
/// # Examples
///
/// ```
/// use klinker::symbols::SymbolTable;
///
/// let table = SymbolTable::new();
/// assert_eq!(table.index_of(' ').unwrap(), table.space_id());
/// assert!(table.index_of('ψ').is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    space_id: usize,
    pad_id: usize,
}

impl SymbolTable {
    /// Build the table from the fixed literal sections.
    pub fn new() -> Self {
        let sections = [
            WHITESPACE,
            PAD,
            PUNCTUATION,
            LETTERS,
            ACCENTED_LETTERS,
            DUTCH_IPA,
            DIACRITICS,
        ];

        let mut symbols = Vec::new();
        let mut index = HashMap::new();
        for section in sections {
            for ch in section.chars() {
                // First occurrence wins.
                index.entry(ch).or_insert(symbols.len());
                symbols.push(ch);
            }
        }

        let space_id = index[&' '];
        let pad_id = index[&'_'];

        SymbolTable {
            symbols,
            index,
            space_id,
            pad_id,
        }
    }

    /// Look up the index of a symbol.
    ///
    /// Fails with [`KlinkerError::UnknownSymbol`] if the character is not
    /// a member of the vocabulary.
    pub fn index_of(&self, symbol: char) -> Result<usize> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(KlinkerError::UnknownSymbol(symbol))
    }

    /// The index of the whitespace symbol.
    pub fn space_id(&self) -> usize {
        self.space_id
    }

    /// The index of the padding symbol.
    pub fn pad_id(&self) -> usize {
        self.pad_id
    }

    /// Whether a character is a member of the vocabulary.
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Number of entries in the definition, duplicates included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty (never true for the default table).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ordered symbol definition.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Encode a phoneme string as a sequence of symbol indices.
    ///
    /// Fails on the first character that is not a vocabulary member.
    pub fn encode(&self, text: &str) -> Result<Vec<usize>> {
        text.chars().map(|ch| self.index_of(ch)).collect()
    }

    /// Insert the padding id between every pair of ids and at both ends.
    ///
    /// This matches the `add_blank` convention of downstream loaders: the
    /// result has length `2n + 1` for an input of length `n`.
    pub fn intersperse_blank(&self, ids: &[usize]) -> Vec<usize> {
        let mut result = Vec::with_capacity(ids.len() * 2 + 1);
        result.push(self.pad_id);
        for &id in ids {
            result.push(id);
            result.push(self.pad_id);
        }
        result
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_id_is_zero() {
        let table = SymbolTable::new();
        assert_eq!(table.space_id(), 0);
        assert_eq!(table.index_of(' ').unwrap(), 0);
    }

    #[test]
    fn test_pad_follows_whitespace() {
        let table = SymbolTable::new();
        assert_eq!(table.pad_id(), 1);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let table = SymbolTable::new();
        // 'a' appears in LETTERS and again (twice) in DUTCH_IPA; the
        // LETTERS occurrence must win.
        let first = table
            .symbols()
            .iter()
            .position(|&c| c == 'a')
            .expect("'a' in table");
        assert_eq!(table.index_of('a').unwrap(), first);
    }

    #[test]
    fn test_refinement_targets_are_members() {
        let table = SymbolTable::new();
        for ch in "aəeɛiɪoɔyʏɑœʌbdfɣhjklmnŋprsʃtvzʒχʔˈˌː".chars() {
            assert!(table.contains(ch), "missing {ch:?}");
        }
        // Combining diacritics used by the devoicing variant.
        assert!(table.contains('\u{0325}'));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = SymbolTable::new();
        let err = table.index_of('ψ').unwrap_err();
        assert!(matches!(err, KlinkerError::UnknownSymbol('ψ')));
    }

    #[test]
    fn test_deterministic_construction() {
        let a = SymbolTable::new();
        let b = SymbolTable::new();
        assert_eq!(a.symbols(), b.symbols());
        assert_eq!(a.space_id(), b.space_id());
    }

    #[test]
    fn test_encode() {
        let table = SymbolTable::new();
        let ids = table.encode("ab").unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], table.index_of('a').unwrap());
        assert!(table.encode("aψ").is_err());
    }

    #[test]
    fn test_intersperse_blank() {
        let table = SymbolTable::new();
        let ids = table.encode("ab").unwrap();
        let padded = table.intersperse_blank(&ids);
        assert_eq!(padded.len(), 5);
        assert_eq!(padded[0], table.pad_id());
        assert_eq!(padded[1], ids[0]);
        assert_eq!(padded[4], table.pad_id());
    }
}
