//! Sentence segmentation into alphabetic pieces and punctuation marks.
//!
//! A sentence is split on the *mark* class: every character that is not
//! a Latin letter, digit, Latin-1/Latin-Extended-A letter, combining
//! diacritic, or whitespace. Marks are single characters, so a split
//! yields `pieces.len() == marks.len() + 1` with empty pieces between
//! adjacent marks. Interior whitespace stays inside a piece, so one
//! engine invocation covers a whole multi-word span.
//!
//! Re-interleaving pieces and marks reconstructs the sentence up to
//! transliteration: marks are mapped to ASCII and their spacing is
//! dropped, which is intentional lossy normalization, not a defect.
//!
//! # Examples
//!
//! ```
//! use klinker::text::segment::Segmenter;
//!
//! let segmenter = Segmenter::new().unwrap();
//! let seg = segmenter.segment("Dit is een test.");
//! assert_eq!(seg.pieces, vec!["Dit is een test", ""]);
//! assert_eq!(seg.marks, vec!["."]);
//! ```

use regex::Regex;

use crate::error::{KlinkerError, Result};
use crate::text::translit::transliterate;

/// Characters the pipeline treats as alphabetic content. The Latin-1 /
/// Latin-Extended-A range covers the Dutch accented letters, the
/// combining range covers decomposed diacritics.
const ALPHABETIC_CLASS: &str = r"[A-Za-z\dÀ-ſ̀-ͯ]";

/// The complementary single-character mark class (whitespace is neither
/// alphabetic nor a mark).
const MARK_CLASS: &str = r"[^A-Za-z\dÀ-ſ̀-ͯ\s]";

/// The ordered decomposition of one sentence.
///
/// `pieces` and `marks` interleave as
/// `pieces[0] marks[0] pieces[1] marks[1] … pieces[n]`; pieces may be
/// empty where two marks are adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Maximal runs between marks, in original order. May be empty or
    /// whitespace-only.
    pub pieces: Vec<String>,
    /// The mark characters, in original order.
    pub marks: Vec<String>,
}

/// Splits sentences on the fixed mark character class.
#[derive(Debug, Clone)]
pub struct Segmenter {
    alphabetic: Regex,
    marks: Regex,
}

impl Segmenter {
    /// Create a segmenter with the pipeline's fixed character classes.
    pub fn new() -> Result<Self> {
        let alphabetic = Regex::new(ALPHABETIC_CLASS)
            .map_err(|e| KlinkerError::analysis(format!("Invalid regex pattern: {e}")))?;
        let marks = Regex::new(MARK_CLASS)
            .map_err(|e| KlinkerError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Segmenter { alphabetic, marks })
    }

    /// Split a sentence into pieces and marks.
    pub fn segment(&self, text: &str) -> Segmentation {
        let pieces = self.marks.split(text).map(|s| s.to_string()).collect();
        let marks = self
            .marks
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        Segmentation { pieces, marks }
    }

    /// Whether a piece contains any alphabetic content and therefore
    /// goes to the G2P engine. A piece of pure whitespace does not.
    pub fn is_alphabetic(&self, piece: &str) -> bool {
        self.alphabetic.is_match(piece)
    }
}

/// Interleave phonemized pieces with transliterated marks.
///
/// `outputs` aligns with the segmentation's pieces: `Some` holds the
/// engine output for an alphabetic piece, `None` marks a piece that was
/// skipped. A single space separates consecutive phonemized pieces once
/// the accumulated output is non-empty; each mark is transliterated,
/// stripped of any whitespace the transliteration produced, and appended
/// right after its piece.
pub fn reassemble(outputs: &[Option<String>], marks: &[String]) -> String {
    let mut result = String::new();
    for (i, output) in outputs.iter().enumerate() {
        if let Some(phonemes) = output {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(phonemes);
        }
        if let Some(mark) = marks.get(i) {
            result.extend(transliterate(mark).chars().filter(|c| !c.is_whitespace()));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new().unwrap()
    }

    #[test]
    fn test_single_sentence_with_period() {
        let seg = segmenter().segment("Dit is een test.");
        assert_eq!(seg.pieces, vec!["Dit is een test", ""]);
        assert_eq!(seg.marks, vec!["."]);
    }

    #[test]
    fn test_pieces_exceed_marks_by_one() {
        for text in ["", "abc", "a,b!c?", "...", "één (test)!"] {
            let seg = segmenter().segment(text);
            assert_eq!(seg.pieces.len(), seg.marks.len() + 1, "input {text:?}");
        }
    }

    #[test]
    fn test_adjacent_marks_yield_empty_pieces() {
        let seg = segmenter().segment("ja...");
        assert_eq!(seg.pieces, vec!["ja", "", "", ""]);
        assert_eq!(seg.marks, vec![".", ".", "."]);
    }

    #[test]
    fn test_whitespace_piece_is_not_alphabetic() {
        let s = segmenter();
        assert!(!s.is_alphabetic("   "));
        assert!(!s.is_alphabetic(""));
        assert!(s.is_alphabetic(" wereld"));
        assert!(s.is_alphabetic("één"));
        assert!(s.is_alphabetic("123"));
    }

    #[test]
    fn test_accented_letters_stay_in_piece() {
        let seg = segmenter().segment("café, graag");
        assert_eq!(seg.pieces, vec!["café", " graag"]);
        assert_eq!(seg.marks, vec![","]);
    }

    #[test]
    fn test_reassemble_separating_space() {
        let outputs = vec![Some("ha".to_string()), Some("lo".to_string())];
        let marks = vec![",".to_string()];
        assert_eq!(reassemble(&outputs, &marks), "ha, lo");
    }

    #[test]
    fn test_reassemble_marks_only() {
        let outputs = vec![None, None, None];
        let marks = vec!["!".to_string(), "?".to_string()];
        assert_eq!(reassemble(&outputs, &marks), "!?");
    }

    #[test]
    fn test_reassemble_space_keys_on_accumulated_output() {
        // The separator fires whenever the accumulated output is
        // non-empty, even when the previous emission was a mark.
        let outputs = vec![None, Some("lo".to_string())];
        let marks = vec!["(".to_string()];
        assert_eq!(reassemble(&outputs, &marks), "( lo");

        // With nothing accumulated yet, no separator is emitted.
        let outputs = vec![Some("ha".to_string())];
        assert_eq!(reassemble(&outputs, &[]), "ha");
    }

    #[test]
    fn test_round_trip_under_transliteration() {
        let s = segmenter();
        let text = "Hallo, wereld!";
        let seg = s.segment(text);
        // Re-interleave raw pieces with raw marks.
        let mut rebuilt = String::new();
        for (i, piece) in seg.pieces.iter().enumerate() {
            rebuilt.push_str(piece);
            if let Some(mark) = seg.marks.get(i) {
                rebuilt.push_str(mark);
            }
        }
        assert_eq!(rebuilt, text);
    }
}
