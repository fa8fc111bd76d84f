//! Phonetic refinement rules: eSpeak notation → the project IPA set.
//!
//! Three stages run in strict order:
//!
//! 1. The ordered notation table. Multi-character source tokens (`tS`,
//!    `dZ`, `Ei`, `Au` and the colon-suffixed long vowels) are listed
//!    before every single-character rule whose pattern is a prefix of
//!    them. This ordering is part of the contract: if `A → ɑ` ran before
//!    `Au → ʌu`, the diphthong rule could never fire and `Au` would
//!    surface as `ɑu`.
//! 2. The long-vowel merge: a short-vowel symbol followed by a bare
//!    colon collapses into the vowel with the IPA length mark.
//! 3. The word-initial glottal-stop heuristic: at string start or after
//!    whitespace, a (possibly stress-marked) vowel from the fixed set
//!    {a, i, u, ɛ, ɔ} gains a preceding `ʔ`. The `ʔ` goes before the
//!    stress mark; the stress mark stays attached to its vowel. The
//!    trigger set is a deliberate approximation; changing it changes
//!    observable output and needs a version note.
//!
//! All three stages are pure and total: a rule that does not match is a
//! no-op, never an error.
//!
//! # Examples
//!
//! ```
//! use klinker::text::refine::RefinementEngine;
//!
//! let refine = RefinementEngine::new().unwrap();
//! assert_eq!(refine.apply("hˈAlo:"), "hˈɑloː");
//! assert_eq!(refine.apply("ˈAu"), "ˈʌu");
//! ```

use regex::{NoExpand, Regex};

use crate::error::{KlinkerError, Result};

/// The ordered eSpeak → IPA notation table. Order is contractual; see
/// the module documentation.
const NOTATION_TABLE: &[(&str, &str)] = &[
    // Affricates before their consonant prefixes.
    ("tS", "tʃ"),
    ("dZ", "dʒ"),
    // Diphthongs before their vowel prefixes.
    ("Ei", "ɛi"),
    ("Au", "ʌu"),
    // Length-marked vowels before bare vowels.
    ("a:", "aː"),
    ("e:", "eː"),
    ("i:", "iː"),
    ("o:", "oː"),
    // Feeds the later 'y' rule: 'u:' surfaces as 'ʏː'.
    ("u:", "yː"),
    // Vowels.
    ("a", "a"),
    ("@", "ə"),
    ("E", "ɛ"),
    ("I", "ɪ"),
    ("O", "ɔ"),
    ("y", "ʏ"),
    ("A", "ɑ"),
    ("9", "œy"),
    // Consonants.
    ("b", "b"),
    ("d", "d"),
    ("f", "f"),
    ("g", "ɣ"),
    ("h", "h"),
    ("j", "j"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("N", "ŋ"),
    ("p", "p"),
    ("r", "r"),
    ("s", "s"),
    ("S", "ʃ"),
    ("t", "t"),
    ("v", "v"),
    ("z", "z"),
    ("Z", "ʒ"),
    ("x", "χ"),
];

/// Vowels that take a length mark and that trigger glottal-stop
/// insertion word-initially.
const SHORT_VOWELS: &str = "aiuɛɔ";

/// Replacement text for one rule: literal, or a template with capture
/// group references.
#[derive(Debug, Clone)]
pub enum Replacement {
    /// Inserted verbatim; `$` has no special meaning.
    Literal(&'static str),
    /// Expanded against the pattern's capture groups (`${1}` syntax).
    Template(&'static str),
}

/// One compiled substitution rule.
#[derive(Debug, Clone)]
pub struct RefineRule {
    pattern: Regex,
    replacement: Replacement,
}

impl RefineRule {
    fn new(pattern: &str, replacement: Replacement) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| KlinkerError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(RefineRule {
            pattern,
            replacement,
        })
    }

    fn apply(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Literal(repl) => self.pattern.replace_all(text, NoExpand(repl)),
            Replacement::Template(repl) => self.pattern.replace_all(text, repl),
        }
        .into_owned()
    }
}

/// The ordered refinement stage: notation table, long-vowel merge,
/// glottal-stop heuristic. Compiled once at construction; application is
/// pure.
#[derive(Debug, Clone)]
pub struct RefinementEngine {
    rules: Vec<RefineRule>,
    long_vowel: RefineRule,
    glottal_stop: RefineRule,
}

impl RefinementEngine {
    /// Compile the fixed rule set.
    pub fn new() -> Result<Self> {
        let rules = NOTATION_TABLE
            .iter()
            .map(|&(pattern, replacement)| {
                RefineRule::new(&regex::escape(pattern), Replacement::Literal(replacement))
            })
            .collect::<Result<Vec<_>>>()?;

        let long_vowel = RefineRule::new(
            &format!("([{SHORT_VOWELS}]):"),
            Replacement::Template("${1}ː"),
        )?;
        let glottal_stop = RefineRule::new(
            &format!(r"(^|\s)(ˈ?[{SHORT_VOWELS}])"),
            Replacement::Template("${1}ʔ${2}"),
        )?;

        Ok(RefinementEngine {
            rules,
            long_vowel,
            glottal_stop,
        })
    }

    /// Apply every rule in contract order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = rule.apply(&out);
        }
        out = self.long_vowel.apply(&out);
        self.glottal_stop.apply(&out)
    }

    /// Number of rules in the notation table.
    pub fn table_len(&self) -> usize {
        self.rules.len()
    }
}
