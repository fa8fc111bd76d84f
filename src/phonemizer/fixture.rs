//! Fixture-backed phonemizer for tests.

use std::collections::HashMap;

use crate::error::{KlinkerError, Result};
use crate::phonemizer::Phonemizer;

/// A phonemizer backed by a recorded segment → notation map.
///
/// Used to exercise the pipeline without an eSpeak installation. Unknown
/// segments fail with [`KlinkerError::EngineInvocation`] so a test cannot
/// silently pass on a segment it never recorded; use
/// [`passthrough`](FixturePhonemizer::passthrough) for property tests
/// that only care about the surrounding stages.
#[derive(Debug, Clone, Default)]
pub struct FixturePhonemizer {
    recordings: HashMap<String, String>,
    passthrough: bool,
}

impl FixturePhonemizer {
    /// Create an empty fixture.
    pub fn new() -> Self {
        FixturePhonemizer::default()
    }

    /// Record a segment → notation pair.
    pub fn with<S: Into<String>, T: Into<String>>(mut self, segment: S, notation: T) -> Self {
        self.recordings.insert(segment.into(), notation.into());
        self
    }

    /// Echo unrecorded segments back instead of failing.
    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }
}

impl Phonemizer for FixturePhonemizer {
    fn phonemize(&self, segment: &str) -> Result<String> {
        if segment.is_empty() {
            return Ok(String::new());
        }
        if let Some(notation) = self.recordings.get(segment) {
            return Ok(notation.clone());
        }
        if self.passthrough {
            return Ok(segment.to_string());
        }
        Err(KlinkerError::engine_invocation(format!(
            "no recording for segment {segment:?}"
        )))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
