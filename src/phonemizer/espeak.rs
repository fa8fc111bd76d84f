//! Subprocess-backed eSpeak NG phonemizer.
//!
//! Shells out to `espeak-ng` with the Dutch voice in quiet mode,
//! requesting IPA-style output with stress annotations. eSpeak NG must be
//! installed and on `PATH`:
//!
//! - **Linux**: `sudo apt-get install espeak-ng`
//! - **macOS**: `brew install espeak-ng`
//! - **Windows**: installer from <https://espeak-ng.org/download>

use std::io::{ErrorKind, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{KlinkerError, Result};
use crate::phonemizer::Phonemizer;

/// Default voice passed to `espeak-ng -v`.
pub const DEFAULT_VOICE: &str = "nl";

/// Default bound on one engine invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Poll interval while waiting for the child to exit.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// A phonemizer that spawns one `espeak-ng` process per segment.
///
/// Invocation is equivalent to
/// `espeak-ng -v<voice> -q -x --ipa=2 -- <segment>`; stdout is the
/// phonetic+stress string on success. Each call spawns a fresh process,
/// so one instance can be shared across threads.
///
/// # Examples
///
/// ```no_run
/// use klinker::phonemizer::Phonemizer;
/// use klinker::phonemizer::espeak::EspeakPhonemizer;
///
/// let engine = EspeakPhonemizer::new();
/// let phonemes = engine.phonemize("hallo wereld")?;
/// assert!(!phonemes.is_empty());
/// # Ok::<(), klinker::error::KlinkerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EspeakPhonemizer {
    program: String,
    voice: String,
    timeout: Duration,
}

impl EspeakPhonemizer {
    /// Create a phonemizer with the default Dutch voice and timeout.
    pub fn new() -> Self {
        EspeakPhonemizer {
            program: "espeak-ng".to_string(),
            voice: DEFAULT_VOICE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different eSpeak voice (e.g. `"nl"` or `"nl-be"`).
    pub fn with_voice<S: Into<String>>(mut self, voice: S) -> Self {
        self.voice = voice.into();
        self
    }

    /// Bound the wall-clock time of one invocation. Expiry kills the
    /// child and surfaces as [`KlinkerError::EngineInvocation`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the executable path (mainly for tests).
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    /// Get the configured voice.
    pub fn voice(&self) -> &str {
        &self.voice
    }

    fn run(&self, segment: &str) -> Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
        let mut child = Command::new(&self.program)
            .arg(format!("-v{}", self.voice))
            .arg("-q")
            .arg("-x")
            .arg("--ipa=2")
            .arg("--")
            .arg(segment)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => KlinkerError::EngineUnavailable(format!(
                    "{} not found on PATH; install eSpeak NG",
                    self.program
                )),
                _ => KlinkerError::Io(e),
            })?;

        // Drain both pipes on reader threads while polling for exit; a
        // child whose output exceeds the OS pipe buffer would otherwise
        // block in its write and never exit.
        let stdout_reader = drain(child.stdout.take());
        let stderr_reader = drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                child.kill().ok();
                child.wait().ok();
                return Err(KlinkerError::engine_invocation(format!(
                    "{} timed out after {:?} on segment {:?}",
                    self.program, self.timeout, segment
                )));
            }
            thread::sleep(WAIT_POLL);
        };

        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();
        Ok((status, stdout, stderr))
    }
}

/// Read a child pipe to the end on its own thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).ok();
        }
        buf
    })
}

impl Default for EspeakPhonemizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Phonemizer for EspeakPhonemizer {
    fn phonemize(&self, segment: &str) -> Result<String> {
        if segment.is_empty() {
            return Ok(String::new());
        }

        let (status, stdout, stderr) = self.run(segment)?;
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            return Err(KlinkerError::engine_invocation(format!(
                "{} exited with {}: {}",
                self.program,
                status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    fn name(&self) -> &'static str {
        "espeak"
    }
}
