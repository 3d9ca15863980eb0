//! Speech-to-text service boundary.
//!
//! # Responsibility
//! - Define the contract for the external transcription service the
//!   composer drives: presence check, start/stop, incremental events.
//!
//! # Invariants
//! - Each result event carries the cumulative segment list, not a delta;
//!   the transcript is reconstituted from scratch on every event.
//! - A session's event subscription lives exactly as long as the session.
//! - Stop is idempotent; stopping twice asks the service only once.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{Receiver, TryRecvError};

/// Transcription settings, fixed for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// BCP-47 locale tag the service transcribes in.
    pub lang: String,
    /// Keep listening across pauses instead of ending after one utterance.
    pub continuous: bool,
    /// Emit partial segments while the user is still speaking.
    pub interim_results: bool,
    /// How many candidate transcriptions each segment may carry.
    pub max_alternatives: u32,
}

impl Default for RecognizerConfig {
    /// The board's fixed configuration: continuous pt-BR dictation with
    /// interim results and a single alternative per segment.
    fn default() -> Self {
        Self {
            lang: "pt-BR".to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// One recognized segment with its candidate transcriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Candidates ordered by service confidence; index 0 is primary.
    pub alternatives: Vec<String>,
}

impl TranscriptSegment {
    /// Builds a segment with a single candidate.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            alternatives: vec![text.into()],
        }
    }

    /// Returns the primary candidate, or empty text when the service sent
    /// a segment with no alternatives.
    pub fn primary(&self) -> &str {
        self.alternatives.first().map(String::as_str).unwrap_or("")
    }
}

/// Event delivered by an active recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Cumulative segment list recognized so far in this session.
    Result(Vec<TranscriptSegment>),
    /// Service runtime error; diagnostic only.
    Error(String),
}

/// Error starting a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform offers no speech-to-text capability.
    Unavailable,
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "speech-to-text capability is unavailable"),
        }
    }
}

impl Error for SpeechError {}

/// Concatenates every segment's primary alternative, in order.
///
/// This is the whole-transcript reconstitution each result event triggers.
pub fn reconstitute_transcript(segments: &[TranscriptSegment]) -> String {
    segments.iter().map(TranscriptSegment::primary).collect()
}

/// Handle for one active transcription session.
///
/// Owns the event subscription for the session's lifetime and the hook that
/// asks the external service to stop. Dropping the session ends the
/// subscription.
pub struct RecognitionSession {
    events: Receiver<SpeechEvent>,
    stop_hook: Box<dyn FnMut()>,
    stopped: bool,
}

impl RecognitionSession {
    /// Wraps a service-side event channel and stop hook.
    pub fn new(events: Receiver<SpeechEvent>, stop_hook: impl FnMut() + 'static) -> Self {
        Self {
            events,
            stop_hook: Box::new(stop_hook),
            stopped: false,
        }
    }

    /// Drains one pending event without blocking.
    ///
    /// Returns `None` when no event is queued or the service side hung up.
    pub fn try_next_event(&mut self) -> Option<SpeechEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Asks the external service to stop. Idempotent.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        (self.stop_hook)();
    }
}

impl std::fmt::Debug for RecognitionSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionSession")
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// External speech-to-text capability.
///
/// Platform hosts implement this over their native dictation API; tests use
/// a scripted double. Detection is by presence check before `start`.
pub trait SpeechRecognizer {
    /// Whether the platform offers the capability at all.
    fn is_available(&self) -> bool;

    /// Starts one transcription session with the given configuration.
    ///
    /// # Errors
    /// - [`SpeechError::Unavailable`] when the capability is absent.
    fn start(&mut self, config: &RecognizerConfig) -> Result<RecognitionSession, SpeechError>;
}
