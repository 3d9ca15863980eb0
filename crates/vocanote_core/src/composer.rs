//! New-note composer: the modal editor's state machine.
//!
//! # Responsibility
//! - Drive the Onboarding / TextEditing / Recording state machine.
//! - Own the active recognition session and fold its events into content.
//!
//! # Invariants
//! - The three modes are one tagged state; no boolean combination can
//!   reach a mode outside the machine.
//! - At most one recognition session exists at a time; starting a second
//!   one is rejected, not silently stacked.
//! - A result event replaces the whole content with the reconstituted
//!   transcript; events are never appended.

use crate::board::NoteBoard;
use crate::model::note::NoteId;
use crate::notify::Notifier;
use crate::speech::{
    reconstitute_transcript, RecognitionSession, RecognizerConfig, SpeechEvent, SpeechRecognizer,
};
use crate::storage::StorageSlot;
use crate::store::StoreResult;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Blocking notice raised when dictation is requested without the capability.
pub const SPEECH_UNAVAILABLE_MESSAGE: &str =
    "Infelizmente este dispositivo não suporta a gravação de áudio!";

/// Composer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    /// Initial mode: no input method chosen yet.
    Onboarding,
    /// Free-text editing (also reached after a recording session stops).
    TextEditing,
    /// A recognition session is active and feeding the content.
    Recording,
}

/// Composer transition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// Dictation requested but the platform has no speech capability.
    SpeechUnavailable,
    /// Dictation requested while a session is already active.
    AlreadyRecording,
}

impl Display for ComposerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpeechUnavailable => write!(f, "speech capability unavailable"),
            Self::AlreadyRecording => write!(f, "a recording session is already active"),
        }
    }
}

impl Error for ComposerError {}

/// Modal editor that creates notes from typed or transcribed text.
#[derive(Debug)]
pub struct Composer {
    state: ComposerState,
    content: String,
    session: Option<RecognitionSession>,
    config: RecognizerConfig,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    /// Creates a composer in `Onboarding` with the fixed dictation config.
    pub fn new() -> Self {
        Self {
            state: ComposerState::Onboarding,
            content: String::new(),
            session: None,
            config: RecognizerConfig::default(),
        }
    }

    /// Current mode.
    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Current editor content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether a recognition session is active.
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Chooses the typed-text input method.
    ///
    /// Only meaningful from `Onboarding`; in any other mode this is a no-op.
    pub fn start_typing(&mut self) {
        if self.state == ComposerState::Onboarding {
            self.state = ComposerState::TextEditing;
        }
    }

    /// Chooses the dictation input method and starts a session.
    ///
    /// When the capability is absent the notifier raises a blocking alert,
    /// the transition aborts and the mode stays `Onboarding`. Starting while
    /// a session is already active is rejected without touching that
    /// session.
    pub fn start_recording(
        &mut self,
        recognizer: &mut impl SpeechRecognizer,
        notifier: &impl Notifier,
    ) -> Result<(), ComposerError> {
        if self.session.is_some() {
            warn!("event=recording_start module=composer status=rejected reason=already_active");
            return Err(ComposerError::AlreadyRecording);
        }

        if !recognizer.is_available() {
            notifier.blocking_alert(SPEECH_UNAVAILABLE_MESSAGE);
            info!("event=recording_start module=composer status=aborted reason=unavailable");
            return Err(ComposerError::SpeechUnavailable);
        }

        let session = recognizer
            .start(&self.config)
            .map_err(|_| ComposerError::SpeechUnavailable)?;
        self.session = Some(session);
        self.state = ComposerState::Recording;
        info!(
            "event=recording_start module=composer status=ok lang={}",
            self.config.lang
        );
        Ok(())
    }

    /// Replaces the editor content with manually typed text.
    ///
    /// Editing the text away entirely returns the composer to `Onboarding`.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        if self.state == ComposerState::TextEditing && self.content.is_empty() {
            self.state = ComposerState::Onboarding;
        }
    }

    /// Drains pending session events and folds them into the content.
    ///
    /// Each result event rebuilds the full transcript from the cumulative
    /// segment list and replaces the content with it. Error events are
    /// logged and otherwise ignored. No-op without an active session.
    pub fn pump_speech(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        while let Some(event) = session.try_next_event() {
            match event {
                SpeechEvent::Result(segments) => {
                    self.content = reconstitute_transcript(&segments);
                }
                SpeechEvent::Error(details) => {
                    warn!("event=speech_error module=composer status=logged error={details}");
                }
            }
        }
    }

    /// Ends the recording session, keeping the accumulated transcript.
    ///
    /// The mode becomes `TextEditing`: saving behaves identically to typed
    /// text from here. Safe no-op when no session exists.
    pub fn stop_recording(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.stop();
        self.state = ComposerState::TextEditing;
        info!("event=recording_stop module=composer status=ok");
    }

    /// Saves the current content as a new note on `board`.
    ///
    /// Empty content is silently refused (`Ok(None)`). On success the
    /// content is cleared, the mode resets to `Onboarding` and the board
    /// raises its success toast.
    pub fn save<S: StorageSlot, N: Notifier>(
        &mut self,
        board: &mut NoteBoard<S, N>,
    ) -> StoreResult<Option<NoteId>> {
        if self.content.is_empty() {
            return Ok(None);
        }

        let id = board.create_note(self.content.as_str())?;
        // Saving mid-recording ends the session; Onboarding never has one.
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.content.clear();
        self.state = ComposerState::Onboarding;
        Ok(Some(id))
    }
}
