use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::{self, Sender};
use vocanote_core::{
    Composer, ComposerError, ComposerState, MemorySlot, NoteBoard, Notifier, RecognitionSession,
    RecognizerConfig, SpeechError, SpeechEvent, SpeechRecognizer, TranscriptSegment,
    SPEECH_UNAVAILABLE_MESSAGE,
};

#[derive(Clone, Default)]
struct CapturedNotifier {
    toasts: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Notifier for CapturedNotifier {
    fn toast_success(&self, message: &str) {
        self.toasts.borrow_mut().push(message.to_string());
    }

    fn blocking_alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Scripted stand-in for the platform dictation service.
#[derive(Clone)]
struct ScriptedRecognizer {
    available: bool,
    sender: Rc<RefCell<Option<Sender<SpeechEvent>>>>,
    stop_requests: Rc<Cell<u32>>,
    last_config: Rc<RefCell<Option<RecognizerConfig>>>,
}

impl ScriptedRecognizer {
    fn new(available: bool) -> Self {
        Self {
            available,
            sender: Rc::default(),
            stop_requests: Rc::default(),
            last_config: Rc::default(),
        }
    }

    fn emit(&self, event: SpeechEvent) {
        self.sender
            .borrow()
            .as_ref()
            .expect("no active session to emit into")
            .send(event)
            .unwrap();
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, config: &RecognizerConfig) -> Result<RecognitionSession, SpeechError> {
        if !self.available {
            return Err(SpeechError::Unavailable);
        }
        *self.last_config.borrow_mut() = Some(config.clone());
        let (tx, rx) = mpsc::channel();
        *self.sender.borrow_mut() = Some(tx);
        let stop_requests = self.stop_requests.clone();
        Ok(RecognitionSession::new(rx, move || {
            stop_requests.set(stop_requests.get() + 1);
        }))
    }
}

fn board() -> NoteBoard<MemorySlot, CapturedNotifier> {
    NoteBoard::open(MemorySlot::new(), CapturedNotifier::default()).unwrap()
}

fn cumulative(parts: &[&str]) -> SpeechEvent {
    SpeechEvent::Result(parts.iter().map(|p| TranscriptSegment::single(*p)).collect())
}

#[test]
fn typing_flow_walks_onboarding_to_editing_and_back() {
    let mut composer = Composer::new();
    assert_eq!(composer.state(), ComposerState::Onboarding);

    composer.start_typing();
    assert_eq!(composer.state(), ComposerState::TextEditing);

    composer.set_content("rascunho");
    assert_eq!(composer.content(), "rascunho");

    composer.set_content("");
    assert_eq!(composer.state(), ComposerState::Onboarding);
}

#[test]
fn save_with_empty_content_is_a_silent_noop() {
    let mut composer = Composer::new();
    let mut board = board();
    composer.start_typing();

    assert_eq!(composer.save(&mut board).unwrap(), None);
    assert!(board.notes().is_empty());
}

#[test]
fn save_creates_note_clears_editor_and_resets_state() {
    let mut composer = Composer::new();
    let mut board = board();
    composer.start_typing();
    composer.set_content("comprar leite");

    let id = composer.save(&mut board).unwrap().unwrap();

    assert_eq!(board.notes()[0].id, id);
    assert_eq!(board.notes()[0].content, "comprar leite");
    assert_eq!(composer.content(), "");
    assert_eq!(composer.state(), ComposerState::Onboarding);
}

#[test]
fn recording_without_capability_stays_onboarding_with_alert() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(false);
    let notifier = CapturedNotifier::default();

    let result = composer.start_recording(&mut recognizer, &notifier);

    assert_eq!(result, Err(ComposerError::SpeechUnavailable));
    assert_eq!(composer.state(), ComposerState::Onboarding);
    assert_eq!(
        notifier.alerts.borrow().as_slice(),
        [SPEECH_UNAVAILABLE_MESSAGE]
    );
}

#[test]
fn recording_uses_fixed_continuous_interim_config() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();

    composer.start_recording(&mut recognizer, &notifier).unwrap();

    let config = recognizer.last_config.borrow().clone().unwrap();
    assert_eq!(config, RecognizerConfig::default());
    assert_eq!(composer.state(), ComposerState::Recording);
}

#[test]
fn result_events_replace_content_with_cumulative_transcript() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    recognizer.emit(cumulative(&["comprar "]));
    composer.pump_speech();
    assert_eq!(composer.content(), "comprar ");

    // Each event carries the whole segment list so far, not a delta.
    recognizer.emit(cumulative(&["comprar ", "leite e "]));
    recognizer.emit(cumulative(&["comprar ", "leite e ", "pão"]));
    composer.pump_speech();
    assert_eq!(composer.content(), "comprar leite e pão");
}

#[test]
fn error_events_are_logged_only_and_change_nothing() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    recognizer.emit(cumulative(&["texto"]));
    recognizer.emit(SpeechEvent::Error("network".to_string()));
    composer.pump_speech();

    assert_eq!(composer.state(), ComposerState::Recording);
    assert_eq!(composer.content(), "texto");
    assert!(notifier.alerts.borrow().is_empty());
}

#[test]
fn stop_recording_keeps_transcript_and_becomes_text_editing() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    recognizer.emit(cumulative(&["nota ditada"]));
    composer.pump_speech();
    composer.stop_recording();

    assert_eq!(recognizer.stop_requests.get(), 1);
    assert_eq!(composer.state(), ComposerState::TextEditing);
    assert_eq!(composer.content(), "nota ditada");
    assert!(!composer.is_recording());

    // Stop without a session is a safe no-op.
    composer.stop_recording();
    assert_eq!(recognizer.stop_requests.get(), 1);
}

#[test]
fn starting_a_second_session_is_rejected() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    let second = composer.start_recording(&mut recognizer, &notifier);

    assert_eq!(second, Err(ComposerError::AlreadyRecording));
    assert_eq!(composer.state(), ComposerState::Recording);
}

#[test]
fn save_mid_recording_stops_the_session_and_creates_the_note() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    let mut board = board();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    recognizer.emit(cumulative(&["nota por voz"]));
    composer.pump_speech();
    let id = composer.save(&mut board).unwrap().unwrap();

    assert_eq!(board.notes()[0].id, id);
    assert_eq!(board.notes()[0].content, "nota por voz");
    assert_eq!(recognizer.stop_requests.get(), 1);
    assert_eq!(composer.state(), ComposerState::Onboarding);
    assert!(!composer.is_recording());
}

#[test]
fn dictated_then_saved_note_is_searchable() {
    let mut composer = Composer::new();
    let mut recognizer = ScriptedRecognizer::new(true);
    let notifier = CapturedNotifier::default();
    let mut board = board();
    composer.start_recording(&mut recognizer, &notifier).unwrap();

    recognizer.emit(cumulative(&["Reunião com o time"]));
    composer.pump_speech();
    composer.stop_recording();
    composer.save(&mut board).unwrap().unwrap();

    board.set_search_query("reunião");
    assert_eq!(board.visible_notes().len(), 1);
}
