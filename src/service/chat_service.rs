use std::cell::RefCell;

use tracing::{debug, error, info, warn};

use crate::capability::{AnswerService, SpeechCapability, SpeechRecognizer, TranscriptExporter};
use crate::config::ChatConfig;
use crate::errors::{ExportError, SpeechError};
use crate::session::{Session, SessionChange};

/// What happened to one `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The text was blank; nothing changed.
    Ignored,
    Answered,
    /// The fallback reply was recorded.
    Failed,
}

type Observer = Box<dyn Fn(&Session, SessionChange)>;

/// View-model of one chat session.
///
/// Owns the [`Session`] and mediates the answer service, the speech
/// recognizer and the transcript exporter. Single-threaded: the session sits
/// in a `RefCell` and is never borrowed across an `.await`.
pub struct ChatService<A, R, X> {
    config: ChatConfig,
    answers: A,
    speech: SpeechCapability<R>,
    exporter: X,
    session: RefCell<Session>,
    observer: Option<Observer>,
}

impl<A, R, X> ChatService<A, R, X> {
    pub fn new(config: ChatConfig, answers: A, speech: SpeechCapability<R>, exporter: X) -> Self {
        let session = Session::new(&config.greeting);
        Self {
            config,
            answers,
            speech,
            exporter,
            session: RefCell::new(session),
            observer: None,
        }
    }

    /// Registers a callback run with the session after every update that
    /// changed it, along with what changed.
    pub fn with_observer(mut self, observer: impl Fn(&Session, SessionChange) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn input(&self) -> String {
        self.session.borrow().input().to_string()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.session.borrow().is_awaiting_response()
    }

    pub fn can_export(&self) -> bool {
        self.session.borrow().transcript().has_exchanges()
    }

    pub fn quick_prompts_visible(&self) -> bool {
        let session = self.session.borrow();
        !session.transcript().has_exchanges() && !session.is_awaiting_response()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.set_input(text));
    }

    pub fn dismiss_notice(&self) {
        self.update(|s| s.set_notice(None));
    }

    fn update<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        let Some(observer) = &self.observer else {
            return f(&mut self.session.borrow_mut());
        };

        let mark = self.session.borrow().mark();
        let out = f(&mut self.session.borrow_mut());
        let session = self.session.borrow();
        let change = mark.changes(&session);
        if !change.is_empty() {
            observer(&session, change);
        }
        out
    }
}

impl<A, R, X> ChatService<A, R, X>
where
    A: AnswerService,
    R: SpeechRecognizer,
    X: TranscriptExporter,
{
    /// Records `text` as a user message, asks the answer service, and records
    /// the reply (or the fallback reply on failure).
    ///
    /// Blank input is ignored. The service receives `text` as given; the
    /// transcript keeps the trimmed form.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        }

        self.update(|s| {
            s.push_user(trimmed);
            s.set_input(String::new());
            s.set_awaiting_response(true);
        });
        let _awaiting = AwaitingResponse { service: self };

        match self.answers.answer(text).await {
            Ok(answer) => {
                info!("Answer received ({} chars)", answer.len());
                self.update(|s| s.push_bot(answer));
                SubmitOutcome::Answered
            }
            Err(e) => {
                if e.is_transient() {
                    warn!("Answer service unavailable: {e}");
                } else {
                    error!("Answer service failed: {e}");
                }
                let fallback = &self.config.fallback_reply;
                self.update(|s| s.push_bot_error(fallback));
                SubmitOutcome::Failed
            }
        }
    }

    /// Listens once and replaces the input buffer with what was heard.
    ///
    /// When the host has no speech support the session notice is set and
    /// [`SpeechError::Unavailable`] is returned.
    pub async fn request_voice_input(&self) -> Result<(), SpeechError> {
        let recognizer = match &self.speech {
            SpeechCapability::Available(recognizer) => recognizer,
            SpeechCapability::Unavailable => {
                warn!("Voice input requested but speech recognition is unavailable");
                let notice = self.config.voice_unavailable_notice.clone();
                self.update(|s| s.set_notice(Some(notice)));
                return Err(SpeechError::Unavailable);
            }
        };

        let transcript = recognizer
            .recognize_once(&self.config.speech_locale)
            .await?;
        debug!("Recognized {} chars of speech", transcript.len());
        self.update(|s| s.set_input(transcript));
        Ok(())
    }

    /// Hands the transcript to the exporter.
    ///
    /// Returns `Ok(false)` without touching the exporter while only the
    /// greeting is present.
    pub fn export_transcript(&self) -> Result<bool, ExportError> {
        let session = self.session.borrow();
        let transcript = session.transcript();
        if !transcript.has_exchanges() {
            debug!("Nothing to export yet");
            return Ok(false);
        }

        self.exporter.export(transcript.messages())?;
        info!("Exported transcript of {} messages", transcript.len());
        Ok(true)
    }
}

/// Clears the awaiting-response flag when the request scope ends, including
/// when the submit future is dropped mid-flight.
struct AwaitingResponse<'a, A, R, X> {
    service: &'a ChatService<A, R, X>,
}

impl<A, R, X> Drop for AwaitingResponse<'_, A, R, X> {
    fn drop(&mut self) {
        self.service.update(|s| s.set_awaiting_response(false));
    }
}
