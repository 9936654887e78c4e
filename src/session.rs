//! Session state owned by the chat view-model.

use crate::models::{Message, MessageId, Sender};

/// Ordered, append-only list of messages. Always holds at least the greeting.
#[allow(clippy::len_without_is_empty)]
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    fn seeded(greeting: Message) -> Self {
        Self { messages: vec![greeting] }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// True once anything beyond the greeting has been recorded.
    pub fn has_exchanges(&self) -> bool {
        self.messages.len() > 1
    }
}

/// Which parts of a [`Session`] one update touched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionChange {
    pub transcript: bool,
    pub input: bool,
    pub awaiting_response: bool,
    pub notice: bool,
}

impl SessionChange {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// State of a session before an update, compared against it afterwards.
/// The transcript is append-only, so its length is enough.
pub(crate) struct SessionMark {
    transcript_len: usize,
    input: String,
    awaiting_response: bool,
    notice: Option<String>,
}

impl SessionMark {
    pub(crate) fn changes(&self, session: &Session) -> SessionChange {
        SessionChange {
            transcript: self.transcript_len != session.transcript.len(),
            input: self.input != session.input,
            awaiting_response: self.awaiting_response != session.awaiting_response,
            notice: self.notice != session.notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    transcript: Transcript,
    input: String,
    awaiting_response: bool,
    notice: Option<String>,
    next_id: u64,
}

impl Session {
    pub fn new(greeting: &str) -> Self {
        let seed = Message::new(MessageId(1), Sender::Bot, greeting);
        Self {
            transcript: Transcript::seeded(seed),
            input: String::new(),
            awaiting_response: false,
            notice: None,
            next_id: 2,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn mark(&self) -> SessionMark {
        SessionMark {
            transcript_len: self.transcript.len(),
            input: self.input.clone(),
            awaiting_response: self.awaiting_response,
            notice: self.notice.clone(),
        }
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn push_user(&mut self, text: &str) {
        let id = self.allocate_id();
        self.transcript.push(Message::new(id, Sender::User, text));
    }

    pub(crate) fn push_bot(&mut self, text: String) {
        let id = self.allocate_id();
        self.transcript.push(Message::new(id, Sender::Bot, text));
    }

    pub(crate) fn push_bot_error(&mut self, text: &str) {
        let id = self.allocate_id();
        self.transcript.push(Message::error(id, text));
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub(crate) fn set_awaiting_response(&mut self, awaiting: bool) {
        self.awaiting_response = awaiting;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}
