//! External collaborators of the chat session.
//!
//! Each capability is a trait so the browser implementations in the frontend
//! and the scripted doubles in tests plug into the same [`ChatService`].
//!
//! [`ChatService`]: crate::service::chat_service::ChatService

pub mod answer;
pub mod export;
pub mod speech;

pub use answer::{decode_answer, AnswerService};
pub use export::TranscriptExporter;
pub use speech::{SpeechCapability, SpeechRecognizer};
