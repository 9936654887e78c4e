//! Core of the Justice AI chat client: the session view-model, the
//! capabilities it drives, and the transcript exporter.

pub mod capability;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod service;
pub mod session;

pub use capability::{AnswerService, SpeechCapability, SpeechRecognizer, TranscriptExporter};
pub use config::ChatConfig;
pub use errors::{AnswerError, ExportError, SpeechError};
pub use models::{Message, MessageId, QuickPrompt, Sender, QUICK_PROMPTS};
pub use service::chat_service::{ChatService, SubmitOutcome};
pub use session::{Session, SessionChange, Transcript};
