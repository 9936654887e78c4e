use std::time::Duration;

use thiserror::Error;

/// Failure of one round-trip to the answer service.
///
/// Every variant collapses to the same fallback reply in the transcript; the
/// distinction only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    MalformedPayload(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl AnswerError {
    /// Whether a later attempt could plausibly succeed. Used only to pick a
    /// log level; nothing is retried.
    pub fn is_transient(&self) -> bool {
        match self {
            AnswerError::Network(_) | AnswerError::Timeout(_) => true,
            AnswerError::Status(code) => *code >= 500,
            AnswerError::MalformedPayload(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not available on this platform")]
    Unavailable,

    #[error("failed to start speech recognition: {0}")]
    Start(String),

    #[error("speech recognition failed: {0}")]
    Recognition(String),

    #[error("speech recognition ended without a result")]
    NoResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("failed to render transcript: {0}")]
    Render(String),

    #[error("failed to deliver transcript: {0}")]
    Download(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_error_display() {
        assert_eq!(
            AnswerError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(AnswerError::Status(502).to_string(), "Server error: 502");
        assert_eq!(
            AnswerError::Timeout(Duration::from_secs(30)).to_string(),
            "Request timed out after 30s"
        );
    }

    #[test]
    fn test_answer_error_transient_classification() {
        assert!(AnswerError::Network(String::new()).is_transient());
        assert!(AnswerError::Timeout(Duration::from_secs(1)).is_transient());
        assert!(AnswerError::Status(503).is_transient());
        assert!(!AnswerError::Status(404).is_transient());
        assert!(!AnswerError::MalformedPayload("eof".into()).is_transient());
    }

    #[test]
    fn test_speech_and_export_error_display() {
        assert_eq!(
            SpeechError::Unavailable.to_string(),
            "speech recognition is not available on this platform"
        );
        assert_eq!(
            SpeechError::Recognition("no-speech".into()).to_string(),
            "speech recognition failed: no-speech"
        );
        assert_eq!(
            ExportError::Render("font".into()).to_string(),
            "failed to render transcript: font"
        );
    }
}
