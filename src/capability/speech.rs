use crate::errors::SpeechError;

/// One-shot speech-to-text.
#[allow(async_fn_in_trait)]
pub trait SpeechRecognizer {
    /// Listens once and resolves with the top hypothesis of the first result.
    async fn recognize_once(&self, locale: &str) -> Result<String, SpeechError>;
}

/// Speech input as detected on the host, resolved once at startup.
pub enum SpeechCapability<R> {
    Available(R),
    Unavailable,
}

impl<R> SpeechCapability<R> {
    pub fn is_available(&self) -> bool {
        matches!(self, SpeechCapability::Available(_))
    }
}

impl<R> From<Option<R>> for SpeechCapability<R> {
    fn from(recognizer: Option<R>) -> Self {
        match recognizer {
            Some(r) => SpeechCapability::Available(r),
            None => SpeechCapability::Unavailable,
        }
    }
}
