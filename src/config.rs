/// Fixed texts and names used by the chat session and its exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Seeded bot message that opens every transcript.
    pub greeting: String,
    /// Bot reply recorded when the answer service fails for any reason.
    pub fallback_reply: String,
    /// BCP 47 tag handed to the speech recognizer.
    pub speech_locale: String,
    pub voice_unavailable_notice: String,
    pub export_title: String,
    pub export_filename: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: "Greetings. I am Justice AI. I can assist you with Indian legal procedures, \
                       FIRs, and fundamental rights. How may I help you?"
                .to_string(),
            fallback_reply: "⚠️ Server connection failed.".to_string(),
            speech_locale: "en-IN".to_string(),
            voice_unavailable_notice: "Voice input is supported in Chrome/Edge/Safari.".to_string(),
            export_title: "Justice AI - Legal Consultation".to_string(),
            export_filename: "JusticeAI_Transcript.pdf".to_string(),
        }
    }
}
