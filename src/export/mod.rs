//! PDF export of a chat transcript.

pub mod font;
pub mod layout;
pub mod pdf;

use chrono::{DateTime, TimeZone};

use crate::errors::ExportError;
use crate::models::Message;

pub use layout::{layout_transcript, wrap_text};
pub use pdf::render_pdf;

/// Lays out and renders `messages` under a title and generation timestamp.
pub fn transcript_pdf<Tz>(
    title: &str,
    generated_at: &DateTime<Tz>,
    messages: &[Message],
) -> Result<Vec<u8>, ExportError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let generated_on = generated_at.format("%d/%m/%Y, %-I:%M:%S %P").to_string();
    let pages = layout_transcript(title, &generated_on, messages);
    tracing::debug!("Rendering transcript of {} messages on {} pages", messages.len(), pages.len());
    render_pdf(title, &pages)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::models::{MessageId, Sender};

    #[test]
    fn test_transcript_pdf_renders() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let at = ist.with_ymd_and_hms(2026, 10, 19, 15, 4, 5).unwrap();
        let messages = [
            Message::new(MessageId(1), Sender::Bot, "Greetings."),
            Message::new(MessageId(2), Sender::User, "Hi"),
            Message::new(MessageId(3), Sender::Bot, "Hello"),
        ];

        let bytes = transcript_pdf("Justice AI - Legal Consultation", &at, &messages).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_generated_on_format() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let at = ist.with_ymd_and_hms(2026, 10, 19, 15, 4, 5).unwrap();
        let stamp = at.format("%d/%m/%Y, %-I:%M:%S %P").to_string();
        assert_eq!(stamp, "19/10/2026, 3:04:05 pm");

        let pages = layout_transcript("T", &stamp, &[]);
        assert!(pages[0].texts().any(|t| t == "Generated on: 19/10/2026, 3:04:05 pm"));
    }
}
