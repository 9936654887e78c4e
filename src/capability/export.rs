use crate::errors::ExportError;
use crate::models::Message;

/// Produces a downloadable document from the whole transcript.
pub trait TranscriptExporter {
    fn export(&self, transcript: &[Message]) -> Result<(), ExportError>;
}
