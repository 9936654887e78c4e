use chrono::Local;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use justice_ai::export::transcript_pdf;
use justice_ai::{ExportError, Message, TranscriptExporter};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Time the browser gets to start the download before the object URL is
/// released.
const REVOKE_DELAY_MS: u32 = 1_000;

/// Renders the transcript to PDF and hands it to the browser as a download.
pub struct PdfDownloadExporter {
    title: String,
    filename: String,
}

impl PdfDownloadExporter {
    pub fn new(title: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filename: filename.into(),
        }
    }
}

fn download_error(value: JsValue) -> ExportError {
    ExportError::Download(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Saves `bytes` under `filename` through a temporary object URL.
fn save(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".to_string()))?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(download_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(download_error)?
        .dyn_into()
        .map_err(|e| download_error(e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke download URL: {e:?}");
        }
    })
    .forget();
    Ok(())
}

impl TranscriptExporter for PdfDownloadExporter {
    fn export(&self, transcript: &[Message]) -> Result<(), ExportError> {
        let bytes = transcript_pdf(&self.title, &Local::now(), transcript)?;
        log::debug!("Saving {} ({} bytes)", self.filename, bytes.len());
        save(&bytes, &self.filename, "application/pdf")
    }
}
