use std::rc::Rc;

use justice_ai::{ChatConfig, ChatService, Message, SpeechError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpAnswerService;
use crate::config;
use crate::download::PdfDownloadExporter;
use crate::speech::{self, BrowserSpeechRecognizer};

type JusticeChat = ChatService<HttpAnswerService, BrowserSpeechRecognizer, PdfDownloadExporter>;

/// Shared application state, provided via Leptos context.
///
/// The chat session lives in [`ChatService`]; the signals mirror it so
/// components can subscribe.
#[derive(Clone, Copy)]
pub struct AppState {
    pub messages: ReadSignal<Vec<Message>>,
    pub input: ReadSignal<String>,
    pub awaiting_response: ReadSignal<bool>,
    pub notice: ReadSignal<Option<String>>,
    service: StoredValue<Rc<JusticeChat>, LocalStorage>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let chat_config = ChatConfig::default();
        let exporter = PdfDownloadExporter::new(
            chat_config.export_title.clone(),
            chat_config.export_filename.clone(),
        );
        let answers = HttpAnswerService::new(config::chat_url(), config::REQUEST_TIMEOUT);
        let speech = speech::detect();
        if !speech.is_available() {
            log::info!("Speech recognition not available in this browser");
        }

        let service = ChatService::new(chat_config, answers, speech, exporter);
        let initial = service.snapshot();

        let (messages, set_messages) = signal(initial.transcript().messages().to_vec());
        let (input, set_input) = signal(initial.input().to_string());
        let (awaiting_response, set_awaiting_response) = signal(initial.is_awaiting_response());
        let (notice, set_notice) = signal(initial.notice().map(str::to_string));

        let service = service.with_observer(move |session, change| {
            if change.transcript {
                set_messages.set(session.transcript().messages().to_vec());
            }
            if change.input {
                set_input.set(session.input().to_string());
            }
            if change.awaiting_response {
                set_awaiting_response.set(session.is_awaiting_response());
            }
            if change.notice {
                set_notice.set(session.notice().map(str::to_string));
            }
        });

        let state = Self {
            messages,
            input,
            awaiting_response,
            notice,
            service: StoredValue::new_local(Rc::new(service)),
        };

        provide_context(state);
        state
    }

    fn service(&self) -> Rc<JusticeChat> {
        self.service.get_value()
    }

    pub fn set_input(&self, text: String) {
        self.service().set_input(text);
    }

    /// Send the current contents of the input box.
    pub fn send_input(&self) {
        self.send(self.service().input());
    }

    pub fn send(&self, text: String) {
        let service = self.service();
        if service.is_awaiting_response() {
            return;
        }
        spawn_local(async move {
            let outcome = service.submit(&text).await;
            log::debug!("Submit finished: {outcome:?}");
        });
    }

    pub fn start_listening(&self) {
        let service = self.service();
        spawn_local(async move {
            match service.request_voice_input().await {
                Ok(()) | Err(SpeechError::Unavailable) => {}
                Err(e) => log::warn!("Voice input failed: {e}"),
            }
        });
    }

    pub fn download_transcript(&self) {
        if let Err(e) = self.service().export_transcript() {
            log::error!("Failed to export transcript: {e}");
        }
    }

    pub fn dismiss_notice(&self) {
        self.service().dismiss_notice();
    }

    /// Reactive; the answer comes from the service.
    pub fn can_export(&self) -> bool {
        self.messages.track();
        self.service().can_export()
    }

    /// Reactive; the answer comes from the service.
    pub fn quick_prompts_visible(&self) -> bool {
        self.messages.track();
        self.awaiting_response.track();
        self.service().quick_prompts_visible()
    }
}
