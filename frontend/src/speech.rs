use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Array, Function, Reflect};
use justice_ai::{SpeechCapability, SpeechError, SpeechRecognizer};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Constructor names looked up on `window`, standard first.
const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Web Speech API recognizer, driven through reflection because the
/// prefixed constructor has no typed binding.
pub struct BrowserSpeechRecognizer {
    constructor: Function,
}

/// Looks up a speech recognition constructor on `window`.
pub fn detect() -> SpeechCapability<BrowserSpeechRecognizer> {
    let Some(window) = web_sys::window() else {
        return SpeechCapability::Unavailable;
    };

    CONSTRUCTORS
        .iter()
        .find_map(|name| {
            Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok())
        })
        .map(|constructor| BrowserSpeechRecognizer { constructor })
        .into()
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String, SpeechError>>>>>;

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SpeechError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| SpeechError::Start(js_error(e)))
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let best = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&best, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

fn deliver(reply: &Reply, result: Result<String, SpeechError>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

impl SpeechRecognizer for BrowserSpeechRecognizer {
    async fn recognize_once(&self, locale: &str) -> Result<String, SpeechError> {
        let recognition = Reflect::construct(&self.constructor, &Array::new())
            .map_err(|e| SpeechError::Start(js_error(e)))?;
        set(&recognition, "lang", &JsValue::from_str(locale))?;

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let on_result = Closure::<dyn Fn(JsValue)>::new({
            let reply = reply.clone();
            move |event: JsValue| {
                let result = first_transcript(&event).ok_or(SpeechError::NoResult);
                deliver(&reply, result);
            }
        });
        let on_error = Closure::<dyn Fn(JsValue)>::new({
            let reply = reply.clone();
            move |event: JsValue| {
                let reason = Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| "unknown".to_string());
                deliver(&reply, Err(SpeechError::Recognition(reason)));
            }
        });
        let on_end = Closure::<dyn Fn()>::new({
            let reply = reply.clone();
            move || deliver(&reply, Err(SpeechError::NoResult))
        });

        set(&recognition, "onresult", on_result.as_ref())?;
        set(&recognition, "onerror", on_error.as_ref())?;
        set(&recognition, "onend", on_end.as_ref())?;

        let start = Reflect::get(&recognition, &JsValue::from_str("start"))
            .and_then(|f| f.dyn_into::<Function>())
            .map_err(|e| SpeechError::Start(js_error(e)))?;
        start
            .call0(&recognition)
            .map_err(|e| SpeechError::Start(js_error(e)))?;

        let result = rx.await.unwrap_or(Err(SpeechError::NoResult));

        // Detach before the closures are dropped.
        for handler in ["onresult", "onerror", "onend"] {
            let _ = Reflect::set(&recognition, &JsValue::from_str(handler), &JsValue::NULL);
        }

        result
    }
}
