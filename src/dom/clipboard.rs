//! Asynchronous clipboard writes.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::UiError;

/// Write `text` to the system clipboard.
///
/// `navigator.clipboard` is missing outside secure contexts, so it is looked
/// up dynamically rather than assumed.
pub async fn write_text(text: &str) -> Result<(), UiError> {
    let navigator = web_sys::window().ok_or(UiError::ClipboardUnavailable)?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|err| UiError::ClipboardRejected(describe(&err)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(UiError::ClipboardUnavailable);
    }
    let clipboard = clipboard
        .dyn_into::<web_sys::Clipboard>()
        .map_err(|_| UiError::ClipboardUnavailable)?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(drop)
        .map_err(|err| UiError::ClipboardRejected(describe(&err)))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
