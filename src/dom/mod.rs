//! Browser entry points (`hydrate` feature only).
//!
//! The page loads the generated module and calls [`mount`] once the document
//! is parsed. The returned [`Portfolio`] handle exposes the controller
//! operations future controls may need, such as a theme toggle.

pub mod clipboard;
pub mod host;
pub mod page;
pub mod storage;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::dom::host::Runtime;
use crate::dom::page::PageElements;
use crate::state::notice::Severity;

/// Module start hook: panic messages and `log` output go to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
}

/// Wire every page feature. Features whose markup is missing stay inert.
///
/// # Errors
///
/// Fails only when there is no `window.document`.
#[wasm_bindgen]
pub fn mount() -> Result<Portfolio, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let page = PageElements::query(document);
    let config = page.config();
    let survey = page.survey(&config);
    let runtime = Runtime::new(App::new(config, survey), page);
    runtime.bind();
    runtime.dispatch(App::start);
    Ok(Portfolio { runtime })
}

/// Handle to the mounted page.
#[wasm_bindgen]
pub struct Portfolio {
    runtime: Rc<Runtime>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Apply and persist a theme by name.
    ///
    /// # Errors
    ///
    /// Rejects names outside the theme set.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, name: &str) -> Result<(), JsValue> {
        let mut outcome = Ok(());
        self.runtime.dispatch(|app, _| match app.set_theme(name) {
            Ok(effects) => effects,
            Err(err) => {
                outcome = Err(JsValue::from_str(&err.to_string()));
                Vec::new()
            }
        });
        outcome
    }

    /// Current theme name.
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.runtime.with_app(|app| app.theme().as_str().to_owned())
    }

    /// Show a notification; `severity` is `info`, `success`, `error`, or `warning`.
    pub fn notify(&self, message: &str, severity: Option<String>) {
        let severity = severity.as_deref().map(Severity::parse).unwrap_or_default();
        self.runtime.dispatch(|app, now| app.notify(message, severity, now));
    }

    #[wasm_bindgen(js_name = switchTo)]
    pub fn switch_to(&self, section: &str) {
        self.runtime.dispatch(|app, now| app.switch_to(section, now));
    }

    #[wasm_bindgen(js_name = selectYear)]
    pub fn select_year(&self, year: &str) {
        self.runtime.dispatch(|app, _| app.select_year(year));
    }
}
