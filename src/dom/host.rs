//! Runtime glue: listeners, the timer pump, and effect dispatch.
//!
//! ARCHITECTURE
//! ============
//! One [`Runtime`] lives for the page lifetime. Every input (click, pointer
//! move, clipboard completion, timer) goes through [`Runtime::dispatch`],
//! which runs a controller operation with the current time, applies the
//! returned effects, and re-arms a single `Timeout` for the controller's next
//! deadline. Replacing the `Timeout` cancels the previous one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, MouseEvent};

use crate::app::{App, Effect};
use crate::dom::clipboard;
use crate::dom::page::PageElements;
use crate::scheduler::deadline_changed;
use crate::util::format::copy_payload;

pub struct Runtime {
    app: RefCell<App>,
    page: PageElements,
    storage_key: String,
    pending: RefCell<Option<Timeout>>,
    /// Deadline the pending `Timeout` wakes for.
    armed: Cell<Option<f64>>,
}

impl Runtime {
    #[must_use]
    pub fn new(app: App, page: PageElements) -> Rc<Self> {
        let storage_key = app.config().storage_key.clone();
        Rc::new(Self { app: RefCell::new(app), page, storage_key, pending: RefCell::new(None), armed: Cell::new(None) })
    }

    /// Run `op` against the controller and apply what it returns.
    pub fn dispatch(self: &Rc<Self>, op: impl FnOnce(&mut App, f64) -> Vec<Effect>) {
        let now = Date::now();
        let effects = op(&mut self.app.borrow_mut(), now);
        self.apply(&effects);
        self.rearm(now);
    }

    pub fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            self.page.apply(effect, &self.storage_key);
        }
    }

    /// Read-only access to the controller.
    pub fn with_app<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        f(&self.app.borrow())
    }

    /// Point the pending `Timeout` at the controller's next deadline. Pointer
    /// moves and clicks that leave the deadline unchanged keep the armed timer.
    fn rearm(self: &Rc<Self>, now: f64) {
        let next = self.app.borrow().next_deadline();
        if !deadline_changed(self.armed.get(), next) {
            return;
        }
        let timeout = next.map(|at| {
            let runtime = Rc::clone(self);
            Timeout::new(delay_ms(at - now), move || {
                // Fired: whatever comes next must arm a fresh timer.
                runtime.armed.set(None);
                runtime.dispatch(App::tick);
            })
        });
        self.armed.set(next);
        self.pending.replace(timeout);
    }

    /// Attach every listener the page's markup supports.
    pub fn bind(self: &Rc<Self>) {
        let caps = self.with_app(App::capabilities);

        if caps.particles {
            let runtime = Rc::clone(self);
            listen_mouse(&self.page.document, "mousemove", move |ev: MouseEvent| {
                let (w, h) = viewport();
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                runtime.dispatch(|app, _| app.pointer_moved(x, y, w, h));
            });
        }

        if caps.sections {
            for btn in &self.page.nav_buttons {
                let runtime = Rc::clone(self);
                let target = btn.clone();
                listen_click(btn, move || {
                    if let Some(section) = target.get_attribute("data-section") {
                        runtime.dispatch(|app, now| app.switch_to(&section, now));
                    }
                });
            }
        }

        if caps.timeline {
            self.bind_timeline();
        }

        for tag in &self.page.skill_tags {
            let runtime = Rc::clone(self);
            let target = tag.clone();
            listen_click(tag, move || {
                let text = target.text_content().unwrap_or_default();
                let level = target.get_attribute("data-skill");
                runtime.dispatch(|app, now| app.skill_selected(&text, level.as_deref(), now));
            });
        }

        for btn in &self.page.copy_buttons {
            let runtime = Rc::clone(self);
            let target = btn.clone();
            listen_click(btn, move || {
                let Some(text) = copy_payload(target.get_attribute("data-text")) else {
                    return;
                };
                let runtime = Rc::clone(&runtime);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = clipboard::write_text(&text).await;
                    runtime.dispatch(|app, now| app.copy_finished(result, now));
                });
            });
        }
    }

    fn bind_timeline(self: &Rc<Self>) {
        for el in self.page.years.iter().chain(&self.page.timeline_items) {
            let runtime = Rc::clone(self);
            let target = el.clone();
            listen_click(el, move || {
                if let Some(year) = target.get_attribute("data-year") {
                    runtime.dispatch(|app, _| app.select_year(&year));
                }
            });
        }
        if let Some(prev) = &self.page.prev_year {
            let runtime = Rc::clone(self);
            listen_click(prev, move || runtime.dispatch(|app, _| app.prev_year()));
        }
        if let Some(next) = &self.page.next_year {
            let runtime = Rc::clone(self);
            listen_click(next, move || runtime.dispatch(|app, _| app.next_year()));
        }
    }
}

/// Listeners live as long as the page, so their closures are leaked on purpose.
fn listen_click(el: &Element, handler: impl FnMut() + 'static) {
    let cb = Closure::<dyn FnMut()>::new(handler);
    if let Err(err) = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        log::debug!("binding click failed: {err:?}");
        return;
    }
    cb.forget();
}

fn listen_mouse(target: &EventTarget, event: &str, handler: impl FnMut(MouseEvent) + 'static) {
    let cb = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::debug!("binding {event} failed: {err:?}");
        return;
    }
    cb.forget();
}

fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let extent = |value: Result<JsValue, JsValue>| match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("reading viewport size failed: {err:?}");
            0.0
        }
    };
    (extent(window.inner_width()), extent(window.inner_height()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn delay_ms(ms: f64) -> u32 {
    ms.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}
