//! Page element lookup and effect application.
//!
//! Elements are queried once at mount. [`PageElements::survey`] reports what
//! was found to the controller, and [`PageElements::apply`] turns controller
//! effects into attribute, class, style, and text changes.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::app::Effect;
use crate::config::{CONFIG_ELEMENT_ID, Config};
use crate::dom::storage;
use crate::page::{CounterSeed, PageSurvey};
use crate::state::section::normalize_section_id;
use crate::state::timeline::year_matches;

const ACTIVE_SECTION: &str = "is-active";
const ACTIVE_YEAR: &str = "active";

/// Log a failed DOM call; page mutations are best-effort.
fn check<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("querying {selector:?} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(el) => Some(el),
            Err(node) => {
                log::debug!("{selector:?} matched a non-element node: {node:?}");
                None
            }
        })
        .collect()
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("querying {selector:?} failed: {err:?}");
            None
        }
    }
}

fn child(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("querying {selector:?} failed: {err:?}");
            None
        }
    }
}

fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        check(html.style().set_property(property, value), "setting style");
    }
}

pub struct PageElements {
    pub document: Document,
    pub nav_buttons: Vec<Element>,
    pub sections: Vec<Element>,
    pub card: Option<Element>,
    pub notification: Option<Element>,
    pub notification_text: Option<Element>,
    pub notification_icon: Option<Element>,
    pub particles: Vec<Element>,
    pub years: Vec<Element>,
    pub timeline_items: Vec<Element>,
    pub prev_year: Option<Element>,
    pub next_year: Option<Element>,
    pub skill_tags: Vec<Element>,
    pub copy_buttons: Vec<Element>,
    pub experience_bar: Option<Element>,
    pub counters: Vec<Element>,
}

impl PageElements {
    /// Look up every element the page features use.
    #[must_use]
    pub fn query(document: Document) -> Self {
        let notification = document.get_element_by_id("notification");
        let notification_text = notification.as_ref().and_then(|n| child(n, ".notification-text"));
        let notification_icon = notification.as_ref().and_then(|n| child(n, ".notification-icon"));
        Self {
            nav_buttons: query_all(&document, ".nav-btn"),
            sections: query_all(&document, ".card-section"),
            card: query_one(&document, ".card"),
            notification,
            notification_text,
            notification_icon,
            particles: query_all(&document, ".particle"),
            years: query_all(&document, ".year"),
            timeline_items: query_all(&document, ".card-item"),
            prev_year: query_one(&document, ".prev-year"),
            next_year: query_one(&document, ".next-year"),
            skill_tags: query_all(&document, ".skill-tag"),
            copy_buttons: query_all(&document, ".contact-copy"),
            experience_bar: query_one(&document, ".experience-progress"),
            counters: query_all(&document, ".stat-value"),
            document,
        }
    }

    /// Config from the inline JSON block, or defaults.
    #[must_use]
    pub fn config(&self) -> Config {
        let raw = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Config::from_json_or_default(raw.as_deref())
    }

    /// Report the page inventory to the controller.
    #[must_use]
    pub fn survey(&self, config: &Config) -> PageSurvey {
        PageSurvey {
            stored_theme: storage::load(&config.storage_key),
            has_notice: self.notification.is_some(),
            has_card: self.card.is_some(),
            sections: self.sections.iter().map(Element::id).collect(),
            nav_targets: self
                .nav_buttons
                .iter()
                .filter_map(|btn| btn.get_attribute("data-section"))
                .collect(),
            initial_section: self
                .sections
                .iter()
                .find(|s| s.class_list().contains(ACTIVE_SECTION))
                .map(Element::id),
            particle_count: self.particles.len(),
            years: self.years.iter().filter_map(|y| y.get_attribute("data-year")).collect(),
            has_progress: self.experience_bar.is_some(),
            progress_level: self.experience_bar.as_ref().and_then(|bar| bar.get_attribute("data-level")),
            counters: self
                .counters
                .iter()
                .map(|el| CounterSeed {
                    count: el.get_attribute("data-count"),
                    text: el.text_content().unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Apply one controller effect.
    pub fn apply(&self, effect: &Effect, storage_key: &str) {
        match effect {
            Effect::ApplyTheme { theme } => {
                if let Some(root) = self.document.document_element() {
                    check(root.set_attribute("data-theme", theme.as_str()), "setting data-theme");
                }
                storage::save(storage_key, theme.as_str());
            }
            Effect::ShowNotice { text, icon_class } => {
                let Some(notification) = &self.notification else {
                    return;
                };
                if let Some(el) = &self.notification_text {
                    el.set_text_content(Some(text.as_str()));
                }
                if let Some(el) = &self.notification_icon {
                    el.set_class_name(icon_class);
                }
                check(notification.class_list().add_1("show"), "showing notification");
            }
            Effect::HideNotice => {
                if let Some(notification) = &self.notification {
                    check(notification.class_list().remove_1("show"), "hiding notification");
                }
            }
            Effect::BeginSwitch => self.begin_switch(),
            Effect::FinishSwitch { section } => self.finish_switch(section),
            Effect::SelectYear { year } => {
                for el in self.years.iter().chain(&self.timeline_items) {
                    let active = el.get_attribute("data-year").is_some_and(|raw| year_matches(&raw, year));
                    check(el.class_list().toggle_with_force(ACTIVE_YEAR, active), "toggling year");
                }
            }
            Effect::MoveParticles { transforms } => {
                for (el, transform) in self.particles.iter().zip(transforms) {
                    set_style(el, "transform", transform);
                }
            }
            Effect::SetProgressWidth { width } => {
                if let Some(bar) = &self.experience_bar {
                    set_style(bar, "width", width);
                }
            }
            Effect::SetCounterText { index, text } => {
                if let Some(el) = self.counters.get(*index) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
        }
    }

    fn begin_switch(&self) {
        let Some(card) = &self.card else {
            return;
        };
        check(card.set_attribute("data-loading", "true"), "marking card loading");
        if let Some(parent) = card.parent_element() {
            check(parent.class_list().add_1("switching"), "marking switch");
        }
        for section in &self.sections {
            check(section.class_list().remove_1(ACTIVE_SECTION), "deactivating section");
        }
        for btn in &self.nav_buttons {
            check(btn.class_list().remove_1(ACTIVE_SECTION), "deactivating nav button");
            check(btn.remove_attribute("aria-current"), "clearing aria-current");
        }
    }

    fn finish_switch(&self, section: &str) {
        let Some(card) = &self.card else {
            return;
        };
        let target = self.sections.iter().find(|s| s.id() == section);
        let button = self.nav_buttons.iter().find(|btn| {
            btn.get_attribute("data-section")
                .is_some_and(|raw| normalize_section_id(&raw) == section)
        });
        let (Some(target), Some(button)) = (target, button) else {
            log::debug!("section {section:?} vanished before reveal");
            return;
        };
        check(target.class_list().add_1(ACTIVE_SECTION), "activating section");
        check(button.class_list().add_1(ACTIVE_SECTION), "activating nav button");
        check(button.set_attribute("aria-current", "page"), "setting aria-current");
        check(card.set_attribute("data-state", section), "recording section");
        check(card.set_attribute("data-loading", "false"), "clearing loading");
        if let Some(parent) = card.parent_element() {
            check(parent.class_list().remove_1("switching"), "clearing switch");
        }
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        card.scroll_to_with_scroll_to_options(&options);
    }
}
