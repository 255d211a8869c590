//! Inventory of the page markup, taken once at mount.
//!
//! The browser layer fills a [`PageSurvey`] from the document; the controller
//! derives from it which features are live. A feature whose markup is missing
//! is inert for the whole page lifetime instead of re-checking the DOM in
//! every handler.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// One `.stat-value` element as found at mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterSeed {
    /// Raw `data-count` attribute.
    pub count: Option<String>,
    /// Text content before animation.
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSurvey {
    /// Value persisted under the theme storage key, if any.
    pub stored_theme: Option<String>,
    /// `#notification` exists.
    pub has_notice: bool,
    /// `.card` exists.
    pub has_card: bool,
    /// Element ids of `.card-section` elements.
    pub sections: Vec<String>,
    /// `data-section` values of `.nav-btn` elements.
    pub nav_targets: Vec<String>,
    /// Section marked `is-active` in the markup.
    pub initial_section: Option<String>,
    /// Number of `.particle` elements.
    pub particle_count: usize,
    /// `data-year` of `.year` markers, in document order.
    pub years: Vec<String>,
    /// `.experience-progress` exists.
    pub has_progress: bool,
    /// Raw `data-level` of the experience bar.
    pub progress_level: Option<String>,
    /// `.stat-value` elements in document order.
    pub counters: Vec<CounterSeed>,
}

/// Which features the page supports. Computed once from a [`PageSurvey`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub notice: bool,
    pub sections: bool,
    pub particles: bool,
    pub timeline: bool,
    pub progress: bool,
    pub counters: bool,
}

impl PageSurvey {
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            notice: self.has_notice,
            sections: self.has_card,
            particles: self.particle_count > 0,
            timeline: self.years.iter().any(|y| !y.trim().is_empty()),
            progress: self.has_progress,
            counters: self
                .counters
                .iter()
                .any(|seed| crate::state::counter::parse_target(seed.count.as_deref()).is_some()),
        }
    }
}
