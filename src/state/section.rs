//! Section switcher: exactly one content section visible once settled.
//!
//! A switch is two-phase. [`SectionSwitcher::begin`] deactivates everything
//! and hands back a generation token; [`SectionSwitcher::finish`] activates
//! the target after the transition delay, but only if no newer switch has
//! started in the meantime. Stale completions are discarded, so rapid clicks
//! always settle on the last requested section.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Strip the selector prefix: `#about` and `about` name the same section.
#[must_use]
pub fn normalize_section_id(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

/// Phase of the switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SwitchPhase {
    /// A section (or, on odd markup, none) is active and nothing is pending.
    Settled { active: Option<String> },
    /// Everything is deactivated while `target` waits for its reveal.
    Switching { target: String, generation: u64 },
}

#[derive(Clone, Debug)]
pub struct SectionSwitcher {
    sections: Vec<String>,
    controls: Vec<String>,
    phase: SwitchPhase,
    generation: u64,
}

impl SectionSwitcher {
    /// Build a switcher over the page's section ids and nav control targets.
    ///
    /// `initial` is whichever section the markup marks active; the switcher
    /// does not force one.
    #[must_use]
    pub fn new(sections: Vec<String>, controls: Vec<String>, initial: Option<String>) -> Self {
        let normalize = |ids: Vec<String>| {
            ids.iter()
                .map(|id| normalize_section_id(id).to_owned())
                .filter(|id| !id.is_empty())
                .collect::<Vec<_>>()
        };
        let sections = normalize(sections);
        let initial = initial
            .map(|id| normalize_section_id(&id).to_owned())
            .filter(|id| sections.contains(id));
        Self {
            sections,
            controls: normalize(controls),
            phase: SwitchPhase::Settled { active: initial },
            generation: 0,
        }
    }

    /// Whether `id` has both a section element and a nav control.
    #[must_use]
    pub fn can_show(&self, id: &str) -> bool {
        let id = normalize_section_id(id);
        self.sections.iter().any(|s| s == id) && self.controls.iter().any(|c| c == id)
    }

    /// Start a switch to `id`. Returns the generation token of this switch,
    /// or `None` when the section or its control does not exist (the current
    /// section then stays visible).
    pub fn begin(&mut self, id: &str) -> Option<u64> {
        let id = normalize_section_id(id);
        if !self.can_show(id) {
            log::debug!("section switch to {id:?} ignored: no such section or nav control");
            return None;
        }
        self.generation += 1;
        self.phase = SwitchPhase::Switching { target: id.to_owned(), generation: self.generation };
        Some(self.generation)
    }

    /// Complete the switch tagged `generation`. Returns the section to reveal,
    /// or `None` if a newer switch superseded this one.
    pub fn finish(&mut self, generation: u64) -> Option<String> {
        match &self.phase {
            SwitchPhase::Switching { target, generation: latest } if *latest == generation => {
                let target = target.clone();
                self.phase = SwitchPhase::Settled { active: Some(target.clone()) };
                Some(target)
            }
            _ => {
                log::debug!("discarding stale section switch #{generation}");
                None
            }
        }
    }

    /// The visible section once settled; `None` mid-transition.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        match &self.phase {
            SwitchPhase::Settled { active } => active.as_deref(),
            SwitchPhase::Switching { .. } => None,
        }
    }

    #[must_use]
    pub fn is_switching(&self) -> bool {
        matches!(self.phase, SwitchPhase::Switching { .. })
    }
}
