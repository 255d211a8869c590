//! Page controller.
//!
//! ARCHITECTURE
//! ============
//! [`App`] owns every widget's state plus the timer queue and never touches
//! the DOM. Each operation takes the current time in milliseconds and returns
//! the [`Effect`]s the browser layer must apply. The host calls [`App::tick`]
//! whenever [`App::next_deadline`] passes; tests do the same with a virtual
//! clock.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::Config;
use crate::error::UiError;
use crate::page::{Capabilities, CounterSeed, PageSurvey};
use crate::scheduler::{Scheduler, Timer};
use crate::state::counter::{CounterAnimation, parse_target};
use crate::state::notice::{NoticeState, Severity};
use crate::state::section::SectionSwitcher;
use crate::state::theme::Theme;
use crate::state::timeline::Timeline;
use crate::util::format::{progress_width, skill_message};
use crate::util::parallax::particle_transforms;

/// DOM mutations requested by the controller, applied in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Set `data-theme` on `<html>` and persist the name.
    ApplyTheme { theme: Theme },
    /// Fill the notification text and icon, then add `show`.
    ShowNotice { text: String, icon_class: String },
    /// Remove `show` from the notification.
    HideNotice,
    /// Mark the card loading and its parent switching; deactivate every
    /// section and nav control.
    BeginSwitch,
    /// Activate `section` and its nav control and settle the card.
    FinishSwitch { section: String },
    /// Flag markers and items whose `data-year` equals `year`.
    SelectYear { year: String },
    /// One CSS transform per particle, in document order.
    MoveParticles { transforms: Vec<String> },
    /// Experience bar width.
    SetProgressWidth { width: String },
    /// Replace the text of counter `index`.
    SetCounterText { index: usize, text: String },
}

pub struct App {
    config: Config,
    caps: Capabilities,
    theme: Theme,
    notice: Option<NoticeState>,
    switcher: Option<SectionSwitcher>,
    timeline: Option<Timeline>,
    particle_count: usize,
    progress_level: Option<String>,
    counter_seeds: Vec<CounterSeed>,
    counters: Vec<CounterAnimation>,
    scheduler: Scheduler,
    started: bool,
}

impl App {
    /// Build the controller for a surveyed page.
    #[must_use]
    pub fn new(config: Config, survey: PageSurvey) -> Self {
        let caps = survey.capabilities();
        let theme = Theme::resolve(survey.stored_theme.as_deref(), &config.default_theme);
        let switcher = caps
            .sections
            .then(|| SectionSwitcher::new(survey.sections, survey.nav_targets, survey.initial_section));
        let timeline = if caps.timeline { Timeline::new(survey.years, &config.default_year) } else { None };
        log::debug!("page capabilities: {caps:?}");
        Self {
            caps,
            theme,
            notice: caps.notice.then(NoticeState::new),
            switcher,
            timeline,
            particle_count: survey.particle_count,
            progress_level: survey.progress_level,
            counter_seeds: survey.counters,
            counters: Vec::new(),
            scheduler: Scheduler::new(),
            started: false,
            config,
        }
    }

    /// Run the load-time behaviors: apply the theme, select the initial year,
    /// queue the progress reveal and greeting, start the counters.
    ///
    /// Only the first call does anything.
    pub fn start(&mut self, now_ms: f64) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut effects = vec![Effect::ApplyTheme { theme: self.theme }];

        if let Some(timeline) = &self.timeline {
            effects.push(Effect::SelectYear { year: timeline.current().to_owned() });
        }

        if self.caps.progress {
            self.scheduler.schedule(now_ms + self.config.progress_delay_ms, Timer::RevealProgress);
        }

        let seeds = std::mem::take(&mut self.counter_seeds);
        if self.caps.counters {
            for (index, seed) in seeds.into_iter().enumerate() {
                let Some(target) = parse_target(seed.count.as_deref()) else {
                    continue;
                };
                self.counters.push(CounterAnimation::new(
                    index,
                    target,
                    &seed.text,
                    now_ms,
                    self.config.counter_duration_ms,
                    self.config.counter_tick_ms,
                ));
            }
        } else {
            log::debug!("no counter has a positive data-count; counters stay as written");
        }

        if !self.config.welcome_message.is_empty() {
            self.scheduler.schedule(now_ms + self.config.welcome_delay_ms, Timer::Welcome);
        }

        log::info!(
            "portfolio page started: theme={}, counters={}, particles={}",
            self.theme,
            self.counters.len(),
            self.particle_count
        );
        effects
    }

    // --- Theme ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply and persist the theme called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownTheme`] if `name` is not a theme; nothing changes.
    pub fn set_theme(&mut self, name: &str) -> Result<Vec<Effect>, UiError> {
        let theme = Theme::parse(name)?;
        self.theme = theme;
        Ok(vec![Effect::ApplyTheme { theme }])
    }

    // --- Notifications ---

    /// Show `message`. Replaces any visible message and restarts the hide timer.
    pub fn notify(&mut self, message: &str, severity: Severity, now_ms: f64) -> Vec<Effect> {
        let Some(notice) = self.notice.as_mut() else {
            return Vec::new();
        };
        notice.show(message, severity, now_ms, self.config.notice_ms);
        let hide_at = now_ms + self.config.notice_ms;
        self.scheduler.cancel(|timer| *timer == Timer::HideNotice);
        self.scheduler.schedule(hide_at, Timer::HideNotice);
        vec![Effect::ShowNotice { text: message.to_owned(), icon_class: notice.icon_class_name() }]
    }

    #[must_use]
    pub fn notice(&self) -> Option<&NoticeState> {
        self.notice.as_ref()
    }

    /// A skill tag was clicked.
    pub fn skill_selected(&mut self, tag_text: &str, level: Option<&str>, now_ms: f64) -> Vec<Effect> {
        let message = skill_message(tag_text, level);
        self.notify(&message, Severity::Info, now_ms)
    }

    /// A clipboard write settled.
    pub fn copy_finished(&mut self, result: Result<(), UiError>, now_ms: f64) -> Vec<Effect> {
        match result {
            Ok(()) => {
                let message = self.config.copied_message.clone();
                self.notify(&message, Severity::Success, now_ms)
            }
            Err(err) => {
                log::warn!("copy failed: {err}");
                let message = self.config.copy_failed_message.clone();
                self.notify(&message, Severity::Error, now_ms)
            }
        }
    }

    // --- Sections ---

    /// Switch the card to `section` (`#about` or `about`).
    pub fn switch_to(&mut self, section: &str, now_ms: f64) -> Vec<Effect> {
        let Some(switcher) = self.switcher.as_mut() else {
            return Vec::new();
        };
        let Some(generation) = switcher.begin(section) else {
            return Vec::new();
        };
        let section = crate::state::section::normalize_section_id(section).to_owned();
        self.scheduler
            .schedule(now_ms + self.config.switch_delay_ms, Timer::FinishSwitch { generation, section });
        vec![Effect::BeginSwitch]
    }

    /// The settled section, `None` while switching or on pages without a card.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.switcher.as_ref().and_then(SectionSwitcher::active)
    }

    #[must_use]
    pub fn is_switching(&self) -> bool {
        self.switcher.as_ref().is_some_and(SectionSwitcher::is_switching)
    }

    // --- Timeline ---

    /// Select `year` directly (marker or item click).
    pub fn select_year(&mut self, year: &str) -> Vec<Effect> {
        let Some(timeline) = self.timeline.as_mut() else {
            return Vec::new();
        };
        if !timeline.select(year) {
            return Vec::new();
        }
        vec![Effect::SelectYear { year: timeline.current().to_owned() }]
    }

    pub fn next_year(&mut self) -> Vec<Effect> {
        self.timeline
            .as_mut()
            .map(|timeline| vec![Effect::SelectYear { year: timeline.next().to_owned() }])
            .unwrap_or_default()
    }

    pub fn prev_year(&mut self) -> Vec<Effect> {
        self.timeline
            .as_mut()
            .map(|timeline| vec![Effect::SelectYear { year: timeline.prev().to_owned() }])
            .unwrap_or_default()
    }

    #[must_use]
    pub fn current_year(&self) -> Option<&str> {
        self.timeline.as_ref().map(Timeline::current)
    }

    // --- Particles ---

    pub fn pointer_moved(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> Vec<Effect> {
        if !self.caps.particles {
            return Vec::new();
        }
        vec![Effect::MoveParticles {
            transforms: particle_transforms(self.particle_count, x, y, viewport_w, viewport_h),
        }]
    }

    // --- Clock ---

    /// Fire every timer due at `now_ms` and advance running counters.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        for timer in self.scheduler.take_due(now_ms) {
            match timer {
                Timer::HideNotice => {
                    if self.notice.as_mut().is_some_and(|notice| notice.expire(now_ms)) {
                        effects.push(Effect::HideNotice);
                    }
                }
                Timer::FinishSwitch { generation, section } => {
                    if let Some(shown) = self.switcher.as_mut().and_then(|s| s.finish(generation)) {
                        effects.push(Effect::FinishSwitch { section: shown });
                    } else {
                        log::debug!("switch to {section:?} superseded");
                    }
                }
                Timer::RevealProgress => {
                    let width = progress_width(self.progress_level.as_deref(), self.config.default_progress_level);
                    effects.push(Effect::SetProgressWidth { width });
                }
                Timer::Welcome => {
                    let message = self.config.welcome_message.clone();
                    effects.extend(self.notify(&message, Severity::Success, now_ms));
                }
            }
        }

        for counter in &mut self.counters {
            if let Some(text) = counter.advance(now_ms) {
                effects.push(Effect::SetCounterText { index: counter.index, text });
            }
        }
        self.counters.retain(|counter| !counter.is_done());

        effects
    }

    /// When [`App::tick`] next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        let counters = self.counters.iter().filter_map(CounterAnimation::next_deadline);
        self.scheduler
            .next_deadline()
            .into_iter()
            .chain(counters)
            .min_by(f64::total_cmp)
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
