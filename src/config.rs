//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a JSON object in
//! `<script type="application/json" id="portfolio-config">`. Every field is
//! optional; anything omitted keeps the built-in value from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::UiError;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub storage_key: String,
    pub default_theme: String,
    pub default_year: String,
    pub notice_ms: f64,
    pub switch_delay_ms: f64,
    pub progress_delay_ms: f64,
    pub default_progress_level: f64,
    pub counter_duration_ms: f64,
    pub counter_tick_ms: f64,
    pub welcome_delay_ms: f64,
    /// Empty disables the greeting.
    pub welcome_message: String,
    pub copied_message: String,
    pub copy_failed_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            default_theme: consts::DEFAULT_THEME.to_owned(),
            default_year: consts::DEFAULT_YEAR.to_owned(),
            notice_ms: consts::NOTICE_MS,
            switch_delay_ms: consts::SWITCH_DELAY_MS,
            progress_delay_ms: consts::PROGRESS_DELAY_MS,
            default_progress_level: consts::DEFAULT_PROGRESS_LEVEL,
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            counter_tick_ms: consts::COUNTER_TICK_MS,
            welcome_delay_ms: consts::WELCOME_DELAY_MS,
            welcome_message: "Welcome! 👋".to_owned(),
            copied_message: "Copied!".to_owned(),
            copy_failed_message: "Could not copy".to_owned(),
        }
    }
}

impl Config {
    /// Parse a config block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config = serde_json::from_str::<Self>(raw)?;
        Ok(config.sanitized())
    }

    /// Like [`Config::from_json`], but falls back to defaults on bad input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Replace non-positive or non-finite durations with the built-in values.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f64, fallback: f64, allow_zero: bool| {
            let in_range = if allow_zero { *value >= 0.0 } else { *value > 0.0 };
            if !value.is_finite() || !in_range {
                *value = fallback;
            }
        };
        fix(&mut self.notice_ms, defaults.notice_ms, false);
        fix(&mut self.switch_delay_ms, defaults.switch_delay_ms, true);
        fix(&mut self.progress_delay_ms, defaults.progress_delay_ms, true);
        fix(&mut self.default_progress_level, defaults.default_progress_level, true);
        fix(&mut self.counter_duration_ms, defaults.counter_duration_ms, false);
        fix(&mut self.counter_tick_ms, defaults.counter_tick_ms, false);
        fix(&mut self.welcome_delay_ms, defaults.welcome_delay_ms, true);
        if self.storage_key.is_empty() {
            self.storage_key = defaults.storage_key;
        }
        self
    }
}
