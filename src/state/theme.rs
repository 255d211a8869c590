//! Theme names and resolution of the persisted preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::UiError;

/// Named page themes, applied as `data-theme` on `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme name.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownTheme`] for names outside the theme set.
    pub fn parse(name: &str) -> Result<Self, UiError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UiError::UnknownTheme(name.to_owned())),
        }
    }

    /// Theme to apply at startup.
    ///
    /// A stored name that does not parse counts as absent, so the configured
    /// default is applied (and written back) instead.
    #[must_use]
    pub fn resolve(stored: Option<&str>, default_name: &str) -> Self {
        if let Some(name) = stored {
            match Self::parse(name) {
                Ok(theme) => return theme,
                Err(err) => log::debug!("stored theme ignored: {err}"),
            }
        }
        match Self::parse(default_name) {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("configured default theme ignored: {err}");
                Self::default()
            }
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
