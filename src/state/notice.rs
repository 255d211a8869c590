//! Notification center: one transient message with a severity icon.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Semantic category of a notification; selects the icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    /// Parse a severity name. Anything unrecognized is `Info`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Font Awesome glyph class for this severity.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "fa-info-circle",
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
        }
    }

    /// Every glyph class the icon element may carry.
    pub const ALL_ICONS: [&'static str; 4] = [
        "fa-info-circle",
        "fa-check-circle",
        "fa-exclamation-circle",
        "fa-exclamation-triangle",
    ];
}

/// Current notification contents and visibility.
///
/// Last call wins: a new message replaces the old one and pushes the hide
/// deadline out again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
    pub hide_at_ms: Option<f64>,
}

impl NoticeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` and set the hide deadline `duration_ms` after `now_ms`.
    pub fn show(&mut self, message: &str, severity: Severity, now_ms: f64, duration_ms: f64) {
        message.clone_into(&mut self.message);
        self.severity = severity;
        self.visible = true;
        self.hide_at_ms = Some(now_ms + duration_ms);
    }

    /// Hide if the deadline has passed. Returns `true` when visibility changed.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.hide_at_ms {
            Some(at) if self.visible && now_ms >= at => {
                self.visible = false;
                self.hide_at_ms = None;
                true
            }
            _ => false,
        }
    }

    /// CSS class list for the icon element.
    #[must_use]
    pub fn icon_class_name(&self) -> String {
        format!("notification-icon fas {}", self.severity.icon_class())
    }
}
