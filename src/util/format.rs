//! Text and style values derived from element attributes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder shown when a skill tag has no `data-skill` level.
pub const MISSING_LEVEL: &str = "—";

/// Notification text for a clicked skill tag: `"<name> — <level>%"`.
#[must_use]
pub fn skill_message(tag_text: &str, level: Option<&str>) -> String {
    let level = level.map(str::trim).filter(|l| !l.is_empty()).unwrap_or(MISSING_LEVEL);
    format!("{} — {level}%", tag_text.trim())
}

/// CSS width for the experience bar from its `data-level` attribute.
#[must_use]
pub fn progress_width(level: Option<&str>, default_level: f64) -> String {
    let Some(raw) = level else {
        return format!("{default_level}%");
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{value}%"),
        Ok(_) | Err(_) => {
            log::debug!("data-level {raw:?} is not a usable number; using {default_level}");
            format!("{default_level}%")
        }
    }
}

/// Clipboard payload from a copy button's `data-text`; blank means nothing to copy.
#[must_use]
pub fn copy_payload(data_text: Option<String>) -> Option<String> {
    data_text.filter(|text| !text.is_empty())
}
