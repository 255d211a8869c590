//! Shared timing and tuning constants for the portfolio page.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Theme applied when nothing usable is stored.
pub const DEFAULT_THEME: &str = "light";

// ── Notifications ───────────────────────────────────────────────

/// How long a notification stays visible after the last `notify` call.
pub const NOTICE_MS: f64 = 3200.0;

/// Delay between mount and the greeting notification.
pub const WELCOME_DELAY_MS: f64 = 800.0;

// ── Section switcher ────────────────────────────────────────────

/// Delay before the target section is revealed. Matches the CSS transition.
pub const SWITCH_DELAY_MS: f64 = 200.0;

// ── Timeline ────────────────────────────────────────────────────

/// Year selected at mount when it exists among the year markers.
pub const DEFAULT_YEAR: &str = "2023";

// ── Load-time animation ─────────────────────────────────────────

/// Delay before the experience bar jumps to its level.
pub const PROGRESS_DELAY_MS: f64 = 400.0;

/// Experience bar level used when `data-level` is absent or not a number.
pub const DEFAULT_PROGRESS_LEVEL: f64 = 85.0;

/// Total counter animation time.
pub const COUNTER_DURATION_MS: f64 = 1400.0;

/// Counter tick period.
pub const COUNTER_TICK_MS: f64 = 16.0;

// ── Particles ───────────────────────────────────────────────────

/// Speed factor per particle index (1-based).
pub const PARTICLE_SPEED_STEP: f64 = 0.018;

/// Maximum travel scale applied to the normalized pointer offset.
pub const PARTICLE_TRAVEL_PX: f64 = 40.0;
