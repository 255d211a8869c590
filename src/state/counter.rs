//! Load-time counter animations.
//!
//! Each counter climbs from 0 to its target in fixed ticks. The value after
//! `n` ticks is `min(n * step, target)` with `step = target / (duration / tick)`,
//! so the displayed number depends only on elapsed time, never on how often
//! the host happened to call [`CounterAnimation::advance`].

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Parse a `data-count` value. Absent, unparseable, zero, or negative targets
/// yield `None` and the counter keeps its original text.
#[must_use]
pub fn parse_target(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        Ok(_) => None,
        Err(err) => {
            log::debug!("data-count {raw:?} ignored: {err}");
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    /// Position of the counter element in document order.
    pub index: usize,
    target: f64,
    step: f64,
    tick_ms: f64,
    started_ms: f64,
    suffix: &'static str,
    ticks_applied: u64,
    done: bool,
}

impl CounterAnimation {
    /// Start animating counter `index` toward `target`.
    ///
    /// `original_text` is the element's text before the animation; a `+`
    /// anywhere in it is kept as a trailing suffix.
    #[must_use]
    pub fn new(index: usize, target: f64, original_text: &str, started_ms: f64, duration_ms: f64, tick_ms: f64) -> Self {
        Self {
            index,
            target,
            step: target / (duration_ms / tick_ms),
            tick_ms,
            started_ms,
            suffix: if original_text.contains('+') { "+" } else { "" },
            ticks_applied: 0,
            done: false,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Time of the next tick, or `None` once finished.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        if self.done {
            return None;
        }
        Some(self.started_ms + (ticks_to_f64(self.ticks_applied) + 1.0) * self.tick_ms)
    }

    /// Catch up to `now_ms`. Returns the new display text when at least one
    /// tick elapsed since the last call.
    pub fn advance(&mut self, now_ms: f64) -> Option<String> {
        if self.done {
            return None;
        }
        let elapsed = (now_ms - self.started_ms).max(0.0);
        let due = (elapsed / self.tick_ms).floor();
        if due <= ticks_to_f64(self.ticks_applied) {
            return None;
        }
        let mut current = due * self.step;
        if current >= self.target {
            current = self.target;
            self.done = true;
        }
        self.ticks_applied = ticks_from_f64(due);
        Some(format!("{:.0}{}", current.floor(), self.suffix))
    }
}

#[allow(clippy::cast_precision_loss)]
fn ticks_to_f64(ticks: u64) -> f64 {
    ticks as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ticks_from_f64(ticks: f64) -> u64 {
    ticks as u64
}
