//! One-shot timer queue driven by an external clock.
//!
//! The controller never touches `setTimeout` directly. It schedules
//! [`Timer`]s here with absolute deadlines in milliseconds, and the host (or a
//! test) calls [`Scheduler::take_due`] with the current time. That keeps every
//! delayed behavior deterministic under a virtual clock.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Whether a host timer armed for `armed` must be replaced to wake at `next`.
#[must_use]
pub fn deadline_changed(armed: Option<f64>, next: Option<f64>) -> bool {
    match (armed, next) {
        (Some(a), Some(b)) => a.total_cmp(&b).is_ne(),
        (None, None) => false,
        _ => true,
    }
}

/// Delayed work owned by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Clear the notification's visibility.
    HideNotice,
    /// Reveal a section once the switch transition has played.
    FinishSwitch { generation: u64, section: String },
    /// Jump the experience bar to its level.
    RevealProgress,
    /// Show the greeting notification.
    Welcome,
}

#[derive(Clone, Debug)]
struct Entry {
    due_ms: f64,
    seq: u64,
    timer: Timer,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `timer` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: f64, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due_ms, seq, timer });
    }

    /// Drop every pending timer matching `pred`. Returns how many were removed.
    pub fn cancel(&mut self, pred: impl Fn(&Timer) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !pred(&entry.timer));
        before - self.entries.len()
    }

    /// Remove and return all timers due at `now_ms`, earliest first.
    ///
    /// Timers sharing a deadline come out in scheduling order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<Timer> {
        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|entry| entry.due_ms <= now_ms);
        self.entries = pending;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|entry| entry.timer).collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|entry| entry.due_ms)
            .min_by(f64::total_cmp)
    }
}
