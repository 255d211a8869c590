//! Timeline filter: exactly one known year selected at a time.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// Whether an element's raw `data-year` names `year`. Markers are matched
/// trimmed, the same way [`Timeline::new`] reads them.
#[must_use]
pub fn year_matches(raw: &str, year: &str) -> bool {
    raw.trim() == year.trim()
}

/// Year selection over the markers present on the page, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    years: Vec<String>,
    current: usize,
}

impl Timeline {
    /// Build the filter from the year markers' `data-year` values.
    ///
    /// Returns `None` when there are no markers, leaving the feature inert.
    /// Starts at `default_year` when it is a known year, else the first one.
    #[must_use]
    pub fn new(years: Vec<String>, default_year: &str) -> Option<Self> {
        let mut known: Vec<String> = Vec::with_capacity(years.len());
        for year in years {
            let year = year.trim();
            if !year.is_empty() && !known.iter().any(|k| k == year) {
                known.push(year.to_owned());
            }
        }
        if known.is_empty() {
            return None;
        }
        let current = known.iter().position(|y| y == default_year.trim()).unwrap_or_else(|| {
            log::debug!("default year {default_year:?} has no marker; starting at {:?}", known[0]);
            0
        });
        Some(Self { years: known, current })
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.years[self.current]
    }

    /// Select `year`. Unknown years are ignored so the selection never leaves
    /// the known set. Returns `true` when the year is known.
    pub fn select(&mut self, year: &str) -> bool {
        let year = year.trim();
        match self.years.iter().position(|y| y == year) {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => {
                log::debug!("ignoring unknown timeline year {year:?}");
                false
            }
        }
    }

    /// Step forward, wrapping from the last year to the first.
    pub fn next(&mut self) -> &str {
        self.current = (self.current + 1) % self.years.len();
        self.current()
    }

    /// Step backward, wrapping from the first year to the last.
    pub fn prev(&mut self) -> &str {
        self.current = self.current.checked_sub(1).unwrap_or(self.years.len() - 1);
        self.current()
    }
}
