//! Analysis-window selection over the raw record set.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::OrderLineRecord;
use crate::error::RangeError;

/// Inclusive calendar-day analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a window covering `start..=end`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window, included in full.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Smallest window covering every record, or `None` for an empty set.
    #[must_use]
    pub fn full_span(records: &[OrderLineRecord]) -> Option<Self> {
        let mut dates = records.iter().map(|r| r.order_purchase_timestamp.date());
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self::new(min, max))
    }

    /// Check the window against the record span.
    ///
    /// A failure here is advisory: filtering with a bad window yields an
    /// empty subset rather than an error, so callers typically log the
    /// problem and run the pipeline anyway.
    pub fn validate(&self, records: &[OrderLineRecord]) -> Result<(), RangeError> {
        if self.start > self.end {
            return Err(RangeError::Inverted {
                start: self.start,
                end: self.end,
            });
        }
        if let Some(span) = Self::full_span(records) {
            if self.end < span.start || self.start > span.end {
                return Err(RangeError::OutOfBounds {
                    start: self.start,
                    end: self.end,
                    min: span.start,
                    max: span.end,
                });
            }
        }
        Ok(())
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Select the records whose purchase timestamp falls inside `range`.
///
/// Comparison is at day granularity, so the end date keeps the entirety of
/// its calendar day. No validation happens here: an inverted or out-of-range
/// window simply selects nothing.
#[must_use]
pub fn filter_range(records: &[OrderLineRecord], range: DateRange) -> Vec<OrderLineRecord> {
    let filtered: Vec<OrderLineRecord> = records
        .iter()
        .filter(|r| range.contains(r.order_purchase_timestamp.date()))
        .cloned()
        .collect();
    debug!(
        total = records.len(),
        selected = filtered.len(),
        "filtered analysis window"
    );
    filtered
}
