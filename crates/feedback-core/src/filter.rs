//! Date parsing and range filtering for feedback records.
//!
//! Submission dates arrive as spreadsheet text (`DD/MM/YYYY`, optionally
//! followed by a time of day). Parsing is strict: every component must be
//! a whole number and the combination must name a real calendar day, so
//! `32/01/2024` and `29/02/2023` are rejected rather than rolled over.

use crate::record::FeedbackRecord;
use chrono::NaiveDate;

/// An inclusive, optionally open-ended date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the window, or `None` for no lower bound.
    pub start: Option<NaiveDate>,
    /// Last day of the window, or `None` for no upper bound.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether both bounds are set with the start after the end.
    pub fn is_inverted(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start > end,
            _ => false,
        }
    }

    /// Whether `date` falls inside the window. Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Parses the calendar day out of a record's raw date field.
///
/// Takes the first whitespace-separated token, expects exactly three
/// `/`-separated numeric parts in day/month/year order, and returns `None`
/// for anything malformed or naming a day that does not exist.
pub fn record_date(record: &FeedbackRecord) -> Option<NaiveDate> {
    let date_part = record.date.split_whitespace().next()?;
    let mut parts = date_part.split('/');

    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Keeps the records whose submission date parses and falls inside `range`.
///
/// Records without a parseable date are always dropped, including when the
/// range is unbounded; everything downstream can then assume a valid date.
pub fn filter_by_date(records: &[FeedbackRecord], range: &DateRange) -> Vec<FeedbackRecord> {
    records
        .iter()
        .filter(|record| match record_date(record) {
            Some(date) => range.contains(date),
            None => false,
        })
        .cloned()
        .collect()
}
