//! Search and filter predicates.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Per-page filter selections, combined with the search text by logical AND.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;

    /// Whether any selection narrows the result set.
    fn is_active(&self) -> bool;
}

impl<R> RecordFilter<R> for () {
    fn matches(&self, _record: &R) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        false
    }
}

/// Case-insensitive substring match of a trimmed query.
pub fn matches_search(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Equality match against an optional categorical selection.
pub fn matches_choice<T: PartialEq>(selected: Option<&T>, value: &T) -> bool {
    selected.is_none_or(|s| s == value)
}

/// Optional date bounds; both ends inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// `from` starts at midnight, `to` runs to the end of that day.
    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        if let Some(from) = self.from
            && moment < from.and_time(NaiveTime::MIN)
        {
            return false;
        }
        if let Some(to) = self.to
            && moment.date() > to
        {
            return false;
        }
        true
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.contains(day.and_time(NaiveTime::MIN))
    }
}

/// Parse date input flexibly, accepting multiple formats.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    None
}

/// Parse a date-and-time input; a bare date means midnight.
pub fn parse_flexible_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    for fmt in &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    parse_flexible_date(input).map(|d| d.and_time(NaiveTime::MIN))
}
