//! Single-column sorting.

use chrono::{NaiveDate, NaiveDateTime};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub column: C,
    pub order: SortOrder,
}

impl<C: Copy + Eq> SortSpec<C> {
    pub fn asc(column: C) -> Self {
        Self {
            column,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(column: C) -> Self {
        Self {
            column,
            order: SortOrder::Desc,
        }
    }

    /// Header click: an ascending column flips to descending, anything else
    /// becomes ascending on the clicked column.
    pub fn toggle(&mut self, column: C) {
        self.order = if self.column == column && self.order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.column = column;
    }

    /// Header label suffix for `column`.
    pub fn indicator(&self, column: C) -> &'static str {
        if self.column == column { self.order.arrow() } else { "" }
    }
}

/// Typed value a record exposes for one column.
///
/// Dates compare chronologically, numbers numerically and text lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Number(i64),
    Day(NaiveDate),
    Moment(NaiveDateTime),
    Flag(bool),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Column set of a record type, used for table headers.
pub trait Column: Copy + Eq + std::fmt::Debug + 'static {
    /// Columns in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}
