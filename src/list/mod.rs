//! Generic list engine behind every record page.
//!
//! A [`ListView`] owns one in-memory collection together with its view state:
//! search text, filter selections, sort column, current page, selected rows and
//! expanded rows. Derived views (filtered, sorted, current page) are recomputed
//! on demand, so every mutation is a plain synchronous update.

pub mod filter;
pub mod sort;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{AppError, Result};

pub use filter::{DateRange, RecordFilter, matches_choice, matches_search, parse_flexible_date, parse_flexible_datetime};
pub use sort::{Column, SortOrder, SortSpec, SortValue};

/// A record that can be listed, searched and sorted.
pub trait Record: Clone {
    type Id: Clone + Eq + Hash + Display + std::fmt::Debug;
    type Column: Column;

    fn id(&self) -> &Self::Id;

    /// Concatenation of the fields the search box looks at.
    fn haystack(&self) -> String;

    fn sort_value(&self, column: Self::Column) -> SortValue;
}

/// Collection plus its list-view state.
pub struct ListView<R: Record, F> {
    records: Vec<R>,
    search: String,
    filter: F,
    sort: SortSpec<R::Column>,
    page: usize,
    page_size: usize,
    selected: Vec<R::Id>,
    expanded: HashSet<R::Id>,
}

impl<R: Record, F: RecordFilter<R> + Default> ListView<R, F> {
    pub fn new(records: Vec<R>, sort: SortSpec<R::Column>, page_size: usize) -> Self {
        Self {
            records,
            search: String::new(),
            filter: F::default(),
            sort,
            page: 1,
            page_size: page_size.max(1),
            selected: Vec::new(),
            expanded: HashSet::new(),
        }
    }

    /// Reset search text and all filter selections.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = F::default();
        self.page = 1;
    }
}

impl<R: Record, F: RecordFilter<R>> ListView<R, F> {
    // --- Collection ---

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Append a new record.
    pub fn insert(&mut self, record: R) -> Result<()> {
        self.ensure_unique(record.id())?;
        self.records.push(record);
        Ok(())
    }

    /// Insert a new record at the front of the collection.
    pub fn prepend(&mut self, record: R) -> Result<()> {
        self.ensure_unique(record.id())?;
        self.records.insert(0, record);
        Ok(())
    }

    /// Replace the record with the same id.
    pub fn update(&mut self, record: R) -> Result<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| AppError::not_found(format!("record {}", record.id())))?;
        *slot = record;
        Ok(())
    }

    /// Modify the record with `id` in place.
    pub fn update_with(&mut self, id: &R::Id, apply: impl FnOnce(&mut R)) -> Result<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(format!("record {id}")))?;
        apply(slot);
        Ok(())
    }

    /// Remove one record by id.
    pub fn remove(&mut self, id: &R::Id) -> Result<R> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(format!("record {id}")))?;
        self.selected.retain(|s| s != id);
        self.expanded.remove(id);
        Ok(self.records.remove(pos))
    }

    /// Remove every selected record and clear the selection.
    ///
    /// Returns the number of records removed.
    pub fn remove_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        let selected: HashSet<R::Id> = self.selected.drain(..).collect();
        let before = self.records.len();
        self.records.retain(|r| !selected.contains(r.id()));
        self.expanded.retain(|id| !selected.contains(id));
        before - self.records.len()
    }

    fn ensure_unique(&self, id: &R::Id) -> Result<()> {
        if self.contains(id) {
            return Err(AppError::DuplicateId(format!("ID {id}")));
        }
        Ok(())
    }

    // --- Search and filter ---

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Change filter selections; always returns to the first page.
    pub fn update_filter(&mut self, apply: impl FnOnce(&mut F)) {
        apply(&mut self.filter);
        self.page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.filter.is_active()
    }

    /// Records matching search AND filter, in collection order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| matches_search(&r.haystack(), &self.search) && self.filter.matches(r))
            .collect()
    }

    // --- Sort ---

    pub fn sort(&self) -> SortSpec<R::Column> {
        self.sort
    }

    pub fn toggle_sort(&mut self, column: R::Column) {
        self.sort.toggle(column);
    }

    /// Filtered records in the active sort order.
    pub fn sorted(&self) -> Vec<&R> {
        let mut rows = self.filtered();
        let SortSpec { column, order } = self.sort;
        rows.sort_by(|a, b| {
            let ord = a.sort_value(column).cmp(&b.sort_value(column));
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        rows
    }

    // --- Pagination ---

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    /// Rows of the current page. The page index is not clamped, so a page past
    /// the end yields no rows.
    pub fn visible(&self) -> Vec<&R> {
        self.sorted()
            .into_iter()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    // --- Selection ---

    pub fn selected_ids(&self) -> &[R::Id] {
        &self.selected
    }

    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle_selected(&mut self, id: &R::Id) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
    }

    /// Checking replaces the selection with the visible rows; unchecking clears it.
    pub fn select_all_visible(&mut self, checked: bool) {
        self.selected = if checked {
            self.visible().into_iter().map(|r| r.id().clone()).collect()
        } else {
            Vec::new()
        };
    }

    /// State of the "select all" checkbox.
    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|r| self.selected.contains(r.id()))
    }

    // --- Expansion ---

    pub fn is_expanded(&self, id: &R::Id) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &R::Id) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }
}
