//! Toolbar, table and pagination widgets shared by the list pages.
//!
//! Every widget reads from and writes to a [`ListView`], so the pages only
//! decide which columns, filters and row actions they show.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{
    CARET_DOUBLE_LEFT, CARET_DOUBLE_RIGHT, CARET_LEFT, CARET_RIGHT, FILE_CSV, FILE_XLS, MAGNIFYING_GLASS, PRINTER,
    TRASH, X,
};

use super::components::{colors, styled_button_with_icon};
use crate::export::ExportFormat;
use crate::list::{Column, DateRange, ListView, Record, RecordFilter, parse_flexible_date};

/// Raw text of a from/to date filter while the user is typing.
#[derive(Debug, Clone, Default)]
pub struct DateRangeInput {
    pub from: String,
    pub to: String,
}

impl DateRangeInput {
    pub fn clear(&mut self) {
        self.from.clear();
        self.to.clear();
    }

    /// Parsed bounds; unparsable text counts as unset.
    pub fn range(&self) -> DateRange {
        DateRange {
            from: parse_flexible_date(&self.from),
            to: parse_flexible_date(&self.to),
        }
    }
}

/// Requested export of the page data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Print,
    Export(ExportFormat),
}

/// Search box bound to the view's search text.
pub fn search_box<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>, hint: &str) {
    ui.label(MAGNIFYING_GLASS);
    let mut text = view.search().to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(220.0).hint_text(hint));
    if response.changed() {
        view.set_search(text);
    }
}

/// Combo box over an optional categorical value, "All" meaning no filter.
///
/// Returns the new selection when it changed.
pub fn choice_filter<T: Copy + PartialEq>(
    ui: &mut Ui,
    id_salt: &str,
    current: Option<T>,
    options: &[T],
    label: impl Fn(T) -> &'static str,
) -> Option<Option<T>> {
    let mut changed = None;
    egui::ComboBox::from_id_salt(id_salt)
        .width(140.0)
        .selected_text(current.map(&label).unwrap_or("All"))
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), "All").clicked() {
                changed = Some(None);
            }
            for &option in options {
                if ui.selectable_label(current == Some(option), label(option)).clicked() {
                    changed = Some(Some(option));
                }
            }
        });
    changed
}

/// From/To date inputs. Returns the parsed range when either input changed.
pub fn date_range_inputs(ui: &mut Ui, input: &mut DateRangeInput) -> Option<DateRange> {
    let mut changed = false;

    for (label, text) in [("From:", &mut input.from), ("To:", &mut input.to)] {
        ui.label(label);
        let valid = text.trim().is_empty() || parse_flexible_date(text).is_some();
        let response = ui.add(
            egui::TextEdit::singleline(text)
                .desired_width(90.0)
                .hint_text("YYYY-MM-DD")
                .text_color(if valid { ui.visuals().text_color() } else { colors::ERROR }),
        );
        if response.changed() {
            changed = true;
        }
        if response.lost_focus()
            && let Some(date) = parse_flexible_date(text)
        {
            *text = date.format("%Y-%m-%d").to_string();
        }
    }

    changed.then(|| input.range())
}

/// "Clear" button shown while search or filters narrow the list.
///
/// Returns true when clicked.
pub fn clear_filters_button<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &ListView<R, F>) -> bool {
    if !view.has_active_filters() {
        return false;
    }
    ui.add_space(10.0);
    styled_button_with_icon(ui, X, "Clear").clicked()
}

/// "Showing X of Y" summary line.
pub fn showing_label<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &ListView<R, F>, noun: &str) {
    ui.label(format!("Showing {} of {} {noun}", view.filtered().len(), view.len()));
}

/// Checkbox that selects or clears every row on the current page.
pub fn select_all_checkbox<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>) {
    let mut all = view.all_visible_selected();
    if ui.checkbox(&mut all, "").on_hover_text("Select all on this page").changed() {
        view.select_all_visible(all);
    }
}

/// Per-row selection checkbox.
pub fn row_checkbox<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>, id: &R::Id) {
    let mut checked = view.is_selected(id);
    if ui.checkbox(&mut checked, "").changed() {
        view.toggle_selected(id);
    }
}

/// Clickable column header with the sort indicator.
pub fn sort_header<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>, column: R::Column) {
    let text = format!("{} {}", column.label(), view.sort().indicator(column));
    if ui
        .add(egui::Button::new(RichText::new(text.trim_end()).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
    {
        view.toggle_sort(column);
    }
}

/// Header row: select-all box followed by one sortable header per column.
pub fn header_row<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>) {
    select_all_checkbox(ui, view);
    for &column in <R::Column as Column>::ALL {
        sort_header(ui, view, column);
    }
    ui.strong("Actions");
    ui.end_row();
}

/// Placeholder row for an empty page.
pub fn empty_row(ui: &mut Ui) {
    ui.label("");
    ui.label(RichText::new("No records found.").weak());
    ui.end_row();
}

/// "Delete Selected" button, visible only with a non-empty selection.
///
/// Returns true when clicked.
pub fn bulk_delete_button<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &ListView<R, F>) -> bool {
    let count = view.selected_ids().len();
    if count == 0 {
        return false;
    }
    ui.add(egui::Button::new(
        RichText::new(format!("{TRASH} Delete Selected ({count})")).color(colors::ERROR),
    ))
    .clicked()
}

/// Print and export buttons.
pub fn export_row(ui: &mut Ui) -> Option<ExportAction> {
    let mut action = None;
    if styled_button_with_icon(ui, PRINTER, "Print").clicked() {
        action = Some(ExportAction::Print);
    }
    if styled_button_with_icon(ui, FILE_XLS, "Export Excel").clicked() {
        action = Some(ExportAction::Export(ExportFormat::Excel));
    }
    if styled_button_with_icon(ui, FILE_CSV, "Export CSV").clicked() {
        action = Some(ExportAction::Export(ExportFormat::Csv));
    }
    action
}

/// First/previous/next/last page controls.
pub fn pagination_bar<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>) {
    let page = view.page();
    let total = view.total_pages();

    if ui
        .add_enabled(page > 1, egui::Button::new(CARET_DOUBLE_LEFT))
        .on_hover_text("First page")
        .clicked()
    {
        view.set_page(1);
    }
    if ui
        .add_enabled(page > 1, egui::Button::new(CARET_LEFT))
        .on_hover_text("Previous page")
        .clicked()
    {
        view.set_page(page - 1);
    }

    ui.label(format!("Page {page} of {total}"));

    if ui
        .add_enabled(page < total, egui::Button::new(CARET_RIGHT))
        .on_hover_text("Next page")
        .clicked()
    {
        view.set_page(page + 1);
    }
    if ui
        .add_enabled(page < total, egui::Button::new(CARET_DOUBLE_RIGHT))
        .on_hover_text("Last page")
        .clicked()
    {
        view.set_page(total);
    }
}

/// Bottom bar of a list page: bulk delete, export buttons and pagination.
///
/// Returns `(bulk_delete_clicked, export_action)`.
pub fn footer<R: Record, F: RecordFilter<R>>(ui: &mut Ui, view: &mut ListView<R, F>) -> (bool, Option<ExportAction>) {
    let mut bulk = false;
    let mut export = None;

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if bulk_delete_button(ui, view) {
            bulk = true;
        }
        ui.add_space(10.0);
        export = export_row(ui);
        ui.add_space(20.0);
        ui.separator();
        pagination_bar(ui, view);
    });

    (bulk, export)
}

/// Toggle label for the expand action of a row.
pub fn expand_label(expanded: bool) -> &'static str {
    if expanded { "Hide" } else { "View More" }
}
