//! Unit tests for the list engine.

use chrono::{NaiveDate, NaiveDateTime};

use super::{DateRange, ListView, Record, SortOrder, SortSpec};
use crate::error::AppError;
use crate::models::event::{self, Event, EventCategory, EventColumn, EventFilter, EventStatus};
use crate::models::prayer::{self, PrayerColumn, PrayerFilter, PrayerRequest};

type Events = ListView<Event, EventFilter>;

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_event(n: u32, title: &str, when: &str) -> Event {
    Event {
        id: format!("EVT-{n:03}"),
        title: title.to_string(),
        datetime: at(when),
        location: "Main Sanctuary".to_string(),
        organiser: "Worship Team".to_string(),
        category: EventCategory::Service,
        status: EventStatus::Upcoming,
        description: String::new(),
        attendees: Vec::new(),
        created_at: day("2025-08-01"),
    }
}

/// Fifteen events, one per day of September, titled "Event 01".."Event 15".
fn many_events(page_size: usize) -> Events {
    let records = (1..=15)
        .map(|n| make_event(n, &format!("Event {n:02}"), &format!("2025-09-{n:02}T10:00")))
        .collect();
    ListView::new(records, SortSpec::asc(EventColumn::DateTime), page_size)
}

fn seeded_events() -> Events {
    ListView::new(event::seed(), SortSpec::asc(EventColumn::DateTime), 6)
}

fn visible_ids<R: Record>(rows: Vec<&R>) -> Vec<String> {
    rows.into_iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_search_without_match_yields_empty_page() {
    let mut view = seeded_events();
    view.set_search("zzz-no-such-event");

    assert!(view.filtered().is_empty());
    assert!(view.visible().is_empty());
    assert_eq!(view.total_pages(), 1);
    assert!(!view.all_visible_selected());
}

#[test]
fn test_search_is_case_insensitive_and_trimmed() {
    let mut view = seeded_events();
    view.set_search("  hall A ");
    assert_eq!(visible_ids(view.visible()), vec!["EVT-002"]);

    view.set_search("evt-003");
    assert_eq!(visible_ids(view.visible()), vec!["EVT-003"]);
}

#[test]
fn test_search_and_filter_combine_with_and() {
    let mut view = seeded_events();
    view.update_filter(|f| f.status = Some(EventStatus::Upcoming));
    assert_eq!(view.filtered().len(), 3);

    view.set_search("youth");
    assert_eq!(visible_ids(view.visible()), vec!["EVT-002"]);

    view.update_filter(|f| f.category = Some(EventCategory::Fundraiser));
    assert!(view.visible().is_empty());
}

#[test]
fn test_date_range_bounds_are_inclusive_days() {
    let mut view = many_events(20);
    view.update_filter(|f| {
        f.dates = DateRange {
            from: Some(day("2025-09-03")),
            to: Some(day("2025-09-05")),
        }
    });
    assert_eq!(visible_ids(view.visible()), vec!["EVT-003", "EVT-004", "EVT-005"]);
}

#[test]
fn test_sorting_twice_reverses_filtered_order() {
    let mut view = seeded_events();
    view.update_filter(|f| f.status = Some(EventStatus::Upcoming));

    view.toggle_sort(EventColumn::Title);
    assert_eq!(view.sort().order, SortOrder::Asc);
    let asc = visible_ids(view.sorted());

    view.toggle_sort(EventColumn::Title);
    assert_eq!(view.sort().order, SortOrder::Desc);
    let mut desc = visible_ids(view.sorted());
    desc.reverse();

    assert_eq!(asc, desc);
    assert_eq!(asc, vec!["EVT-004", "EVT-001", "EVT-002"]);
}

#[test]
fn test_new_column_always_starts_ascending() {
    let mut view = seeded_events();
    view.toggle_sort(EventColumn::DateTime);
    assert_eq!(view.sort(), SortSpec::desc(EventColumn::DateTime));

    view.toggle_sort(EventColumn::Location);
    assert_eq!(view.sort(), SortSpec::asc(EventColumn::Location));
}

#[test]
fn test_date_column_sorts_chronologically() {
    let records = vec![
        make_event(1, "Late", "2025-12-01T09:00"),
        make_event(2, "Early", "2025-02-01T09:00"),
        make_event(3, "Middle", "2025-10-01T09:00"),
    ];
    let view: Events = ListView::new(records, SortSpec::asc(EventColumn::DateTime), 10);
    assert_eq!(visible_ids(view.visible()), vec!["EVT-002", "EVT-003", "EVT-001"]);
}

#[test]
fn test_pagination_slices_sorted_rows() {
    let mut view = many_events(6);
    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.visible().len(), 6);

    view.set_page(3);
    assert_eq!(visible_ids(view.visible()), vec!["EVT-013", "EVT-014", "EVT-015"]);
}

#[test]
fn test_search_and_filter_changes_reset_page() {
    let mut view = many_events(6);
    view.set_page(3);
    view.set_search("Event");
    assert_eq!(view.page(), 1);

    view.set_page(2);
    view.update_filter(|f| f.category = Some(EventCategory::Service));
    assert_eq!(view.page(), 1);
}

#[test]
fn test_page_is_not_clamped_when_results_shrink() {
    let mut view = many_events(6);
    view.set_page(3);
    for id in ["EVT-013", "EVT-014", "EVT-015"] {
        view.remove(&id.to_string()).unwrap();
    }

    assert_eq!(view.page(), 3);
    assert_eq!(view.total_pages(), 2);
    assert!(view.visible().is_empty());
}

#[test]
fn test_select_all_then_deselect_one_unchecks_select_all() {
    let mut view = many_events(6);
    view.select_all_visible(true);
    assert!(view.all_visible_selected());
    assert_eq!(view.selected_ids().len(), 6);

    view.toggle_selected(&"EVT-002".to_string());
    assert!(!view.all_visible_selected());
    assert_eq!(view.selected_ids().len(), 5);
}

#[test]
fn test_select_all_covers_only_current_page() {
    let mut view = many_events(6);
    view.set_page(3);
    view.select_all_visible(true);
    assert_eq!(view.selected_ids(), ["EVT-013", "EVT-014", "EVT-015"]);

    view.select_all_visible(false);
    assert!(view.selected_ids().is_empty());
}

#[test]
fn test_bulk_delete_removes_selection_only() {
    let mut view = many_events(6);
    view.toggle_selected(&"EVT-001".to_string());
    view.toggle_selected(&"EVT-007".to_string());

    assert_eq!(view.remove_selected(), 2);
    assert_eq!(view.len(), 13);
    assert!(!view.contains(&"EVT-001".to_string()));
    assert!(view.contains(&"EVT-002".to_string()));
    assert!(view.selected_ids().is_empty());

    assert_eq!(view.remove_selected(), 0);
    assert_eq!(view.len(), 13);
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let mut view = seeded_events();
    let before: Vec<Event> = view.records().to_vec();
    view.toggle_selected(&"EVT-002".to_string());
    view.toggle_expanded(&"EVT-002".to_string());

    let removed = view.remove(&"EVT-002".to_string()).unwrap();
    assert_eq!(removed.title, "Youth Conference");
    assert_eq!(view.len(), before.len() - 1);

    let remaining: Vec<&Event> = before.iter().filter(|e| e.id != "EVT-002").collect();
    assert!(remaining.iter().all(|e| view.get(&e.id) == Some(*e)));
    assert!(!view.is_selected(&"EVT-002".to_string()));
    assert!(!view.is_expanded(&"EVT-002".to_string()));
}

#[test]
fn test_remove_unknown_id_is_not_found() {
    let mut view = seeded_events();
    let err = view.remove(&"EVT-999".to_string()).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(view.len(), event::seed().len());
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let mut view = seeded_events();
    let dup = make_event(1, "Another Service", "2025-09-14T09:00");
    assert!(matches!(view.insert(dup), Err(AppError::DuplicateId(_))));
    assert_eq!(view.len(), event::seed().len());
}

#[test]
fn test_update_replaces_matching_record() {
    let mut view = seeded_events();
    let mut edited = view.get(&"EVT-001".to_string()).unwrap().clone();
    edited.location = "Chapel".to_string();
    view.update(edited).unwrap();

    assert_eq!(view.get(&"EVT-001".to_string()).unwrap().location, "Chapel");
    assert_eq!(view.len(), event::seed().len());

    let ghost = make_event(99, "Ghost", "2025-09-14T09:00");
    assert!(view.update(ghost).is_err());
}

#[test]
fn test_prepend_places_record_first() {
    let mut view = seeded_events();
    view.prepend(make_event(50, "Prayer Night", "2025-09-20T19:00")).unwrap();
    assert_eq!(view.records()[0].id, "EVT-050");
}

#[test]
fn test_expand_toggles() {
    let mut view = seeded_events();
    let id = "EVT-003".to_string();
    view.toggle_expanded(&id);
    assert!(view.is_expanded(&id));
    view.toggle_expanded(&id);
    assert!(!view.is_expanded(&id));
}

#[test]
fn test_clear_filters_restores_full_list() {
    let mut view = seeded_events();
    view.set_search("youth");
    view.update_filter(|f| f.status = Some(EventStatus::Cancelled));
    assert!(view.has_active_filters());

    view.clear_filters();
    assert!(!view.has_active_filters());
    assert_eq!(view.filtered().len(), event::seed().len());
}

#[test]
fn test_prayer_privacy_filter_and_default_sort() {
    let mut view: ListView<PrayerRequest, PrayerFilter> =
        ListView::new(prayer::seed(), SortSpec::desc(PrayerColumn::Submitted), 8);
    assert_eq!(visible_ids(view.visible()), vec!["PRQ-001", "PRQ-002", "PRQ-003"]);

    view.update_filter(|f| f.private = Some(true));
    assert_eq!(visible_ids(view.visible()), vec!["PRQ-002"]);

    view.update_filter(|f| f.private = Some(false));
    assert_eq!(visible_ids(view.visible()), vec!["PRQ-001", "PRQ-003"]);
}

#[test]
fn test_update_with_changes_one_field() {
    let mut view: ListView<PrayerRequest, PrayerFilter> =
        ListView::new(prayer::seed(), SortSpec::desc(PrayerColumn::Submitted), 8);
    view.update_with(&"PRQ-002".to_string(), |r| r.is_private = !r.is_private)
        .unwrap();
    assert!(!view.get(&"PRQ-002".to_string()).unwrap().is_private);
}
