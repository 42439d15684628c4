//! Church events.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::export::Tabular;
use crate::list::{Column, DateRange, Record, RecordFilter, SortValue, matches_choice};

/// Id prefix for generated event ids.
pub const ID_PREFIX: &str = "EVT-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Service,
    Conference,
    Outreach,
    Fundraiser,
    Meeting,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Service,
        EventCategory::Conference,
        EventCategory::Outreach,
        EventCategory::Fundraiser,
        EventCategory::Meeting,
        EventCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Service => "Service",
            EventCategory::Conference => "Conference",
            EventCategory::Outreach => "Outreach",
            EventCategory::Fundraiser => "Fundraiser",
            EventCategory::Meeting => "Meeting",
            EventCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }

    /// Status implied by the start time alone.
    pub fn from_start(start: NaiveDateTime, now: NaiveDateTime) -> Self {
        if start > now {
            EventStatus::Upcoming
        } else {
            EventStatus::Completed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub datetime: NaiveDateTime,
    pub location: String,
    pub organiser: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub description: String,
    /// Member ids of registered attendees.
    pub attendees: Vec<String>,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Title,
    DateTime,
    Location,
    Organiser,
    Status,
}

impl Column for EventColumn {
    const ALL: &'static [Self] = &[
        EventColumn::Id,
        EventColumn::Title,
        EventColumn::DateTime,
        EventColumn::Location,
        EventColumn::Organiser,
        EventColumn::Status,
    ];

    fn label(self) -> &'static str {
        match self {
            EventColumn::Id => "Event ID",
            EventColumn::Title => "Title",
            EventColumn::DateTime => "Date & Time",
            EventColumn::Location => "Location",
            EventColumn::Organiser => "Organiser",
            EventColumn::Status => "Status",
        }
    }
}

impl Record for Event {
    type Id = String;
    type Column = EventColumn;

    fn id(&self) -> &String {
        &self.id
    }

    fn haystack(&self) -> String {
        format!("{} {} {} {}", self.title, self.location, self.organiser, self.id)
    }

    fn sort_value(&self, column: EventColumn) -> SortValue {
        match column {
            EventColumn::Id => SortValue::text(&self.id),
            EventColumn::Title => SortValue::text(&self.title),
            EventColumn::DateTime => SortValue::Moment(self.datetime),
            EventColumn::Location => SortValue::text(&self.location),
            EventColumn::Organiser => SortValue::text(&self.organiser),
            EventColumn::Status => SortValue::text(self.status.label()),
        }
    }
}

impl Tabular for Event {
    const TITLE: &'static str = "Events";

    fn headers() -> &'static [&'static str] {
        &[
            "Event ID",
            "Title",
            "Date & Time",
            "Location",
            "Organiser",
            "Category",
            "Status",
            "Description",
            "Attendees",
            "Created",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.display_datetime(),
            self.location.clone(),
            self.organiser.clone(),
            self.category.label().to_string(),
            self.status.label().to_string(),
            self.description.clone(),
            self.attendees.join(", "),
            self.created_at.to_string(),
        ]
    }
}

impl Event {
    pub fn display_datetime(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Sample events shown on first launch.
pub fn seed() -> Vec<Event> {
    let at = |date: &str| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M").unwrap_or_default();
    let day = |date: &str| NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default();

    vec![
        Event {
            id: "EVT-001".to_string(),
            title: "Sunday Service".to_string(),
            datetime: at("2025-09-07T09:00"),
            location: "Main Sanctuary".to_string(),
            organiser: "Worship Team".to_string(),
            category: EventCategory::Service,
            status: EventStatus::Upcoming,
            description: "Weekly Sunday service with praise and worship.".to_string(),
            attendees: vec!["CT001".to_string(), "JHB001".to_string()],
            created_at: day("2025-08-20"),
        },
        Event {
            id: "EVT-002".to_string(),
            title: "Youth Conference".to_string(),
            datetime: at("2025-10-15T18:00"),
            location: "Hall A".to_string(),
            organiser: "Youth Ministry".to_string(),
            category: EventCategory::Conference,
            status: EventStatus::Upcoming,
            description: "Two-day youth conference with guest speakers.".to_string(),
            attendees: Vec::new(),
            created_at: day("2025-08-25"),
        },
        Event {
            id: "EVT-003".to_string(),
            title: "Community Outreach".to_string(),
            datetime: at("2025-08-20T10:00"),
            location: "City Park".to_string(),
            organiser: "Outreach Team".to_string(),
            category: EventCategory::Outreach,
            status: EventStatus::Completed,
            description: "Feeding program and evangelism.".to_string(),
            attendees: vec!["CT002".to_string()],
            created_at: day("2025-08-01"),
        },
        Event {
            id: "EVT-004".to_string(),
            title: "Building Fund Dinner".to_string(),
            datetime: at("2025-11-08T18:30"),
            location: "Fellowship Hall".to_string(),
            organiser: "Finance Committee".to_string(),
            category: EventCategory::Fundraiser,
            status: EventStatus::Upcoming,
            description: "Dinner and auction towards the new children's wing.".to_string(),
            attendees: Vec::new(),
            created_at: day("2025-09-01"),
        },
        Event {
            id: "EVT-005".to_string(),
            title: "Elders Meeting".to_string(),
            datetime: at("2025-09-02T19:00"),
            location: "Board Room".to_string(),
            organiser: "Church Council".to_string(),
            category: EventCategory::Meeting,
            status: EventStatus::Completed,
            description: "Quarterly planning meeting.".to_string(),
            attendees: vec!["DBN010".to_string()],
            created_at: day("2025-08-15"),
        },
    ]
}

/// Filter selections of the events page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub category: Option<EventCategory>,
    pub dates: DateRange,
}

impl RecordFilter<Event> for EventFilter {
    fn matches(&self, event: &Event) -> bool {
        matches_choice(self.status.as_ref(), &event.status)
            && matches_choice(self.category.as_ref(), &event.category)
            && self.dates.contains(event.datetime)
    }

    fn is_active(&self) -> bool {
        self.status.is_some() || self.category.is_some() || self.dates.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_start() {
        let now = NaiveDateTime::parse_from_str("2025-09-05T12:00", "%Y-%m-%dT%H:%M").unwrap();
        let later = NaiveDateTime::parse_from_str("2025-09-07T09:00", "%Y-%m-%dT%H:%M").unwrap();
        let earlier = NaiveDateTime::parse_from_str("2025-09-01T09:00", "%Y-%m-%dT%H:%M").unwrap();

        assert_eq!(EventStatus::from_start(later, now), EventStatus::Upcoming);
        assert_eq!(EventStatus::from_start(earlier, now), EventStatus::Completed);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let events = seed();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_haystack_includes_id_and_organiser() {
        let event = &seed()[0];
        let hay = event.haystack();
        assert!(hay.contains("EVT-001"));
        assert!(hay.contains("Worship Team"));
    }

    #[test]
    fn test_cells_match_headers() {
        let event = &seed()[0];
        assert_eq!(event.cells().len(), Event::headers().len());
        assert_eq!(event.cells()[8], "CT001, JHB001");
    }
}
