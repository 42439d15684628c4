//! Prayer requests submitted by members and visitors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Region;
use crate::export::Tabular;
use crate::list::{Column, DateRange, Record, RecordFilter, SortValue, matches_choice};

pub const ID_PREFIX: &str = "PRQ-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerStatus {
    Pending,
    PrayedFor,
    Answered,
}

impl PrayerStatus {
    pub const ALL: [PrayerStatus; 3] = [PrayerStatus::Pending, PrayerStatus::PrayedFor, PrayerStatus::Answered];

    pub fn label(self) -> &'static str {
        match self {
            PrayerStatus::Pending => "Pending",
            PrayerStatus::PrayedFor => "Prayed For",
            PrayerStatus::Answered => "Answered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerRequest {
    pub id: String,
    /// Empty for anonymous requests.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
    pub message: String,
    pub submitted_at: NaiveDateTime,
    pub status: PrayerStatus,
    pub is_private: bool,
    /// Linked member id, empty when the requester is not a member.
    pub member_id: String,
}

impl PrayerRequest {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { "Anonymous" } else { &self.name }
    }

    pub fn privacy_label(&self) -> &'static str {
        if self.is_private { "Private" } else { "Public" }
    }

    pub fn display_submitted(&self) -> String {
        self.submitted_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrayerColumn {
    Id,
    Name,
    Region,
    Submitted,
    Status,
    Privacy,
}

impl Column for PrayerColumn {
    const ALL: &'static [Self] = &[
        PrayerColumn::Id,
        PrayerColumn::Name,
        PrayerColumn::Region,
        PrayerColumn::Submitted,
        PrayerColumn::Status,
        PrayerColumn::Privacy,
    ];

    fn label(self) -> &'static str {
        match self {
            PrayerColumn::Id => "ID",
            PrayerColumn::Name => "Name",
            PrayerColumn::Region => "Region",
            PrayerColumn::Submitted => "Submitted",
            PrayerColumn::Status => "Status",
            PrayerColumn::Privacy => "Privacy",
        }
    }
}

impl Record for PrayerRequest {
    type Id = String;
    type Column = PrayerColumn;

    fn id(&self) -> &String {
        &self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name,
            self.email,
            self.phone,
            self.region.label(),
            self.message,
            self.id
        )
    }

    fn sort_value(&self, column: PrayerColumn) -> SortValue {
        match column {
            PrayerColumn::Id => SortValue::text(&self.id),
            PrayerColumn::Name => SortValue::text(&self.name),
            PrayerColumn::Region => SortValue::text(self.region.label()),
            PrayerColumn::Submitted => SortValue::Moment(self.submitted_at),
            PrayerColumn::Status => SortValue::text(self.status.label()),
            PrayerColumn::Privacy => SortValue::Flag(self.is_private),
        }
    }
}

impl Tabular for PrayerRequest {
    const TITLE: &'static str = "Prayer Requests";

    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Email",
            "Phone",
            "Region",
            "Message",
            "Submitted",
            "Status",
            "Privacy",
            "Member ID",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name().to_string(),
            self.email.clone(),
            self.phone.clone(),
            self.region.label().to_string(),
            self.message.clone(),
            self.display_submitted(),
            self.status.label().to_string(),
            self.privacy_label().to_string(),
            self.member_id.clone(),
        ]
    }
}

pub fn seed() -> Vec<PrayerRequest> {
    let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap_or_default();

    vec![
        PrayerRequest {
            id: "PRQ-001".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+27 71 234 5678".to_string(),
            region: Region::CapeTown,
            message: "Please pray for my job interview this week. I need peace and confidence.".to_string(),
            submitted_at: at("2025-09-03T10:15:00"),
            status: PrayerStatus::Pending,
            is_private: false,
            member_id: "CT001".to_string(),
        },
        PrayerRequest {
            id: "PRQ-002".to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            region: Region::Johannesburg,
            message: "Health issues in my family. Trusting God for complete healing. Keep this private."
                .to_string(),
            submitted_at: at("2025-09-02T08:40:00"),
            status: PrayerStatus::Pending,
            is_private: true,
            member_id: String::new(),
        },
        PrayerRequest {
            id: "PRQ-003".to_string(),
            name: "Sarah M".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "+27 72 555 6677".to_string(),
            region: Region::Durban,
            message: "Traveling this weekend. Please pray for journey mercies.".to_string(),
            submitted_at: at("2025-08-28T17:20:00"),
            status: PrayerStatus::PrayedFor,
            is_private: false,
            member_id: "DBN010".to_string(),
        },
    ]
}

/// Filter selections of the prayer requests page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrayerFilter {
    pub status: Option<PrayerStatus>,
    pub region: Option<Region>,
    /// `Some(true)` keeps only private requests, `Some(false)` only public ones.
    pub private: Option<bool>,
    pub dates: DateRange,
}

impl RecordFilter<PrayerRequest> for PrayerFilter {
    fn matches(&self, request: &PrayerRequest) -> bool {
        matches_choice(self.status.as_ref(), &request.status)
            && matches_choice(self.region.as_ref(), &request.region)
            && matches_choice(self.private.as_ref(), &request.is_private)
            && self.dates.contains(request.submitted_at)
    }

    fn is_active(&self) -> bool {
        self.status.is_some() || self.region.is_some() || self.private.is_some() || self.dates.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_display_name() {
        let requests = seed();
        assert_eq!(requests[1].display_name(), "Anonymous");
        assert_eq!(requests[0].display_name(), "John Doe");
    }

    #[test]
    fn test_privacy_sorts_public_first() {
        let requests = seed();
        assert!(requests[0].sort_value(PrayerColumn::Privacy) < requests[1].sort_value(PrayerColumn::Privacy));
    }

    #[test]
    fn test_haystack_covers_message_and_region() {
        let hay = seed()[2].haystack();
        assert!(hay.contains("journey mercies"));
        assert!(hay.contains("Durban"));
    }
}
