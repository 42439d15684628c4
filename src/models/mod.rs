//! Record types for members, departments, events, prayer requests and admins.

pub mod admin;
pub mod department;
pub mod event;
pub mod member;
pub mod prayer;
pub mod profile;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub use admin::{Admin, AdminColumn, AdminFilter, AdminRole};
pub use department::{Department, DepartmentColumn, DepartmentFilter};
pub use event::{Event, EventCategory, EventColumn, EventFilter, EventStatus};
pub use member::{Gender, Member, MemberColumn, MemberFilter, MemberStatus};
pub use prayer::{PrayerColumn, PrayerFilter, PrayerRequest, PrayerStatus};
pub use profile::Profile;

/// Church region, shared by members and prayer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    CapeTown,
    Johannesburg,
    Durban,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::CapeTown, Region::Johannesburg, Region::Durban, Region::Other];

    pub fn label(self) -> &'static str {
        match self {
            Region::CapeTown => "Cape Town",
            Region::Johannesburg => "Johannesburg",
            Region::Durban => "Durban",
            Region::Other => "Other",
        }
    }

    /// Prefix of member ids registered in this region.
    pub fn code(self) -> &'static str {
        match self {
            Region::CapeTown => "CT",
            Region::Johannesburg => "JHB",
            Region::Durban => "DBN",
            Region::Other => "OTH",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Next free sequence number for ids of the form `<prefix><digits>`.
///
/// Uses the highest existing number rather than the collection length, so ids
/// stay unique after deletions. Fails once the highest number is `u32::MAX`.
pub fn next_sequence<'a>(ids: impl IntoIterator<Item = &'a str>, prefix: &str) -> Result<u32> {
    ids.into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|rest| rest.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::validation(format!("No free {prefix} id left, enter an id manually")))
}

/// Format `<prefix><n>` with at least three digits.
pub fn format_id(prefix: &str, n: u32) -> String {
    format!("{prefix}{n:03}")
}

/// Next free numeric id.
pub fn next_numeric_id(ids: impl IntoIterator<Item = u64>) -> u64 {
    ids.into_iter().max().unwrap_or(0) + 1
}

/// Split a comma separated list, dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sequence_uses_highest_suffix() {
        let ids = ["EVT-001", "EVT-007", "EVT-003"];
        assert_eq!(next_sequence(ids, "EVT-").unwrap(), 8);
    }

    #[test]
    fn test_next_sequence_ignores_foreign_ids() {
        let ids = ["CT001", "JHB004", "CT-custom"];
        assert_eq!(next_sequence(ids, "CT").unwrap(), 2);
        assert_eq!(next_sequence([], "DBN").unwrap(), 1);
    }

    #[test]
    fn test_next_sequence_at_u32_max_is_an_error() {
        let ids = ["EVT-001", "EVT-4294967295"];
        assert!(matches!(next_sequence(ids, "EVT-"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_format_id_pads() {
        assert_eq!(format_id("PRQ-", 4), "PRQ-004");
        assert_eq!(format_id("CT", 1234), "CT1234");
    }

    #[test]
    fn test_next_numeric_id() {
        assert_eq!(next_numeric_id([3, 9, 4]), 10);
        assert_eq!(next_numeric_id([]), 1);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" CT001, ,JHB001 ,"), vec!["CT001", "JHB001"]);
        assert!(split_list("").is_empty());
    }
}
