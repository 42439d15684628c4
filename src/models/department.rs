//! Church departments and ministries.

use serde::{Deserialize, Serialize};

use crate::export::Tabular;
use crate::list::{Column, Record, RecordFilter, SortValue, matches_choice};

/// Card accent colors offered by the department form, as RGB.
pub const COLOR_OPTIONS: [[u8; 3]; 6] = [
    [0x2a, 0x7d, 0xf6], // blue
    [0x2f, 0xc4, 0x5a], // green
    [0x9b, 0x59, 0xff], // purple
    [0xf6, 0xa2, 0x1a], // orange
    [0xff, 0x5a, 0x73], // pink
    [0x10, 0xb8, 0xd6], // teal
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub leader_name: String,
    pub leader_email: String,
    pub schedule: String,
    pub color: [u8; 3],
    pub active: bool,
    /// Display-only head count, not derived from member records.
    pub members: u32,
}

impl Department {
    pub fn color_hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentColumn {
    Name,
    Leader,
    Members,
    Active,
}

impl Column for DepartmentColumn {
    const ALL: &'static [Self] = &[
        DepartmentColumn::Name,
        DepartmentColumn::Leader,
        DepartmentColumn::Members,
        DepartmentColumn::Active,
    ];

    fn label(self) -> &'static str {
        match self {
            DepartmentColumn::Name => "Name",
            DepartmentColumn::Leader => "Leader",
            DepartmentColumn::Members => "Members",
            DepartmentColumn::Active => "Active",
        }
    }
}

impl Record for Department {
    type Id = u64;
    type Column = DepartmentColumn;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.leader_name, self.schedule
        )
    }

    fn sort_value(&self, column: DepartmentColumn) -> SortValue {
        match column {
            DepartmentColumn::Name => SortValue::text(&self.name),
            DepartmentColumn::Leader => SortValue::text(&self.leader_name),
            DepartmentColumn::Members => SortValue::Number(i64::from(self.members)),
            DepartmentColumn::Active => SortValue::Flag(self.active),
        }
    }
}

impl Tabular for Department {
    const TITLE: &'static str = "Departments";

    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Description",
            "Leader",
            "Leader Email",
            "Schedule",
            "Color",
            "Active",
            "Members",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.leader_name.clone(),
            self.leader_email.clone(),
            self.schedule.clone(),
            self.color_hex(),
            if self.active { "Yes" } else { "No" }.to_string(),
            self.members.to_string(),
        ]
    }
}

pub fn seed() -> Vec<Department> {
    let dept = |id, name: &str, description: &str, leader: &str, email: &str, schedule: &str, color| Department {
        id,
        name: name.to_string(),
        description: description.to_string(),
        leader_name: leader.to_string(),
        leader_email: email.to_string(),
        schedule: schedule.to_string(),
        color,
        active: true,
        members: 0,
    };

    vec![
        dept(
            1,
            "Children's Ministry",
            "Teaching children about God's love through fun and interactive lessons",
            "Jennifer Davis",
            "jennifer@gracecommunity.org",
            "Every Sunday at 9 AM",
            COLOR_OPTIONS[3],
        ),
        dept(
            2,
            "Outreach Team",
            "Serving our local community and spreading the gospel",
            "David Wilson",
            "david@gracecommunity.org",
            "First Saturday of each month",
            COLOR_OPTIONS[1],
        ),
        dept(
            3,
            "Worship Team",
            "Leading our congregation in praise and worship through music and song",
            "Sarah Johnson",
            "sarah@gracecommunity.org",
            "Every Thursday at 7 PM",
            COLOR_OPTIONS[2],
        ),
        dept(
            4,
            "Youth Ministry",
            "Engaging and equipping the next generation to follow Christ",
            "Mike Thompson",
            "mike@gracecommunity.org",
            "Every Friday at 6 PM",
            COLOR_OPTIONS[0],
        ),
    ]
}

/// Filter selections of the departments page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentFilter {
    pub active: Option<bool>,
}

impl RecordFilter<Department> for DepartmentFilter {
    fn matches(&self, dept: &Department) -> bool {
        matches_choice(self.active.as_ref(), &dept.active)
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let dept = &seed()[0];
        assert_eq!(dept.color_hex(), "#f6a21a");
    }

    #[test]
    fn test_member_count_is_numeric_sort() {
        let mut a = seed()[0].clone();
        let mut b = seed()[1].clone();
        a.members = 9;
        b.members = 10;
        assert!(a.sort_value(DepartmentColumn::Members) < b.sort_value(DepartmentColumn::Members));
    }
}
