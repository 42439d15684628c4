//! Congregation members.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;
use crate::export::Tabular;
use crate::list::{Column, DateRange, Record, RecordFilter, SortValue, matches_choice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
    Visitor,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [MemberStatus::Active, MemberStatus::Inactive, MemberStatus::Visitor];

    pub fn label(self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
            MemberStatus::Visitor => "Visitor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Region code followed by a sequence number, e.g. `CT001`.
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
    pub department: String,
    pub gender: Option<Gender>,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub address: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberColumn {
    Id,
    Name,
    Phone,
    Region,
    JoinDate,
    Status,
}

impl Column for MemberColumn {
    const ALL: &'static [Self] = &[
        MemberColumn::Id,
        MemberColumn::Name,
        MemberColumn::Phone,
        MemberColumn::Region,
        MemberColumn::JoinDate,
        MemberColumn::Status,
    ];

    fn label(self) -> &'static str {
        match self {
            MemberColumn::Id => "Member ID",
            MemberColumn::Name => "Name",
            MemberColumn::Phone => "Phone",
            MemberColumn::Region => "Region",
            MemberColumn::JoinDate => "Joined",
            MemberColumn::Status => "Status",
        }
    }
}

impl Record for Member {
    type Id = String;
    type Column = MemberColumn;

    fn id(&self) -> &String {
        &self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id, self.full_name, self.email, self.phone, self.department
        )
    }

    fn sort_value(&self, column: MemberColumn) -> SortValue {
        match column {
            MemberColumn::Id => SortValue::text(&self.id),
            MemberColumn::Name => SortValue::text(&self.full_name),
            MemberColumn::Phone => SortValue::text(&self.phone),
            MemberColumn::Region => SortValue::text(self.region.label()),
            MemberColumn::JoinDate => SortValue::Day(self.join_date),
            MemberColumn::Status => SortValue::text(self.status.label()),
        }
    }
}

impl Tabular for Member {
    const TITLE: &'static str = "Members";

    fn headers() -> &'static [&'static str] {
        &[
            "Member ID",
            "Full Name",
            "Email",
            "Phone",
            "Region",
            "Department",
            "Gender",
            "Join Date",
            "Status",
            "Address",
            "Notes",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.region.label().to_string(),
            self.department.clone(),
            self.gender.map(|g| g.label().to_string()).unwrap_or_default(),
            self.join_date.to_string(),
            self.status.label().to_string(),
            self.address.clone(),
            self.notes.clone(),
        ]
    }
}

pub fn seed() -> Vec<Member> {
    let day = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default();
    let member = |id: &str, name: &str, email: &str, phone: &str, region, department: &str, gender, joined: &str, status| {
        Member {
            id: id.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            region,
            department: department.to_string(),
            gender,
            join_date: day(joined),
            status,
            address: String::new(),
            notes: String::new(),
        }
    };

    vec![
        member(
            "CT001",
            "John Doe",
            "john@example.com",
            "+27 71 234 5678",
            Region::CapeTown,
            "Worship Team",
            Some(Gender::Male),
            "2021-03-14",
            MemberStatus::Active,
        ),
        member(
            "CT002",
            "Thandi Nkosi",
            "thandi@example.com",
            "+27 82 410 2231",
            Region::CapeTown,
            "Outreach Team",
            Some(Gender::Female),
            "2022-07-02",
            MemberStatus::Active,
        ),
        member(
            "JHB001",
            "Jane Smith",
            "jane@example.com",
            "+27 72 345 6789",
            Region::Johannesburg,
            "Youth Ministry",
            Some(Gender::Female),
            "2020-11-22",
            MemberStatus::Active,
        ),
        member(
            "JHB002",
            "Peter Mokoena",
            "peter.m@example.com",
            "+27 76 908 1122",
            Region::Johannesburg,
            "",
            Some(Gender::Male),
            "2024-01-07",
            MemberStatus::Visitor,
        ),
        member(
            "DBN010",
            "Sarah Moodley",
            "sarah@example.com",
            "+27 72 555 6677",
            Region::Durban,
            "Children's Ministry",
            Some(Gender::Female),
            "2019-05-19",
            MemberStatus::Active,
        ),
        member(
            "DBN011",
            "Sipho Dlamini",
            "sipho@example.com",
            "+27 61 777 0192",
            Region::Durban,
            "Worship Team",
            Some(Gender::Male),
            "2018-09-30",
            MemberStatus::Inactive,
        ),
    ]
}

/// Filter selections of the members page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFilter {
    pub region: Option<Region>,
    pub status: Option<MemberStatus>,
    pub joined: DateRange,
}

impl RecordFilter<Member> for MemberFilter {
    fn matches(&self, member: &Member) -> bool {
        matches_choice(self.region.as_ref(), &member.region)
            && matches_choice(self.status.as_ref(), &member.status)
            && self.joined.contains_day(member.join_date)
    }

    fn is_active(&self) -> bool {
        self.region.is_some() || self.status.is_some() || self.joined.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_date_sorts_chronologically() {
        let members = seed();
        let older = members.iter().find(|m| m.id == "DBN011").unwrap();
        let newer = members.iter().find(|m| m.id == "JHB002").unwrap();
        assert!(older.sort_value(MemberColumn::JoinDate) < newer.sort_value(MemberColumn::JoinDate));
    }

    #[test]
    fn test_seed_ids_use_region_codes() {
        for member in seed() {
            assert!(member.id.starts_with(member.region.code()), "{}", member.id);
        }
    }
}
