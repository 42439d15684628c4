//! Console administrators.

use serde::{Deserialize, Serialize};

use crate::export::Tabular;
use crate::list::{Column, Record, RecordFilter, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    Admin,
    Moderator,
    Pastor,
    Member,
}

impl AdminRole {
    pub const ALL: [AdminRole; 4] = [AdminRole::Admin, AdminRole::Moderator, AdminRole::Pastor, AdminRole::Member];

    pub fn label(self) -> &'static str {
        match self {
            AdminRole::Admin => "Admin",
            AdminRole::Moderator => "Moderator",
            AdminRole::Pastor => "Pastor",
            AdminRole::Member => "Member",
        }
    }
}

/// Join role labels for display, `-` when empty.
pub fn roles_label(roles: &[AdminRole]) -> String {
    if roles.is_empty() {
        return "-".to_string();
    }
    roles.iter().map(|r| r.label()).collect::<Vec<_>>().join(" • ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub roles: Vec<AdminRole>,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminColumn {
    Name,
    Email,
    Roles,
    Department,
}

impl Column for AdminColumn {
    const ALL: &'static [Self] = &[
        AdminColumn::Name,
        AdminColumn::Email,
        AdminColumn::Roles,
        AdminColumn::Department,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminColumn::Name => "Name",
            AdminColumn::Email => "Email",
            AdminColumn::Roles => "Roles",
            AdminColumn::Department => "Department",
        }
    }
}

impl Record for Admin {
    type Id = u64;
    type Column = AdminColumn;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn haystack(&self) -> String {
        format!("{} {} {} {}", self.full_name, self.email, self.phone, self.department)
    }

    fn sort_value(&self, column: AdminColumn) -> SortValue {
        match column {
            AdminColumn::Name => SortValue::text(&self.full_name),
            AdminColumn::Email => SortValue::text(&self.email),
            AdminColumn::Roles => SortValue::Text(roles_label(&self.roles)),
            AdminColumn::Department => SortValue::text(&self.department),
        }
    }
}

impl Tabular for Admin {
    const TITLE: &'static str = "Admins";

    fn headers() -> &'static [&'static str] {
        &["ID", "Full Name", "Email", "Phone", "Roles", "Department"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.roles.iter().map(|r| r.label()).collect::<Vec<_>>().join("; "),
            self.department.clone(),
        ]
    }
}

pub fn seed() -> Vec<Admin> {
    vec![
        Admin {
            id: 1,
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+27 71 234 5678".to_string(),
            roles: vec![AdminRole::Admin, AdminRole::Pastor],
            department: "Youth Ministry".to_string(),
        },
        Admin {
            id: 2,
            full_name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+27 72 345 6789".to_string(),
            roles: vec![AdminRole::Moderator],
            department: "HR".to_string(),
        },
    ]
}

/// Filter selections of the admins page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminFilter {
    pub role: Option<AdminRole>,
}

impl RecordFilter<Admin> for AdminFilter {
    fn matches(&self, admin: &Admin) -> bool {
        self.role.is_none_or(|role| admin.roles.contains(&role))
    }

    fn is_active(&self) -> bool {
        self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_label() {
        assert_eq!(roles_label(&[AdminRole::Admin, AdminRole::Pastor]), "Admin • Pastor");
        assert_eq!(roles_label(&[]), "-");
    }
}
