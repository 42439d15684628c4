//! Add/edit form state for the record pages.
//!
//! Each form keeps raw text input while the modal is open. `build` checks the
//! required fields and turns the input into a record, generating an id for new
//! records from the ids already in the collection.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AppError, Result};
use crate::list::{parse_flexible_date, parse_flexible_datetime};
use crate::models::department::COLOR_OPTIONS;
use crate::models::{
    Admin, AdminRole, Department, Event, EventCategory, EventStatus, Gender, Member, MemberStatus, PrayerRequest,
    PrayerStatus, Profile, Region, event, format_id, next_numeric_id, next_sequence, prayer, split_list,
};

fn required(value: &str, message: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(value.to_string())
}

/// Form state for member CRUD.
#[derive(Clone)]
pub struct MemberForm {
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
    pub department: String,
    pub gender: Option<Gender>,
    pub join_date_input: String,
    pub status: MemberStatus,
    pub address: String,
    pub notes: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            region: Region::CapeTown,
            department: String::new(),
            gender: None,
            join_date_input: String::new(),
            status: MemberStatus::Active,
            address: String::new(),
            notes: String::new(),
            is_open: false,
            is_editing: false,
        }
    }
}

impl MemberForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Open an empty form with the join date set to `today`.
    pub fn open_new(today: NaiveDate) -> Self {
        Self {
            join_date_input: today.format("%Y-%m-%d").to_string(),
            is_open: true,
            ..Default::default()
        }
    }

    /// Create a form pre-filled for editing an existing member.
    pub fn edit(member: &Member) -> Self {
        Self {
            id: Some(member.id.clone()),
            full_name: member.full_name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            region: member.region,
            department: member.department.clone(),
            gender: member.gender,
            join_date_input: member.join_date.format("%Y-%m-%d").to_string(),
            status: member.status,
            address: member.address.clone(),
            notes: member.notes.clone(),
            is_open: true,
            is_editing: true,
        }
    }

    /// New member ids continue the sequence of the chosen region.
    pub fn build(&self, existing: &[Member]) -> Result<Member> {
        let full_name = required(&self.full_name, "Full name is required")?;
        if self.join_date_input.trim().is_empty() {
            return Err(AppError::validation("Join date is required"));
        }
        let join_date = parse_flexible_date(&self.join_date_input)
            .ok_or_else(|| AppError::validation("Invalid join date format"))?;

        let id = match &self.id {
            Some(id) => id.clone(),
            None => {
                let prefix = self.region.code();
                format_id(prefix, next_sequence(existing.iter().map(|m| m.id.as_str()), prefix)?)
            }
        };

        Ok(Member {
            id,
            full_name,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            region: self.region,
            department: self.department.trim().to_string(),
            gender: self.gender,
            join_date,
            status: self.status,
            address: self.address.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Form state for department CRUD.
#[derive(Clone)]
pub struct DepartmentForm {
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub leader_name: String,
    pub leader_email: String,
    pub schedule: String,
    pub color: [u8; 3],
    pub active: bool,
    pub members: u32,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for DepartmentForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            leader_name: String::new(),
            leader_email: String::new(),
            schedule: String::new(),
            color: COLOR_OPTIONS[0],
            active: true,
            members: 0,
            is_open: false,
            is_editing: false,
        }
    }
}

impl DepartmentForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(dept: &Department) -> Self {
        Self {
            id: Some(dept.id),
            name: dept.name.clone(),
            description: dept.description.clone(),
            leader_name: dept.leader_name.clone(),
            leader_email: dept.leader_email.clone(),
            schedule: dept.schedule.clone(),
            color: dept.color,
            active: dept.active,
            members: dept.members,
            is_open: true,
            is_editing: true,
        }
    }

    pub fn build(&self, existing: &[Department]) -> Result<Department> {
        let name = required(&self.name, "Department name is required")?;
        let id = self
            .id
            .unwrap_or_else(|| next_numeric_id(existing.iter().map(|d| d.id)));

        Ok(Department {
            id,
            name,
            description: self.description.trim().to_string(),
            leader_name: self.leader_name.trim().to_string(),
            leader_email: self.leader_email.trim().to_string(),
            schedule: self.schedule.trim().to_string(),
            color: self.color,
            active: self.active,
            members: self.members,
        })
    }
}

/// Form state for event CRUD.
#[derive(Default, Clone)]
pub struct EventForm {
    /// Id of the event being edited.
    pub editing_id: Option<String>,
    /// Optional user-chosen id for a new event.
    pub id_input: String,
    pub title: String,
    pub datetime_input: String,
    pub location: String,
    pub organiser: String,
    /// `None` files the event under Other.
    pub category: Option<EventCategory>,
    /// `None` derives the status from the start time.
    pub status: Option<EventStatus>,
    pub description: String,
    pub attendees_input: String,
    pub created_at: Option<NaiveDate>,
    pub is_open: bool,
    pub is_editing: bool,
}

impl EventForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(event: &Event) -> Self {
        Self {
            editing_id: Some(event.id.clone()),
            id_input: event.id.clone(),
            title: event.title.clone(),
            datetime_input: event.datetime.format("%Y-%m-%d %H:%M").to_string(),
            location: event.location.clone(),
            organiser: event.organiser.clone(),
            category: Some(event.category),
            status: Some(event.status),
            description: event.description.clone(),
            attendees_input: event.attendees.join(", "),
            created_at: Some(event.created_at),
            is_open: true,
            is_editing: true,
        }
    }

    pub fn build(&self, existing: &[Event], now: NaiveDateTime) -> Result<Event> {
        let title = required(&self.title, "Title is required")?;
        if self.datetime_input.trim().is_empty() {
            return Err(AppError::validation("Date & time is required"));
        }
        let datetime = parse_flexible_datetime(&self.datetime_input)
            .ok_or_else(|| AppError::validation("Invalid date & time, use YYYY-MM-DD HH:MM"))?;

        let id = match &self.editing_id {
            Some(id) => id.clone(),
            None => {
                let chosen = self.id_input.trim();
                if chosen.is_empty() {
                    let n = next_sequence(existing.iter().map(|e| e.id.as_str()), event::ID_PREFIX)?;
                    format_id(event::ID_PREFIX, n)
                } else if existing.iter().any(|e| e.id == chosen) {
                    return Err(AppError::DuplicateId("Event ID".to_string()));
                } else {
                    chosen.to_string()
                }
            }
        };

        Ok(Event {
            id,
            title,
            datetime,
            location: self.location.trim().to_string(),
            organiser: self.organiser.trim().to_string(),
            category: self.category.unwrap_or(EventCategory::Other),
            status: self
                .status
                .unwrap_or_else(|| EventStatus::from_start(datetime, now)),
            description: self.description.trim().to_string(),
            attendees: split_list(&self.attendees_input),
            created_at: self.created_at.unwrap_or(now.date()),
        })
    }
}

/// Form state for prayer request CRUD.
#[derive(Clone)]
pub struct PrayerForm {
    pub editing_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
    pub message: String,
    pub status: PrayerStatus,
    pub is_private: bool,
    pub member_id: String,
    pub submitted_at: Option<NaiveDateTime>,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for PrayerForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            region: Region::CapeTown,
            message: String::new(),
            status: PrayerStatus::Pending,
            is_private: false,
            member_id: String::new(),
            submitted_at: None,
            is_open: false,
            is_editing: false,
        }
    }
}

impl PrayerForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(request: &PrayerRequest) -> Self {
        Self {
            editing_id: Some(request.id.clone()),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            region: request.region,
            message: request.message.clone(),
            status: request.status,
            is_private: request.is_private,
            member_id: request.member_id.clone(),
            submitted_at: Some(request.submitted_at),
            is_open: true,
            is_editing: true,
        }
    }

    pub fn build(&self, existing: &[PrayerRequest], now: NaiveDateTime) -> Result<PrayerRequest> {
        let message = required(&self.message, "Prayer request message is required")?;
        let id = match &self.editing_id {
            Some(id) => id.clone(),
            None => {
                let n = next_sequence(existing.iter().map(|r| r.id.as_str()), prayer::ID_PREFIX)?;
                format_id(prayer::ID_PREFIX, n)
            }
        };

        Ok(PrayerRequest {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            region: self.region,
            message,
            submitted_at: self.submitted_at.unwrap_or(now),
            status: self.status,
            is_private: self.is_private,
            member_id: self.member_id.trim().to_string(),
        })
    }
}

/// Form state for admin CRUD.
#[derive(Default, Clone)]
pub struct AdminForm {
    pub id: Option<u64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub roles: Vec<AdminRole>,
    pub department: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl AdminForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(admin: &Admin) -> Self {
        Self {
            id: Some(admin.id),
            full_name: admin.full_name.clone(),
            email: admin.email.clone(),
            phone: admin.phone.clone(),
            roles: admin.roles.clone(),
            department: admin.department.clone(),
            is_open: true,
            is_editing: true,
        }
    }

    /// Add or remove `role`, keeping the canonical role order.
    pub fn toggle_role(&mut self, role: AdminRole) {
        if self.roles.contains(&role) {
            self.roles.retain(|r| *r != role);
        } else {
            self.roles.push(role);
            self.roles
                .sort_by_key(|r| AdminRole::ALL.iter().position(|a| a == r));
        }
    }

    pub fn build(&self, existing: &[Admin]) -> Result<Admin> {
        let full_name = required(&self.full_name, "Full name is required")?;
        let email = required(&self.email, "Email is required")?;
        let id = self
            .id
            .unwrap_or_else(|| next_numeric_id(existing.iter().map(|a| a.id)));

        Ok(Admin {
            id,
            full_name,
            email,
            phone: self.phone.trim().to_string(),
            roles: self.roles.clone(),
            department: self.department.trim().to_string(),
        })
    }
}

/// Edit modal of the signed-in user's profile.
#[derive(Default, Clone)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub is_open: bool,
}

impl ProfileForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn edit(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            department: profile.department.clone(),
            is_open: true,
        }
    }

    /// Apply the edited fields to a copy of `current`.
    pub fn build(&self, current: &Profile) -> Result<Profile> {
        let full_name = required(&self.full_name, "Full name is required")?;
        let email = required(&self.email, "Email is required")?;

        Ok(Profile {
            full_name,
            email,
            phone: self.phone.trim().to_string(),
            department: self.department.trim().to_string(),
            ..current.clone()
        })
    }
}

/// Login screen input.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup screen input.
#[derive(Default, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{ListView, SortSpec};
    use crate::models::{EventColumn, EventFilter, admin, department, member};

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-09-05 12:00", "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_member_form_requires_name() {
        let form = MemberForm {
            join_date_input: "2025-01-01".to_string(),
            ..Default::default()
        };
        let err = form.build(&member::seed()).unwrap_err();
        assert_eq!(err.to_string(), "Full name is required");
    }

    #[test]
    fn test_member_form_rejects_bad_date() {
        let form = MemberForm {
            full_name: "Ruth".to_string(),
            join_date_input: "not a date".to_string(),
            ..Default::default()
        };
        assert!(form.build(&[]).is_err());
    }

    #[test]
    fn test_member_id_continues_region_sequence() {
        let mut members = member::seed();
        members.retain(|m| m.id != "CT001");

        let form = MemberForm {
            full_name: "Ruth Khumalo".to_string(),
            join_date_input: "2025/09/01".to_string(),
            ..Default::default()
        };
        let built = form.build(&members).unwrap();
        assert_eq!(built.id, "CT003");
        assert_eq!(built.join_date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());

        let form = MemberForm {
            region: Region::Other,
            ..form
        };
        assert_eq!(form.build(&members).unwrap().id, "OTH001");
    }

    #[test]
    fn test_edit_keeps_member_id() {
        let members = member::seed();
        let mut form = MemberForm::edit(&members[2]);
        form.full_name = "Jane Smith-Dube".to_string();
        let built = form.build(&members).unwrap();
        assert_eq!(built.id, "JHB001");
        assert_eq!(built.full_name, "Jane Smith-Dube");
    }

    #[test]
    fn test_missing_title_does_not_add_event() {
        let mut view: ListView<Event, EventFilter> =
            ListView::new(event::seed(), SortSpec::asc(EventColumn::DateTime), 6);
        let form = EventForm {
            datetime_input: "2025-10-01 09:00".to_string(),
            ..EventForm::open_new()
        };

        let result = form.build(view.records(), now()).and_then(|e| view.insert(e));
        assert!(result.is_err());
        assert_eq!(view.len(), event::seed().len());
    }

    #[test]
    fn test_event_defaults() {
        let form = EventForm {
            title: "Prayer Night".to_string(),
            datetime_input: "2025-10-01 19:00".to_string(),
            attendees_input: "CT001, ,JHB002,".to_string(),
            ..EventForm::open_new()
        };
        let built = form.build(&event::seed(), now()).unwrap();

        assert_eq!(built.id, "EVT-006");
        assert_eq!(built.category, EventCategory::Other);
        assert_eq!(built.status, EventStatus::Upcoming);
        assert_eq!(built.attendees, vec!["CT001", "JHB002"]);
        assert_eq!(built.created_at, now().date());
    }

    #[test]
    fn test_past_event_derives_completed() {
        let form = EventForm {
            title: "Old Meeting".to_string(),
            datetime_input: "2025-01-01".to_string(),
            ..EventForm::open_new()
        };
        assert_eq!(form.build(&[], now()).unwrap().status, EventStatus::Completed);
    }

    #[test]
    fn test_event_duplicate_id_rejected() {
        let form = EventForm {
            id_input: "EVT-002".to_string(),
            title: "Clash".to_string(),
            datetime_input: "2025-10-01 19:00".to_string(),
            ..EventForm::open_new()
        };
        let err = form.build(&event::seed(), now()).unwrap_err();
        assert_eq!(err.to_string(), "Event ID already exists. Please change it.");
    }

    #[test]
    fn test_event_id_after_deletion_does_not_collide() {
        let mut events = event::seed();
        events.retain(|e| e.id != "EVT-003");
        let form = EventForm {
            title: "New".to_string(),
            datetime_input: "2025-10-01 19:00".to_string(),
            ..EventForm::open_new()
        };
        let built = form.build(&events, now()).unwrap();
        assert!(events.iter().all(|e| e.id != built.id));
        assert_eq!(built.id, "EVT-006");
    }

    #[test]
    fn test_event_id_after_max_sequence_is_rejected() {
        let mut events = event::seed();
        let taken = EventForm {
            id_input: "EVT-4294967295".to_string(),
            title: "Manual".to_string(),
            datetime_input: "2025-10-01 19:00".to_string(),
            ..EventForm::open_new()
        };
        events.push(taken.build(&events, now()).unwrap());

        let form = EventForm {
            title: "Next".to_string(),
            datetime_input: "2025-10-02 19:00".to_string(),
            ..EventForm::open_new()
        };
        assert!(matches!(form.build(&events, now()), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prayer_requires_message() {
        let form = PrayerForm {
            name: "Anon".to_string(),
            message: "   ".to_string(),
            ..PrayerForm::open_new()
        };
        assert!(form.build(&prayer::seed(), now()).is_err());
    }

    #[test]
    fn test_prayer_new_id_and_timestamp() {
        let form = PrayerForm {
            message: "Pray for rain".to_string(),
            ..PrayerForm::open_new()
        };
        let built = form.build(&prayer::seed(), now()).unwrap();
        assert_eq!(built.id, "PRQ-004");
        assert_eq!(built.submitted_at, now());
        assert_eq!(built.status, PrayerStatus::Pending);
    }

    #[test]
    fn test_department_requires_name_and_gets_next_id() {
        let depts = department::seed();
        assert!(DepartmentForm::open_new().build(&depts).is_err());

        let form = DepartmentForm {
            name: "Media Team".to_string(),
            ..DepartmentForm::open_new()
        };
        let built = form.build(&depts).unwrap();
        assert_eq!(built.id, 5);
        assert!(built.active);
    }

    #[test]
    fn test_admin_requires_email_but_not_roles() {
        let admins = admin::seed();
        let form = AdminForm {
            full_name: "Grace".to_string(),
            ..AdminForm::open_new()
        };
        assert_eq!(form.build(&admins).unwrap_err().to_string(), "Email is required");

        let form = AdminForm {
            email: "grace@example.com".to_string(),
            ..form
        };
        let built = form.build(&admins).unwrap();
        assert_eq!(built.id, 3);
        assert!(built.roles.is_empty());
    }

    #[test]
    fn test_toggle_role_keeps_order() {
        let mut form = AdminForm::open_new();
        form.toggle_role(AdminRole::Pastor);
        form.toggle_role(AdminRole::Admin);
        assert_eq!(form.roles, vec![AdminRole::Admin, AdminRole::Pastor]);
        form.toggle_role(AdminRole::Pastor);
        assert_eq!(form.roles, vec![AdminRole::Admin]);
    }

    #[test]
    fn test_profile_edit_keeps_identity() {
        let profile = Profile::sample();
        let mut form = ProfileForm::edit(&profile);
        form.full_name = "John D. Doe".to_string();
        let updated = form.build(&profile).unwrap();
        assert_eq!(updated.user_id, profile.user_id);
        assert_eq!(updated.full_name, "John D. Doe");

        form.email.clear();
        assert!(form.build(&profile).is_err());
    }
}
