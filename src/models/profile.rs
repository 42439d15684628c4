//! Signed-in user's profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AdminRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub roles: Vec<AdminRole>,
    pub department: String,
    pub date_joined: NaiveDate,
    pub last_login: Option<NaiveDate>,
}

impl Profile {
    /// Profile for a user who has just signed in with `email`.
    ///
    /// Accounts have no server-side record, so the sample profile is reused
    /// with the login email swapped in.
    pub fn for_login(email: &str, today: NaiveDate) -> Self {
        let mut profile = Self::sample();
        if !email.trim().is_empty() {
            profile.email = email.trim().to_string();
        }
        profile.last_login = Some(today);
        profile
    }

    pub fn sample() -> Self {
        Self {
            user_id: "EMP12345".to_string(),
            full_name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            phone: "+27 71 234 5678".to_string(),
            roles: vec![AdminRole::Admin, AdminRole::Pastor],
            department: "Youth Ministry".to_string(),
            date_joined: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
            last_login: NaiveDate::from_ymd_opt(2025, 8, 25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_login_uses_email_and_date() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        let profile = Profile::for_login(" pastor@church.org ", today);
        assert_eq!(profile.email, "pastor@church.org");
        assert_eq!(profile.last_login, Some(today));
    }
}
