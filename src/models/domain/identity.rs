use serde::Serialize;

use crate::models::domain::role::Role;

/// Identity of the logged-in viewer, built from a validated session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub role: Role,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl SessionIdentity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
impl SessionIdentity {
    pub fn test_student(user_id: i64) -> Self {
        Self {
            user_id,
            role: Role::Student,
            email: format!("student{}@example.com", user_id),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
        }
    }

    pub fn test_instructor(user_id: i64) -> Self {
        Self {
            user_id,
            role: Role::Instructor,
            email: format!("instructor{}@example.com", user_id),
            first_name: "Test".to_string(),
            last_name: "Instructor".to_string(),
        }
    }
}
