use std::fmt;

use serde::{Deserialize, Serialize};

/// Roles allowed to open handout pages. Any other session role is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    pub const ALLOWED: [Role; 2] = [Role::Student, Role::Instructor];

    /// Parses a session role string. Unknown roles (admin, guest, ...) yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALLOWED
            .into_iter()
            .find(|role| role.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_roles() {
        assert_eq!(Role::parse("student"), Some(Role::Student));
        assert_eq!(Role::parse("instructor"), Some(Role::Instructor));
    }

    #[test]
    fn test_parse_rejects_other_roles() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Student"), None);
        assert_eq!(Role::parse(" student"), None);
        assert_eq!(Role::parse("instructor\n"), None);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Instructor).unwrap();
        assert_eq!(json, "\"instructor\"");
    }
}
