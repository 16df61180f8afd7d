use serde::Serialize;

use crate::models::domain::{Role, SessionIdentity, User};

/// Everything the content renderer shows about the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerProfile {
    pub user_email: String,
    pub display_name: String,
    pub instructor_name: Option<String>,
    pub instructor_email: Option<String>,
    pub class_id: Option<i64>,
    pub role: Role,
}

impl ViewerProfile {
    /// Builds a profile from the stored user, falling back to the session's copy.
    pub fn new(
        identity: &SessionIdentity,
        user: Option<&User>,
        instructor: Option<&User>,
        class_id: Option<i64>,
    ) -> Self {
        let (user_email, display_name) = match user {
            Some(user) => (user.email.clone(), user.display_name()),
            None => (identity.email.clone(), identity.display_name()),
        };

        ViewerProfile {
            user_email,
            display_name,
            instructor_name: instructor.map(User::display_name),
            instructor_email: instructor.map(|i| i.email.clone()),
            class_id,
            role: identity.role,
        }
    }
}
