use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

/// Claims carried by the portal session token issued at login.
///
/// `role` stays a raw string here: the token may come from a login service
/// that knows more roles than the handout pages accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // user id
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub exp: usize,
    pub iat: usize,
}

impl SessionClaims {
    pub fn new(user: &User, role: &str, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.id.to_string(),
            role: role.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok().filter(|id: &i64| *id > 0)
    }
}
