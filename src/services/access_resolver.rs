use std::sync::Arc;

use crate::{
    auth::SessionClaims,
    config::Config,
    errors::AppResult,
    models::domain::{AccessDecision, AccessOutcome, ClassReference, Role, SessionIdentity},
    repositories::AccessRepository,
};

/// Where the access flow sends people and which course it guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub login_url: String,
    pub student_dashboard_url: String,
    pub instructor_dashboard_url: String,
    pub course_title_pattern: String,
}

impl AccessPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            login_url: config.login_url.clone(),
            student_dashboard_url: config.student_dashboard_url.clone(),
            instructor_dashboard_url: config.instructor_dashboard_url.clone(),
            course_title_pattern: config.course_title_pattern.clone(),
        }
    }

    pub fn dashboard_for(&self, role: Role) -> &str {
        match role {
            Role::Student => &self.student_dashboard_url,
            Role::Instructor => &self.instructor_dashboard_url,
        }
    }
}

/// Decides whether a session may view the course handouts.
///
/// The flow is linear: session check, class scope, access check, enforcement.
/// None of the steps return errors to the caller; every failure ends in a
/// redirect or a denial.
pub struct AccessResolver {
    repository: Arc<dyn AccessRepository>,
    policy: AccessPolicy,
}

impl AccessResolver {
    pub fn new(repository: Arc<dyn AccessRepository>, policy: AccessPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Turns presented claims into an identity, or a redirect to the login page
    /// when there is no session or its role is not allowed.
    pub fn validate_session(
        &self,
        claims: Option<&SessionClaims>,
    ) -> Result<SessionIdentity, AccessOutcome> {
        let login = || AccessOutcome::Redirect(self.policy.login_url.clone());

        let claims = claims.ok_or_else(login)?;
        let role = Role::parse(&claims.role).ok_or_else(|| {
            log::info!("Rejecting session for user '{}' with role '{}'", claims.sub, claims.role);
            login()
        })?;
        let user_id = claims.user_id().ok_or_else(login)?;

        Ok(SessionIdentity {
            user_id,
            role,
            email: claims.email.clone(),
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
        })
    }

    pub fn resolve_class_scope(raw: Option<&str>) -> Option<ClassReference> {
        ClassReference::parse(raw)
    }

    pub async fn check_access(
        &self,
        identity: &SessionIdentity,
        scope: Option<ClassReference>,
    ) -> AccessDecision {
        match self.count_matching_rows(identity, scope).await {
            Ok(count) => AccessDecision::from_count(count),
            Err(err) => {
                // Fails closed; an outage here looks like a denial to the viewer.
                log::error!(
                    "Access check for {} {} (class {:?}) failed, denying: {}",
                    identity.role,
                    identity.user_id,
                    scope.map(|s| s.class_id),
                    err
                );
                AccessDecision::DENIED
            }
        }
    }

    async fn count_matching_rows(
        &self,
        identity: &SessionIdentity,
        scope: Option<ClassReference>,
    ) -> AppResult<u64> {
        let pattern = self.policy.course_title_pattern.as_str();
        let user_id = identity.user_id;

        match (identity.role, scope) {
            (Role::Student, Some(class)) => {
                self.repository
                    .count_student_class_enrollments(user_id, class.class_id, pattern)
                    .await
            }
            (Role::Instructor, Some(class)) => {
                self.repository
                    .count_instructor_class_assignments(user_id, class.class_id, pattern)
                    .await
            }
            (Role::Student, None) => {
                self.repository
                    .count_student_course_enrollments(user_id, pattern)
                    .await
            }
            (Role::Instructor, None) => {
                self.repository
                    .count_instructor_course_assignments(user_id, pattern)
                    .await
            }
        }
    }

    pub fn enforce(
        &self,
        identity: &SessionIdentity,
        decision: AccessDecision,
        scope_present: bool,
    ) -> AccessOutcome {
        match (decision.granted, scope_present) {
            (true, _) => AccessOutcome::Proceed,
            (false, true) => AccessOutcome::Denied,
            (false, false) => {
                AccessOutcome::Redirect(self.policy.dashboard_for(identity.role).to_string())
            }
        }
    }

    /// `check_access` followed by `enforce`.
    pub async fn authorize(
        &self,
        identity: &SessionIdentity,
        scope: Option<ClassReference>,
    ) -> AccessOutcome {
        let decision = self.check_access(identity, scope).await;
        self.enforce(identity, decision, scope.is_some())
    }
}
