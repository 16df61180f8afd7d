use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{ClassReference, Role, SessionIdentity, User},
        dto::ViewerProfile,
    },
    repositories::UserRepository,
};

/// Loads the user and instructor shown on an authorized handout page.
pub struct ViewerService {
    repository: Arc<dyn UserRepository>,
    course_pattern: String,
}

impl ViewerService {
    pub fn new(repository: Arc<dyn UserRepository>, course_pattern: impl Into<String>) -> Self {
        Self {
            repository,
            course_pattern: course_pattern.into(),
        }
    }

    /// Access is already granted here, so lookup failures only degrade the
    /// banner to the session's own data.
    pub async fn load_profile(
        &self,
        identity: &SessionIdentity,
        scope: Option<ClassReference>,
    ) -> ViewerProfile {
        let user = self
            .repository
            .find_by_id(identity.user_id)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Could not load user {}: {}", identity.user_id, err);
                None
            });

        let instructor = match identity.role {
            Role::Instructor => user.clone(),
            Role::Student => self
                .find_student_instructor(identity.user_id, scope)
                .await
                .unwrap_or_else(|err| {
                    log::warn!(
                        "Could not load instructor for student {}: {}",
                        identity.user_id,
                        err
                    );
                    None
                }),
        };

        ViewerProfile::new(
            identity,
            user.as_ref(),
            instructor.as_ref(),
            scope.map(|s| s.class_id),
        )
    }

    async fn find_student_instructor(
        &self,
        student_id: i64,
        scope: Option<ClassReference>,
    ) -> AppResult<Option<User>> {
        match scope {
            Some(class) => self.repository.find_class_instructor(class.class_id).await,
            None => {
                self.repository
                    .find_student_course_instructor(student_id, &self.course_pattern)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::StaticUserRepository;

    fn service(repository: StaticUserRepository) -> ViewerService {
        ViewerService::new(Arc::new(repository), "Microsoft Word")
    }

    #[actix_web::test]
    async fn test_student_with_class_gets_class_instructor() {
        let repository = StaticUserRepository::default()
            .with_user(User::new(1, "Sam", "Student", "sam@example.com"))
            .with_class_instructor(7, User::new(2, "Ida", "Instructor", "ida@example.com"));
        let profile = service(repository)
            .load_profile(&SessionIdentity::test_student(1), Some(ClassReference { class_id: 7 }))
            .await;

        assert_eq!(profile.display_name, "Sam Student");
        assert_eq!(profile.instructor_email.as_deref(), Some("ida@example.com"));
        assert_eq!(profile.class_id, Some(7));
    }

    #[actix_web::test]
    async fn test_student_without_class_gets_course_instructor() {
        let repository = StaticUserRepository::default()
            .with_course_instructor(1, User::new(3, "Cora", "Coach", "cora@example.com"));
        let profile = service(repository)
            .load_profile(&SessionIdentity::test_student(1), None)
            .await;

        assert_eq!(profile.instructor_name.as_deref(), Some("Cora Coach"));
        assert_eq!(profile.display_name, "Test Student");
    }

    #[actix_web::test]
    async fn test_instructor_is_own_instructor() {
        let repository = StaticUserRepository::default()
            .with_user(User::new(2, "Ida", "Instructor", "ida@example.com"));
        let profile = service(repository)
            .load_profile(&SessionIdentity::test_instructor(2), None)
            .await;

        assert_eq!(profile.instructor_name.as_deref(), Some("Ida Instructor"));
        assert_eq!(profile.role, Role::Instructor);
    }

    #[actix_web::test]
    async fn test_lookup_failures_fall_back_to_session() {
        let profile = service(StaticUserRepository::failing())
            .load_profile(&SessionIdentity::test_student(1), Some(ClassReference { class_id: 7 }))
            .await;

        assert_eq!(profile.user_email, "student1@example.com");
        assert!(profile.instructor_name.is_none());
    }
}
