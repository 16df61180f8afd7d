#[cfg(test)]
pub mod fixtures {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use async_trait::async_trait;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::User,
        repositories::{AccessRepository, UserRepository},
    };

    /// Access repository answering every check with the same count, recording
    /// which check ran.
    pub struct StaticAccessRepository {
        result: Result<u64, AppError>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StaticAccessRepository {
        pub fn granting() -> Self {
            Self::with_result(Ok(1))
        }

        pub fn denying() -> Self {
            Self::with_result(Ok(0))
        }

        pub fn failing(err: AppError) -> Self {
            Self::with_result(Err(err))
        }

        fn with_result(result: Result<u64, AppError>) -> Self {
            Self {
                result,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.calls)
        }

        fn record(&self, call: String) -> AppResult<u64> {
            self.calls.lock().unwrap().push(call);
            self.result.clone()
        }
    }

    #[async_trait]
    impl AccessRepository for StaticAccessRepository {
        async fn count_student_class_enrollments(&self, student_id: i64, class_id: i64, _: &str) -> AppResult<u64> {
            self.record(format!("student_class:{}:{}", student_id, class_id))
        }

        async fn count_instructor_class_assignments(&self, instructor_id: i64, class_id: i64, _: &str) -> AppResult<u64> {
            self.record(format!("instructor_class:{}:{}", instructor_id, class_id))
        }

        async fn count_student_course_enrollments(&self, student_id: i64, _: &str) -> AppResult<u64> {
            self.record(format!("student_course:{}", student_id))
        }

        async fn count_instructor_course_assignments(&self, instructor_id: i64, _: &str) -> AppResult<u64> {
            self.record(format!("instructor_course:{}", instructor_id))
        }
    }

    #[derive(Default)]
    pub struct StaticUserRepository {
        users: HashMap<i64, User>,
        class_instructors: HashMap<i64, User>,
        course_instructors: HashMap<i64, User>,
        fail: bool,
    }

    impl StaticUserRepository {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn with_user(mut self, user: User) -> Self {
            self.users.insert(user.id, user);
            self
        }

        pub fn with_class_instructor(mut self, class_id: i64, instructor: User) -> Self {
            self.class_instructors.insert(class_id, instructor);
            self
        }

        pub fn with_course_instructor(mut self, student_id: i64, instructor: User) -> Self {
            self.course_instructors.insert(student_id, instructor);
            self
        }

        fn lookup(&self, table: &HashMap<i64, User>, key: i64) -> AppResult<Option<User>> {
            if self.fail {
                return Err(AppError::DatabaseError("lookup failed".to_string()));
            }
            Ok(table.get(&key).cloned())
        }
    }

    #[async_trait]
    impl UserRepository for StaticUserRepository {
        async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
            self.lookup(&self.users, id)
        }

        async fn find_class_instructor(&self, class_id: i64) -> AppResult<Option<User>> {
            self.lookup(&self.class_instructors, class_id)
        }

        async fn find_student_course_instructor(&self, student_id: i64, _: &str) -> AppResult<Option<User>> {
            self.lookup(&self.course_instructors, student_id)
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::repositories::AccessRepository;

    #[actix_web::test]
    async fn test_static_access_repository_records_calls() {
        let repository = StaticAccessRepository::denying();
        let calls = repository.calls();

        let count = repository.count_student_course_enrollments(3, "Word").await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(*calls.lock().unwrap(), vec!["student_course:3"]);
    }
}
