#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use handout_viewer::{
    errors::AppResult,
    models::domain::{ClassBatch, Course, Enrollment, EnrollmentStatus, User},
    repositories::{AccessRepository, UserRepository},
    services::AccessPolicy,
};

pub const PATTERN: &str = "Microsoft Word";

/// Relational rows held in memory; the joins mirror the datastore pipelines.
#[derive(Default)]
pub struct PortalData {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub class_batches: Vec<ClassBatch>,
    pub enrollments: Vec<Enrollment>,
}

impl PortalData {
    fn class_in_course(&self, class_id: i64, pattern: &str) -> Option<&ClassBatch> {
        self.class_batches.iter().find(|batch| {
            batch.id == class_id
                && self
                    .courses
                    .iter()
                    .any(|c| c.id == batch.course_id && c.matches_pattern(pattern))
        })
    }
}

pub struct InMemoryPortal {
    data: Arc<RwLock<PortalData>>,
    queries: Arc<AtomicUsize>,
}

impl InMemoryPortal {
    pub fn new(data: PortalData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
            queries: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of access checks run so far.
    pub fn query_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.queries)
    }

    fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccessRepository for InMemoryPortal {
    async fn count_student_class_enrollments(&self, student_id: i64, class_id: i64, pattern: &str) -> AppResult<u64> {
        self.record_query();
        let data = self.data.read().await;
        Ok(data
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.class_id == class_id && e.status.grants_access())
            .filter(|e| data.class_in_course(e.class_id, pattern).is_some())
            .count() as u64)
    }

    async fn count_instructor_class_assignments(&self, instructor_id: i64, class_id: i64, pattern: &str) -> AppResult<u64> {
        self.record_query();
        let data = self.data.read().await;
        Ok(data
            .class_in_course(class_id, pattern)
            .filter(|batch| batch.instructor_id == instructor_id)
            .map_or(0, |_| 1))
    }

    async fn count_student_course_enrollments(&self, student_id: i64, pattern: &str) -> AppResult<u64> {
        self.record_query();
        let data = self.data.read().await;
        Ok(data
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.status.grants_access())
            .filter(|e| data.class_in_course(e.class_id, pattern).is_some())
            .count() as u64)
    }

    async fn count_instructor_course_assignments(&self, instructor_id: i64, pattern: &str) -> AppResult<u64> {
        self.record_query();
        let data = self.data.read().await;
        Ok(data
            .class_batches
            .iter()
            .filter(|batch| batch.instructor_id == instructor_id)
            .filter(|batch| data.class_in_course(batch.id, pattern).is_some())
            .count() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryPortal {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_class_instructor(&self, class_id: i64) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        let instructor_id = data
            .class_batches
            .iter()
            .find(|b| b.id == class_id)
            .map(|b| b.instructor_id);
        Ok(instructor_id.and_then(|id| data.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn find_student_course_instructor(&self, student_id: i64, pattern: &str) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        let instructor_id = data
            .enrollments
            .iter()
            .rev()
            .filter(|e| e.student_id == student_id && e.status.grants_access())
            .find_map(|e| data.class_in_course(e.class_id, pattern))
            .map(|b| b.instructor_id);
        Ok(instructor_id.and_then(|id| data.users.iter().find(|u| u.id == id).cloned()))
    }
}

pub fn enrollment(student_id: i64, class_id: i64, status: EnrollmentStatus) -> Enrollment {
    Enrollment {
        student_id,
        class_id,
        status,
    }
}

/// Students 100-103, instructors 200-201.
/// Course 1 is the Word course, course 2 is Excel.
/// Class 7 (Word, instructor 200), class 8 (Word, instructor 201), class 9 (Excel, instructor 200).
pub fn portal_data() -> PortalData {
    PortalData {
        users: vec![
            User::new(100, "Ana", "Active", "ana@example.com"),
            User::new(101, "Dan", "Dropped", "dan@example.com"),
            User::new(200, "Ida", "Instructor", "ida@example.com"),
            User::new(201, "Ivo", "Instructor", "ivo@example.com"),
        ],
        courses: vec![
            Course { id: 1, title: "Microsoft Word Certification Prep".into() },
            Course { id: 2, title: "Microsoft Excel Essentials".into() },
        ],
        class_batches: vec![
            ClassBatch { id: 7, instructor_id: 200, course_id: 1 },
            ClassBatch { id: 8, instructor_id: 201, course_id: 1 },
            ClassBatch { id: 9, instructor_id: 200, course_id: 2 },
        ],
        enrollments: vec![
            enrollment(100, 7, EnrollmentStatus::Active),
            enrollment(101, 7, EnrollmentStatus::Dropped),
            enrollment(102, 8, EnrollmentStatus::Completed),
            enrollment(103, 9, EnrollmentStatus::Active),
        ],
    }
}

pub fn policy() -> AccessPolicy {
    AccessPolicy {
        login_url: "/login".into(),
        student_dashboard_url: "/student/dashboard".into(),
        instructor_dashboard_url: "/instructor/dashboard".into(),
        course_title_pattern: PATTERN.into(),
    }
}

