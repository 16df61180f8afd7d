use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::Document, Collection};

use crate::{
    db::{Database, CLASS_BATCHES, ENROLLMENTS},
    errors::AppResult,
    repositories::pipelines,
};

/// Count-based existence checks behind the handout access rules.
///
/// Every method returns the number of matching rows; callers only care
/// whether it is zero.
#[async_trait]
pub trait AccessRepository: Send + Sync {
    async fn count_student_class_enrollments(
        &self,
        student_id: i64,
        class_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64>;

    async fn count_instructor_class_assignments(
        &self,
        instructor_id: i64,
        class_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64>;

    async fn count_student_course_enrollments(
        &self,
        student_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64>;

    async fn count_instructor_course_assignments(
        &self,
        instructor_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64>;
}

pub struct MongoAccessRepository {
    enrollments: Collection<Document>,
    class_batches: Collection<Document>,
}

impl MongoAccessRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            enrollments: db.get_collection(ENROLLMENTS),
            class_batches: db.get_collection(CLASS_BATCHES),
        }
    }

    async fn run_count(collection: &Collection<Document>, pipeline: Vec<Document>) -> AppResult<u64> {
        let mut cursor = collection.aggregate(pipeline).await?;
        let first = cursor.try_next().await?;
        Ok(pipelines::read_count(first.as_ref()))
    }
}

#[async_trait]
impl AccessRepository for MongoAccessRepository {
    async fn count_student_class_enrollments(
        &self,
        student_id: i64,
        class_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64> {
        let pipeline = pipelines::student_class_enrollments(student_id, class_id, course_pattern);
        Self::run_count(&self.enrollments, pipeline).await
    }

    async fn count_instructor_class_assignments(
        &self,
        instructor_id: i64,
        class_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64> {
        let pipeline =
            pipelines::instructor_class_assignments(instructor_id, class_id, course_pattern);
        Self::run_count(&self.class_batches, pipeline).await
    }

    async fn count_student_course_enrollments(
        &self,
        student_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64> {
        let pipeline = pipelines::student_course_enrollments(student_id, course_pattern);
        Self::run_count(&self.enrollments, pipeline).await
    }

    async fn count_instructor_course_assignments(
        &self,
        instructor_id: i64,
        course_pattern: &str,
    ) -> AppResult<u64> {
        let pipeline = pipelines::instructor_course_assignments(instructor_id, course_pattern);
        Self::run_count(&self.class_batches, pipeline).await
    }
}
