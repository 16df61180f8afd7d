use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    Collection,
};

use crate::{
    db::{Database, CLASS_BATCHES, ENROLLMENTS, USERS},
    errors::{AppError, AppResult},
    models::domain::User,
    repositories::pipelines,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    async fn find_class_instructor(&self, class_id: i64) -> AppResult<Option<User>>;
    async fn find_student_course_instructor(
        &self,
        student_id: i64,
        course_pattern: &str,
    ) -> AppResult<Option<User>>;
}

pub struct MongoUserRepository {
    users: Collection<User>,
    enrollments: Collection<Document>,
    class_batches: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.get_collection(USERS),
            enrollments: db.get_collection(ENROLLMENTS),
            class_batches: db.get_collection(CLASS_BATCHES),
        }
    }

    async fn first_user(
        collection: &Collection<Document>,
        pipeline: Vec<Document>,
    ) -> AppResult<Option<User>> {
        let mut cursor = collection.aggregate(pipeline).await?;
        match cursor.try_next().await? {
            Some(document) => bson::from_document::<User>(document)
                .map(Some)
                .map_err(|e| AppError::DatabaseError(format!("Malformed user document: {}", e))),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = self.users.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn find_class_instructor(&self, class_id: i64) -> AppResult<Option<User>> {
        Self::first_user(&self.class_batches, pipelines::class_instructor(class_id)).await
    }

    async fn find_student_course_instructor(
        &self,
        student_id: i64,
        course_pattern: &str,
    ) -> AppResult<Option<User>> {
        let pipeline = pipelines::student_course_instructor(student_id, course_pattern);
        Self::first_user(&self.enrollments, pipeline).await
    }
}
