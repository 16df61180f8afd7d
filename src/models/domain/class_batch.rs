use serde::{Deserialize, Serialize};

/// Row of the `class_batches` collection: one scheduled offering of a course.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassBatch {
    pub id: i64,
    pub instructor_id: i64,
    pub course_id: i64,
}

/// Row of the `courses` collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
}

impl Course {
    /// Case-insensitive substring match, same rule the datastore queries apply.
    pub fn matches_pattern(&self, pattern: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&pattern.to_lowercase())
    }
}
