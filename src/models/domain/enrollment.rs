use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

impl EnrollmentStatus {
    /// Statuses that open the course materials.
    pub const GRANTING: [EnrollmentStatus; 2] =
        [EnrollmentStatus::Active, EnrollmentStatus::Completed];

    pub fn grants_access(&self) -> bool {
        Self::GRANTING.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Dropped => "dropped",
        }
    }
}

/// Row of the `enrollments` collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Enrollment {
    pub student_id: i64,
    pub class_id: i64,
    pub status: EnrollmentStatus,
}
