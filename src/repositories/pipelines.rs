//! Aggregation pipelines behind the access checks and viewer lookups.
//!
//! Every value is bound as a typed BSON value; the course pattern is
//! regex-escaped so it always matches as a literal substring.

use mongodb::bson::{doc, Bson, Document};

use crate::{
    db::{CLASS_BATCHES, COURSES, USERS},
    models::domain::EnrollmentStatus,
};

pub const COUNT_FIELD: &str = "total";

fn granting_statuses() -> Vec<Bson> {
    EnrollmentStatus::GRANTING
        .iter()
        .map(|status| Bson::String(status.as_str().to_string()))
        .collect()
}

fn course_title_filter(course_pattern: &str) -> Document {
    doc! {
        "$match": {
            "course.title": {
                "$regex": regex::escape(course_pattern),
                "$options": "i",
            }
        }
    }
}

/// Joins `class` and `course` onto enrollment rows and keeps only the target course.
fn join_class_and_course(class_field: &str, course_pattern: &str) -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": CLASS_BATCHES,
                "localField": class_field,
                "foreignField": "id",
                "as": "class",
            }
        },
        doc! { "$unwind": "$class" },
        doc! {
            "$lookup": {
                "from": COURSES,
                "localField": "class.course_id",
                "foreignField": "id",
                "as": "course",
            }
        },
        doc! { "$unwind": "$course" },
        course_title_filter(course_pattern),
    ]
}

/// Joins `course` onto class batch rows and keeps only the target course.
fn join_course(course_pattern: &str) -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": COURSES,
                "localField": "course_id",
                "foreignField": "id",
                "as": "course",
            }
        },
        doc! { "$unwind": "$course" },
        course_title_filter(course_pattern),
    ]
}

fn count_stage() -> Document {
    doc! { "$count": COUNT_FIELD }
}

/// Runs against `enrollments`.
pub fn student_class_enrollments(student_id: i64, class_id: i64, course_pattern: &str) -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$match": {
            "student_id": student_id,
            "class_id": class_id,
            "status": { "$in": granting_statuses() },
        }
    }];
    pipeline.extend(join_class_and_course("class_id", course_pattern));
    pipeline.push(count_stage());
    pipeline
}

/// Runs against `enrollments`.
pub fn student_course_enrollments(student_id: i64, course_pattern: &str) -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$match": {
            "student_id": student_id,
            "status": { "$in": granting_statuses() },
        }
    }];
    pipeline.extend(join_class_and_course("class_id", course_pattern));
    pipeline.push(count_stage());
    pipeline
}

/// Runs against `class_batches`.
pub fn instructor_class_assignments(instructor_id: i64, class_id: i64, course_pattern: &str) -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$match": {
            "id": class_id,
            "instructor_id": instructor_id,
        }
    }];
    pipeline.extend(join_course(course_pattern));
    pipeline.push(count_stage());
    pipeline
}

/// Runs against `class_batches`.
pub fn instructor_course_assignments(instructor_id: i64, course_pattern: &str) -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$match": { "instructor_id": instructor_id }
    }];
    pipeline.extend(join_course(course_pattern));
    pipeline.push(count_stage());
    pipeline
}

fn project_instructor(instructor_field: &str) -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": USERS,
                "localField": instructor_field,
                "foreignField": "id",
                "as": "instructor",
            }
        },
        doc! { "$unwind": "$instructor" },
        doc! { "$replaceRoot": { "newRoot": "$instructor" } },
        doc! { "$limit": 1 },
    ]
}

/// Runs against `class_batches`; yields at most one `users` document.
pub fn class_instructor(class_id: i64) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": { "id": class_id } }];
    pipeline.extend(project_instructor("instructor_id"));
    pipeline
}

/// Runs against `enrollments`; instructor of the student's newest granting
/// enrollment in the target course.
pub fn student_course_instructor(student_id: i64, course_pattern: &str) -> Vec<Document> {
    let mut pipeline = vec![
        doc! {
            "$match": {
                "student_id": student_id,
                "status": { "$in": granting_statuses() },
            }
        },
        doc! { "$sort": { "_id": -1 } },
    ];
    pipeline.extend(join_class_and_course("class_id", course_pattern));
    pipeline.extend(project_instructor("class.instructor_id"));
    pipeline
}

/// Reads the `$count` result; an empty aggregation means zero rows.
pub fn read_count(document: Option<&Document>) -> u64 {
    match document.and_then(|d| d.get(COUNT_FIELD)) {
        Some(Bson::Int32(n)) if *n > 0 => *n as u64,
        Some(Bson::Int64(n)) if *n > 0 => *n as u64,
        _ => 0,
    }
}
