//! DTOs shaped for the course API endpoints.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::course::{Course, CourseStatus};

/// Wire representation of a course.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseDto {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.get(),
            code: course.code.into_inner(),
            title: course.title,
            description: course.description,
            category: course.category,
            status: course.status,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
