//! DTOs shaped for the enrollment API endpoints.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};

/// Wire representation of an enrollment.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrollmentDto {
    pub id: i32,
    pub learner_id: i32,
    pub course_id: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id.get(),
            learner_id: enrollment.learner_id.get(),
            course_id: enrollment.course_id.get(),
            status: enrollment.status,
            enrolled_at: enrollment.enrolled_at,
            completed_at: enrollment.completed_at,
        }
    }
}
