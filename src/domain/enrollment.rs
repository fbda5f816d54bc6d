use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, EnrollmentId, LearnerId, TypeConstraintError};

/// A learner's membership in a course.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub enrolled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Cancelled,
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "Active"),
            EnrollmentStatus::Completed => write!(f, "Completed"),
            EnrollmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EnrollmentStatus::Active),
            "Completed" => Ok(EnrollmentStatus::Completed),
            "Cancelled" => Ok(EnrollmentStatus::Cancelled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown enrollment status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewEnrollment {
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
}

/// Patch applied to a stored enrollment; `None` fields keep the stored value.
/// `completed_at` can be set but not cleared.
#[derive(Clone, Debug, Default)]
pub struct UpdateEnrollment {
    pub status: Option<EnrollmentStatus>,
    pub completed_at: Option<NaiveDateTime>,
}

impl UpdateEnrollment {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.completed_at.is_none()
    }
}
