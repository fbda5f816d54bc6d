use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::enrollment::{
    Enrollment as DomainEnrollment, NewEnrollment as DomainNewEnrollment,
    UpdateEnrollment as DomainUpdateEnrollment,
};
use crate::domain::types::{CourseId, EnrollmentId, LearnerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::enrollments)]
/// Diesel model for [`crate::domain::enrollment::Enrollment`].
pub struct Enrollment {
    pub id: i32,
    pub learner_id: i32,
    pub course_id: i32,
    pub status: String,
    pub enrolled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::enrollments)]
pub struct NewEnrollment {
    pub learner_id: i32,
    pub course_id: i32,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::enrollments)]
/// Data used when updating an [`Enrollment`] record. `None` fields are
/// skipped; enrollments carry no `updated_at` column to stamp.
pub struct UpdateEnrollment {
    pub status: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
}

impl TryFrom<Enrollment> for DomainEnrollment {
    type Error = TypeConstraintError;

    fn try_from(enrollment: Enrollment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EnrollmentId::new(enrollment.id)?,
            learner_id: LearnerId::new(enrollment.learner_id)?,
            course_id: CourseId::new(enrollment.course_id)?,
            status: enrollment.status.parse()?,
            enrolled_at: enrollment.enrolled_at,
            completed_at: enrollment.completed_at,
        })
    }
}

impl From<&DomainNewEnrollment> for NewEnrollment {
    fn from(enrollment: &DomainNewEnrollment) -> Self {
        Self {
            learner_id: enrollment.learner_id.get(),
            course_id: enrollment.course_id.get(),
            status: enrollment.status.to_string(),
        }
    }
}

impl From<&DomainUpdateEnrollment> for UpdateEnrollment {
    fn from(updates: &DomainUpdateEnrollment) -> Self {
        Self {
            status: updates.status.map(|s| s.to_string()),
            completed_at: updates.completed_at,
        }
    }
}
