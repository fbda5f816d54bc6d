use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::enrollment::{EnrollmentStatus, NewEnrollment, UpdateEnrollment};
use crate::domain::types::{CourseId, LearnerId};
use crate::forms::FormError;
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::repository::{EnrollmentListQuery, Pagination};

#[derive(Debug, Deserialize)]
/// Query parameters accepted by the enrollment list endpoint.
pub struct EnrollmentListParams {
    pub learner_id: Option<i32>,
    pub course_id: Option<i32>,
    pub status: Option<EnrollmentStatus>,
    #[serde(alias = "pageNumber")]
    pub page: Option<usize>,
    #[serde(alias = "pageSize")]
    pub per_page: Option<usize>,
}

impl TryFrom<&EnrollmentListParams> for EnrollmentListQuery {
    type Error = FormError;

    fn try_from(params: &EnrollmentListParams) -> Result<Self, Self::Error> {
        Ok(Self {
            learner_id: params.learner_id.map(LearnerId::new).transpose()?,
            course_id: params.course_id.map(CourseId::new).transpose()?,
            status: params.status,
            pagination: Some(Pagination::new(
                params.page.unwrap_or(DEFAULT_PAGE),
                params.per_page.unwrap_or(DEFAULT_PER_PAGE),
            )),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body for enrolling a learner into a course.
pub struct CreateEnrollmentForm {
    #[validate(range(min = 1))]
    pub learner_id: i32,
    #[validate(range(min = 1))]
    pub course_id: i32,
    /// Defaults to [`EnrollmentStatus::Active`] when absent.
    pub status: Option<EnrollmentStatus>,
}

impl TryFrom<&CreateEnrollmentForm> for NewEnrollment {
    type Error = FormError;

    fn try_from(form: &CreateEnrollmentForm) -> Result<Self, Self::Error> {
        Ok(NewEnrollment {
            learner_id: LearnerId::new(form.learner_id)?,
            course_id: CourseId::new(form.course_id)?,
            status: form.status.unwrap_or(EnrollmentStatus::Active),
        })
    }
}

#[derive(Debug, Deserialize)]
/// Body for partially updating an enrollment. Absent fields are left
/// unchanged; `completed_at` can be set but not cleared.
pub struct UpdateEnrollmentForm {
    pub status: Option<EnrollmentStatus>,
    pub completed_at: Option<NaiveDateTime>,
}

impl From<&UpdateEnrollmentForm> for UpdateEnrollment {
    fn from(form: &UpdateEnrollmentForm) -> Self {
        Self {
            status: form.status,
            completed_at: form.completed_at,
        }
    }
}
