//! Enrollment service operations.

use crate::domain::enrollment::{NewEnrollment, UpdateEnrollment};
use crate::domain::types::EnrollmentId;
use crate::dto::enrollment::EnrollmentDto;
use crate::pagination::PagedResult;
use crate::repository::{
    CourseReader, EnrollmentListQuery, EnrollmentReader, EnrollmentWriter, LearnerReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of enrollments matching the query, projected to DTOs.
pub fn list_enrollments<R>(
    repo: &R,
    query: EnrollmentListQuery,
) -> ServiceResult<PagedResult<EnrollmentDto>>
where
    R: EnrollmentReader + ?Sized,
{
    let pagination = query.pagination.unwrap_or_default();
    let query = EnrollmentListQuery {
        pagination: Some(pagination),
        ..query
    };

    let (total, enrollments) = repo.list_enrollments(query)?;
    Ok(
        PagedResult::new(enrollments, total, pagination.page, pagination.per_page)
            .map(EnrollmentDto::from),
    )
}

/// Fetches an enrollment by its identifier; a missing id is `None`.
pub fn get_enrollment<R>(
    repo: &R,
    enrollment_id: EnrollmentId,
) -> ServiceResult<Option<EnrollmentDto>>
where
    R: EnrollmentReader + ?Sized,
{
    Ok(repo
        .get_enrollment_by_id(enrollment_id)?
        .map(EnrollmentDto::from))
}

/// Enrolls a learner into a course. Both referenced rows must exist and the
/// pair must not already be enrolled; all checks run before any mutation.
pub fn create_enrollment<R>(repo: &R, new_enrollment: NewEnrollment) -> ServiceResult<EnrollmentDto>
where
    R: EnrollmentReader + EnrollmentWriter + LearnerReader + CourseReader + ?Sized,
{
    if !repo.learner_exists(new_enrollment.learner_id)? {
        return Err(ServiceError::Validation(format!(
            "learner {} does not exist",
            new_enrollment.learner_id
        )));
    }
    if !repo.course_exists(new_enrollment.course_id)? {
        return Err(ServiceError::Validation(format!(
            "course {} does not exist",
            new_enrollment.course_id
        )));
    }
    if repo.enrollment_pair_taken(new_enrollment.learner_id, new_enrollment.course_id)? {
        return Err(ServiceError::Conflict(format!(
            "learner {} is already enrolled in course {}",
            new_enrollment.learner_id, new_enrollment.course_id
        )));
    }

    Ok(repo.create_enrollment(&new_enrollment)?.into())
}

/// Applies a partial update to the enrollment.
pub fn update_enrollment<R>(
    repo: &R,
    enrollment_id: EnrollmentId,
    updates: UpdateEnrollment,
) -> ServiceResult<Option<EnrollmentDto>>
where
    R: EnrollmentReader + EnrollmentWriter + ?Sized,
{
    Ok(repo
        .update_enrollment(enrollment_id, &updates)?
        .map(EnrollmentDto::from))
}

/// Removes the enrollment; reports whether a row existed.
pub fn delete_enrollment<R>(repo: &R, enrollment_id: EnrollmentId) -> ServiceResult<bool>
where
    R: EnrollmentWriter + ?Sized,
{
    repo.delete_enrollment(enrollment_id)
        .map_err(ServiceError::from)
}
