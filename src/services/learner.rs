//! Learner service operations.

use crate::domain::learner::{NewLearner, UpdateLearner};
use crate::domain::types::LearnerId;
use crate::dto::learner::LearnerDto;
use crate::pagination::PagedResult;
use crate::repository::{LearnerListQuery, LearnerReader, LearnerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of learners matching the query, projected to DTOs.
pub fn list_learners<R>(repo: &R, query: LearnerListQuery) -> ServiceResult<PagedResult<LearnerDto>>
where
    R: LearnerReader + ?Sized,
{
    let pagination = query.pagination.unwrap_or_default();
    let query = LearnerListQuery {
        pagination: Some(pagination),
        ..query
    };

    let (total, learners) = repo.list_learners(query)?;
    Ok(
        PagedResult::new(learners, total, pagination.page, pagination.per_page)
            .map(LearnerDto::from),
    )
}

/// Fetches a learner by its identifier; a missing id is `None`, not a fault.
pub fn get_learner<R>(repo: &R, learner_id: LearnerId) -> ServiceResult<Option<LearnerDto>>
where
    R: LearnerReader + ?Sized,
{
    Ok(repo.get_learner_by_id(learner_id)?.map(LearnerDto::from))
}

/// Persists a new learner after checking that the email is free.
pub fn create_learner<R>(repo: &R, new_learner: NewLearner) -> ServiceResult<LearnerDto>
where
    R: LearnerReader + LearnerWriter + ?Sized,
{
    if repo.learner_email_taken(&new_learner.email, None)? {
        return Err(ServiceError::Conflict(format!(
            "email {} is already registered",
            new_learner.email
        )));
    }

    Ok(repo.create_learner(&new_learner)?.into())
}

/// Applies a partial update, re-checking email uniqueness against every
/// other row when the patch carries an email.
pub fn update_learner<R>(
    repo: &R,
    learner_id: LearnerId,
    updates: UpdateLearner,
) -> ServiceResult<Option<LearnerDto>>
where
    R: LearnerReader + LearnerWriter + ?Sized,
{
    if let Some(email) = &updates.email {
        if repo.learner_email_taken(email, Some(learner_id))? {
            return Err(ServiceError::Conflict(format!(
                "email {email} is already registered"
            )));
        }
    }

    Ok(repo
        .update_learner(learner_id, &updates)?
        .map(LearnerDto::from))
}

/// Removes the learner and their enrollments; reports whether a row existed.
pub fn delete_learner<R>(repo: &R, learner_id: LearnerId) -> ServiceResult<bool>
where
    R: LearnerWriter + ?Sized,
{
    repo.delete_learner(learner_id).map_err(ServiceError::from)
}
