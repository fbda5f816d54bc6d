//! Course service operations.

use crate::domain::course::{NewCourse, UpdateCourse};
use crate::domain::types::CourseId;
use crate::dto::course::CourseDto;
use crate::pagination::PagedResult;
use crate::repository::{CourseListQuery, CourseReader, CourseWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of courses matching the query, projected to DTOs.
pub fn list_courses<R>(repo: &R, query: CourseListQuery) -> ServiceResult<PagedResult<CourseDto>>
where
    R: CourseReader + ?Sized,
{
    let pagination = query.pagination.unwrap_or_default();
    let query = CourseListQuery {
        pagination: Some(pagination),
        ..query
    };

    let (total, courses) = repo.list_courses(query)?;
    Ok(PagedResult::new(courses, total, pagination.page, pagination.per_page).map(CourseDto::from))
}

/// Fetches a course by its identifier; a missing id is `None`, not a fault.
pub fn get_course<R>(repo: &R, course_id: CourseId) -> ServiceResult<Option<CourseDto>>
where
    R: CourseReader + ?Sized,
{
    Ok(repo.get_course_by_id(course_id)?.map(CourseDto::from))
}

/// Persists a new course after checking that its code is free.
pub fn create_course<R>(repo: &R, new_course: NewCourse) -> ServiceResult<CourseDto>
where
    R: CourseReader + CourseWriter + ?Sized,
{
    if repo.course_code_taken(&new_course.code, None)? {
        return Err(ServiceError::Conflict(format!(
            "course code {} is already in use",
            new_course.code
        )));
    }

    Ok(repo.create_course(&new_course)?.into())
}

/// Applies a partial update to the course, re-checking code uniqueness
/// against every other row when the patch carries a code.
pub fn update_course<R>(
    repo: &R,
    course_id: CourseId,
    updates: UpdateCourse,
) -> ServiceResult<Option<CourseDto>>
where
    R: CourseReader + CourseWriter + ?Sized,
{
    if let Some(code) = &updates.code {
        if repo.course_code_taken(code, Some(course_id))? {
            return Err(ServiceError::Conflict(format!(
                "course code {code} is already in use"
            )));
        }
    }

    Ok(repo.update_course(course_id, &updates)?.map(CourseDto::from))
}

/// Removes the course and its enrollments; reports whether a row existed.
pub fn delete_course<R>(repo: &R, course_id: CourseId) -> ServiceResult<bool>
where
    R: CourseWriter + ?Sized,
{
    repo.delete_course(course_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::{Course, CourseStatus};
    use crate::domain::types::CourseCode;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn sample_course(id: i32) -> Course {
        let now = Utc::now().naive_utc();
        Course {
            id: CourseId::new(id).unwrap(),
            code: CourseCode::new(format!("RUST-{id}")).unwrap(),
            title: format!("Course #{id}"),
            description: None,
            category: None,
            status: CourseStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_defaults_pagination_and_builds_envelope() {
        let mut repo = MockRepository::new();
        repo.expect_list_courses()
            .withf(|query| {
                let pagination = query.pagination.as_ref().unwrap();
                pagination.page == 1 && pagination.per_page == 10
            })
            .returning(|_| Ok((23, (1..=10).map(sample_course).collect())));

        let page = list_courses(&repo, CourseListQuery::new()).unwrap();
        assert_eq!(page.total_count, 23);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn create_rejects_duplicate_code_before_persisting() {
        let mut repo = MockRepository::new();
        repo.expect_course_code_taken().returning(|_, _| Ok(true));
        // No expectation on create_course: reaching it would panic.

        let new_course = NewCourse::new(
            CourseCode::new("RUST-101").unwrap(),
            "Intro".to_string(),
            None,
            None,
            CourseStatus::Draft,
        );
        let err = create_course(&repo, new_course).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn update_excludes_own_row_from_uniqueness_check() {
        let mut repo = MockRepository::new();
        repo.expect_course_code_taken()
            .withf(|code, exclude| {
                code.as_str() == "RUST-101" && *exclude == Some(CourseId::new(5).unwrap())
            })
            .returning(|_, _| Ok(false));
        repo.expect_update_course()
            .returning(|_, _| Ok(Some(sample_course(5))));

        let updates = UpdateCourse {
            code: Some(CourseCode::new("RUST-101").unwrap()),
            ..UpdateCourse::default()
        };
        let updated = update_course(&repo, CourseId::new(5).unwrap(), updates).unwrap();
        assert!(updated.is_some());
    }

    #[test]
    fn update_of_missing_course_is_none() {
        let mut repo = MockRepository::new();
        repo.expect_update_course().returning(|_, _| Ok(None));

        let updated = update_course(
            &repo,
            CourseId::new(99).unwrap(),
            UpdateCourse::default(),
        )
        .unwrap();
        assert!(updated.is_none());
    }
}
