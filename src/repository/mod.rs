use crate::{
    db::{DbConnection, DbPool},
    domain::{
        course::{Course, CourseStatus, NewCourse, UpdateCourse},
        enrollment::{Enrollment, EnrollmentStatus, NewEnrollment, UpdateEnrollment},
        learner::{Learner, LearnerStatus, NewLearner, UpdateLearner},
        types::{CourseCode, CourseId, EmailAddress, EnrollmentId, LearnerId},
    },
    pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE},
    repository::errors::RepositoryResult,
};

pub mod course;
pub mod enrollment;
pub mod errors;
pub mod learner;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Page window applied to a list query.
///
/// `new` clamps out-of-range input instead of rejecting it: `page` is raised
/// to at least 1 and `per_page` is bounded by [`MAX_PER_PAGE`].
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub(crate) fn offset(&self) -> i64 {
        ((self.page.max(1) - 1) * self.per_page) as i64
    }

    pub(crate) fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub search: Option<String>,
    pub status: Option<CourseStatus>,
    pub category: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CourseListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match against code and title.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: CourseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LearnerListQuery {
    pub search: Option<String>,
    pub status: Option<LearnerStatus>,
    pub pagination: Option<Pagination>,
}

impl LearnerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match against email and names.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: LearnerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentListQuery {
    pub learner_id: Option<LearnerId>,
    pub course_id: Option<CourseId>,
    pub status: Option<EnrollmentStatus>,
    pub pagination: Option<Pagination>,
}

impl EnrollmentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learner(mut self, learner_id: LearnerId) -> Self {
        self.learner_id = Some(learner_id);
        self
    }

    pub fn course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

pub trait CourseReader {
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
    /// Returns the total match count together with the requested page.
    fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)>;
    fn course_exists(&self, id: CourseId) -> RepositoryResult<bool>;
    /// `exclude` lets an update check uniqueness against all other rows.
    fn course_code_taken(
        &self,
        code: &CourseCode,
        exclude: Option<CourseId>,
    ) -> RepositoryResult<bool>;
}

pub trait CourseWriter {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
    fn update_course(
        &self,
        course_id: CourseId,
        updates: &UpdateCourse,
    ) -> RepositoryResult<Option<Course>>;
    /// Returns whether a row was actually removed.
    fn delete_course(&self, course_id: CourseId) -> RepositoryResult<bool>;
}

pub trait LearnerReader {
    fn get_learner_by_id(&self, id: LearnerId) -> RepositoryResult<Option<Learner>>;
    fn list_learners(&self, query: LearnerListQuery) -> RepositoryResult<(usize, Vec<Learner>)>;
    fn learner_exists(&self, id: LearnerId) -> RepositoryResult<bool>;
    fn learner_email_taken(
        &self,
        email: &EmailAddress,
        exclude: Option<LearnerId>,
    ) -> RepositoryResult<bool>;
}

pub trait LearnerWriter {
    fn create_learner(&self, new_learner: &NewLearner) -> RepositoryResult<Learner>;
    fn update_learner(
        &self,
        learner_id: LearnerId,
        updates: &UpdateLearner,
    ) -> RepositoryResult<Option<Learner>>;
    fn delete_learner(&self, learner_id: LearnerId) -> RepositoryResult<bool>;
}

pub trait EnrollmentReader {
    fn get_enrollment_by_id(&self, id: EnrollmentId) -> RepositoryResult<Option<Enrollment>>;
    fn list_enrollments(
        &self,
        query: EnrollmentListQuery,
    ) -> RepositoryResult<(usize, Vec<Enrollment>)>;
    /// Whether the learner already holds an enrollment in the course.
    fn enrollment_pair_taken(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> RepositoryResult<bool>;
}

pub trait EnrollmentWriter {
    fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment>;
    fn update_enrollment(
        &self,
        enrollment_id: EnrollmentId,
        updates: &UpdateEnrollment,
    ) -> RepositoryResult<Option<Enrollment>>;
    fn delete_enrollment(&self, enrollment_id: EnrollmentId) -> RepositoryResult<bool>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, errors::RepositoryError> {
        Ok(self.pool.get()?)
    }
}
