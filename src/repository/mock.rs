//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::enrollment::{Enrollment, NewEnrollment, UpdateEnrollment};
use crate::domain::learner::{Learner, NewLearner, UpdateLearner};
use crate::domain::types::{CourseCode, CourseId, EmailAddress, EnrollmentId, LearnerId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CourseListQuery, CourseReader, CourseWriter, EnrollmentListQuery, EnrollmentReader,
    EnrollmentWriter, LearnerListQuery, LearnerReader, LearnerWriter,
};

mock! {
    pub Repository {}

    impl CourseReader for Repository {
        fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
        fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)>;
        fn course_exists(&self, id: CourseId) -> RepositoryResult<bool>;
        fn course_code_taken(
            &self,
            code: &CourseCode,
            exclude: Option<CourseId>,
        ) -> RepositoryResult<bool>;
    }

    impl CourseWriter for Repository {
        fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
        fn update_course(
            &self,
            course_id: CourseId,
            updates: &UpdateCourse,
        ) -> RepositoryResult<Option<Course>>;
        fn delete_course(&self, course_id: CourseId) -> RepositoryResult<bool>;
    }

    impl LearnerReader for Repository {
        fn get_learner_by_id(&self, id: LearnerId) -> RepositoryResult<Option<Learner>>;
        fn list_learners(&self, query: LearnerListQuery) -> RepositoryResult<(usize, Vec<Learner>)>;
        fn learner_exists(&self, id: LearnerId) -> RepositoryResult<bool>;
        fn learner_email_taken(
            &self,
            email: &EmailAddress,
            exclude: Option<LearnerId>,
        ) -> RepositoryResult<bool>;
    }

    impl LearnerWriter for Repository {
        fn create_learner(&self, new_learner: &NewLearner) -> RepositoryResult<Learner>;
        fn update_learner(
            &self,
            learner_id: LearnerId,
            updates: &UpdateLearner,
        ) -> RepositoryResult<Option<Learner>>;
        fn delete_learner(&self, learner_id: LearnerId) -> RepositoryResult<bool>;
    }

    impl EnrollmentReader for Repository {
        fn get_enrollment_by_id(&self, id: EnrollmentId) -> RepositoryResult<Option<Enrollment>>;
        fn list_enrollments(
            &self,
            query: EnrollmentListQuery,
        ) -> RepositoryResult<(usize, Vec<Enrollment>)>;
        fn enrollment_pair_taken(
            &self,
            learner_id: LearnerId,
            course_id: CourseId,
        ) -> RepositoryResult<bool>;
    }

    impl EnrollmentWriter for Repository {
        fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment>;
        fn update_enrollment(
            &self,
            enrollment_id: EnrollmentId,
            updates: &UpdateEnrollment,
        ) -> RepositoryResult<Option<Enrollment>>;
        fn delete_enrollment(&self, enrollment_id: EnrollmentId) -> RepositoryResult<bool>;
    }
}
