//! Repository implementation for enrollments.

use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::domain::enrollment::{Enrollment, NewEnrollment, UpdateEnrollment};
use crate::domain::types::{CourseId, EnrollmentId, LearnerId};
use crate::models::enrollment::{
    Enrollment as DbEnrollment, NewEnrollment as DbNewEnrollment,
    UpdateEnrollment as DbUpdateEnrollment,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, EnrollmentListQuery, EnrollmentReader, EnrollmentWriter,
};

impl EnrollmentReader for DieselRepository {
    fn get_enrollment_by_id(&self, id: EnrollmentId) -> RepositoryResult<Option<Enrollment>> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;
        let db_enrollment = enrollments::table
            .find(id.get())
            .first::<DbEnrollment>(&mut conn)
            .optional()?;

        match db_enrollment {
            Some(db_enrollment) => Ok(Some(
                Enrollment::try_from(db_enrollment).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_enrollments(
        &self,
        query: EnrollmentListQuery,
    ) -> RepositoryResult<(usize, Vec<Enrollment>)> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;

        let filtered = || {
            let mut items = enrollments::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(learner_id) = query.learner_id {
                items = items.filter(enrollments::learner_id.eq(learner_id.get()));
            }
            if let Some(course_id) = query.course_id {
                items = items.filter(enrollments::course_id.eq(course_id.get()));
            }
            if let Some(status) = &query.status {
                items = items.filter(enrollments::status.eq(status.to_string()));
            }
            items
        };

        let total = filtered().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered().order(enrollments::enrolled_at.desc());
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let enrollments = items
            .load::<DbEnrollment>(&mut conn)?
            .into_iter()
            .map(|e| Enrollment::try_from(e).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, enrollments))
    }

    fn enrollment_pair_taken(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> RepositoryResult<bool> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;
        let found = select(exists(
            enrollments::table
                .filter(enrollments::learner_id.eq(learner_id.get()))
                .filter(enrollments::course_id.eq(course_id.get())),
        ))
        .get_result::<bool>(&mut conn)?;
        Ok(found)
    }
}

impl EnrollmentWriter for DieselRepository {
    fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;
        let db_new_enrollment: DbNewEnrollment = new_enrollment.into();

        let db_enrollment = diesel::insert_into(enrollments::table)
            .values(&db_new_enrollment)
            .get_result::<DbEnrollment>(&mut conn)?;

        Enrollment::try_from(db_enrollment).map_err(RepositoryError::from)
    }

    fn update_enrollment(
        &self,
        enrollment_id: EnrollmentId,
        updates: &UpdateEnrollment,
    ) -> RepositoryResult<Option<Enrollment>> {
        use crate::schema::enrollments;

        // Diesel rejects an empty changeset; an all-unset patch changes
        // nothing, so just return the current row.
        if updates.is_empty() {
            return self.get_enrollment_by_id(enrollment_id);
        }

        let mut conn = self.conn()?;
        let db_updates: DbUpdateEnrollment = updates.into();

        let db_enrollment = diesel::update(enrollments::table.find(enrollment_id.get()))
            .set(&db_updates)
            .get_result::<DbEnrollment>(&mut conn)
            .optional()?;

        match db_enrollment {
            Some(db_enrollment) => Ok(Some(
                Enrollment::try_from(db_enrollment).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn delete_enrollment(&self, enrollment_id: EnrollmentId) -> RepositoryResult<bool> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(enrollments::table.find(enrollment_id.get())).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}
