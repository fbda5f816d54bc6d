//! Repository implementation for courses.

use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::types::{CourseCode, CourseId};
use crate::models::course::{
    Course as DbCourse, NewCourse as DbNewCourse, UpdateCourse as DbUpdateCourse,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CourseListQuery, CourseReader, CourseWriter, DieselRepository};

impl CourseReader for DieselRepository {
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_course = courses::table
            .find(id.get())
            .first::<DbCourse>(&mut conn)
            .optional()?;

        match db_course {
            Some(db_course) => Ok(Some(
                Course::try_from(db_course).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let filtered = || {
            let mut items = courses::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items
                    .filter(courses::code.like(pattern.clone()).or(courses::title.like(pattern)));
            }
            if let Some(status) = &query.status {
                items = items.filter(courses::status.eq(status.to_string()));
            }
            if let Some(category) = &query.category {
                items = items.filter(courses::category.eq(category.clone()));
            }
            items
        };

        // The count must run against the same predicate the page is cut from.
        let total = filtered().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered().order(courses::id.asc());
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let courses = items
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(|c| Course::try_from(c).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, courses))
    }

    fn course_exists(&self, id: CourseId) -> RepositoryResult<bool> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let found = select(exists(courses::table.find(id.get()))).get_result::<bool>(&mut conn)?;
        Ok(found)
    }

    fn course_code_taken(
        &self,
        code: &CourseCode,
        exclude: Option<CourseId>,
    ) -> RepositoryResult<bool> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let mut candidates = courses::table
            .filter(courses::code.eq(code.as_str()))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(id) = exclude {
            candidates = candidates.filter(courses::id.ne(id.get()));
        }

        let total: i64 = candidates.count().get_result(&mut conn)?;
        Ok(total > 0)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_new_course: DbNewCourse = new_course.into();

        let db_course = diesel::insert_into(courses::table)
            .values(&db_new_course)
            .get_result::<DbCourse>(&mut conn)?;

        Course::try_from(db_course).map_err(RepositoryError::from)
    }

    fn update_course(
        &self,
        course_id: CourseId,
        updates: &UpdateCourse,
    ) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCourse = updates.into();

        let db_course = diesel::update(courses::table.find(course_id.get()))
            .set(&db_updates)
            .get_result::<DbCourse>(&mut conn)
            .optional()?;

        match db_course {
            Some(db_course) => Ok(Some(
                Course::try_from(db_course).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn delete_course(&self, course_id: CourseId) -> RepositoryResult<bool> {
        use crate::schema::{courses, enrollments};

        let mut conn = self.conn()?;

        // One commit for the course and its enrollments.
        let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(
                enrollments::table.filter(enrollments::course_id.eq(course_id.get())),
            )
            .execute(conn)?;
            diesel::delete(courses::table.find(course_id.get())).execute(conn)
        })?;

        Ok(deleted > 0)
    }
}
