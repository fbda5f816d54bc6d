use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::course::{
    Course as DomainCourse, NewCourse as DomainNewCourse, UpdateCourse as DomainUpdateCourse,
};
use crate::domain::types::{CourseCode, CourseId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::courses)]
/// Diesel model for [`crate::domain::course::Course`].
pub struct Course {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
/// Insertable form of [`Course`]. Timestamps come from the table defaults.
pub struct NewCourse<'a> {
    pub code: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
/// Data used when updating a [`Course`] record. `None` fields are skipped by
/// the changeset, leaving the stored column untouched; every update stamps
/// `updated_at`.
pub struct UpdateCourse<'a> {
    pub code: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub status: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CourseId::new(course.id)?,
            code: CourseCode::new(course.code)?,
            title: course.title,
            description: course.description,
            category: course.category,
            status: course.status.parse()?,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(course: &'a DomainNewCourse) -> Self {
        Self {
            code: course.code.as_str(),
            title: course.title.as_str(),
            description: course.description.as_deref(),
            category: course.category.as_deref(),
            status: course.status.to_string(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCourse> for UpdateCourse<'a> {
    fn from(updates: &'a DomainUpdateCourse) -> Self {
        Self {
            code: updates.code.as_ref().map(CourseCode::as_str),
            title: updates.title.as_deref(),
            description: updates.description.as_deref(),
            category: updates.category.as_deref(),
            status: updates.status.map(|s| s.to_string()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
