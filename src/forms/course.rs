use serde::Deserialize;
use validator::Validate;

use crate::domain::course::{CourseStatus, NewCourse, UpdateCourse};
use crate::domain::types::CourseCode;
use crate::forms::FormError;
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::repository::{CourseListQuery, Pagination};

#[derive(Debug, Deserialize)]
/// Query parameters accepted by the course list endpoint.
pub struct CourseListParams {
    #[serde(alias = "searchTerm")]
    pub search: Option<String>,
    pub status: Option<CourseStatus>,
    pub category: Option<String>,
    #[serde(alias = "pageNumber")]
    pub page: Option<usize>,
    #[serde(alias = "pageSize")]
    pub per_page: Option<usize>,
}

impl From<&CourseListParams> for CourseListQuery {
    fn from(params: &CourseListParams) -> Self {
        Self {
            search: params.search.clone().filter(|s| !s.trim().is_empty()),
            status: params.status,
            category: params.category.clone().filter(|s| !s.trim().is_empty()),
            pagination: Some(Pagination::new(
                params.page.unwrap_or(DEFAULT_PAGE),
                params.per_page.unwrap_or(DEFAULT_PER_PAGE),
            )),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body for creating a course.
pub struct CreateCourseForm {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(max = 4096))]
    pub description: Option<String>,
    #[validate(length(max = 128))]
    pub category: Option<String>,
    /// Defaults to [`CourseStatus::Draft`] when absent.
    pub status: Option<CourseStatus>,
}

impl TryFrom<&CreateCourseForm> for NewCourse {
    type Error = FormError;

    fn try_from(form: &CreateCourseForm) -> Result<Self, Self::Error> {
        Ok(NewCourse::new(
            CourseCode::new(form.code.as_str())?,
            form.title.clone(),
            form.description.clone(),
            form.category.clone(),
            form.status.unwrap_or(CourseStatus::Draft),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body for partially updating a course. Absent fields are left unchanged.
pub struct UpdateCourseForm {
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(length(max = 4096))]
    pub description: Option<String>,
    #[validate(length(max = 128))]
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
}

impl TryFrom<&UpdateCourseForm> for UpdateCourse {
    type Error = FormError;

    fn try_from(form: &UpdateCourseForm) -> Result<Self, Self::Error> {
        Ok(UpdateCourse {
            code: form.code.as_deref().map(CourseCode::new).transpose()?,
            title: form.title.clone(),
            description: form.description.clone(),
            category: form.category.clone(),
            status: form.status,
        })
    }
}
