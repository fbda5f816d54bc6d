use serde::Deserialize;
use validator::Validate;

use crate::domain::learner::{LearnerStatus, NewLearner, UpdateLearner};
use crate::domain::types::EmailAddress;
use crate::forms::FormError;
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::repository::{LearnerListQuery, Pagination};

#[derive(Debug, Deserialize)]
/// Query parameters accepted by the learner list endpoint.
pub struct LearnerListParams {
    #[serde(alias = "searchTerm")]
    pub search: Option<String>,
    pub status: Option<LearnerStatus>,
    #[serde(alias = "pageNumber")]
    pub page: Option<usize>,
    #[serde(alias = "pageSize")]
    pub per_page: Option<usize>,
}

impl From<&LearnerListParams> for LearnerListQuery {
    fn from(params: &LearnerListParams) -> Self {
        Self {
            search: params.search.clone().filter(|s| !s.trim().is_empty()),
            status: params.status,
            pagination: Some(Pagination::new(
                params.page.unwrap_or(DEFAULT_PAGE),
                params.per_page.unwrap_or(DEFAULT_PER_PAGE),
            )),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body for registering a learner.
pub struct CreateLearnerForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub first_name: String,
    #[validate(length(min = 1, max = 128))]
    pub last_name: String,
    /// Defaults to [`LearnerStatus::Active`] when absent.
    pub status: Option<LearnerStatus>,
}

impl TryFrom<&CreateLearnerForm> for NewLearner {
    type Error = FormError;

    fn try_from(form: &CreateLearnerForm) -> Result<Self, Self::Error> {
        Ok(NewLearner::new(
            EmailAddress::new(form.email.as_str())?,
            form.first_name.clone(),
            form.last_name.clone(),
            form.status.unwrap_or(LearnerStatus::Active),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body for partially updating a learner. Absent fields are left unchanged.
pub struct UpdateLearnerForm {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub last_name: Option<String>,
    pub status: Option<LearnerStatus>,
}

impl TryFrom<&UpdateLearnerForm> for UpdateLearner {
    type Error = FormError;

    fn try_from(form: &UpdateLearnerForm) -> Result<Self, Self::Error> {
        Ok(UpdateLearner {
            email: form.email.as_deref().map(EmailAddress::new).transpose()?,
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            status: form.status,
        })
    }
}
