//! Inbound payload definitions backing the API routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod course;
pub mod enrollment;
pub mod learner;

#[derive(Debug, Error)]
/// Errors that can occur when processing inbound payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),
}
