//! DTOs shaped for the learner API endpoints.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::learner::{Learner, LearnerStatus};

/// Wire representation of a learner.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LearnerDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: LearnerStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Learner> for LearnerDto {
    fn from(learner: Learner) -> Self {
        Self {
            id: learner.id.get(),
            email: learner.email.into_inner(),
            first_name: learner.first_name,
            last_name: learner.last_name,
            status: learner.status,
            created_at: learner.created_at,
            updated_at: learner.updated_at,
        }
    }
}
