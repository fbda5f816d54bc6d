use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, LearnerId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Learner {
    pub id: LearnerId,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub status: LearnerStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LearnerStatus {
    Active,
    Inactive,
    Suspended,
}

impl Display for LearnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearnerStatus::Active => write!(f, "Active"),
            LearnerStatus::Inactive => write!(f, "Inactive"),
            LearnerStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

impl FromStr for LearnerStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(LearnerStatus::Active),
            "Inactive" => Ok(LearnerStatus::Inactive),
            "Suspended" => Ok(LearnerStatus::Suspended),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown learner status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewLearner {
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub status: LearnerStatus,
}

impl NewLearner {
    #[must_use]
    pub fn new(
        email: EmailAddress,
        first_name: String,
        last_name: String,
        status: LearnerStatus,
    ) -> Self {
        Self {
            email,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            status,
        }
    }
}

/// Patch applied to a stored learner; `None` fields keep the stored value.
#[derive(Clone, Debug, Default)]
pub struct UpdateLearner {
    pub email: Option<EmailAddress>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<LearnerStatus>,
}

impl UpdateLearner {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.status.is_none()
    }
}
