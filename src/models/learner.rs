use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::learner::{
    Learner as DomainLearner, NewLearner as DomainNewLearner, UpdateLearner as DomainUpdateLearner,
};
use crate::domain::types::{EmailAddress, LearnerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::learners)]
/// Diesel model for [`crate::domain::learner::Learner`].
pub struct Learner {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::learners)]
pub struct NewLearner<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::learners)]
/// Data used when updating a [`Learner`] record. `None` fields are skipped;
/// every update stamps `updated_at`.
pub struct UpdateLearner<'a> {
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub status: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Learner> for DomainLearner {
    type Error = TypeConstraintError;

    fn try_from(learner: Learner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LearnerId::new(learner.id)?,
            email: EmailAddress::new(learner.email)?,
            first_name: learner.first_name,
            last_name: learner.last_name,
            status: learner.status.parse()?,
            created_at: learner.created_at,
            updated_at: learner.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewLearner> for NewLearner<'a> {
    fn from(learner: &'a DomainNewLearner) -> Self {
        Self {
            email: learner.email.as_str(),
            first_name: learner.first_name.as_str(),
            last_name: learner.last_name.as_str(),
            status: learner.status.to_string(),
        }
    }
}

impl<'a> From<&'a DomainUpdateLearner> for UpdateLearner<'a> {
    fn from(updates: &'a DomainUpdateLearner) -> Self {
        Self {
            email: updates.email.as_ref().map(EmailAddress::as_str),
            first_name: updates.first_name.as_deref(),
            last_name: updates.last_name.as_deref(),
            status: updates.status.map(|s| s.to_string()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::LearnerStatus;

    #[test]
    fn from_domain_new_creates_newlearner() {
        let domain = DomainNewLearner::new(
            EmailAddress::new("alice@example.com").unwrap(),
            "Alice".to_string(),
            "Ng".to_string(),
            LearnerStatus::Active,
        );
        let new: NewLearner = (&domain).into();
        assert_eq!(new.email, "alice@example.com");
        assert_eq!(new.first_name, "Alice");
        assert_eq!(new.last_name, "Ng");
        assert_eq!(new.status, "Active");
    }

    #[test]
    fn learner_try_into_domain() {
        let now = Utc::now().naive_utc();
        let db_learner = Learner {
            id: 7,
            email: "bob@example.com".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Iyer".to_string(),
            status: "Suspended".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainLearner::try_from(db_learner).unwrap();
        assert_eq!(domain.id.get(), 7);
        assert_eq!(domain.email.as_str(), "bob@example.com");
        assert_eq!(domain.status, LearnerStatus::Suspended);
    }
}
