//! Repository implementation for learners.

use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::domain::learner::{Learner, NewLearner, UpdateLearner};
use crate::domain::types::{EmailAddress, LearnerId};
use crate::models::learner::{
    Learner as DbLearner, NewLearner as DbNewLearner, UpdateLearner as DbUpdateLearner,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LearnerListQuery, LearnerReader, LearnerWriter};

impl LearnerReader for DieselRepository {
    fn get_learner_by_id(&self, id: LearnerId) -> RepositoryResult<Option<Learner>> {
        use crate::schema::learners;

        let mut conn = self.conn()?;
        let db_learner = learners::table
            .find(id.get())
            .first::<DbLearner>(&mut conn)
            .optional()?;

        match db_learner {
            Some(db_learner) => Ok(Some(
                Learner::try_from(db_learner).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_learners(&self, query: LearnerListQuery) -> RepositoryResult<(usize, Vec<Learner>)> {
        use crate::schema::learners;

        let mut conn = self.conn()?;

        let filtered = || {
            let mut items = learners::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    learners::email
                        .like(pattern.clone())
                        .or(learners::first_name.like(pattern.clone()))
                        .or(learners::last_name.like(pattern)),
                );
            }
            if let Some(status) = &query.status {
                items = items.filter(learners::status.eq(status.to_string()));
            }
            items
        };

        let total = filtered().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered().order(learners::id.asc());
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let learners = items
            .load::<DbLearner>(&mut conn)?
            .into_iter()
            .map(|l| Learner::try_from(l).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, learners))
    }

    fn learner_exists(&self, id: LearnerId) -> RepositoryResult<bool> {
        use crate::schema::learners;

        let mut conn = self.conn()?;
        let found = select(exists(learners::table.find(id.get()))).get_result::<bool>(&mut conn)?;
        Ok(found)
    }

    fn learner_email_taken(
        &self,
        email: &EmailAddress,
        exclude: Option<LearnerId>,
    ) -> RepositoryResult<bool> {
        use crate::schema::learners;

        let mut conn = self.conn()?;
        let mut candidates = learners::table
            .filter(learners::email.eq(email.as_str()))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(id) = exclude {
            candidates = candidates.filter(learners::id.ne(id.get()));
        }

        let total: i64 = candidates.count().get_result(&mut conn)?;
        Ok(total > 0)
    }
}

impl LearnerWriter for DieselRepository {
    fn create_learner(&self, new_learner: &NewLearner) -> RepositoryResult<Learner> {
        use crate::schema::learners;

        let mut conn = self.conn()?;
        let db_new_learner: DbNewLearner = new_learner.into();

        let db_learner = diesel::insert_into(learners::table)
            .values(&db_new_learner)
            .get_result::<DbLearner>(&mut conn)?;

        Learner::try_from(db_learner).map_err(RepositoryError::from)
    }

    fn update_learner(
        &self,
        learner_id: LearnerId,
        updates: &UpdateLearner,
    ) -> RepositoryResult<Option<Learner>> {
        use crate::schema::learners;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateLearner = updates.into();

        let db_learner = diesel::update(learners::table.find(learner_id.get()))
            .set(&db_updates)
            .get_result::<DbLearner>(&mut conn)
            .optional()?;

        match db_learner {
            Some(db_learner) => Ok(Some(
                Learner::try_from(db_learner).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn delete_learner(&self, learner_id: LearnerId) -> RepositoryResult<bool> {
        use crate::schema::{enrollments, learners};

        let mut conn = self.conn()?;

        let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(
                enrollments::table.filter(enrollments::learner_id.eq(learner_id.get())),
            )
            .execute(conn)?;
            diesel::delete(learners::table.find(learner_id.get())).execute(conn)
        })?;

        Ok(deleted > 0)
    }
}
