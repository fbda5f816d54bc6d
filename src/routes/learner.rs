use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::domain::types::LearnerId;
use crate::forms::learner::{CreateLearnerForm, LearnerListParams, UpdateLearnerForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, not_found, validation_error};
use crate::services::learner::{
    create_learner, delete_learner, get_learner, list_learners, update_learner,
};

#[get("/v1/learners")]
pub async fn show_learners(
    params: web::Query<LearnerListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = (&*params).into();

    match list_learners(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/v1/learners/{learner_id}")]
pub async fn show_learner(
    learner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(learner_id) = LearnerId::new(learner_id.into_inner()) else {
        return not_found();
    };

    match get_learner(repo.get_ref(), learner_id) {
        Ok(Some(learner)) => HttpResponse::Ok().json(learner),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[post("/v1/learners")]
pub async fn add_learner(
    web::Json(form): web::Json<CreateLearnerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(e);
    }

    let new_learner = match (&form).try_into() {
        Ok(new_learner) => new_learner,
        Err(e) => return validation_error(e),
    };

    match create_learner(repo.get_ref(), new_learner) {
        Ok(learner) => HttpResponse::Created().json(learner),
        Err(e) => error_response(e),
    }
}

#[put("/v1/learners/{learner_id}")]
pub async fn save_learner(
    learner_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateLearnerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(learner_id) = LearnerId::new(learner_id.into_inner()) else {
        return not_found();
    };

    if let Err(e) = form.validate() {
        return validation_error(e);
    }

    let updates = match (&form).try_into() {
        Ok(updates) => updates,
        Err(e) => return validation_error(e),
    };

    match update_learner(repo.get_ref(), learner_id, updates) {
        Ok(Some(learner)) => HttpResponse::Ok().json(learner),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[delete("/v1/learners/{learner_id}")]
pub async fn remove_learner(
    learner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(learner_id) = LearnerId::new(learner_id.into_inner()) else {
        return not_found();
    };

    match delete_learner(repo.get_ref(), learner_id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => error_response(e),
    }
}
