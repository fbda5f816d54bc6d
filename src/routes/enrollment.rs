use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::domain::types::EnrollmentId;
use crate::forms::enrollment::{
    CreateEnrollmentForm, EnrollmentListParams, UpdateEnrollmentForm,
};
use crate::repository::DieselRepository;
use crate::routes::{error_response, not_found, validation_error};
use crate::services::enrollment::{
    create_enrollment, delete_enrollment, get_enrollment, list_enrollments, update_enrollment,
};

#[get("/v1/enrollments")]
pub async fn show_enrollments(
    params: web::Query<EnrollmentListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match (&*params).try_into() {
        Ok(query) => query,
        Err(e) => return validation_error(e),
    };

    match list_enrollments(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/v1/enrollments/{enrollment_id}")]
pub async fn show_enrollment(
    enrollment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(enrollment_id) = EnrollmentId::new(enrollment_id.into_inner()) else {
        return not_found();
    };

    match get_enrollment(repo.get_ref(), enrollment_id) {
        Ok(Some(enrollment)) => HttpResponse::Ok().json(enrollment),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[post("/v1/enrollments")]
pub async fn add_enrollment(
    web::Json(form): web::Json<CreateEnrollmentForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(e);
    }

    let new_enrollment = match (&form).try_into() {
        Ok(new_enrollment) => new_enrollment,
        Err(e) => return validation_error(e),
    };

    match create_enrollment(repo.get_ref(), new_enrollment) {
        Ok(enrollment) => HttpResponse::Created().json(enrollment),
        Err(e) => error_response(e),
    }
}

#[put("/v1/enrollments/{enrollment_id}")]
pub async fn save_enrollment(
    enrollment_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateEnrollmentForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(enrollment_id) = EnrollmentId::new(enrollment_id.into_inner()) else {
        return not_found();
    };

    let updates = (&form).into();

    match update_enrollment(repo.get_ref(), enrollment_id, updates) {
        Ok(Some(enrollment)) => HttpResponse::Ok().json(enrollment),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[delete("/v1/enrollments/{enrollment_id}")]
pub async fn remove_enrollment(
    enrollment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(enrollment_id) = EnrollmentId::new(enrollment_id.into_inner()) else {
        return not_found();
    };

    match delete_enrollment(repo.get_ref(), enrollment_id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => error_response(e),
    }
}
