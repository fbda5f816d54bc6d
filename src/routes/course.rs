use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::domain::types::CourseId;
use crate::forms::course::{CourseListParams, CreateCourseForm, UpdateCourseForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, not_found, validation_error};
use crate::services::course::{
    create_course, delete_course, get_course, list_courses, update_course,
};

#[get("/v1/courses")]
pub async fn show_courses(
    params: web::Query<CourseListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = (&*params).into();

    match list_courses(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/v1/courses/{course_id}")]
pub async fn show_course(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(course_id) = CourseId::new(course_id.into_inner()) else {
        return not_found();
    };

    match get_course(repo.get_ref(), course_id) {
        Ok(Some(course)) => HttpResponse::Ok().json(course),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[post("/v1/courses")]
pub async fn add_course(
    web::Json(form): web::Json<CreateCourseForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error(e);
    }

    let new_course = match (&form).try_into() {
        Ok(new_course) => new_course,
        Err(e) => return validation_error(e),
    };

    match create_course(repo.get_ref(), new_course) {
        Ok(course) => HttpResponse::Created().json(course),
        Err(e) => error_response(e),
    }
}

#[put("/v1/courses/{course_id}")]
pub async fn save_course(
    course_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateCourseForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(course_id) = CourseId::new(course_id.into_inner()) else {
        return not_found();
    };

    if let Err(e) = form.validate() {
        return validation_error(e);
    }

    let updates = match (&form).try_into() {
        Ok(updates) => updates,
        Err(e) => return validation_error(e),
    };

    match update_course(repo.get_ref(), course_id, updates) {
        Ok(Some(course)) => HttpResponse::Ok().json(course),
        Ok(None) => not_found(),
        Err(e) => error_response(e),
    }
}

#[delete("/v1/courses/{course_id}")]
pub async fn remove_course(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(course_id) = CourseId::new(course_id.into_inner()) else {
        return not_found();
    };

    match delete_course(repo.get_ref(), course_id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => error_response(e),
    }
}
