use actix_web::{App, test, web};
use serde_json::{Value, json};

use learnhub_backend::repository::DieselRepository;
use learnhub_backend::routes::course::{
    add_course, remove_course, save_course, show_course, show_courses,
};
use learnhub_backend::routes::enrollment::add_enrollment;
use learnhub_backend::routes::learner::add_learner;

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .service(
                    web::scope("/api")
                        .service(show_courses)
                        .service(show_course)
                        .service(add_course)
                        .service(save_course)
                        .service(remove_course)
                        .service(add_learner)
                        .service(add_enrollment),
                )
                .app_data(web::Data::new($repo)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_course_routes_crud_flow() {
    let test_db = common::TestDb::new("test_course_routes.db");
    let app = test_app!(DieselRepository::new(test_db.pool().clone()));

    // Create returns the stored projection with server-assigned fields.
    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .set_json(json!({"code": "rust-101", "title": "Intro to Rust"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RUST-101");
    assert_eq!(body["status"], "Draft");
    let id = body["id"].as_i64().unwrap();

    // Re-using the code conflicts before anything is persisted.
    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .set_json(json!({"code": "RUST-101", "title": "Duplicate"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    // List responses carry the paging envelope.
    let req = test::TestRequest::get()
        .uri("/api/v1/courses?page=1&per_page=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 10);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // A page past the end is an empty page, not an error.
    let req = test::TestRequest::get()
        .uri("/api/v1/courses?page=5&per_page=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_count"], 1);
    assert!(body["items"].as_array().unwrap().is_empty());

    // Partial update: absent fields survive untouched.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/courses/{id}"))
        .set_json(json!({"status": "Published"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Intro to Rust");
    assert_eq!(body["status"], "Published");

    // Missing ids map to 404, not a server fault.
    let req = test::TestRequest::get()
        .uri("/api/v1/courses/9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/courses/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/courses/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_course_validation_is_reported_before_persisting() {
    let test_db = common::TestDb::new("test_course_validation_routes.db");
    let app = test_app!(DieselRepository::new(test_db.pool().clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .set_json(json!({"code": "rust-101", "title": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/api/v1/courses").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["total_pages"], 0);
}

#[actix_web::test]
async fn test_enrollment_routes_check_references() {
    let test_db = common::TestDb::new("test_enrollment_routes.db");
    let app = test_app!(DieselRepository::new(test_db.pool().clone()));

    // Enrolling against a missing learner fails validation.
    let req = test::TestRequest::post()
        .uri("/api/v1/enrollments")
        .set_json(json!({"learner_id": 1, "course_id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/learners")
        .set_json(json!({"email": "alice@example.com", "first_name": "Alice", "last_name": "Ng"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let learner: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/courses")
        .set_json(json!({"code": "rust-101", "title": "Intro to Rust"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let course: Value = test::read_body_json(resp).await;

    let enrollment = json!({
        "learner_id": learner["id"],
        "course_id": course["id"],
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/enrollments")
        .set_json(&enrollment)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // The same pair cannot enroll twice.
    let req = test::TestRequest::post()
        .uri("/api/v1/enrollments")
        .set_json(&enrollment)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}
