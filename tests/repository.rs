use chrono::Utc;
use learnhub_backend::domain::course::{CourseStatus, NewCourse, UpdateCourse};
use learnhub_backend::domain::enrollment::{EnrollmentStatus, NewEnrollment, UpdateEnrollment};
use learnhub_backend::domain::learner::{LearnerStatus, NewLearner, UpdateLearner};
use learnhub_backend::domain::types::{CourseCode, CourseId, EmailAddress, EnrollmentId};
use learnhub_backend::repository::{
    CourseListQuery, CourseReader, CourseWriter, DieselRepository, EnrollmentListQuery,
    EnrollmentReader, EnrollmentWriter, LearnerListQuery, LearnerReader, LearnerWriter,
};

mod common;

fn new_course(code: &str, title: &str, status: CourseStatus) -> NewCourse {
    NewCourse::new(
        CourseCode::new(code).unwrap(),
        title.to_string(),
        None,
        None,
        status,
    )
}

fn new_learner(email: &str, first_name: &str) -> NewLearner {
    NewLearner::new(
        EmailAddress::new(email).unwrap(),
        first_name.to_string(),
        "Tester".to_string(),
        LearnerStatus::Active,
    )
}

#[test]
fn test_course_repository_crud() {
    let test_db = common::TestDb::new("test_course_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_course(&new_course("rust-101", "Intro to Rust", CourseStatus::Draft))
        .unwrap();
    assert_eq!(created.code.as_str(), "RUST-101");
    assert_eq!(created.status, CourseStatus::Draft);

    // Create followed by get returns the stored projection.
    let fetched = repo.get_course_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    // Unset patch fields keep the stored values; set fields overwrite.
    let updates = UpdateCourse {
        status: Some(CourseStatus::Published),
        description: Some("Ownership and borrowing".to_string()),
        ..UpdateCourse::default()
    };
    let updated = repo.update_course(created.id, &updates).unwrap().unwrap();
    assert_eq!(updated.status, CourseStatus::Published);
    assert_eq!(updated.description.as_deref(), Some("Ownership and borrowing"));
    assert_eq!(updated.title, "Intro to Rust");
    assert_eq!(updated.code, created.code);
    assert_eq!(updated.created_at, created.created_at);

    // Updating a missing id reports None instead of failing.
    let missing = repo
        .update_course(CourseId::new(9999).unwrap(), &updates)
        .unwrap();
    assert!(missing.is_none());

    // Delete reports whether a row was actually removed.
    assert!(repo.delete_course(created.id).unwrap());
    assert!(repo.get_course_by_id(created.id).unwrap().is_none());
    assert!(!repo.delete_course(created.id).unwrap());
}

#[test]
fn test_course_code_uniqueness_checks() {
    let test_db = common::TestDb::new("test_course_code_uniqueness.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let a = repo
        .create_course(&new_course("rust-101", "A", CourseStatus::Draft))
        .unwrap();
    let b = repo
        .create_course(&new_course("rust-201", "B", CourseStatus::Draft))
        .unwrap();

    let code = CourseCode::new("rust-101").unwrap();
    assert!(repo.course_code_taken(&code, None).unwrap());
    // Self-exclusion: the only holder of the code is the excluded row.
    assert!(!repo.course_code_taken(&code, Some(a.id)).unwrap());
    assert!(repo.course_code_taken(&code, Some(b.id)).unwrap());
    assert!(
        !repo
            .course_code_taken(&CourseCode::new("go-101").unwrap(), None)
            .unwrap()
    );

    assert!(repo.course_exists(a.id).unwrap());
    assert!(!repo.course_exists(CourseId::new(9999).unwrap()).unwrap());
}

#[test]
fn test_course_list_pagination_and_filters() {
    let test_db = common::TestDb::new("test_course_list_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 1..=25 {
        let status = if i % 2 == 0 {
            CourseStatus::Published
        } else {
            CourseStatus::Draft
        };
        repo.create_course(&new_course(
            &format!("CS-{i:02}"),
            &format!("Course #{i}"),
            status,
        ))
        .unwrap();
    }

    // Full pages, the trailing partial page, and a page past the end.
    let (total, page1) = repo
        .list_courses(CourseListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(page1.len(), 10);
    assert_eq!(page1[0].title, "Course #1");

    let (_, page3) = repo
        .list_courses(CourseListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(page3.len(), 5);
    assert_eq!(page3[0].title, "Course #21");

    let (total_beyond, beyond) = repo
        .list_courses(CourseListQuery::new().paginate(4, 10))
        .unwrap();
    assert_eq!(total_beyond, 25);
    assert!(beyond.is_empty());

    // The count reflects the same predicate the page is cut from.
    let (published_total, published) = repo
        .list_courses(
            CourseListQuery::new()
                .status(CourseStatus::Published)
                .paginate(1, 100),
        )
        .unwrap();
    assert_eq!(published_total, 12);
    assert_eq!(published.len(), 12);
    assert!(published.iter().all(|c| c.status == CourseStatus::Published));

    let (filtered_total, filtered_page) = repo
        .list_courses(
            CourseListQuery::new()
                .status(CourseStatus::Published)
                .paginate(2, 5),
        )
        .unwrap();
    assert_eq!(filtered_total, 12);
    assert_eq!(filtered_page.len(), 5);

    // Substring search against the code column.
    let (search_total, _) = repo
        .list_courses(CourseListQuery::new().search("CS-1").paginate(1, 100))
        .unwrap();
    assert_eq!(search_total, 10);
}

#[test]
fn test_learner_repository_crud() {
    let test_db = common::TestDb::new("test_learner_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_learner(&new_learner("Alice@Example.com", "Alice"))
        .unwrap();
    // Emails are normalized on the way in.
    assert_eq!(alice.email.as_str(), "alice@example.com");

    let bob = repo
        .create_learner(&new_learner("bob@example.com", "Bob"))
        .unwrap();

    let email = EmailAddress::new("alice@example.com").unwrap();
    assert!(repo.learner_email_taken(&email, None).unwrap());
    assert!(!repo.learner_email_taken(&email, Some(alice.id)).unwrap());
    assert!(repo.learner_email_taken(&email, Some(bob.id)).unwrap());

    // Inserting a duplicate email trips the unique constraint.
    assert!(
        repo.create_learner(&new_learner("alice@example.com", "Clone"))
            .is_err()
    );

    let updates = UpdateLearner {
        status: Some(LearnerStatus::Suspended),
        ..UpdateLearner::default()
    };
    let updated = repo.update_learner(bob.id, &updates).unwrap().unwrap();
    assert_eq!(updated.status, LearnerStatus::Suspended);
    assert_eq!(updated.first_name, "Bob");
    assert_eq!(updated.email, bob.email);

    let (total, items) = repo
        .list_learners(LearnerListQuery::new().search("alice").paginate(1, 10))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, alice.id);

    assert!(repo.delete_learner(alice.id).unwrap());
    assert!(repo.get_learner_by_id(alice.id).unwrap().is_none());
}

#[test]
fn test_enrollment_repository_crud() {
    let test_db = common::TestDb::new("test_enrollment_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let learner = repo
        .create_learner(&new_learner("alice@example.com", "Alice"))
        .unwrap();
    let course = repo
        .create_course(&new_course("rust-101", "Intro to Rust", CourseStatus::Published))
        .unwrap();

    let enrollment = repo
        .create_enrollment(&NewEnrollment {
            learner_id: learner.id,
            course_id: course.id,
            status: EnrollmentStatus::Active,
        })
        .unwrap();
    assert!(repo.enrollment_pair_taken(learner.id, course.id).unwrap());
    assert_eq!(enrollment.completed_at, None);

    // An all-unset patch persists nothing and returns the current row.
    let unchanged = repo
        .update_enrollment(enrollment.id, &UpdateEnrollment::default())
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, enrollment);

    let completed_at = Utc::now().naive_utc();
    let updated = repo
        .update_enrollment(
            enrollment.id,
            &UpdateEnrollment {
                status: Some(EnrollmentStatus::Completed),
                completed_at: Some(completed_at),
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, EnrollmentStatus::Completed);
    assert_eq!(updated.completed_at, Some(completed_at));
    assert_eq!(updated.enrolled_at, enrollment.enrolled_at);

    let (total, items) = repo
        .list_enrollments(EnrollmentListQuery::new().learner(learner.id).paginate(1, 10))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, enrollment.id);

    let (completed_total, _) = repo
        .list_enrollments(
            EnrollmentListQuery::new()
                .status(EnrollmentStatus::Completed)
                .paginate(1, 10),
        )
        .unwrap();
    assert_eq!(completed_total, 1);

    assert!(
        repo.get_enrollment_by_id(EnrollmentId::new(9999).unwrap())
            .unwrap()
            .is_none()
    );

    // Deleting the course removes its enrollments in the same commit.
    assert!(repo.delete_course(course.id).unwrap());
    assert!(repo.get_enrollment_by_id(enrollment.id).unwrap().is_none());
    assert!(!repo.enrollment_pair_taken(learner.id, course.id).unwrap());
}
