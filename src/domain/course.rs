use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseCode, CourseId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub code: CourseCode,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Publication state of a course.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "Draft"),
            CourseStatus::Published => write!(f, "Published"),
            CourseStatus::Archived => write!(f, "Archived"),
        }
    }
}

impl FromStr for CourseStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(CourseStatus::Draft),
            "Published" => Ok(CourseStatus::Published),
            "Archived" => Ok(CourseStatus::Archived),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown course status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewCourse {
    pub code: CourseCode,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: CourseStatus,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        code: CourseCode,
        title: String,
        description: Option<String>,
        category: Option<String>,
        status: CourseStatus,
    ) -> Self {
        Self {
            code,
            title: title.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            category: category
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status,
        }
    }
}

/// Patch applied to a stored course. Fields left as `None` keep the stored
/// value; this also means a nullable column cannot be cleared through an
/// update.
#[derive(Clone, Debug, Default)]
pub struct UpdateCourse {
    pub code: Option<CourseCode>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
}

impl UpdateCourse {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_course_trims_and_drops_blank_optionals() {
        let course = NewCourse::new(
            CourseCode::new("rust-101").unwrap(),
            "  Intro to Rust ".to_string(),
            Some("   ".to_string()),
            Some(" Systems ".to_string()),
            CourseStatus::Draft,
        );
        assert_eq!(course.title, "Intro to Rust");
        assert_eq!(course.description, None);
        assert_eq!(course.category.as_deref(), Some("Systems"));
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            CourseStatus::Draft,
            CourseStatus::Published,
            CourseStatus::Archived,
        ] {
            assert_eq!(status.to_string().parse::<CourseStatus>().unwrap(), status);
        }
        assert!("Retired".parse::<CourseStatus>().is_err());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(UpdateCourse::default().is_empty());
        let patch = UpdateCourse {
            status: Some(CourseStatus::Published),
            ..UpdateCourse::default()
        };
        assert!(!patch.is_empty());
    }
}
