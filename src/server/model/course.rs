//! Course domain models and parameters.
//!
//! A course owns its lectures; deleting one cascades across lectures, the
//! subscriptions that reference it, and every asset file involved. The
//! `CourseDeletion` report describes how far that cascade got.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::{
    model::course::{CascadeOutcomeDto, CourseDeletedDto, CourseDto},
    server::{
        error::{
            internal::InternalError,
            validation::{FieldIssue, ValidationError},
        },
        util::parse::{non_empty, parse_json_list, parse_non_negative_f64},
    },
};

/// Form fields that must be present and non-blank to create a course.
pub const REQUIRED_COURSE_FIELDS: [&str; 6] = [
    "title",
    "description",
    "createdBy",
    "duration",
    "price",
    "category",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_by: String,
    /// Asset path of the cover image.
    pub image: Option<String>,
    pub duration: f64,
    pub price: f64,
    pub category: String,
    /// Ordered syllabus entries, kept as free-form JSON.
    pub syllabus: Vec<serde_json::Value>,
    pub prerequisites: Vec<String>,
    /// Who the course is aimed at.
    pub audience: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Course)` - The converted course
    /// - `Err(InternalError::MalformedStoredList)` - A list column does not hold a
    ///   JSON array of the expected item type
    pub fn from_entity(entity: entity::course::Model) -> Result<Self, InternalError> {
        let course_id = entity.id;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_by: entity.created_by,
            image: entity.image,
            duration: entity.duration,
            price: entity.price,
            category: entity.category,
            syllabus: stored_list(course_id, "syllabus", entity.syllabus)?,
            prerequisites: stored_list(course_id, "prerequisites", entity.prerequisites)?,
            audience: stored_list(course_id, "audience", entity.audience)?,
            created_at: entity.created_at,
        })
    }

    /// Converts the course domain model to a DTO for API responses.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created_by: self.created_by,
            image: self.image,
            duration: self.duration,
            price: self.price,
            category: self.category,
            syllabus: self.syllabus,
            prerequisites: self.prerequisites,
            audience: self.audience,
            created_at: self.created_at,
        }
    }
}

fn stored_list<T: DeserializeOwned>(
    course_id: i32,
    field: &'static str,
    value: serde_json::Value,
) -> Result<Vec<T>, InternalError> {
    serde_json::from_value(value).map_err(|source| InternalError::MalformedStoredList {
        course_id,
        field,
        source,
    })
}

/// Validated input for creating a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseParams {
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub image: Option<String>,
    pub duration: f64,
    pub price: f64,
    pub category: String,
    pub syllabus: Vec<serde_json::Value>,
    pub prerequisites: Vec<String>,
    pub audience: Vec<String>,
}

impl CreateCourseParams {
    /// Validates multipart text fields and builds creation parameters.
    ///
    /// Every required field is checked before reporting, so a single error lists all
    /// missing fields at once. Only when none are missing are the numeric and list
    /// fields parsed, again collecting every malformed field.
    ///
    /// # Arguments
    /// - `form` - Text fields of the request
    /// - `image` - Path of the staged cover image, if one was uploaded
    ///
    /// # Returns
    /// - `Ok(CreateCourseParams)` - All fields present and well-formed
    /// - `Err(ValidationError::MissingFields)` - Required fields absent or blank
    /// - `Err(ValidationError::InvalidFields)` - Numbers or JSON lists malformed
    pub fn from_form(
        form: &HashMap<String, String>,
        image: Option<String>,
    ) -> Result<Self, ValidationError> {
        let missing: Vec<&'static str> = REQUIRED_COURSE_FIELDS
            .into_iter()
            .filter(|field| non_empty(form, field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let mut issues = Vec::new();
        let duration = collect_issue(
            &mut issues,
            "duration",
            parse_non_negative_f64(non_empty(form, "duration").unwrap_or_default()),
        );
        let price = collect_issue(
            &mut issues,
            "price",
            parse_non_negative_f64(non_empty(form, "price").unwrap_or_default()),
        );
        let syllabus = collect_issue(
            &mut issues,
            "syllabus",
            parse_json_list::<serde_json::Value>(non_empty(form, "syllabus")),
        );
        let prerequisites = collect_issue(
            &mut issues,
            "prerequisites",
            parse_json_list::<String>(non_empty(form, "prerequisites")),
        );
        let audience = collect_issue(
            &mut issues,
            "whoShouldAttend",
            parse_json_list::<String>(non_empty(form, "whoShouldAttend")),
        );

        match (duration, price, syllabus, prerequisites, audience) {
            (Some(duration), Some(price), Some(syllabus), Some(prerequisites), Some(audience))
                if issues.is_empty() =>
            {
                Ok(Self {
                    title: required(form, "title"),
                    description: required(form, "description"),
                    created_by: required(form, "createdBy"),
                    image,
                    duration,
                    price,
                    category: required(form, "category"),
                    syllabus,
                    prerequisites,
                    audience,
                })
            }
            _ => Err(ValidationError::InvalidFields(issues)),
        }
    }
}

fn collect_issue<T>(
    issues: &mut Vec<FieldIssue>,
    field: &'static str,
    result: Result<T, String>,
) -> Option<T> {
    result
        .map_err(|message| issues.push(FieldIssue::new(field, message)))
        .ok()
}

fn required(form: &HashMap<String, String>, name: &str) -> String {
    non_empty(form, name).unwrap_or_default().to_string()
}

/// How far a course cascade got once the database side committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// Records and asset files are all gone.
    Complete,
    /// Records are gone; the listed asset files could not be removed.
    PendingAssetCleanup(Vec<String>),
}

/// Report of a cascading course delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDeletion {
    pub course_id: i32,
    pub lectures_removed: u64,
    pub subscriptions_removed: u64,
    pub outcome: CascadeOutcome,
}

impl CourseDeletion {
    pub fn into_dto(self) -> CourseDeletedDto {
        let (outcome, pending_assets) = match self.outcome {
            CascadeOutcome::Complete => (CascadeOutcomeDto::Complete, Vec::new()),
            CascadeOutcome::PendingAssetCleanup(paths) => {
                (CascadeOutcomeDto::PendingAssetCleanup, paths)
            }
        };

        CourseDeletedDto {
            message: "Course Deleted Successfully".to_string(),
            outcome,
            lectures_removed: self.lectures_removed,
            subscriptions_removed: self.subscriptions_removed,
            pending_assets,
        }
    }
}
