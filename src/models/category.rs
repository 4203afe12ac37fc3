//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category names seeded on every startup.
///
/// The frontend keys its shelves on these exact names.
pub const SEED_CATEGORIES: [&str; 14] = [
    "Fiction",
    "Non-Fiction",
    "Academic/Professional",
    "Age-Based",
    "Subject-Specific",
    "Religious/Spiritual",
    "Culinary",
    "Arts & Photography",
    "Health/Medical",
    "Business/Economics",
    "International & Cultural",
    "Format-Based",
    "Special Collections",
    "General",
];

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
