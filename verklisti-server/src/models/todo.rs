//! Todo record and validated form input
//!
//! Form bodies arrive as strings; everything is parsed and validated here
//! before any query runs. The mutation handlers redirect without touching
//! the database when validation fails.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum title length, matching the VARCHAR(255) column
const MAX_TITLE_LEN: usize = 255;

/// A single todo row
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub finished: bool,
    pub created: DateTime<Utc>,
}

/// Validated todo title (trimmed, 1-255 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new title from raw form input.
    ///
    /// Leading/trailing whitespace is trimmed before the length checks,
    /// so a whitespace-only submission counts as empty. Length is counted
    /// in characters, not bytes.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a todo id from raw form input.
///
/// The original page posts the id as a hidden field, so anything that is
/// not an integer means a tampered or malformed request and gets a named
/// validation failure instead of a loose numeric coercion.
pub fn parse_todo_id(raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::NotANumber {
            field: "id",
            value: raw.to_owned(),
        })
}
