//! Basic error: a public message paired with a sanitizable description.
//!
//! # Trust Boundary
//!
//! - `message` is the only field ever surfaced once the error is sanitized
//! - `description` may hold sensitive diagnostic text (paths, queries, ids)
//! - `sanitize()` zeroizes the description in place before external exposure
//!
//! # Rendering
//!
//! The string form is `"<message>:<description>"`. After sanitizing it
//! becomes `"<message>:"`, the empty description segment is kept.

use crate::{Described, Fault, FaultKind, Sanitize};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Error with a user-facing message and an internal description.
///
/// # Example
///
/// ```rust
/// use sanitize_errors::{BasicError, Sanitize};
///
/// let mut err = BasicError::new("Invalid request", "user_id column missing in users");
/// assert_eq!(err.to_string(), "Invalid request:user_id column missing in users");
///
/// err.sanitize();
/// assert_eq!(err.to_string(), "Invalid request:");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "errors should be handled or logged"]
pub struct BasicError {
    /// General error message, safe for external display.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    /// Detailed, probably sensitive, description. Cleared by `sanitize()`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
}

impl BasicError {
    /// Create a new error. Empty strings are allowed for either field.
    #[inline]
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
        }
    }

    /// General error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Detailed error description; empty once sanitized.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Serialize to JSON for API responses.
    ///
    /// Call `sanitize()` first when the audience is untrusted.
    pub fn to_json(&self) -> String {
        crate::json::to_json_or_fallback(self, &self.message)
    }

    /// Serialize to JSON, surfacing serializer failures.
    pub fn try_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Sanitize for BasicError {
    #[inline]
    fn sanitize(&mut self) {
        self.description.zeroize();
    }
}

impl Fault for BasicError {
    #[inline]
    fn render(&self) -> String {
        self.to_string()
    }
}

impl FaultKind for BasicError {
    const ABSENT: &'static str = "nil error";
    const SEPARATOR: &'static str = "; ";
}

impl Described for BasicError {
    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn description(&self) -> &str {
        &self.description
    }
}

impl Drop for BasicError {
    fn drop(&mut self) {
        self.description.zeroize();
    }
}

impl fmt::Display for BasicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.message, self.description)
    }
}

impl std::error::Error for BasicError {}
