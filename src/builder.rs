//! Fluent front-end over the [`ErrorOption`] list.
//!
//! `ErrorBuilder` records one option per call, in call order, and hands the
//! list to [`ExtendedError::new`] on `build()`. It therefore has the exact
//! same last-write-wins semantics as passing the options directly.
//!
//! # Example
//!
//! ```rust
//! use sanitize_errors::{ErrorBuilder, Extra};
//! use serde_json::json;
//!
//! let err = ErrorBuilder::new("Validation failed")
//!     .description("column `email` rejected by users_email_check")
//!     .extra(Extra::from([("field".to_string(), json!("email"))]))
//!     .build();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Validation failed: column `email` rejected by users_email_check; map[field:email]"
//! );
//! ```

use crate::{
    ErrorOption, ExtendedError, Extra, InternalExtra, with_description, with_extra,
    with_internal_extra, with_message,
};
use smallvec::SmallVec;

/// Fluent builder for [`ExtendedError`].
///
/// Options are stored inline for up to four calls, which covers the usual
/// description + extra + internal extra construction without allocating.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build()` is called"]
pub struct ErrorBuilder {
    message: String,
    options: SmallVec<[ErrorOption; 4]>,
}

impl ErrorBuilder {
    /// Start a builder with the initial message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            options: SmallVec::new(),
        }
    }

    /// Overwrite the message.
    #[inline]
    pub fn message(self, message: impl Into<String>) -> Self {
        self.option(with_message(message))
    }

    /// Overwrite the description.
    #[inline]
    pub fn description(self, description: impl Into<String>) -> Self {
        self.option(with_description(description))
    }

    /// Overwrite the public metadata.
    #[inline]
    pub fn extra(self, extra: impl Into<Option<Extra>>) -> Self {
        self.option(with_extra(extra))
    }

    /// Overwrite the private metadata.
    #[inline]
    pub fn internal_extra(self, internal_extra: impl Into<Option<InternalExtra>>) -> Self {
        self.option(with_internal_extra(internal_extra))
    }

    /// Record an arbitrary option.
    #[inline]
    pub fn option(mut self, option: ErrorOption) -> Self {
        self.options.push(option);
        self
    }

    /// Options recorded so far, in application order.
    #[inline]
    pub fn options(&self) -> &[ErrorOption] {
        &self.options
    }

    /// Apply every recorded option in order and return the error.
    #[inline]
    pub fn build(self) -> ExtendedError {
        ExtendedError::new(self.message, self.options)
    }
}

impl From<ErrorBuilder> for ExtendedError {
    fn from(builder: ErrorBuilder) -> Self {
        builder.build()
    }
}
