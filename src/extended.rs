//! Extended error with public and private metadata.
//!
//! # Architecture
//!
//! `ExtendedError` adds two metadata maps to the basic message/description
//! pair, one on each side of the trust boundary:
//!
//! - `extra`: public metadata that can be sent in a response (HTTP status,
//!   offending field name, ...)
//! - `internal_extra`: private metadata for internal use only (the
//!   underlying cause, query text, ...)
//!
//! `internal_extra` is marked `#[serde(skip)]` and never written by
//! `Display`, so no serializer or formatter can reach it. It is only
//! readable through [`ExtendedError::internal_extra`] and
//! [`ExtendedError::internal_log`](crate::logging).
//!
//! # Construction
//!
//! Errors are built from a message plus an ordered list of [`ErrorOption`]s.
//! Options are applied left to right and each one overwrites its field, so
//! the last option touching a field decides its final value.
//!
//! ```rust
//! use sanitize_errors::{ExtendedError, with_description, with_message};
//!
//! let err = ExtendedError::new(
//!     "m",
//!     [with_message("a"), with_description("first"), with_message("b")],
//! );
//! assert_eq!(err.message(), "b");
//! assert_eq!(err.description(), "first");
//! ```

use crate::render::{LiteralValue, MapLiteral};
use crate::{Annotated, Described, Fault, FaultKind, Sanitize};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroize;

/// Public metadata, safe to expose to external consumers.
pub type Extra = BTreeMap<String, Value>;

/// Private metadata that must never leave the process.
pub type InternalExtra = BTreeMap<String, InternalValue>;

/// Shared handle to the error that caused an [`ExtendedError`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync>;

// ============================================================================
// Internal Metadata Values
// ============================================================================

/// A value stored in [`InternalExtra`].
///
/// Holds either plain data or an underlying error object. Equality on the
/// `Error` variant is identity: two values are equal only when they share
/// the same cause allocation.
#[derive(Clone)]
pub enum InternalValue {
    /// Plain structured data.
    Value(Value),
    /// Underlying error that produced the outer error.
    Error(Cause),
}

impl InternalValue {
    /// Wrap an error as an internal value.
    #[inline]
    pub fn error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Plain data, if this is not an error.
    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// The wrapped error, if any.
    #[inline]
    pub fn as_error(&self) -> Option<&Cause> {
        match self {
            Self::Value(_) => None,
            Self::Error(cause) => Some(cause),
        }
    }
}

impl PartialEq for InternalValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for InternalValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Cause> for InternalValue {
    fn from(cause: Cause) -> Self {
        Self::Error(cause)
    }
}

impl From<&str> for InternalValue {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for InternalValue {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl fmt::Debug for InternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Error(cause) => f.debug_tuple("Error").field(cause).finish(),
        }
    }
}

impl fmt::Display for InternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_literal(f)
    }
}

impl LiteralValue for InternalValue {
    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt_literal(f),
            Self::Error(cause) => write!(f, "{cause}"),
        }
    }
}

impl Zeroize for InternalValue {
    fn zeroize(&mut self) {
        // Causes are shared; only owned data is cleared.
        if let Self::Value(value) = self {
            zeroize_value(value);
        }
    }
}

fn zeroize_value(value: &mut Value) {
    match value {
        Value::String(s) => s.zeroize(),
        Value::Array(items) => items.iter_mut().for_each(zeroize_value),
        Value::Object(map) => map.values_mut().for_each(zeroize_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

// ============================================================================
// Construction Options
// ============================================================================

/// Deferred mutation applied by [`ExtendedError::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOption {
    /// Replace the message.
    Message(String),
    /// Replace the description.
    Description(String),
    /// Replace the public metadata map.
    Extra(Option<Extra>),
    /// Replace the private metadata map.
    InternalExtra(Option<InternalExtra>),
}

impl ErrorOption {
    /// Apply this option to `err`, overwriting the field it targets.
    #[inline]
    pub fn apply_to(self, err: &mut ExtendedError) {
        match self {
            Self::Message(message) => err.message = message,
            Self::Description(description) => err.description = description,
            Self::Extra(extra) => err.extra = extra,
            Self::InternalExtra(internal_extra) => err.internal_extra = internal_extra,
        }
    }
}

/// Option setting the message.
#[inline]
pub fn with_message(message: impl Into<String>) -> ErrorOption {
    ErrorOption::Message(message.into())
}

/// Option setting the description.
#[inline]
pub fn with_description(description: impl Into<String>) -> ErrorOption {
    ErrorOption::Description(description.into())
}

/// Option setting the public metadata. `None` clears it.
#[inline]
pub fn with_extra(extra: impl Into<Option<Extra>>) -> ErrorOption {
    ErrorOption::Extra(extra.into())
}

/// Option setting the private metadata. `None` clears it.
#[inline]
pub fn with_internal_extra(internal_extra: impl Into<Option<InternalExtra>>) -> ErrorOption {
    ErrorOption::InternalExtra(internal_extra.into())
}

// ============================================================================
// Extended Error
// ============================================================================

/// Error with a message, a sanitizable description and two metadata maps.
///
/// # Key Properties
///
/// - `Display` renders `"<message>: <description>; map[...]"` using the
///   public map only
/// - Serialization omits empty `message`/`description`, omits `extra` when
///   absent or empty, and never includes `internal_extra`
/// - `sanitize()` zeroizes the description and leaves both maps untouched
/// - `Debug` redacts the private map
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use = "errors should be handled or logged"]
pub struct ExtendedError {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "extra_is_empty")]
    extra: Option<Extra>,
    #[serde(skip)]
    internal_extra: Option<InternalExtra>,
}

fn extra_is_empty(extra: &Option<Extra>) -> bool {
    extra.as_ref().is_none_or(BTreeMap::is_empty)
}

impl ExtendedError {
    /// Create an error from a message and an ordered list of options.
    ///
    /// Options are applied left to right over a value whose message starts
    /// as `message`; later options overwrite earlier ones.
    pub fn new(message: impl Into<String>, options: impl IntoIterator<Item = ErrorOption>) -> Self {
        let mut err = Self {
            message: message.into(),
            description: String::new(),
            extra: None,
            internal_extra: None,
        };
        for option in options {
            option.apply_to(&mut err);
        }
        err
    }

    /// Create an error with every field given explicitly.
    ///
    /// Equivalent to `new(message, [with_description, with_extra,
    /// with_internal_extra])`.
    pub fn with_fields(
        message: impl Into<String>,
        description: impl Into<String>,
        extra: impl Into<Option<Extra>>,
        internal_extra: impl Into<Option<InternalExtra>>,
    ) -> Self {
        Self::new(
            message,
            [
                with_description(description),
                with_extra(extra),
                with_internal_extra(internal_extra),
            ],
        )
    }

    /// Apply one more option after construction.
    #[inline]
    pub fn apply(mut self, option: ErrorOption) -> Self {
        option.apply_to(&mut self);
        self
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

    /// Public metadata.
    #[inline]
    pub fn extra(&self) -> Option<&Extra> {
        self.extra.as_ref()
    }

    /// Private metadata. Never serialized or displayed.
    #[inline]
    pub fn internal_extra(&self) -> Option<&InternalExtra> {
        self.internal_extra.as_ref()
    }

    /// Serialize the public shape to JSON.
    pub fn to_json(&self) -> String {
        crate::json::to_json_or_fallback(self, &self.message)
    }

    /// Serialize the public shape to JSON, surfacing serializer failures.
    pub fn try_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Sanitize for ExtendedError {
    #[inline]
    fn sanitize(&mut self) {
        self.description.zeroize();
    }
}

impl Fault for ExtendedError {
    #[inline]
    fn render(&self) -> String {
        self.to_string()
    }
}

impl FaultKind for ExtendedError {
    const ABSENT: &'static str = "";
    const SEPARATOR: &'static str = ";";
}

impl Described for ExtendedError {
    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn description(&self) -> &str {
        &self.description
    }
}

impl Annotated for ExtendedError {
    #[inline]
    fn extra(&self) -> Option<&Extra> {
        self.extra.as_ref()
    }

    #[inline]
    fn internal_extra(&self) -> Option<&InternalExtra> {
        self.internal_extra.as_ref()
    }
}

impl Drop for ExtendedError {
    fn drop(&mut self) {
        self.description.zeroize();
        if let Some(internal) = self.internal_extra.as_mut() {
            internal.values_mut().for_each(Zeroize::zeroize);
        }
    }
}

impl fmt::Debug for ExtendedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedError")
            .field("message", &self.message)
            .field("description", &self.description)
            .field("extra", &self.extra)
            .field(
                "internal_extra",
                &self.internal_extra.as_ref().map(|_| "<REDACTED>"),
            )
            .finish()
    }
}

impl fmt::Display for ExtendedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}; {}",
            self.message,
            self.description,
            MapLiteral(self.extra.as_ref())
        )
    }
}

impl std::error::Error for ExtendedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause()
            .map(|cause| &**cause as &(dyn std::error::Error + 'static))
    }
}
