//! HTTP status helpers for [`ExtendedError`].
//!
//! Each constructor produces an error with the following shape:
//!
//! - message: a fixed, human-readable status phrase
//! - extra: `{"http_code": <status>}`
//! - internal extra: `{"error": <cause>}`
//!
//! Caller-supplied options are applied after the defaults, so they can
//! replace either map. A missing cause yields no error at all.
//!
//! ```rust
//! use sanitize_errors::http::bad_request_error;
//! use std::io;
//!
//! let err = bad_request_error(Some(io::Error::other("missing field `name`")), [])
//!     .expect("cause present");
//! assert_eq!(err.to_string(), "Bad Request: ; map[http_code:400]");
//! assert_eq!(err.status_code(), Some(http::StatusCode::BAD_REQUEST));
//!
//! assert!(bad_request_error(None::<io::Error>, []).is_none());
//! ```

use crate::{Cause, ErrorOption, ExtendedError, Extra, InternalExtra, InternalValue};
use crate::{with_extra, with_internal_extra};
use http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// Key of the status code in public extra.
pub const HTTP_CODE_KEY: &str = "http_code";

/// Key of the underlying cause in internal extra.
pub const CAUSE_KEY: &str = "error";

/// Build an HTTP error from a cause, message and status.
///
/// Returns `None` when `cause` is `None`.
pub fn new_http_error<E>(
    cause: Option<E>,
    message: impl Into<String>,
    status: StatusCode,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let cause: Cause = Arc::new(cause?);
    let defaults = [
        with_extra(Extra::from([(
            HTTP_CODE_KEY.to_string(),
            Value::from(status.as_u16()),
        )])),
        with_internal_extra(InternalExtra::from([(
            CAUSE_KEY.to_string(),
            InternalValue::Error(cause),
        )])),
    ];
    Some(ExtendedError::new(message, defaults.into_iter().chain(options)))
}

/// 400 Bad Request.
#[inline]
pub fn bad_request_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(cause, "Bad Request", StatusCode::BAD_REQUEST, options)
}

/// 401 Unauthorized.
#[inline]
pub fn unauthorized_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(cause, "Unauthorized", StatusCode::UNAUTHORIZED, options)
}

/// 403 Forbidden.
#[inline]
pub fn forbidden_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(cause, "Forbidden", StatusCode::FORBIDDEN, options)
}

/// 404 Not Found.
#[inline]
pub fn not_found_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(cause, "Not Found", StatusCode::NOT_FOUND, options)
}

/// 422 Unprocessable Entity.
#[inline]
pub fn unprocessable_entity_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(
        cause,
        "Unprocessable Entity",
        StatusCode::UNPROCESSABLE_ENTITY,
        options,
    )
}

/// 500 Internal Server Error.
#[inline]
pub fn internal_server_error<E>(
    cause: Option<E>,
    options: impl IntoIterator<Item = ErrorOption>,
) -> Option<ExtendedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    new_http_error(
        cause,
        "Internal Server Error",
        StatusCode::INTERNAL_SERVER_ERROR,
        options,
    )
}

impl ExtendedError {
    /// Status code stored under `http_code` in public extra, if valid.
    pub fn status_code(&self) -> Option<StatusCode> {
        let code = self.extra()?.get(HTTP_CODE_KEY)?.as_u64()?;
        StatusCode::from_u16(u16::try_from(code).ok()?).ok()
    }

    /// Underlying cause stored under `error` in internal extra.
    pub fn cause(&self) -> Option<&Cause> {
        self.internal_extra()?.get(CAUSE_KEY)?.as_error()
    }
}
