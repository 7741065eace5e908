//! Structured log entry for trusted internal logging.
//!
//! # Critical Security Properties
//!
//! - Borrows from the error with an explicit lifetime
//! - CANNOT outlive the error that created it
//! - Is the only rendering path that includes internal extra
//! - Truncates every field on output to bound log size
//!
//! Use it on the trusted side of the boundary, before `sanitize()`:
//!
//! ```rust
//! use sanitize_errors::{Sanitize, http::not_found_error};
//! use std::io;
//!
//! let mut err = not_found_error(Some(io::Error::other("no row for id=42")), [])
//!     .expect("cause present");
//!
//! err.with_internal_log(|log| {
//!     let mut line = String::new();
//!     log.write_to(&mut line).unwrap();
//!     assert!(line.contains("internal_extra='map[error:no row for id=42]'"));
//! });
//!
//! err.sanitize();
//! ```

use crate::render::MapLiteral;
use crate::{BasicError, ExtendedError, Extra, InternalExtra};
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output (DoS prevention)
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry with borrowed data from an error.
///
/// # Example
///
/// ```rust
/// # use sanitize_errors::BasicError;
/// let err = BasicError::new("Login failed", "password hash mismatch for uid=7");
/// let log = err.internal_log();
/// assert_eq!(log.description(), "password hash mismatch for uid=7");
/// // log is destroyed when it goes out of scope
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InternalLog<'a> {
    message: &'a str,
    description: &'a str,
    extra: Option<&'a Extra>,
    internal_extra: Option<&'a InternalExtra>,
}

impl<'a> InternalLog<'a> {
    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// WARNING: This materializes the internal extra into a String.
    /// Only available with BOTH the `trusted_debug` feature flag AND debug
    /// assertions enabled.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    /// Write structured log data to a formatter.
    ///
    /// Fields are written as `key='value'` pairs. The metadata maps are
    /// written only when present. Every value is truncated to
    /// [`MAX_FIELD_OUTPUT_LEN`] bytes.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "message='{}' description='{}'",
            truncate_with_indicator(self.message),
            truncate_with_indicator(self.description)
        )?;

        if let Some(extra) = self.extra {
            let rendered = MapLiteral(Some(extra)).to_string();
            write!(f, " extra='{}'", truncate_with_indicator(&rendered))?;
        }

        if let Some(internal) = self.internal_extra {
            let rendered = MapLiteral(Some(internal)).to_string();
            write!(f, " internal_extra='{}'", truncate_with_indicator(&rendered))?;
        }

        Ok(())
    }

    /// Access structured fields for JSON/structured logging.
    ///
    /// Fields are not truncated here; truncation is the responsibility of
    /// the logging framework when serializing to its output format.
    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Description as it is now; empty once sanitized.
    #[inline]
    pub const fn description(&self) -> &'a str {
        self.description
    }

    /// Public metadata.
    #[inline]
    pub const fn extra(&self) -> Option<&'a Extra> {
        self.extra
    }

    /// Private metadata.
    #[inline]
    pub const fn internal_extra(&self) -> Option<&'a InternalExtra> {
        self.internal_extra
    }
}

impl fmt::Display for InternalLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl BasicError {
    /// Create a structured internal log entry borrowing from this error.
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog {
            message: self.message(),
            description: self.description(),
            extra: None,
            internal_extra: None,
        }
    }

    /// Callback-style access to the internal log entry.
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        f(&self.internal_log())
    }
}

impl ExtendedError {
    /// Create a structured internal log entry borrowing from this error.
    ///
    /// This is the only formatter that writes the internal extra.
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog {
            message: self.message(),
            description: self.description(),
            extra: self.extra(),
            internal_extra: self.internal_extra(),
        }
    }

    /// Callback-style access to the internal log entry.
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        f(&self.internal_log())
    }
}

/// Bound a field to [`MAX_FIELD_OUTPUT_LEN`] bytes, cutting on a char
/// boundary and marking the cut with [`TRUNCATION_INDICATOR`].
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let budget = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());
    let end = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);

    Cow::Owned(format!("{}{TRUNCATION_INDICATOR}", &s[..end]))
}
