//! # Sanitize Errors
//!
//! Structured errors that separate what a client may see from what only the
//! process may see.
//!
//! ## Design Philosophy
//!
//! 1. **Messages are public**, descriptions are sensitive until sanitized
//! 2. **Public metadata** (`extra`) is serialized, **private metadata**
//!    (`internal_extra`) never is
//! 3. **Sanitization happens once**, at the trust boundary, in place
//! 4. **Absent errors are values too**: every operation on `None` returns a
//!    defined default instead of failing
//!
//! ## Building Blocks
//!
//! - [`BasicError`]: message + description
//! - [`ExtendedError`]: message + description + public/private metadata,
//!   built from an ordered list of [`ErrorOption`]s
//! - [`ErrorCollection`]: ordered aggregate with bulk sanitize and join
//! - [`http`](crate::http): constructors stamping an HTTP status into public
//!   metadata and the cause into private metadata
//!
//! ## Quick Start
//!
//! ```rust
//! use sanitize_errors::{ErrorCollection, Fault, Sanitize, http};
//! use std::io;
//!
//! fn load_user(id: u64) -> Result<(), io::Error> {
//!     Err(io::Error::other(format!("SELECT * FROM users WHERE id = {id}: no rows")))
//! }
//!
//! let mut errs = ErrorCollection::new();
//! if let Err(e) = load_user(42) {
//!     errs.add(http::not_found_error(Some(e), [sanitize_errors::with_description("user 42 missing")]));
//! }
//!
//! // Internal log (trusted): full context
//! // Not Found: user 42 missing; map[http_code:404]
//!
//! // At the boundary:
//! errs.sanitize();
//! assert_eq!(errs.render(), "Not Found: ; map[http_code:404]");
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: Enable detailed debug formatting of internal logs
//!   (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod absent;
pub mod basic;
pub mod builder;
pub mod collection;
pub mod convenience;
pub mod extended;
pub mod http;
pub mod logging;

mod json;
mod render;

pub use absent::*;
pub use basic::*;
pub use builder::*;
pub use collection::*;
pub use extended::*;
pub use logging::*;

// ============================================================================
// Capabilities
// ============================================================================

/// Removal of sensitive information before external exposure.
pub trait Sanitize {
    /// Clear sensitive content in place. Idempotent.
    fn sanitize(&mut self);
}

/// Minimal capability shared by every error kind: render and sanitize.
///
/// The trait is object safe, so `ErrorCollection<Box<dyn Fault>>` holds
/// basic and extended errors side by side.
pub trait Fault: Sanitize {
    /// Render the error as a single string.
    fn render(&self) -> String;
}

/// Rendering constants of a concrete error kind.
///
/// Collections are generic over this trait, so a collection of
/// [`BasicError`]s and a collection of [`ExtendedError`]s share one
/// implementation while keeping their own join separators.
pub trait FaultKind: Fault {
    /// Rendering of an absent value of this kind.
    const ABSENT: &'static str;

    /// Separator placed between elements when a collection is rendered.
    const SEPARATOR: &'static str;
}

impl<T: Sanitize + ?Sized> Sanitize for Box<T> {
    #[inline]
    fn sanitize(&mut self) {
        (**self).sanitize();
    }
}

impl<T: Fault + ?Sized> Fault for Box<T> {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

// Mixed collections render like basic ones.
impl FaultKind for Box<dyn Fault> {
    const ABSENT: &'static str = BasicError::ABSENT;
    const SEPARATOR: &'static str = BasicError::SEPARATOR;
}

impl FaultKind for Box<dyn Fault + Send + Sync> {
    const ABSENT: &'static str = BasicError::ABSENT;
    const SEPARATOR: &'static str = BasicError::SEPARATOR;
}

/// Read access to the message/description pair.
pub trait Described {
    /// General error message.
    fn message(&self) -> &str;

    /// Detailed, possibly sensitive, description.
    fn description(&self) -> &str;
}

/// Read access to public and private metadata.
pub trait Annotated {
    /// Public metadata.
    fn extra(&self) -> Option<&Extra>;

    /// Private metadata.
    fn internal_extra(&self) -> Option<&InternalExtra>;
}
