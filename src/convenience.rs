//! Convenience macros for variadic-style construction.
//!
//! # Usage
//!
//! ```rust
//! use sanitize_errors::{
//!     BasicError, Fault, error_collection, ext_err, with_description, with_message,
//! };
//!
//! let err = ext_err!("Bad Request", with_description("missing `name`"), with_message("Invalid"));
//! assert_eq!(err.to_string(), "Invalid: missing `name`; map[]");
//!
//! let errs = error_collection![BasicError::new("A", "1"), BasicError::new("B", "2")];
//! assert_eq!(errs.render(), "A:1; B:2");
//! ```

/// Build an [`ExtendedError`](crate::ExtendedError) from a message and any
/// number of options, applied left to right.
///
/// ```rust
/// # use sanitize_errors::{ext_err, with_message};
/// let err = ext_err!("m", with_message("a"), with_message("b"));
/// assert_eq!(err.message(), "b");
///
/// let bare = ext_err!("m");
/// assert_eq!(bare.to_string(), "m: ; map[]");
/// ```
#[macro_export]
macro_rules! ext_err {
    ($message:expr $(, $option:expr)* $(,)?) => {
        $crate::ExtendedError::new($message, [$($option),*])
    };
}

/// Build an [`ErrorCollection`](crate::ErrorCollection) holding the given
/// errors in order.
///
/// ```rust
/// # use sanitize_errors::{BasicError, ErrorCollection, error_collection};
/// let errs = error_collection![BasicError::new("A", "1")];
/// assert_eq!(errs.len(), 1);
///
/// let empty: ErrorCollection<BasicError> = error_collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! error_collection {
    () => {
        $crate::ErrorCollection::new()
    };
    ($($error:expr),+ $(,)?) => {{
        let mut collection = $crate::ErrorCollection::new();
        collection.add([$($error),+]);
        collection
    }};
}
