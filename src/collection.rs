//! Ordered aggregate of errors of one kind.
//!
//! `ErrorCollection<E>` keeps errors in insertion order, sanitizes them in
//! bulk and joins their renderings into a single string. The join separator
//! comes from the element kind ([`FaultKind::SEPARATOR`]): `"; "` for
//! [`BasicError`](crate::BasicError), `";"` for
//! [`ExtendedError`](crate::ExtendedError).
//!
//! An absent collection (`Option::<ErrorCollection<E>>::None`) is handled
//! by [`MaybeCollection`](crate::MaybeCollection).
//!
//! # Example
//!
//! ```rust
//! use sanitize_errors::{BasicError, ErrorCollection, Fault, Sanitize};
//!
//! let mut errs = ErrorCollection::new();
//! errs.add([
//!     BasicError::new("A", "1"),
//!     BasicError::new("B", "2"),
//!     BasicError::new("C", "3"),
//! ]);
//! assert_eq!(errs.render(), "A:1; B:2; C:3");
//!
//! errs.sanitize();
//! assert_eq!(errs.render(), "A:; B:; C:");
//! ```

use crate::{Fault, FaultKind, Sanitize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity reserved by [`ErrorCollection::new`].
const DEFAULT_CAPACITY: usize = 1;

/// Ordered, append-only collection of errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCollection<E> {
    errors: Vec<E>,
}

impl<E> ErrorCollection<E> {
    /// Empty collection with a capacity hint of one.
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Append errors in argument order.
    #[inline]
    pub fn add(&mut self, items: impl IntoIterator<Item = E>) -> &mut Self {
        self.errors.extend(items);
        self
    }

    /// Append a single error.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Errors in insertion order.
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Number of stored errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no errors are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Slots reserved before the next reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.errors.capacity()
    }

    /// Iterate over the errors in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Mutable iteration in insertion order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.errors.iter_mut()
    }

    /// Consume the collection, returning the ordered errors.
    #[inline]
    pub fn into_inner(self) -> Vec<E> {
        self.errors
    }
}

impl<T> ErrorCollection<Option<T>> {
    /// Collection pre-filled with `len` absent slots.
    ///
    /// Capacity is at least `capacity`, and never less than `len`.
    pub fn with_size(len: usize, capacity: usize) -> Self {
        let mut errors = Vec::with_capacity(capacity.max(len));
        errors.resize_with(len, || None);
        Self { errors }
    }
}

impl<E> Default for ErrorCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Sanitize> Sanitize for ErrorCollection<E> {
    fn sanitize(&mut self) {
        self.errors.iter_mut().for_each(Sanitize::sanitize);
    }
}

impl<E: FaultKind> Fault for ErrorCollection<E> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<E: FaultKind> FaultKind for ErrorCollection<E> {
    const ABSENT: &'static str = "";
    const SEPARATOR: &'static str = E::SEPARATOR;
}

impl<E: FaultKind> fmt::Display for ErrorCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(E::SEPARATOR)?;
            }
            f.write_str(&error.render())?;
        }
        Ok(())
    }
}

impl<E: FaultKind + fmt::Debug> std::error::Error for ErrorCollection<E> {}

impl<E> FromIterator<E> for ErrorCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for ErrorCollection<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl<E> IntoIterator for ErrorCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
