//! Absent-value semantics.
//!
//! An error or collection that does not exist is modelled as `Option::None`.
//! Every capability is implemented for `Option<T>` so that calling it on an
//! absent value degrades to a defined default instead of failing:
//!
//! | Operation | Absent `BasicError` | Absent `ExtendedError` | Absent collection |
//! |---|---|---|---|
//! | `render()` | `"nil error"` | `""` | `""` |
//! | `sanitize()` | no-op | no-op | no-op |
//! | `message()` / `description()` | `""` | `""` | n/a |
//! | `extra()` / `internal_extra()` | n/a | `None` | n/a |
//! | `add()` | n/a | n/a | no-op |
//! | `errors()` | n/a | n/a | `None` |
//! | `len()` | n/a | n/a | `0` |
//!
//! The differing absent renderings of the two error kinds are kept as-is.

use crate::{
    Annotated, Described, ErrorCollection, Extra, Fault, FaultKind, InternalExtra, Sanitize,
};

impl<T: Sanitize> Sanitize for Option<T> {
    #[inline]
    fn sanitize(&mut self) {
        if let Some(inner) = self {
            inner.sanitize();
        }
    }
}

impl<T: FaultKind> Fault for Option<T> {
    #[inline]
    fn render(&self) -> String {
        match self {
            Some(inner) => inner.render(),
            None => T::ABSENT.to_string(),
        }
    }
}

impl<T: FaultKind> FaultKind for Option<T> {
    const ABSENT: &'static str = T::ABSENT;
    const SEPARATOR: &'static str = T::SEPARATOR;
}

impl<T: Described> Described for Option<T> {
    #[inline]
    fn message(&self) -> &str {
        self.as_ref().map_or("", Described::message)
    }

    #[inline]
    fn description(&self) -> &str {
        self.as_ref().map_or("", Described::description)
    }
}

impl<T: Described + ?Sized> Described for &T {
    #[inline]
    fn message(&self) -> &str {
        (**self).message()
    }

    #[inline]
    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T: Annotated> Annotated for Option<T> {
    #[inline]
    fn extra(&self) -> Option<&Extra> {
        self.as_ref().and_then(Annotated::extra)
    }

    #[inline]
    fn internal_extra(&self) -> Option<&InternalExtra> {
        self.as_ref().and_then(Annotated::internal_extra)
    }
}

impl<T: Annotated + ?Sized> Annotated for &T {
    #[inline]
    fn extra(&self) -> Option<&Extra> {
        (**self).extra()
    }

    #[inline]
    fn internal_extra(&self) -> Option<&InternalExtra> {
        (**self).internal_extra()
    }
}

/// Collection operations that tolerate an absent collection.
///
/// ```rust
/// use sanitize_errors::{BasicError, ErrorCollection, Fault, MaybeCollection};
///
/// let mut missing: Option<ErrorCollection<BasicError>> = None;
/// missing.add([BasicError::new("dropped", "")]);
/// assert_eq!(missing.len(), 0);
/// assert!(missing.errors().is_none());
/// assert_eq!(missing.render(), "");
/// ```
pub trait MaybeCollection<E> {
    /// Append errors; does nothing when the collection is absent.
    fn add(&mut self, items: impl IntoIterator<Item = E>);

    /// Stored errors, or `None` when the collection is absent.
    fn errors(&self) -> Option<&[E]>;

    /// Number of stored errors; 0 when absent.
    fn len(&self) -> usize;

    /// True when absent or holding no errors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> MaybeCollection<E> for Option<ErrorCollection<E>> {
    #[inline]
    fn add(&mut self, items: impl IntoIterator<Item = E>) {
        if let Some(collection) = self {
            collection.add(items);
        }
    }

    #[inline]
    fn errors(&self) -> Option<&[E]> {
        self.as_ref().map(ErrorCollection::errors)
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().map_or(0, ErrorCollection::len)
    }
}
