//! The [`Outcome`] type, its constructors and terminal operations

use std::fmt;

use crate::error::BoxError;

/// Either the value a computation produced or the cause that prevented it.
///
/// The cause `E` is opaque: nothing in this crate inspects it, and it is
/// only ever handed back verbatim. An instance never changes variant; every
/// combinator consumes the receiver and returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation produced a value
    Success(T),
    /// The computation failed with a cause
    Failure(E),
}

/// Outcome with a fully opaque, boxed cause
pub type BoxOutcome<T> = Outcome<T, BoxError>;

/// Wrap `value` as a [`Outcome::Success`].
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap `cause` as a [`Outcome::Failure`], as-is.
#[inline]
pub fn failure<T, E>(cause: E) -> Outcome<T, E> {
    Outcome::Failure(cause)
}

impl<T, E> Outcome<T, E> {
    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// `true` for [`Outcome::Success`]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for [`Outcome::Failure`]; always `!self.is_success()`
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the value, if any
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the cause, if any
    #[inline]
    pub fn cause(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Borrow both payloads, keeping the variant
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Consume into the value, discarding a cause
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume into the cause, discarding a value
    #[inline]
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    // ---------------------------------------------------------------------
    // Terminal operations
    // ---------------------------------------------------------------------

    /// The value, or `default` on failure.
    ///
    /// `default` is already evaluated by the caller; no failure handling
    /// runs here. Use [`get_or_else`](Self::get_or_else) to compute it
    /// lazily.
    #[inline]
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The value, or `on_failure(cause)` on failure.
    ///
    /// A panic inside `on_failure` propagates to the caller.
    #[inline]
    pub fn get_or_else<F>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// `Ok(value)`, or the original cause as `Err` for propagation with `?`.
    ///
    /// The cause is returned verbatim, never wrapped.
    ///
    /// ```rust
    /// use outcome::{Outcome, failure, success};
    ///
    /// fn total(a: Outcome<u32, String>, b: Outcome<u32, String>) -> Result<u32, String> {
    ///     Ok(a.get_or_throw()? + b.get_or_throw()?)
    /// }
    ///
    /// assert_eq!(total(success(1), success(2)), Ok(3));
    /// assert_eq!(total(success(1), failure("no b".into())), Err("no b".to_string()));
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Apply exactly one of the two handlers and return its result.
    ///
    /// Neither handler is guarded; a panic in the chosen one propagates.
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(cause) => write!(f, "Failure({cause})"),
        }
    }
}
