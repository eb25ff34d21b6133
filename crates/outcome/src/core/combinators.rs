//! Combinators deriving a new [`Outcome`] from an existing one
//!
//! Each combinator either runs its transform or passes the receiver through
//! untouched, never both. Only the `*_catching` variants turn a raised
//! cause (`Err`) into a [`Outcome::Failure`]; the plain variants have no
//! catch path at all, so a panicking transform unwinds to the caller.
//!
//! When a catching combinator does catch, the new failure carries the
//! cause the transform just raised. A failure receiver of `map_catching`
//! (and a success receiver of `recover_catching`) is returned as-is and
//! never reaches the transform.

use std::any::type_name;

use crate::core::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Transform the value. Failures pass through unchanged.
    #[inline]
    pub fn map<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Transform the value with a fallible function.
    ///
    /// `Err(cause)` from `transform` becomes a failure carrying that cause.
    /// A failure receiver is passed through without calling `transform`.
    ///
    /// ```rust
    /// use outcome::{Outcome, success};
    ///
    /// let parsed: Outcome<i32, String> =
    ///     success("12x".to_string()).map_catching(|s| s.parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(parsed.into_cause().as_deref(), Some("invalid digit found in string"));
    /// ```
    pub fn map_catching<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Self::Success(value) => caught(transform(value), "map_catching"),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Turn a failure into a success by computing a replacement value.
    /// Successes pass through unchanged.
    #[inline]
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Success(transform(cause)),
        }
    }

    /// Attempt to turn a failure into a success.
    ///
    /// `Err(cause)` from `transform` becomes a failure carrying the new
    /// cause; the receiver's cause is dropped. Successes pass through
    /// without calling `transform`.
    pub fn recover_catching<F>(self, transform: F) -> Self
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => caught(transform(cause), "recover_catching"),
        }
    }

    /// The receiver if it succeeded, otherwise `other` as given.
    ///
    /// `other` is already computed; defer the work yourself (e.g. with
    /// [`recover_catching`](Self::recover_catching)) if it is expensive.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }
}

/// Convert a transform's `Result` into an outcome, logging the catch.
fn caught<R, E>(result: Result<R, E>, operation: &'static str) -> Outcome<R, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(cause) => {
            tracing::debug!(
                operation,
                cause_type = type_name::<E>(),
                "transform raised; captured as failure"
            );
            Outcome::Failure(cause)
        }
    }
}
