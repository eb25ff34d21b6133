//! Panic-capturing combinators
//!
//! The plain and `*_catching` combinators let panics unwind. The functions
//! here run the user closure under `std::panic::catch_unwind` and turn a
//! panic into a failure whose cause is built from [`Panicked`].
//!
//! Capture needs `panic = "unwind"`; under `panic = "abort"` the process
//! still aborts. Closures are wrapped in `AssertUnwindSafe`, so state they
//! mutate may be observed half-updated after a captured panic.

use std::panic::{self, AssertUnwindSafe};

use crate::core::Outcome;
use crate::error::Panicked;

/// Run `f`, capturing a panic as a failure.
///
/// ```rust
/// use outcome::catching;
///
/// let outcome = catching(|| -> u32 { panic!("boom") });
/// assert_eq!(outcome.cause().map(|p| p.message()), Some("boom"));
/// assert_eq!(catching(|| 2 + 2).get_or_default(0), 4);
/// ```
pub fn catching<T, F>(f: F) -> Outcome<T, Panicked>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(captured(payload, "catching")),
    }
}

impl<T, E> Outcome<T, E> {
    /// Like [`map`](Self::map), but a panic in `transform` becomes a
    /// failure carrying `E::from(Panicked)`.
    ///
    /// A failure receiver is passed through without calling `transform`.
    pub fn map_catching_unwind<R, F>(self, transform: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
        E: From<Panicked>,
    {
        match self {
            Self::Success(value) => {
                match panic::catch_unwind(AssertUnwindSafe(move || transform(value))) {
                    Ok(mapped) => Outcome::Success(mapped),
                    Err(payload) => {
                        Outcome::Failure(captured(payload, "map_catching_unwind").into())
                    }
                }
            }
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Like [`recover`](Self::recover), but a panic in `transform` becomes
    /// a failure carrying `E::from(Panicked)`; the receiver's cause is
    /// dropped.
    pub fn recover_catching_unwind<F>(self, transform: F) -> Self
    where
        F: FnOnce(E) -> T,
        E: From<Panicked>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => {
                match panic::catch_unwind(AssertUnwindSafe(move || transform(cause))) {
                    Ok(recovered) => Self::Success(recovered),
                    Err(payload) => {
                        Self::Failure(captured(payload, "recover_catching_unwind").into())
                    }
                }
            }
        }
    }
}

fn captured(payload: Box<dyn std::any::Any + Send>, operation: &'static str) -> Panicked {
    let panicked = Panicked::from_payload(payload);
    tracing::warn!(
        operation,
        message = panicked.message(),
        "panic captured as failure"
    );
    panicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{failure, success};

    #[test]
    fn test_catching_success() {
        assert_eq!(catching(|| "fine"), success("fine"));
    }

    #[test]
    fn test_catching_formatted_panic() {
        let code = 7;
        let outcome = catching(|| -> u8 { panic!("exit code {code}") });
        assert_eq!(outcome, failure(Panicked::new("exit code 7")));
    }

    #[test]
    fn test_map_catching_unwind_captures() {
        let outcome: Outcome<Vec<u8>, Panicked> = success(vec![1, 2]);
        let mapped = outcome.map_catching_unwind(|v| v[5]);
        assert!(mapped.is_failure());
        assert!(mapped.cause().unwrap().message().contains("index out of bounds"));
    }

    #[test]
    fn test_map_catching_unwind_passes_failure_through() {
        let outcome: Outcome<i32, Panicked> = failure(Panicked::new("earlier"));
        let mapped = outcome.map_catching_unwind(|_| -> i32 { panic!("never runs") });
        assert_eq!(mapped, failure(Panicked::new("earlier")));
    }

    #[test]
    fn test_recover_catching_unwind_replaces_cause() {
        let outcome: Outcome<i32, Panicked> = failure(Panicked::new("first"));
        let recovered = outcome.recover_catching_unwind(|_| panic!("second"));
        assert_eq!(recovered, failure(Panicked::new("second")));
    }

    #[test]
    fn test_recover_catching_unwind_ok_path() {
        let outcome: Outcome<usize, Panicked> = failure(Panicked::new("four"));
        assert_eq!(
            outcome.recover_catching_unwind(|p| p.message().len()),
            success(4)
        );
    }
}
