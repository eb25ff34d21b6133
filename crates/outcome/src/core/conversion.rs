//! Interop with `std::result::Result`

use crate::core::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.get_or_throw()
    }
}

impl<T, E> Outcome<T, E> {
    /// Same as [`get_or_throw`](Self::get_or_throw), named for conversion chains
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.get_or_throw()
    }
}

/// Extension trait lifting a `Result` into an [`Outcome`]
pub trait IntoOutcome<T, E> {
    /// Convert into an outcome, keeping the variant and payload
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::{failure, success};

    #[test]
    fn test_from_result() {
        let ok: Result<u8, &str> = Ok(1);
        let err: Result<u8, &str> = Err("no");
        assert_eq!(Outcome::from(ok), success(1));
        assert_eq!(Outcome::from(err), failure("no"));
    }

    #[test]
    fn test_into_result() {
        let outcome: Outcome<u8, &str> = failure("no");
        let result: Result<u8, &str> = outcome.into();
        assert_eq!(result, Err("no"));
        assert_eq!(success::<u8, &str>(2).into_result(), Ok(2));
    }

    #[test]
    fn test_into_outcome_chain() {
        let total = "40"
            .parse::<i32>()
            .into_outcome()
            .map(|n| n + 2)
            .get_or_default(0);
        assert_eq!(total, 42);
    }
}
