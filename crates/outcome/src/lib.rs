//! # Outcome
//!
//! A two-variant result-of-computation type, [`Outcome`], with a closed set
//! of combinators for chaining fallible work and deciding at the call site
//! what to do about failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let doubled: Outcome<i32, &str> = success(5).map(|x| x * 2);
//! assert_eq!(doubled.get_or_default(0), 10);
//!
//! let failed: Outcome<i32, &str> = failure("err");
//! assert_eq!(failed.map(|x| x * 2).get_or_default(0), 0);
//! assert_eq!(failed.get_or_else(|_| -1), -1);
//! ```
//!
//! ## Catching policy
//!
//! Every combinator states whether a failure raised by the function it runs
//! is caught (turned into a [`Outcome::Failure`]) or propagated to the
//! caller:
//!
//! | Operation                  | On Success          | On Failure          | Catches? |
//! |----------------------------|---------------------|---------------------|----------|
//! | `get_or_default`           | value               | default             | n/a      |
//! | `get_or_else`              | value               | runs handler        | no       |
//! | `get_or_throw`             | `Ok(value)`         | `Err(cause)`        | n/a      |
//! | `fold`                     | runs `on_success`   | runs `on_failure`   | no       |
//! | `map`                      | runs, wraps         | passthrough         | no       |
//! | `map_catching`             | runs, wraps         | passthrough         | yes      |
//! | `recover`                  | passthrough         | runs, wraps         | no       |
//! | `recover_catching`         | passthrough         | runs, wraps         | yes      |
//! | `or`                       | passthrough         | returns other       | n/a      |
//!
//! A recoverable raise is a transform returning `Err(cause)`; an
//! unrecoverable raise is a panic. Only the `*_catching_unwind` combinators
//! (feature `unwind`) intercept panics.

pub mod core;
pub mod error;

#[cfg(feature = "unwind")]
pub mod unwind;

pub use crate::core::{BoxOutcome, IntoOutcome, Outcome, failure, success};
pub use error::{BoxError, Panicked};

#[cfg(feature = "unwind")]
pub use unwind::catching;

/// Everyday imports: the type, its constructors and the interop trait.
pub mod prelude {
    pub use crate::{BoxError, BoxOutcome, IntoOutcome, Outcome, Panicked, failure, success};

    #[cfg(feature = "unwind")]
    pub use crate::catching;
}
