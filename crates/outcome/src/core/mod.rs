//! Core outcome type and its combinator algebra
//!
//! - [`outcome`](crate::core::outcome) - [`Outcome`] itself, constructors, queries and terminal operations
//! - [`combinators`](crate::core::combinators) - success-path, failure-path and fallback combinators
//! - [`conversion`](crate::core::conversion) - interop with `std::result::Result`

pub mod combinators;
pub mod conversion;
pub mod outcome;

pub use conversion::IntoOutcome;
pub use outcome::{BoxOutcome, Outcome, failure, success};
