//! Cause types shipped with the crate
//!
//! [`Outcome`](crate::Outcome) places no bound on its cause. The types here
//! are conveniences: a boxed opaque cause and the cause produced when a
//! panic is captured.

use std::any::Any;

/// Fully opaque cause: any thread-safe error, boxed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A panic captured while running a user-supplied function.
///
/// Only the panic message survives; the original payload is dropped once
/// the message has been extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("transform panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build from the payload returned by `std::panic::catch_unwind`.
    ///
    /// `panic!("literal")` yields a `&'static str` payload and formatted
    /// panics yield a `String`; anything else is reported generically.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "non-string panic payload".to_owned(),
            },
        };
        Self { message }
    }

    /// The panic message
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_payload() {
        let panicked = Panicked::from_payload(Box::new("boom"));
        assert_eq!(panicked.message(), "boom");
    }

    #[test]
    fn test_from_string_payload() {
        let panicked = Panicked::from_payload(Box::new(format!("boom {}", 42)));
        assert_eq!(panicked.message(), "boom 42");
    }

    #[test]
    fn test_from_opaque_payload() {
        let panicked = Panicked::from_payload(Box::new(17_u8));
        assert_eq!(panicked.message(), "non-string panic payload");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Panicked::new("index out of bounds").to_string(),
            "transform panicked: index out of bounds"
        );
    }

    #[test]
    fn test_boxes_into_opaque_cause() {
        let cause: BoxError = Panicked::new("boom").into();
        assert_eq!(cause.to_string(), "transform panicked: boom");
        assert!(cause.downcast_ref::<Panicked>().is_some());
    }
}
