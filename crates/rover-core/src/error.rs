//! Error taxonomy for the navigation engine.
//!
//! Four distinct failure kinds, kept apart so callers (and tests) can
//! tell a caller-contract breach from a domain failure:
//!
//! - [`NavigateError::MalformedRequest`] — the request itself was
//!   absent; checked before validation runs.
//! - [`NavigateError::Validation`] — one or more named rules broke;
//!   all violations for a call are collected and surfaced together.
//! - [`NavigateError::OutOfBounds`] — a rover's trajectory left the
//!   grid at some step; fatal to the whole batch.
//! - [`NavigateError::Internal`] — defensive signal for states the
//!   validator should have made unreachable.

use std::error::Error;
use std::fmt;

/// One broken validation rule: the offending field plus the
/// contract-fixed message for that rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `"eastBound"` or
    /// `"roverInstructions[2].rover.x"`.
    pub field: String,
    /// The rule's message, surfaced verbatim to the caller.
    pub message: String,
}

impl Violation {
    /// Create a violation for `field` with `message`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Violation {
        Violation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors raised by the navigation handler and interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigateError {
    /// The request itself was absent. A caller-contract breach,
    /// distinct from any validation violation.
    MalformedRequest,
    /// One or more validation rules broke. Display joins the messages
    /// with `", "` in rule-declaration order.
    Validation(Vec<Violation>),
    /// A rover's position left the grid bounds at some step.
    OutOfBounds,
    /// A state the validator should have prevented was reached.
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRequest => write!(f, "wrong request"),
            Self::Validation(violations) => {
                let mut first = true;
                for v in violations {
                    if !first {
                        f.write_str(", ")?;
                    }
                    f.write_str(&v.message)?;
                    first = false;
                }
                Ok(())
            }
            Self::OutOfBounds => write!(f, "Mars Rover is out of bounds"),
            Self::Internal { reason } => write!(f, "navigation error: {reason}"),
        }
    }
}

impl Error for NavigateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_is_fixed() {
        assert_eq!(
            NavigateError::OutOfBounds.to_string(),
            "Mars Rover is out of bounds"
        );
    }

    #[test]
    fn validation_joins_messages_with_comma_space() {
        let err = NavigateError::Validation(vec![
            Violation::new("northBound", "North bound must be greater than 0"),
            Violation::new("roverInstructions[0].instructions", "Invalid instructions found"),
        ]);
        assert_eq!(
            err.to_string(),
            "North bound must be greater than 0, Invalid instructions found"
        );
    }

    #[test]
    fn single_violation_has_no_trailing_separator() {
        let err = NavigateError::Validation(vec![Violation::new(
            "eastBound",
            "East bound must be greater than 0",
        )]);
        assert_eq!(err.to_string(), "East bound must be greater than 0");
    }

    #[test]
    fn malformed_and_internal_are_distinct() {
        let internal = NavigateError::Internal {
            reason: "wrong request".into(),
        };
        assert_ne!(internal, NavigateError::MalformedRequest);
        assert_eq!(internal.to_string(), "navigation error: wrong request");
        assert_eq!(NavigateError::MalformedRequest.to_string(), "wrong request");
    }
}
