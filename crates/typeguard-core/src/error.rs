//! # Error Types
//!
//! A single error kind covers every check failure. The rendered message is
//! fixed-format and is the consumer-facing contract:
//!
//! - `Parameter <index> must be an instance of <expected>, received <received>`
//! - `Return value must be an instance of <expected>, received <received>`
//!
//! There is no error-code taxonomy; callers match on the message text or on
//! the structured fields.

use serde::Serialize;
use thiserror::Error;

use crate::check::ValueKind;

/// A value failed the check it was validated against.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{} must be an instance of {expected}, received {received}", subject(.kind, .index))]
pub struct ValidationError {
    kind: ValueKind,
    index: usize,
    expected: String,
    received: String,
}

impl ValidationError {
    /// Build an error from its four components.
    pub fn new(
        kind: ValueKind,
        index: usize,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            index,
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Whether a parameter or the return value failed.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Ordinal position of the failing parameter. Meaningless for return values.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the check that rejected the value.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Description of the value that was actually received.
    pub fn received(&self) -> &str {
        &self.received
    }
}

fn subject(kind: &ValueKind, index: &usize) -> String {
    match kind {
        ValueKind::Parameter => format!("Parameter {index}"),
        ValueKind::ReturnValue => "Return value".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_message() {
        let err = ValidationError::new(ValueKind::Parameter, 0, "string", "number");
        assert_eq!(
            err.to_string(),
            "Parameter 0 must be an instance of string, received number"
        );
    }

    #[test]
    fn test_return_value_message_ignores_index() {
        let err = ValidationError::new(ValueKind::ReturnValue, 7, "string", "number");
        assert_eq!(
            err.to_string(),
            "Return value must be an instance of string, received number"
        );
    }

    #[test]
    fn test_accessors() {
        let err = ValidationError::new(ValueKind::Parameter, 3, "int", "string");
        assert_eq!(err.kind(), ValueKind::Parameter);
        assert_eq!(err.index(), 3);
        assert_eq!(err.expected(), "int");
        assert_eq!(err.received(), "string");
    }

    #[test]
    fn test_serializes_structured_fields() {
        let err = ValidationError::new(ValueKind::ReturnValue, 0, "void", "number");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "return_value");
        assert_eq!(json["expected"], "void");
        assert_eq!(json["received"], "number");
    }
}
