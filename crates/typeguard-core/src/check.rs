//! # Checks
//!
//! A [`Check`] is the leaf of the validator engine: a diagnostic name, a
//! [`CheckKind`] discriminator and a predicate over a [`ValidationEntry`].
//! Combinators compose checks into new checks; the signature builder runs
//! them against call arguments and return values.
//!
//! ## Invariants
//!
//! - Name, kind and predicate are fixed at construction. `Check` exposes no
//!   setters and no public fields; clones share the same check.
//! - A passing [`ValidationResult`] never carries a received description.
//!   Only failures describe what was received.
//! - `perform` has no side effects beyond failing.
//!
//! ```compile_fail
//! use typeguard_core::Check;
//!
//! let check = Check::custom("foo", |_| true);
//! check.name = String::from("bar");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ValidationError;
use crate::value::Value;

/// Whether a validated value is a call parameter or a return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A positional call argument.
    Parameter,
    /// The value a call produced.
    ReturnValue,
}

/// Per-call context handed to a check. Created fresh for every evaluation
/// and never retained.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEntry<'a> {
    value: &'a Value,
    kind: ValueKind,
    index: usize,
}

impl<'a> ValidationEntry<'a> {
    /// Build an entry from its parts.
    pub fn new(value: &'a Value, kind: ValueKind, index: usize) -> Self {
        Self { value, kind, index }
    }

    /// Entry for the positional argument at `index`.
    pub fn parameter(index: usize, value: &'a Value) -> Self {
        Self::new(value, ValueKind::Parameter, index)
    }

    /// Entry for a return value.
    pub fn return_value(value: &'a Value) -> Self {
        Self::new(value, ValueKind::ReturnValue, 0)
    }

    /// The value under validation.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Parameter or return value.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Ordinal position. Only meaningful for parameters.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Same kind and index, different value. Used by combinators to check
    /// nested elements in the context of their parent.
    pub fn with_value<'b>(&self, value: &'b Value) -> ValidationEntry<'b> {
        ValidationEntry {
            value,
            kind: self.kind,
            index: self.index,
        }
    }
}

/// Verdict of a single check evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    is_valid: bool,
    received: Option<String>,
}

impl ValidationResult {
    /// A passing verdict.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            received: None,
        }
    }

    /// A failing verdict with no description of the received value.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            received: None,
        }
    }

    /// A failing verdict describing what was received.
    pub fn invalid_with(received: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            received: Some(received.into()),
        }
    }

    /// A verdict from a computed validity. `received` is kept only on failure.
    pub fn from_parts(is_valid: bool, received: Option<String>) -> Self {
        if is_valid {
            Self::valid()
        } else {
            Self {
                is_valid,
                received,
            }
        }
    }

    /// Whether the value passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Description of the received value. Present only on failure.
    pub fn received(&self) -> Option<&str> {
        self.received.as_deref()
    }
}

impl From<bool> for ValidationResult {
    fn from(is_valid: bool) -> Self {
        Self::from_parts(is_valid, None)
    }
}

/// Which builder produced a check. Consumers dispatch on this instead of
/// inspecting names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Builtin primitive or named singleton (`string`, `int`, `any`, ...).
    Primitive,
    /// Strict equality with a literal.
    Equality,
    /// Class membership.
    InstanceOf,
    /// `Optional<T>`.
    Optional,
    /// `OneOf<A, B, ...>`.
    OneOf,
    /// Structural record.
    Struct,
    /// Homogeneous array.
    ArrayOf,
    /// Positional tuple.
    Tuple,
    /// Trailing variadic parameter.
    Variadic,
    /// `Promise<T>`.
    Promise,
    /// Anything else, including caller-supplied predicates.
    Custom,
}

impl CheckKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Equality => "equality",
            Self::InstanceOf => "instance_of",
            Self::Optional => "optional",
            Self::OneOf => "one_of",
            Self::Struct => "struct",
            Self::ArrayOf => "array_of",
            Self::Tuple => "tuple",
            Self::Variadic => "variadic",
            Self::Promise => "promise",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Predicate = dyn Fn(&ValidationEntry<'_>) -> ValidationResult + Send + Sync;

struct CheckInner {
    name: String,
    kind: CheckKind,
    predicate: Box<Predicate>,
}

/// A named predicate over one value.
#[derive(Clone)]
pub struct Check(Arc<CheckInner>);

impl Check {
    /// Build a check. The predicate may return a `bool` or a full
    /// [`ValidationResult`].
    pub fn new<F, R>(name: impl Into<String>, kind: CheckKind, predicate: F) -> Self
    where
        F: Fn(&ValidationEntry<'_>) -> R + Send + Sync + 'static,
        R: Into<ValidationResult>,
    {
        Self(Arc::new(CheckInner {
            name: name.into(),
            kind,
            predicate: Box::new(move |entry: &ValidationEntry<'_>| -> ValidationResult {
                predicate(entry).into()
            }),
        }))
    }

    /// Build a [`CheckKind::Custom`] check.
    pub fn custom<F, R>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&ValidationEntry<'_>) -> R + Send + Sync + 'static,
        R: Into<ValidationResult>,
    {
        Self::new(name, CheckKind::Custom, predicate)
    }

    /// Diagnostic identity, also used to compose parent names.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The builder that produced this check.
    pub fn kind(&self) -> CheckKind {
        self.0.kind
    }

    /// Evaluate the predicate.
    pub fn is_valid(&self, entry: &ValidationEntry<'_>) -> ValidationResult {
        let result = (self.0.predicate)(entry);
        if result.is_valid() {
            ValidationResult::valid()
        } else {
            result
        }
    }

    /// Evaluate and fail with a [`ValidationError`] when invalid.
    ///
    /// The received description falls back to the value's runtime type tag
    /// when the predicate supplied none.
    pub fn perform(&self, entry: &ValidationEntry<'_>) -> Result<(), ValidationError> {
        let result = self.is_valid(entry);
        if result.is_valid() {
            return Ok(());
        }
        let received = match result.received {
            Some(received) => received,
            None => entry.value().type_tag().into_owned(),
        };
        let err = ValidationError::new(entry.kind(), entry.index(), self.name(), received);
        tracing::debug!(check = %self.name(), kind = %self.kind(), error = %err, "check failed");
        Err(err)
    }

    /// Convenience verdict for a bare value, evaluated as a return value.
    pub fn accepts(&self, value: &Value) -> bool {
        self.is_valid(&ValidationEntry::return_value(value)).is_valid()
    }

    /// True when both handles are the same check.
    pub fn ptr_eq(&self, other: &Check) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.0.name)
            .field("kind", &self.0.kind)
            .finish()
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_bool_predicate_becomes_result() {
        let yes = Check::custom("boolean", |_| true);
        let no = Check::custom("boolean", |_| false);
        let value = Value::Undefined;
        let entry = ValidationEntry::return_value(&value);
        assert!(yes.is_valid(&entry).is_valid());
        assert!(!no.is_valid(&entry).is_valid());
        assert!(no.is_valid(&entry).received().is_none());
    }

    #[test]
    fn test_full_result_passes_through() {
        let check = Check::custom("thing", |_| ValidationResult::invalid_with("other thing"));
        let value = Value::from(1);
        let result = check.is_valid(&ValidationEntry::return_value(&value));
        assert_eq!(result.received(), Some("other thing"));
    }

    #[test]
    fn test_valid_result_drops_received() {
        let check = Check::custom("thing", |_| ValidationResult::from_parts(true, Some("x".into())));
        let value = Value::from(1);
        let result = check.is_valid(&ValidationEntry::return_value(&value));
        assert!(result.is_valid());
        assert!(result.received().is_none());
    }

    #[test]
    fn test_perform_succeeds_and_calls_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let check = Check::custom("boolean", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let value = Value::from(true);
        check.perform(&ValidationEntry::parameter(0, &value)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_perform_parameter_message() {
        let check = Check::custom("boolean", |_| false);
        let value = Value::from(0);
        let err = check.perform(&ValidationEntry::parameter(0, &value)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 0 must be an instance of boolean, received number"
        );
    }

    #[test]
    fn test_perform_return_message() {
        let check = Check::custom("boolean", |_| false);
        let value = Value::from(0);
        let err = check.perform(&ValidationEntry::return_value(&value)).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Return value must be an instance of boolean"));
    }

    #[test]
    fn test_perform_prefers_predicate_description() {
        let check = Check::custom("thing", |_| ValidationResult::invalid_with("[string@2]"));
        let value = Value::Array(vec![]);
        let err = check.perform(&ValidationEntry::parameter(4, &value)).unwrap_err();
        assert_eq!(err.received(), "[string@2]");
        assert_eq!(err.index(), 4);
    }

    #[test]
    fn test_entry_with_value_keeps_context() {
        let outer = Value::Array(vec![Value::from("x")]);
        let inner = Value::from("x");
        let entry = ValidationEntry::parameter(3, &outer);
        let nested = entry.with_value(&inner);
        assert_eq!(nested.kind(), ValueKind::Parameter);
        assert_eq!(nested.index(), 3);
        assert_eq!(nested.value().as_str(), Some("x"));
    }

    #[test]
    fn test_clone_is_same_check() {
        let check = Check::new("int", CheckKind::Primitive, |_| true);
        let copy = check.clone();
        assert!(check.ptr_eq(&copy));
        assert_eq!(copy.kind(), CheckKind::Primitive);
        assert_eq!(copy.to_string(), "int");
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(CheckKind::Variadic.as_str(), "variadic");
        assert_eq!(CheckKind::InstanceOf.to_string(), "instance_of");
    }
}
