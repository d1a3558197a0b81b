use typeguard_core::{Check, CheckKind, ValidationResult};

use crate::spec::{normalize, Spec};

/// Accepts `null`, `undefined`, or anything `spec` accepts.
pub fn optional(spec: impl Into<Spec>) -> Check {
    let inner = normalize(spec);
    Check::new(
        format!("Optional<{}>", inner.name()),
        CheckKind::Optional,
        move |entry| {
            if entry.value().is_nullish() {
                ValidationResult::valid()
            } else {
                inner.is_valid(entry)
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{int, string};
    use crate::spec::Primitive;
    use typeguard_core::{Class, Literal, ValidationEntry, Value};

    #[test]
    fn test_accepts_nullish_for_any_inner() {
        for inner in [
            Spec::from(Primitive::String),
            Spec::from(int()),
            Spec::from(Literal::Bool(true)),
            Spec::from(Class::new("Thing")),
        ] {
            let check = optional(inner);
            assert!(check.accepts(&Value::Null));
            assert!(check.accepts(&Value::Undefined));
        }
    }

    #[test]
    fn test_delegates_to_inner() {
        let check = optional(string());
        assert_eq!(check.name(), "Optional<string>");
        assert_eq!(check.kind(), CheckKind::Optional);
        assert!(check.accepts(&Value::from("x")));
        assert!(!check.accepts(&Value::from(1)));
    }

    #[test]
    fn test_failure_message() {
        let check = optional(string());
        let value = Value::from(1);
        let err = check
            .perform(&ValidationEntry::parameter(2, &value))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 2 must be an instance of Optional<string>, received number"
        );
    }
}
