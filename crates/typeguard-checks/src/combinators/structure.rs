use typeguard_core::{Check, CheckKind, ValidationResult, Value};

use super::describe;
use crate::spec::{normalize, Spec};

/// Structural record check.
///
/// Accepts any non-nullish value whose declared fields each pass their
/// check. Fields are looked up through [`Value::get`], so a missing field is
/// checked as `undefined`. Undeclared fields are ignored.
///
/// Unlike the other combinators, a failure reports every failing field in
/// declaration order:
///
/// ```text
/// object with invalid fields { b: expected number, received undefined }
/// ```
pub fn struct_of<I, K, S>(fields: I) -> Check
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: Into<Spec>,
{
    let fields: Vec<(String, Check)> = fields
        .into_iter()
        .map(|(key, spec)| (key.into(), normalize(spec)))
        .collect();
    let name = if fields.is_empty() {
        "{}".to_string()
    } else {
        let rendered: Vec<String> = fields
            .iter()
            .map(|(key, check)| format!("{key}: {}", check.name()))
            .collect();
        format!("{{ {} }}", rendered.join(", "))
    };

    Check::new(name, CheckKind::Struct, move |entry| {
        let value = entry.value();
        if value.is_nullish() {
            return ValidationResult::invalid();
        }
        let undefined = Value::Undefined;
        let failures: Vec<String> = fields
            .iter()
            .filter_map(|(key, check)| {
                let field = value.get(key).unwrap_or(&undefined);
                let result = check.is_valid(&entry.with_value(field));
                (!result.is_valid()).then(|| {
                    format!(
                        "{key}: expected {}, received {}",
                        check.name(),
                        describe(&result, field)
                    )
                })
            })
            .collect();
        if failures.is_empty() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid_with(format!(
                "object with invalid fields {{ {} }}",
                failures.join("; ")
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::fields;
    use crate::primitive::{int, number, string};
    use crate::spec::Primitive;
    use typeguard_core::{Class, ValidationEntry};

    fn pair() -> Check {
        struct_of(fields! { "a" => Primitive::String, "b" => Primitive::Number })
    }

    #[test]
    fn test_name() {
        assert_eq!(pair().name(), "{ a: string, b: number }");
        assert_eq!(pair().kind(), CheckKind::Struct);
        assert_eq!(struct_of(fields! {}).name(), "{}");
    }

    #[test]
    fn test_accepts_matching_object() {
        let value = Value::object([("a", Value::from("x")), ("b", Value::from(1))]);
        assert!(pair().accepts(&value));
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let value = Value::object([
            ("a", Value::from("x")),
            ("b", Value::from(1)),
            ("extra", Value::from(true)),
        ]);
        assert!(pair().accepts(&value));
    }

    #[test]
    fn test_missing_field_is_named() {
        let value = Value::object([("a", Value::from("x"))]);
        let err = pair()
            .perform(&ValidationEntry::parameter(0, &value))
            .unwrap_err();
        assert_eq!(
            err.received(),
            "object with invalid fields { b: expected number, received undefined }"
        );
    }

    #[test]
    fn test_collects_every_failing_field() {
        let value = Value::object([("a", Value::from(1)), ("b", Value::from("y"))]);
        let err = pair()
            .perform(&ValidationEntry::return_value(&value))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Return value must be an instance of { a: string, b: number }, received \
             object with invalid fields { a: expected string, received number; \
             b: expected number, received string }"
        );
    }

    #[test]
    fn test_rejects_nullish() {
        let err = pair()
            .perform(&ValidationEntry::parameter(1, &Value::Null))
            .unwrap_err();
        assert_eq!(err.received(), "null");
        assert!(!pair().accepts(&Value::Undefined));
    }

    #[test]
    fn test_primitives_have_no_fields() {
        assert!(!pair().accepts(&Value::from("ab")));
        let loose = struct_of(fields! { "a" => optional(string()) });
        assert!(loose.accepts(&Value::from(5)));
    }

    #[test]
    fn test_instances_and_arrays_expose_fields() {
        let class = Class::new("Point");
        let point = class.instantiate([("x", 1), ("y", 2)]);
        let shape = struct_of(fields! { "x" => int(), "y" => number() });
        assert!(shape.accepts(&point));

        let indexed = struct_of(fields! { "0" => string(), "1" => int() });
        assert!(indexed.accepts(&Value::Array(vec![Value::from("a"), Value::from(1)])));
    }

    #[test]
    fn test_non_canonical_index_keys_are_missing() {
        let array = Value::Array(vec![Value::from("a")]);
        assert!(!struct_of(fields! { "+0" => string() }).accepts(&array));
        assert!(!struct_of(fields! { "00" => string() }).accepts(&array));
        assert!(struct_of(fields! { "0" => string() }).accepts(&array));
    }

    #[test]
    fn test_nested_struct_reports_nested_detail() {
        let outer = struct_of(fields! { "inner" => pair() });
        let value = Value::object([("inner", Value::object([("a", Value::from("x"))]))]);
        let err = outer
            .perform(&ValidationEntry::parameter(0, &value))
            .unwrap_err();
        assert_eq!(
            err.received(),
            "object with invalid fields { inner: expected { a: string, b: number }, received \
             object with invalid fields { b: expected number, received undefined } }"
        );
    }
}
