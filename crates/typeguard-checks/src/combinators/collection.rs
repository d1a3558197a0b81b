//! Array-shaped combinators: homogeneous arrays, positional tuples, and the
//! trailing variadic parameter.

use typeguard_core::{Check, CheckKind, ValidationResult, Value};

use super::describe;
use crate::spec::{normalize, Spec};

/// Accepts arrays whose every element passes `spec`.
///
/// A failure points at the first invalid element only, e.g.
/// `[..., number@1, ...]`.
pub fn array_of(spec: impl Into<Spec>) -> Check {
    let inner = normalize(spec);
    Check::new(
        format!("{}[]", inner.name()),
        CheckKind::ArrayOf,
        move |entry| {
            let Some(items) = entry.value().as_array() else {
                return ValidationResult::invalid();
            };
            for (i, item) in items.iter().enumerate() {
                let result = inner.is_valid(&entry.with_value(item));
                if !result.is_valid() {
                    let before = if i > 0 { "..., " } else { "" };
                    let after = if i + 1 < items.len() { ", ..." } else { "" };
                    return ValidationResult::invalid_with(format!(
                        "[{before}{}@{i}{after}]",
                        describe(&result, item)
                    ));
                }
            }
            ValidationResult::valid()
        },
    )
}

/// Accepts arrays whose element at each declared position passes the spec
/// at that position. Missing elements are checked as `undefined`; trailing
/// extra elements are ignored.
///
/// A failure renders every declared position: the check name where the
/// element passed, what was received where it failed.
pub fn tuple<I, S>(specs: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<Spec>,
{
    let checks: Vec<Check> = specs.into_iter().map(normalize).collect();
    let names: Vec<&str> = checks.iter().map(Check::name).collect();
    let name = format!("({})", names.join(", "));
    Check::new(name, CheckKind::Tuple, move |entry| {
        let Some(items) = entry.value().as_array() else {
            return ValidationResult::invalid();
        };
        let undefined = Value::Undefined;
        let mut is_valid = true;
        let rendered: Vec<String> = checks
            .iter()
            .enumerate()
            .map(|(i, check)| {
                let item = items.get(i).unwrap_or(&undefined);
                let result = check.is_valid(&entry.with_value(item));
                if result.is_valid() {
                    check.name().to_string()
                } else {
                    is_valid = false;
                    describe(&result, item)
                }
            })
            .collect();
        ValidationResult::from_parts(is_valid, Some(format!("({})", rendered.join(", "))))
    })
}

/// Trailing-parameter check for signatures.
///
/// The candidate is the slice of arguments beyond the fixed arity, as an
/// array. An absent candidate or an empty array passes. A failure lists
/// every invalid element with its index in the slice, e.g.
/// `[string@1, boolean@3]`.
pub fn variadic(spec: impl Into<Spec>) -> Check {
    let inner = normalize(spec);
    Check::new(
        format!("...{}", inner.name()),
        CheckKind::Variadic,
        move |entry| {
            let items = match entry.value() {
                Value::Undefined => return ValidationResult::valid(),
                Value::Array(items) => items,
                _ => return ValidationResult::invalid(),
            };
            let failures: Vec<String> = items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    let result = inner.is_valid(&entry.with_value(item));
                    (!result.is_valid()).then(|| format!("{}@{i}", describe(&result, item)))
                })
                .collect();
            if failures.is_empty() {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid_with(format!("[{}]", failures.join(", ")))
            }
        },
    )
}
