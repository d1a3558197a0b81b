//! # Primitive Checks
//!
//! Canonical singleton checks. Each accessor returns a clone of the same
//! shared check, so normalizing a primitive marker twice yields the same
//! check both times.

use std::sync::OnceLock;

use typeguard_core::{Check, CheckKind, Value};

fn singleton(cell: &'static OnceLock<Check>, make: fn() -> Check) -> Check {
    cell.get_or_init(make).clone()
}

/// Accepts strings.
pub fn string() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new("string", CheckKind::Primitive, |entry| {
            matches!(entry.value(), Value::String(_))
        })
    })
}

/// Accepts finite numbers. `NaN` and infinities are rejected.
pub fn number() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new(
            "number",
            CheckKind::Primitive,
            |entry| matches!(entry.value(), Value::Number(n) if n.is_finite()),
        )
    })
}

/// Accepts `true` and `false`.
pub fn boolean() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new("boolean", CheckKind::Primitive, |entry| {
            matches!(entry.value(), Value::Bool(_))
        })
    })
}

/// Accepts finite numbers with no fractional part.
pub fn int() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new(
            "int",
            CheckKind::Primitive,
            |entry| matches!(entry.value(), Value::Number(n) if n.is_finite() && n.fract() == 0.0),
        )
    })
}

/// Accepts every value.
pub fn any() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || Check::new("any", CheckKind::Primitive, |_| true))
}

/// Accepts every value. Default return check of a signature.
pub fn void() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new("void", CheckKind::Primitive, |_| true)
    })
}

/// Accepts truthy values.
pub fn truthy() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new("truthy", CheckKind::Primitive, |entry| {
            entry.value().is_truthy()
        })
    })
}

/// Accepts falsy values: `undefined`, `null`, `false`, `0`, `NaN` and `''`.
pub fn falsy() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    singleton(&CHECK, || {
        Check::new("falsy", CheckKind::Primitive, |entry| {
            !entry.value().is_truthy()
        })
    })
}
