//! Equality and class-membership checks.

use typeguard_core::{Check, CheckKind, Class, Literal};

/// Strict equality with `literal`, named by its rendering (`'a'`, `500`,
/// `null`).
pub fn equals(literal: Literal) -> Check {
    let name = literal.to_string();
    Check::new(name, CheckKind::Equality, move |entry| {
        entry.value().strict_eq(&literal)
    })
}

/// Membership in `class` or one of its subclasses. Named by the class, or
/// `function` when the class is anonymous.
pub fn instance_of(class: &Class) -> Check {
    let class = class.clone();
    Check::new(
        class.display_name().to_string(),
        CheckKind::InstanceOf,
        move |entry| class.contains(entry.value()),
    )
}
