use typeguard_core::{Check, CheckKind};

use crate::spec::{normalize, Spec};

/// Accepts a value when any of `specs` accepts it. Branches are tried in
/// order and the first match wins. An empty list accepts nothing.
pub fn one_of<I, S>(specs: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<Spec>,
{
    let checks: Vec<Check> = specs.into_iter().map(normalize).collect();
    let names: Vec<&str> = checks.iter().map(Check::name).collect();
    let name = format!("OneOf<{}>", names.join(", "));
    Check::new(name, CheckKind::OneOf, move |entry| {
        checks.iter().any(|check| check.is_valid(entry).is_valid())
    })
}
