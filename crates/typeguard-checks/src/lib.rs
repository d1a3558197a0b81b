//! # typeguard-checks — Check Builders & Combinators
//!
//! Everything that produces a [`Check`] lives here.
//!
//! ## Builders
//!
//! - **Primitives** (`primitive`): canonical singletons `string`, `number`,
//!   `boolean`, plus `int`, `any`, `void`, `truthy` and `falsy`.
//!
//! - **Equality & instance-of** (`equality`): strict equality with a
//!   [`Literal`] and membership in a [`Class`].
//!
//! - **Spec normalization** (`spec`): [`normalize`] turns any [`Spec`]
//!   (an existing check, a primitive marker, a literal, or a class) into a
//!   check. Every combinator normalizes its nested specs through it, so
//!   literals, classes and checks are interchangeable wherever a spec is
//!   expected.
//!
//! - **Combinators** (`combinators`): `optional`, `one_of`, `struct_of`,
//!   `array_of`, `tuple`, `variadic` and `promise_of`.
//!
//! - **Format checks** (`format`): single-regex string checks.
//!
//! ## Asynchronous Failures
//!
//! `promise_of` confirms synchronously that a value is a promise and checks
//! the resolved value later, on a spawned task. Failures of that later
//! check are published on the [`rejections`] channel and are never returned
//! to the caller of `perform`.
//!
//! ## Crate Policy
//!
//! - Depends only on `typeguard-core` internally.
//! - Checks are immutable; builders never capture mutable state.

pub mod combinators;
pub mod equality;
pub mod format;
pub mod primitive;
pub mod rejections;
pub mod spec;

pub use combinators::{array_of, one_of, optional, promise_of, struct_of, tuple, variadic};
pub use equality::{equals, instance_of};
pub use format::{boolean_string, email, int_string, matches, matches_regex, numeric_string, url};
pub use primitive::{any, boolean, falsy, int, number, string, truthy, void};
pub use spec::{normalize, Primitive, Spec};

pub use typeguard_core::{
    Check, CheckKind, Class, Literal, ValidationEntry, ValidationResult, Value,
};

/// Build a `Vec<Spec>` from heterogeneous spec expressions.
///
/// ```
/// use typeguard_checks::{one_of, specs, Literal, Primitive};
///
/// let status = one_of(specs!["active", "suspended", Literal::Null]);
/// let mixed = specs![Primitive::String, 5, true];
/// assert_eq!(mixed.len(), 3);
/// assert_eq!(status.name(), "OneOf<'active', 'suspended', null>");
/// ```
#[macro_export]
macro_rules! specs {
    () => {
        ::std::vec::Vec::<$crate::Spec>::new()
    };
    ($($spec:expr),+ $(,)?) => {
        ::std::vec![$($crate::Spec::from($spec)),+]
    };
}

/// Build the field list of a [`struct_of`] check from `name => spec` pairs.
///
/// ```
/// use typeguard_checks::{fields, int, optional, struct_of, Primitive};
///
/// let person = struct_of(fields! {
///     "name" => Primitive::String,
///     "age" => int(),
///     "address" => optional(Primitive::String),
/// });
/// assert_eq!(person.name(), "{ name: string, age: int, address: Optional<string> }");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::Spec)>::new()
    };
    ($($name:expr => $spec:expr),+ $(,)?) => {
        ::std::vec![$((::std::string::String::from($name), $crate::Spec::from($spec))),+]
    };
}
