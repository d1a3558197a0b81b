//! # Spec Normalization
//!
//! A [`Spec`] is anything accepted where a type description is expected.
//! [`normalize`] turns it into a [`Check`] with a fixed dispatch order:
//!
//! 1. An existing check is returned unchanged (same shared check).
//! 2. A [`Primitive`] marker maps to its canonical singleton.
//! 3. A [`Literal`] becomes a strict-equality check.
//! 4. A [`Class`] becomes an instance-of check.
//!
//! Every combinator and the signature builder normalize nested specs
//! through this one function.

use typeguard_core::{Check, Class, Literal};

use crate::equality::{equals, instance_of};
use crate::primitive;

/// Builtin primitive markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `string`.
    String,
    /// `number` (finite).
    Number,
    /// `boolean`.
    Boolean,
}

impl Primitive {
    /// The canonical singleton check for this marker.
    pub fn check(self) -> Check {
        match self {
            Self::String => primitive::string(),
            Self::Number => primitive::number(),
            Self::Boolean => primitive::boolean(),
        }
    }
}

/// A type description.
#[derive(Debug, Clone)]
pub enum Spec {
    /// An already-built check.
    Check(Check),
    /// A builtin primitive marker.
    Primitive(Primitive),
    /// A non-callable literal.
    Literal(Literal),
    /// A class or builtin constructor.
    Class(Class),
}

/// Normalize a spec into a check.
pub fn normalize(spec: impl Into<Spec>) -> Check {
    match spec.into() {
        Spec::Check(check) => check,
        Spec::Primitive(marker) => marker.check(),
        Spec::Literal(literal) => equals(literal),
        Spec::Class(class) => instance_of(&class),
    }
}

impl From<Check> for Spec {
    fn from(check: Check) -> Self {
        Self::Check(check)
    }
}

impl From<&Check> for Spec {
    fn from(check: &Check) -> Self {
        Self::Check(check.clone())
    }
}

impl From<Primitive> for Spec {
    fn from(marker: Primitive) -> Self {
        Self::Primitive(marker)
    }
}

impl From<Literal> for Spec {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Class> for Spec {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<&Class> for Spec {
    fn from(class: &Class) -> Self {
        Self::Class(class.clone())
    }
}

impl From<&str> for Spec {
    fn from(s: &str) -> Self {
        Self::Literal(Literal::String(s.to_string()))
    }
}

impl From<String> for Spec {
    fn from(s: String) -> Self {
        Self::Literal(Literal::String(s))
    }
}

impl From<f64> for Spec {
    fn from(n: f64) -> Self {
        Self::Literal(Literal::Number(n))
    }
}

impl From<i32> for Spec {
    fn from(n: i32) -> Self {
        Self::Literal(Literal::Number(f64::from(n)))
    }
}

impl From<i64> for Spec {
    fn from(n: i64) -> Self {
        Self::Literal(Literal::Number(n as f64))
    }
}

impl From<bool> for Spec {
    fn from(b: bool) -> Self {
        Self::Literal(Literal::Bool(b))
    }
}
