//! # Signature Builder
//!
//! The parameter and return stages of a signature declaration.
//!
//! [`signature`] normalizes every parameter spec. A trailing check built by
//! `variadic` is recognized through its [`CheckKind::Variadic`] discriminator
//! and set aside as the variadic tail; every other check is a fixed
//! parameter. [`ParameterStage::returns`] then freezes the parameters and
//! the normalized return check into a shared [`SignatureDescriptor`].

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use typeguard_checks::{normalize, primitive, Spec};
use typeguard_core::{Check, CheckKind, Function};

use crate::checked::CheckedFunction;

/// Start a signature from its parameter specs.
pub fn signature<I, S>(specs: I) -> ParameterStage
where
    I: IntoIterator<Item = S>,
    S: Into<Spec>,
{
    let mut params: Vec<Check> = specs.into_iter().map(normalize).collect();
    let variadic = match params.last() {
        Some(last) if last.kind() == CheckKind::Variadic => params.pop(),
        _ => None,
    };
    ParameterStage { params, variadic }
}

/// First stage: parameters are known, the return type is not.
#[derive(Debug, Clone)]
pub struct ParameterStage {
    params: Vec<Check>,
    variadic: Option<Check>,
}

impl ParameterStage {
    /// Fixed-position parameter checks, in declaration order.
    pub fn params(&self) -> &[Check] {
        &self.params
    }

    /// The variadic tail, if the last spec was a variadic check.
    pub fn variadic(&self) -> Option<&Check> {
        self.variadic.as_ref()
    }

    /// Declare the return type.
    pub fn returns(self, spec: impl Into<Spec>) -> ReturnStage {
        self.finish(normalize(spec))
    }

    /// Declare no return type. The return value is checked against `void`,
    /// which accepts everything.
    pub fn returns_void(self) -> ReturnStage {
        self.finish(primitive::void())
    }

    fn finish(self, return_check: Check) -> ReturnStage {
        let descriptor = SignatureDescriptor {
            params: self.params,
            variadic: self.variadic,
            return_check,
        };
        tracing::debug!(signature = %descriptor, "signature declared");
        ReturnStage(Arc::new(descriptor))
    }
}

/// The frozen checks of a signature.
#[derive(Debug)]
pub struct SignatureDescriptor {
    params: Vec<Check>,
    variadic: Option<Check>,
    return_check: Check,
}

impl SignatureDescriptor {
    /// Fixed-position parameter checks.
    pub fn params(&self) -> &[Check] {
        &self.params
    }

    /// Variadic tail check.
    pub fn variadic(&self) -> Option<&Check> {
        self.variadic.as_ref()
    }

    /// Return value check.
    pub fn return_check(&self) -> &Check {
        &self.return_check
    }
}

/// `(p1, p2, ...rest): ret`
impl fmt::Display for SignatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .params
            .iter()
            .chain(self.variadic.iter())
            .map(Check::name)
            .collect();
        write!(f, "({}): {}", names.join(", "), self.return_check.name())
    }
}

impl Serialize for SignatureDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params: Vec<&str> = self.params.iter().map(Check::name).collect();
        let mut state = serializer.serialize_struct("SignatureDescriptor", 3)?;
        state.serialize_field("param_checks", &params)?;
        state.serialize_field("variadic", &self.variadic.as_ref().map(Check::name))?;
        state.serialize_field("return_check", self.return_check.name())?;
        state.end()
    }
}

/// Second stage: the signature is complete and can wrap implementations.
#[derive(Debug, Clone)]
pub struct ReturnStage(Arc<SignatureDescriptor>);

impl ReturnStage {
    /// The frozen descriptor.
    pub fn descriptor(&self) -> &SignatureDescriptor {
        &self.0
    }

    /// Wrap `implementation` in a checked callable. May be called any number
    /// of times; every result shares this stage's checks.
    pub fn implement(&self, implementation: Function) -> CheckedFunction {
        CheckedFunction::new(implementation, self.clone())
    }

    /// True when both handles refer to the same descriptor.
    pub fn ptr_eq(&self, other: &ReturnStage) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for ReturnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor(), f)
    }
}

impl Serialize for ReturnStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeguard_checks::{number, specs, string, variadic, Primitive};

    #[test]
    fn test_empty_signature_is_void() {
        let stage = signature(specs![]).returns_void();
        assert_eq!(stage.to_string(), "(): void");
        assert!(stage.descriptor().return_check().ptr_eq(&primitive::void()));
    }

    #[test]
    fn test_params_are_normalized() {
        let stage = signature(specs![Primitive::String, 5, "x"]).returns(Primitive::Boolean);
        assert_eq!(stage.to_string(), "(string, 5, 'x'): boolean");
        assert!(stage.descriptor().params()[0].ptr_eq(&string()));
    }

    #[test]
    fn test_trailing_variadic_is_set_aside() {
        let params = signature(specs![string(), variadic(number())]);
        assert_eq!(params.params().len(), 1);
        assert_eq!(params.variadic().map(Check::name), Some("...number"));
        let stage = params.returns_void();
        assert_eq!(stage.to_string(), "(string, ...number): void");
    }

    #[test]
    fn test_variadic_detected_by_kind_not_name() {
        let lookalike = Check::custom("...number", |_| true);
        let params = signature(specs![lookalike]);
        assert!(params.variadic().is_none());
        assert_eq!(params.params().len(), 1);
    }

    #[test]
    fn test_non_trailing_variadic_stays_fixed() {
        let params = signature(specs![variadic(number()), string()]);
        assert!(params.variadic().is_none());
        assert_eq!(params.params()[0].kind(), CheckKind::Variadic);
    }

    #[test]
    fn test_descriptor_serializes_names() {
        let stage = signature(specs![string(), variadic(number())]).returns(number());
        let json = serde_json::to_value(&stage).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "param_checks": ["string"],
                "variadic": "...number",
                "return_check": "number"
            })
        );
    }

    #[test]
    fn test_clones_share_descriptor() {
        let stage = signature(specs![string()]).returns_void();
        assert!(stage.ptr_eq(&stage.clone()));
    }
}
