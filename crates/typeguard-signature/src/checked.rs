//! # Checked Callables
//!
//! A [`CheckedFunction`] pairs an implementation with the signature it was
//! declared against and validates every call. Parameter failures prevent
//! the implementation from running. Return failures are raised after it
//! ran; its side effects are not undone.

use std::fmt;

use serde::Serialize;
use typeguard_core::{Function, ValidationEntry, ValidationError, Value};

use crate::builder::ReturnStage;

/// Read-only description of a checked callable.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    name: String,
    signature: ReturnStage,
}

impl Metadata {
    /// The implementation's own name. Empty for anonymous implementations.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The signature stage that produced the callable.
    pub fn signature(&self) -> &ReturnStage {
        &self.signature
    }
}

/// An implementation wrapped with parameter and return checks.
#[derive(Debug, Clone)]
pub struct CheckedFunction {
    implementation: Function,
    metadata: Metadata,
}

impl CheckedFunction {
    pub(crate) fn new(implementation: Function, signature: ReturnStage) -> Self {
        let metadata = Metadata {
            name: implementation.name().to_string(),
            signature,
        };
        Self {
            implementation,
            metadata,
        }
    }

    /// Name and signature.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Invoke with call-site arguments.
    ///
    /// Errors are the first failing parameter check, the return check, or
    /// whatever the implementation itself returned.
    pub fn call(&self, args: &[Value]) -> Result<Value, ValidationError> {
        let descriptor = self.metadata.signature.descriptor();
        tracing::trace!(
            function = %self.implementation.display_name(),
            args = args.len(),
            "checked call"
        );

        let undefined = Value::Undefined;
        for (index, check) in descriptor.params().iter().enumerate() {
            let arg = args.get(index).unwrap_or(&undefined);
            check
                .perform(&ValidationEntry::parameter(index, arg))
                .map_err(|err| self.rejected(err))?;
        }

        if let Some(variadic) = descriptor.variadic() {
            let fixed = descriptor.params().len();
            if args.len() > fixed {
                let rest = Value::Array(args[fixed..].to_vec());
                variadic
                    .perform(&ValidationEntry::parameter(fixed, &rest))
                    .map_err(|err| self.rejected(err))?;
            }
        }

        let result = self.implementation.call(args)?;

        descriptor
            .return_check()
            .perform(&ValidationEntry::return_value(&result))
            .map_err(|err| self.rejected(err))?;
        Ok(result)
    }

    /// Convert into a plain function value that performs the same checked
    /// call, so it can be passed wherever functions are expected.
    pub fn to_function(&self) -> Function {
        let checked = self.clone();
        Function::new(self.metadata.name.clone(), move |args| checked.call(args))
    }

    fn rejected(&self, err: ValidationError) -> ValidationError {
        tracing::debug!(
            function = %self.implementation.display_name(),
            error = %err,
            "checked call rejected"
        );
        err
    }
}

/// `name(p1, p2): ret`
impl fmt::Display for CheckedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.metadata.name, self.metadata.signature)
    }
}

impl From<CheckedFunction> for Value {
    fn from(checked: CheckedFunction) -> Self {
        Value::Function(checked.to_function())
    }
}
