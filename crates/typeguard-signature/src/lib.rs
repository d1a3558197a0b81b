//! # typeguard-signature — Checked Callables
//!
//! Declares a function's parameter and return types once and wraps
//! implementations so every call is validated against them.
//!
//! ## Stages
//!
//! ```text
//! signature(specs) ──► ParameterStage ──returns(spec)──► ReturnStage ──implement(f)──► CheckedFunction
//! ```
//!
//! Each stage is an immutable value. A [`ReturnStage`] holds the frozen
//! [`SignatureDescriptor`] and can implement any number of functions; the
//! resulting checked callables share its checks.
//!
//! ## Call Protocol
//!
//! 1. Fixed parameters are checked in order. Missing arguments are
//!    `undefined`. The first failure aborts the call.
//! 2. When the signature ends in a variadic check and extra arguments were
//!    supplied, the extra arguments are checked together as one array
//!    positioned at the first variadic index.
//! 3. The implementation runs with the original arguments.
//! 4. The return value is checked. A failure is reported even though the
//!    implementation already ran.
//!
//! ```
//! use typeguard_checks::{specs, Primitive};
//! use typeguard_core::{Function, Value};
//! use typeguard_signature::signature;
//!
//! let greet = signature(specs![Primitive::String])
//!     .returns(Primitive::String)
//!     .implement(Function::new("greet", |args| {
//!         let name = args[0].as_str().unwrap_or_default();
//!         Ok(Value::from(format!("hello {name}")))
//!     }));
//!
//! assert_eq!(greet.to_string(), "greet(string): string");
//! assert_eq!(greet.call(&[Value::from("ada")]).unwrap().as_str(), Some("hello ada"));
//! assert_eq!(
//!     greet.call(&[Value::from(1)]).unwrap_err().to_string(),
//!     "Parameter 0 must be an instance of string, received number",
//! );
//! ```

pub mod builder;
pub mod checked;

pub use builder::{signature, ParameterStage, ReturnStage, SignatureDescriptor};
pub use checked::{CheckedFunction, Metadata};
