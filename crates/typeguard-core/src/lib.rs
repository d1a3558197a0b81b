//! # typeguard-core — Foundational Types for Runtime Checks
//!
//! This crate is the leaf of the typeguard workspace. It defines the value
//! model that checks inspect and the check primitive every other crate
//! composes. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One dynamic value type.** [`Value`] covers everything a check can be
//!    asked about: primitives, arrays, objects, class instances, functions
//!    and promises. Deserialized input enters through
//!    `From<serde_json::Value>`.
//!
//! 2. **Checks are immutable.** A [`Check`] is a name, a [`CheckKind`]
//!    discriminator and a predicate, frozen at construction and shared by
//!    cloning. There are no setters.
//!
//! 3. **One error kind.** Every failed check surfaces as a
//!    [`ValidationError`] whose message text is the consumer-facing contract.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `typeguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod check;
pub mod class;
pub mod error;
pub mod function;
pub mod promise;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use check::{Check, CheckKind, ValidationEntry, ValidationResult, ValueKind};
pub use class::Class;
pub use error::ValidationError;
pub use function::Function;
pub use promise::Promise;
pub use value::{format_number, Instance, Literal, Object, Value};
