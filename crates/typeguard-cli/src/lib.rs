//! # typeguard-cli — Command-Line Interface
//!
//! ## Subcommands
//!
//! - `demo`: declares a handful of checked callables, calls them with good
//!   and bad arguments, and prints the resulting diagnostics
//! - `validate`: checks a JSON or YAML document against the demo person
//!   record
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in their modules.
//! - Handlers return an exit code; load failures propagate as `anyhow` errors.

pub mod demo;
pub mod validate;

use typeguard_checks::{fields, int, optional, struct_of, Check, Primitive};

/// The record shape shared by the demo and `validate`:
/// `{ name: string, age: int, favoriteGame: Optional<string> }`.
pub fn person_shape() -> Check {
    struct_of(fields! {
        "name" => Primitive::String,
        "age" => int(),
        "favoriteGame" => optional(Primitive::String),
    })
}
