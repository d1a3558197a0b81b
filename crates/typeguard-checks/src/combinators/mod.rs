//! # Combinators
//!
//! Functions that build a composite [`Check`] from nested specs. Each
//! combinator normalizes its specs first, composes its name from the nested
//! check names, and evaluates nested checks in the context (kind and index)
//! of the entry it was handed.
//!
//! | Combinator   | Name                  | Failure detail                  |
//! |--------------|-----------------------|---------------------------------|
//! | `optional`   | `Optional<T>`         | inner detail                    |
//! | `one_of`     | `OneOf<A, B>`         | none                            |
//! | `struct_of`  | `{ a: A, b: B }`      | every failing field             |
//! | `array_of`   | `T[]`                 | first failing element           |
//! | `tuple`      | `(A, B)`              | one entry per declared position |
//! | `variadic`   | `...T`                | every failing element           |
//! | `promise_of` | `Promise<T>`          | asynchronous, see `rejections`  |
//!
//! [`Check`]: typeguard_core::Check

mod collection;
mod one_of;
mod optional;
mod promise;
mod structure;

pub use collection::{array_of, tuple, variadic};
pub use one_of::one_of;
pub use optional::optional;
pub use promise::promise_of;
pub use structure::struct_of;

use typeguard_core::{ValidationResult, Value};

/// What a nested failure received: the nested check's own description, or
/// the value's type tag.
fn describe(result: &ValidationResult, value: &Value) -> String {
    match result.received() {
        Some(received) => received.to_string(),
        None => value.type_tag().into_owned(),
    }
}
