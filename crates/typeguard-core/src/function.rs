//! # Functions
//!
//! A [`Function`] is a named, shareable callable over [`Value`] arguments.
//! It is both the unit the signature builder wraps and the runtime value
//! passed around as `Value::Function`. Calling may fail with a
//! [`ValidationError`] so checked callables compose with `?`.

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::value::Value;

type Body = dyn Fn(&[Value]) -> Result<Value, ValidationError> + Send + Sync;

/// A named callable value.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    body: Arc<Body>,
}

impl Function {
    /// Wrap `body` under `name`.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ValidationError> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            body: Arc::new(body),
        }
    }

    /// Wrap `body` without a name.
    pub fn anonymous<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ValidationError> + Send + Sync + 'static,
    {
        Self::new(String::new(), body)
    }

    /// The declared name. Empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared name, or `anonymous`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "anonymous"
        } else {
            &self.name
        }
    }

    /// Invoke with positional arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, ValidationError> {
        (self.body)(args)
    }

    /// True when both handles share the same body.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.display_name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_passes_arguments() {
        let len = Function::new("len", |args| Ok(Value::from(args.len() as i64)));
        let out = len.call(&[Value::Null, Value::Null]).unwrap();
        assert_eq!(out.as_f64(), Some(2.0));
    }

    #[test]
    fn test_names() {
        let named = Function::new("greet", |_| Ok(Value::Undefined));
        let anon = Function::anonymous(|_| Ok(Value::Undefined));
        assert_eq!(named.name(), "greet");
        assert_eq!(anon.name(), "");
        assert_eq!(anon.display_name(), "anonymous");
    }

    #[test]
    fn test_clone_shares_body() {
        let f = Function::anonymous(|_| Ok(Value::Undefined));
        let g = Function::anonymous(|_| Ok(Value::Undefined));
        assert!(f.ptr_eq(&f.clone()));
        assert!(!f.ptr_eq(&g));
    }
}
