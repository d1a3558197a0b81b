//! # Classes
//!
//! Runtime type identity for instance-of checks. A [`Class`] is a shared
//! handle; two classes are the same class only when they are the same
//! handle, never because their names match. Subclasses record their parent
//! so membership walks the ancestor chain.
//!
//! The builtin classes `Object`, `Array`, `Function` and `Promise` are
//! recognised by tag rather than by handle and follow host membership
//! rules: every non-primitive value is an `Object`, arrays are `Array`s,
//! functions are `Function`s and promises are `Promise`s.

use std::fmt;
use std::sync::Arc;

use crate::value::{Object, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Object,
    Array,
    Function,
    Promise,
}

struct ClassInner {
    name: String,
    builtin: Option<Builtin>,
    parent: Option<Class>,
}

/// A runtime class usable as an instance-of spec.
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// Declare a new root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            builtin: None,
            parent: None,
        }))
    }

    /// Declare a new class deriving from `parent`.
    pub fn extending(name: impl Into<String>, parent: &Class) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            builtin: None,
            parent: Some(parent.clone()),
        }))
    }

    fn builtin(builtin: Builtin, name: &str) -> Self {
        Self(Arc::new(ClassInner {
            name: name.to_string(),
            builtin: Some(builtin),
            parent: None,
        }))
    }

    /// The builtin `Object` class.
    pub fn object() -> Self {
        Self::builtin(Builtin::Object, "Object")
    }

    /// The builtin `Array` class.
    pub fn array() -> Self {
        Self::builtin(Builtin::Array, "Array")
    }

    /// The builtin `Function` class.
    pub fn function() -> Self {
        Self::builtin(Builtin::Function, "Function")
    }

    /// The builtin `Promise` class.
    pub fn promise() -> Self {
        Self::builtin(Builtin::Promise, "Promise")
    }

    /// The declared name. May be empty for anonymous classes.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The declared name, or `function` for anonymous classes.
    pub fn display_name(&self) -> &str {
        if self.0.name.is_empty() {
            "function"
        } else {
            &self.0.name
        }
    }

    /// The direct parent, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// True when `self` is `other` or derives from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Create an instance of this class.
    pub fn instantiate<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let fields: Object = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Value::instance(self, fields)
    }

    /// Whether `value` is a member of this class.
    pub fn contains(&self, value: &Value) -> bool {
        match self.0.builtin {
            Some(Builtin::Object) => matches!(
                value,
                Value::Array(_)
                    | Value::Object(_)
                    | Value::Instance(_)
                    | Value::Function(_)
                    | Value::Promise(_)
            ),
            Some(Builtin::Array) => matches!(value, Value::Array(_)),
            Some(Builtin::Function) => matches!(value, Value::Function(_)),
            Some(Builtin::Promise) => matches!(value, Value::Promise(_)),
            None => match value {
                Value::Instance(instance) => instance.class().is_subclass_of(self),
                _ => false,
            },
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.builtin, other.0.builtin) {
            (Some(a), Some(b)) => a == b,
            (None, None) => Arc::ptr_eq(&self.0, &other.0),
            _ => false,
        }
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.0.name).finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_handle() {
        let a = Class::new("Date");
        let b = Class::new("Date");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_builtins_compare_by_tag() {
        assert_eq!(Class::array(), Class::array());
        assert_ne!(Class::array(), Class::object());
    }

    #[test]
    fn test_instance_membership_walks_parents() {
        let animal = Class::new("Animal");
        let dog = Class::extending("Dog", &animal);
        let rex = dog.instantiate([("name", "Rex")]);
        assert!(dog.contains(&rex));
        assert!(animal.contains(&rex));
        assert!(Class::object().contains(&rex));
        assert!(!Class::new("Animal").contains(&rex));

        let generic = animal.instantiate(Vec::<(String, Value)>::new());
        assert!(!dog.contains(&generic));
    }

    #[test]
    fn test_builtin_membership() {
        let array = Value::Array(vec![]);
        assert!(Class::array().contains(&array));
        assert!(Class::object().contains(&array));
        assert!(!Class::object().contains(&Value::from("x")));
        assert!(!Class::object().contains(&Value::Null));
        assert!(!Class::array().contains(&Value::Object(Object::new())));
    }

    #[test]
    fn test_anonymous_display_name() {
        assert_eq!(Class::new("").display_name(), "function");
        assert_eq!(Class::new("Date").to_string(), "Date");
    }
}
