//! # Dynamic Values
//!
//! The value model checks are evaluated against. It mirrors the shapes a
//! dynamically-typed boundary hands over: two distinct "absent" values
//! (`Undefined` and `Null`), finite and non-finite numbers, owned arrays and
//! objects, and shared handles for class instances, functions and promises.
//!
//! ## Runtime Type Tags
//!
//! Every value reports a type tag used as the fallback diagnostic when a
//! check fails without describing what it received:
//!
//! | Value | Tag |
//! |-------|-----|
//! | `Undefined` | `undefined` |
//! | `Null` | `null` |
//! | `Bool` | `boolean` |
//! | `Number` | `number` |
//! | `String` | `string` |
//! | `Array` | `array` |
//! | `Object` | `object` |
//! | `Instance` | the class name |
//! | `Function` | `function` |
//! | `Promise` | `promise` |

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::class::Class;
use crate::function::Function;
use crate::promise::Promise;

/// Field map of a plain object.
pub type Object = BTreeMap<String, Value>;

/// A dynamically-typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A double-precision number, including `NaN` and infinities.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A plain object with named fields.
    Object(Object),
    /// An instance of a user-defined class.
    Instance(Arc<Instance>),
    /// A callable value.
    Function(Function),
    /// A value that will become available later.
    Promise(Promise),
}

/// An object created from a [`Class`].
#[derive(Debug)]
pub struct Instance {
    class: Class,
    fields: Object,
}

impl Instance {
    /// The class this instance was created from.
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// The instance's own fields.
    pub fn fields(&self) -> &Object {
        &self.fields
    }
}

impl Value {
    /// Build a plain object from `(field, value)` pairs.
    pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an instance of `class` carrying the given fields.
    pub fn instance(class: &Class, fields: Object) -> Self {
        Self::Instance(Arc::new(Instance {
            class: class.clone(),
            fields,
        }))
    }

    /// Runtime type tag of this value.
    pub fn type_tag(&self) -> Cow<'_, str> {
        match self {
            Self::Undefined => Cow::Borrowed("undefined"),
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(_) => Cow::Borrowed("boolean"),
            Self::Number(_) => Cow::Borrowed("number"),
            Self::String(_) => Cow::Borrowed("string"),
            Self::Array(_) => Cow::Borrowed("array"),
            Self::Object(_) => Cow::Borrowed("object"),
            Self::Instance(instance) => Cow::Borrowed(instance.class.display_name()),
            Self::Function(_) => Cow::Borrowed("function"),
            Self::Promise(_) => Cow::Borrowed("promise"),
        }
    }

    /// True for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Host truthiness: absent values, `false`, `0`, `NaN` and the empty
    /// string are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_)
            | Self::Object(_)
            | Self::Instance(_)
            | Self::Function(_)
            | Self::Promise(_) => true,
        }
    }

    /// Look up a named field.
    ///
    /// Objects and instances expose their fields, arrays expose numeric
    /// indices. Every other value has no fields.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(field),
            Self::Instance(instance) => instance.fields.get(field),
            Self::Array(items) => field
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == field)
                .and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The function handle, if this is a function.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// The promise handle, if this is a promise.
    pub fn as_promise(&self) -> Option<&Promise> {
        match self {
            Self::Promise(p) => Some(p),
            _ => None,
        }
    }

    /// Strict equality against a literal. `NaN` never equals itself.
    pub fn strict_eq(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Self::Undefined, Literal::Undefined) | (Self::Null, Literal::Null) => true,
            (Self::Bool(a), Literal::Bool(b)) => a == b,
            (Self::Number(a), Literal::Number(b)) => a == b,
            (Self::String(a), Literal::String(b)) => a == b,
            _ => false,
        }
    }

    /// Whether this value belongs to `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        class.contains(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => write_fields(f, map),
            Self::Instance(instance) => {
                write!(f, "{} ", instance.class.display_name())?;
                write_fields(f, &instance.fields)
            }
            Self::Function(func) => write!(f, "[Function {}]", func.display_name()),
            Self::Promise(_) => f.write_str("Promise { <pending> }"),
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, map: &Object) -> fmt::Result {
    if map.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, (k, v)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{k}: {v}")?;
    }
    f.write_str(" }")
}

/// Render a number the way the host prints it: integral values without a
/// fractional part, `NaN`, `Infinity` and `-Infinity` by name, and
/// magnitudes at or above `1e21` or below `1e-6` in exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let rendered = format!("{n:e}");
        match rendered.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => rendered,
        }
    } else {
        n.to_string()
    }
}

/// A non-callable literal usable as an equality spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Matches only `Undefined`.
    Undefined,
    /// Matches only `Null`.
    Null,
    /// Matches the same boolean.
    Bool(bool),
    /// Matches the same number. `NaN` matches nothing.
    Number(f64),
    /// Matches the same string.
    String(String),
}

impl Literal {
    /// The value this literal stands for.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Undefined => Value::Undefined,
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(*n),
            Self::String(s) => Value::String(s.clone()),
        }
    }
}

/// Strings are quoted so `'500'` and `500` stay distinguishable in names.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Self::Object(map)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Promise> for Value {
    fn from(p: Promise) -> Self {
        Self::Promise(p)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        literal.to_value()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes `Undefined`.
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
