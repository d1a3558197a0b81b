//! # Format Checks
//!
//! String checks backed by a single regular expression. A format check
//! accepts only strings whose contents match its pattern; every non-string
//! value fails.
//!
//! Builtin formats compile their pattern once per process and share the
//! resulting check.

use std::sync::OnceLock;

use regex::Regex;
use typeguard_core::{Check, CheckKind, Value};

const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const URL: &str = r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s/?#]+[^\s]*$";
const BOOLEAN_STRING: &str = r"^(?:true|false)$";
const INT_STRING: &str = r"^[+-]?\d+$";
const NUMERIC_STRING: &str = r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$";

/// Check that a string matches `pattern`, named `Matches(/pattern/)`.
///
/// Fails when the pattern is not a valid regular expression.
pub fn matches(pattern: &str) -> Result<Check, regex::Error> {
    Ok(matches_regex(Regex::new(pattern)?))
}

/// Check that a string matches an already-compiled regex.
pub fn matches_regex(regex: Regex) -> Check {
    let name = format!("Matches(/{}/)", regex.as_str());
    pattern_check(name, regex)
}

fn pattern_check(name: String, regex: Regex) -> Check {
    Check::new(name, CheckKind::Custom, move |entry| match entry.value() {
        Value::String(s) => regex.is_match(s),
        _ => false,
    })
}

fn builtin(cell: &'static OnceLock<Check>, name: &'static str, pattern: &'static str) -> Check {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(regex) => pattern_check(name.to_string(), regex),
        Err(err) => {
            tracing::error!(format = name, error = %err, "builtin format pattern failed to compile");
            Check::custom(name, |_| false)
        }
    })
    .clone()
}

/// `local@domain.tld` shaped strings.
pub fn email() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    builtin(&CHECK, "Email", EMAIL)
}

/// Absolute URLs with a scheme and a host.
pub fn url() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    builtin(&CHECK, "Url", URL)
}

/// Exactly `"true"` or `"false"`.
pub fn boolean_string() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    builtin(&CHECK, "BooleanString", BOOLEAN_STRING)
}

/// Optionally signed decimal integers.
pub fn int_string() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    builtin(&CHECK, "IntString", INT_STRING)
}

/// Optionally signed decimals with an optional exponent.
pub fn numeric_string() -> Check {
    static CHECK: OnceLock<Check> = OnceLock::new();
    builtin(&CHECK, "NumericString", NUMERIC_STRING)
}
