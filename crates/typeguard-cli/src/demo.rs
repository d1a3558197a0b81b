//! # Demo Subcommand
//!
//! Walks through the library: declares checked callables, prints their
//! signatures, and calls each with valid and invalid arguments. The last
//! scenario returns a promise that resolves to the wrong type and waits for
//! the violation on the rejection channel.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use typeguard_checks::{any, optional, promise_of, rejections, specs, variadic, Primitive};
use typeguard_core::{Class, Function, Object, Promise, ValidationError, Value};
use typeguard_signature::signature;

use crate::person_shape;

/// How long to wait for the asynchronous promise violation.
const REJECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {}

/// Execute the demo, writing its transcript to `out`. Returns 1 when the
/// asynchronous violation never arrived.
pub async fn run_demo<W: Write>(out: &mut W) -> Result<u8> {
    let introduce = signature(specs![Primitive::String, Primitive::Number])
        .returns(Primitive::String)
        .implement(Function::new("introduce", |args| {
            Ok(Value::from(format!(
                "My name is {}, and I'm {} years old.",
                text(&args[0]),
                text(&args[1])
            )))
        }));
    section(out, &introduce.to_string())?;
    show(out, "introduce('John', 117)", introduce.call(&["John".into(), 117.into()]))?;
    show(out, "introduce(117, 'John')", introduce.call(&[117.into(), "John".into()]))?;

    let maybe_age = signature(specs![Primitive::String, optional(Primitive::Number)])
        .returns(Primitive::String)
        .implement(Function::new("maybeAge", |args| {
            let age = match args.get(1) {
                Some(Value::Number(n)) => typeguard_core::format_number(*n),
                _ => "infinite".to_string(),
            };
            Ok(Value::from(format!("My name is {} and I'm {age} years old.", text(&args[0]))))
        }));
    section(out, &maybe_age.to_string())?;
    show(out, "maybeAge('', 12)", maybe_age.call(&["".into(), 12.into()]))?;
    show(out, "maybeAge('Mileena')", maybe_age.call(&["Mileena".into()]))?;

    let apply = signature(specs![Class::function()])
        .returns(any())
        .implement(Function::new("apply", |args| match args[0].as_function() {
            Some(f) => f.call(&[]),
            None => Ok(Value::Undefined),
        }));
    section(out, &apply.to_string())?;
    let wiii = Function::anonymous(|_| Ok(Value::from("Wiiiii")));
    show(out, "apply(() => 'Wiiiii')", apply.call(&[wiii.into()]))?;
    show(out, "apply('not a function')", apply.call(&["not a function".into()]))?;

    let describe_person = signature(specs![person_shape()])
        .returns_void()
        .implement(Function::new("describePerson", |args| {
            let person = &args[0];
            let field = |name: &str| text(person.get(name).unwrap_or(&Value::Undefined));
            Ok(Value::from(format!(
                "This is {}, I'm {} old and my favorite game is {}",
                field("name"),
                field("age"),
                field("favoriteGame")
            )))
        }));
    section(out, &describe_person.to_string())?;
    let juanito = Value::object([
        ("name", Value::from("Juanito")),
        ("age", Value::from(117)),
        ("favoriteGame", Value::from("Halo")),
    ]);
    show(out, "describePerson(juanito)", describe_person.call(&[juanito]))?;
    let empty = Value::Object(Object::new());
    show(out, "describePerson({})", describe_person.call(&[empty]))?;
    let wrong = Value::object([("name", 200), ("age", 300)]);
    show(out, "describePerson({ name: 200, age: 300 })", describe_person.call(&[wrong]))?;

    let sum = signature(specs![variadic(Primitive::Number)])
        .returns(Primitive::Number)
        .implement(Function::new("sum", |args| {
            Ok(Value::from(args.iter().filter_map(Value::as_f64).sum::<f64>()))
        }));
    section(out, &sum.to_string())?;
    show(out, "sum(1, 2, 3)", sum.call(&[1.into(), 2.into(), 3.into()]))?;
    show(
        out,
        "sum(1, 'two', 3, true)",
        sum.call(&[1.into(), "two".into(), 3.into(), true.into()]),
    )?;

    let label = signature(specs![])
        .returns(Primitive::String)
        .implement(Function::new("label", |_| Ok(Value::from(500))));
    section(out, &label.to_string())?;
    show(out, "label()", label.call(&[]))?;

    let mut rx = rejections::subscribe();
    let fetch = signature(specs![])
        .returns(promise_of(Primitive::String))
        .implement(Function::new("fetchLabel", |_| {
            Ok(Value::from(Promise::resolved(500)))
        }));
    section(out, &fetch.to_string())?;
    show(out, "fetchLabel()", fetch.call(&[]))?;

    match tokio::time::timeout(REJECTION_TIMEOUT, rx.recv()).await {
        Ok(Ok(err)) => {
            writeln!(out, "  asynchronous rejection: {err}")?;
            Ok(0)
        }
        Ok(Err(recv_err)) => {
            tracing::warn!(error = %recv_err, "rejection channel closed");
            writeln!(out, "  no asynchronous rejection observed")?;
            Ok(1)
        }
        Err(_) => {
            writeln!(out, "  no asynchronous rejection observed")?;
            Ok(1)
        }
    }
}

fn section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    Ok(())
}

fn show<W: Write>(out: &mut W, call: &str, result: Result<Value, ValidationError>) -> Result<()> {
    match result {
        Ok(value) => writeln!(out, "  {call} -> {value}")?,
        Err(err) => writeln!(out, "  {call} -> error: {err}")?,
    }
    Ok(())
}

/// Plain rendering for interpolation: strings without quotes.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_unquotes_strings() {
        assert_eq!(text(&Value::from("Ada")), "Ada");
        assert_eq!(text(&Value::from(117)), "117");
        assert_eq!(text(&Value::Undefined), "undefined");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let mut out = Vec::new();
        let code = run_demo(&mut out).await.unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(code, 0);
        assert!(transcript.contains("introduce(string, number): string"));
        assert!(transcript.contains(
            "introduce(117, 'John') -> error: Parameter 0 must be an instance of string, received number"
        ));
        assert!(transcript.contains("maybeAge('Mileena') -> 'My name is Mileena and I'm infinite years old.'"));
        assert!(transcript.contains("apply(() => 'Wiiiii') -> 'Wiiiii'"));
        assert!(transcript.contains("sum(...number): number"));
        assert!(transcript.contains("received [string@1, boolean@3]"));
        assert!(transcript.contains("label() -> error: Return value must be an instance of string, received number"));
        assert!(transcript.contains(
            "asynchronous rejection: Return value must be an instance of string, received number"
        ));
    }
}
