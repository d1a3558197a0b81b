use typeguard_core::{Check, CheckKind, Value};

use crate::rejections;
use crate::spec::{normalize, Spec};

/// Accepts promises, and checks the resolved value against `spec` later.
///
/// The synchronous verdict only confirms the value is a promise. Once it
/// is, a continuation is scheduled that awaits the promise and checks the
/// settled value in the context of the original entry. A failure there is
/// published on the [`rejections`] channel; the caller of `perform` never
/// sees it.
pub fn promise_of(spec: impl Into<Spec>) -> Check {
    let inner = normalize(spec);
    Check::new(
        format!("Promise<{}>", inner.name()),
        CheckKind::Promise,
        move |entry| match entry.value() {
            Value::Promise(promise) => {
                rejections::schedule(promise.clone(), inner.clone(), entry.kind(), entry.index());
                true
            }
            _ => false,
        },
    )
}
