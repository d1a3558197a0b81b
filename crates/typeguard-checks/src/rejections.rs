//! # Rejection Channel
//!
//! Process-wide broadcast of asynchronous check failures.
//!
//! `promise_of` validates a promise's resolved value after `perform` has
//! returned. A failure at that point cannot reach the original caller, so
//! it is logged at `error` level and published here. Consumers that need to
//! observe these failures hold a receiver from [`subscribe`]; with no
//! subscribers the failure is only logged.
//!
//! The continuation runs as a task on the current Tokio runtime. Outside a
//! runtime it runs on a dedicated thread that owns a current-thread runtime
//! with timers and I/O enabled, so promises backed by Tokio resources still
//! resolve. Continuations are never cancelled.

use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle};
use tokio::sync::broadcast;
use typeguard_core::{Check, Promise, ValidationEntry, ValidationError, ValueKind};

const CHANNEL_CAPACITY: usize = 64;

fn sender() -> &'static broadcast::Sender<ValidationError> {
    static SENDER: OnceLock<broadcast::Sender<ValidationError>> = OnceLock::new();
    SENDER.get_or_init(|| broadcast::channel(CHANNEL_CAPACITY).0)
}

/// Receive every asynchronous failure published after this call.
///
/// Receivers that fall more than the channel capacity behind observe
/// `RecvError::Lagged` and skip ahead.
pub fn subscribe() -> broadcast::Receiver<ValidationError> {
    sender().subscribe()
}

/// Publish an asynchronous failure.
pub fn report(err: ValidationError) {
    tracing::error!(error = %err, "unhandled asynchronous check failure");
    // Send only fails when nobody is subscribed.
    let _ = sender().send(err);
}

/// Check `promise`'s eventual value against `check` in the background,
/// reporting a failure on the rejection channel.
pub(crate) fn schedule(promise: Promise, check: Check, kind: ValueKind, index: usize) {
    let continuation = async move {
        let value = promise.await;
        if let Err(err) = check.perform(&ValidationEntry::new(&value, kind, index)) {
            report(err);
        }
    };
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(continuation);
        }
        Err(_) => {
            tracing::warn!("no tokio runtime is current; checking promise on a dedicated thread");
            std::thread::spawn(
                move || match Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime.block_on(continuation),
                    Err(err) => tracing::error!(
                        error = %err,
                        "cannot build runtime for promise check; check dropped"
                    ),
                },
            );
        }
    }
}
