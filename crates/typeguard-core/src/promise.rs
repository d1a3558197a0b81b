//! # Promises
//!
//! A [`Promise`] is a shared handle to a value that becomes available later.
//! It wraps a boxed future in `futures::future::Shared`, so every clone
//! observes the same eventual value and the underlying future runs once.
//! Awaiting a `Promise` yields its resolved [`Value`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::value::Value;

/// A shareable eventual value.
#[derive(Clone)]
pub struct Promise {
    inner: Shared<BoxFuture<'static, Value>>,
}

impl Promise {
    /// Wrap a future producing a value.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// A promise that is already settled with `value`.
    pub fn resolved(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(async move { value })
    }

    /// The settled value, if the promise has been driven to completion.
    pub fn peek(&self) -> Option<Value> {
        self.inner.peek().cloned()
    }
}

impl Future for Promise {
    type Output = Value;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(value) => f.debug_tuple("Promise").field(&value).finish(),
            None => f.write_str("Promise(<pending>)"),
        }
    }
}
