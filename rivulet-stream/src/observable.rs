// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Read-only side of a value stream.
//!
//! [`Observe`] is implemented by both [`Observable`] and [`Emitter`](crate::Emitter):
//! it exposes the current value and subscription rights, and every derivation
//! combinator in this crate is an extension trait over it.
//!
//! Deliveries are `Option<T>`: `Some(v)` is a present value, `None` means the
//! stream was cleared.

use crate::shared::Shared;
use rivulet_core::Subscription;
use std::fmt;
use std::sync::Arc;

/// Queryable current value plus subscription rights.
pub trait Observe: Send + Sync + 'static {
    /// The value type carried by the stream.
    type Item: Clone + Send + Sync + 'static;

    /// The effective value: last emitted value, or the default when that is absent.
    fn value(&self) -> Option<Self::Item>;

    /// The last emitted value, before default substitution.
    fn raw_value(&self) -> Option<Self::Item>;

    /// The substitute used while the raw value is absent.
    fn default_value(&self) -> Option<Self::Item>;

    /// `true` once the stream has completed. Never reverts.
    fn is_completed(&self) -> bool;

    /// Number of active listeners.
    fn listener_count(&self) -> usize;

    /// Registers `on_next` for every future delivery and `on_complete` for completion.
    ///
    /// Subscribing to a completed stream runs `on_complete` immediately.
    fn subscribe_with<N, C>(&self, on_next: N, on_complete: C) -> Subscription
    where
        N: Fn(&Option<Self::Item>) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static;

    /// A read-only handle to the same stream.
    fn as_observable(&self) -> Observable<Self::Item>;

    /// `true` when the effective value is present.
    fn has_value(&self) -> bool {
        self.value().is_some()
    }

    /// Registers `on_next` for every future delivery.
    fn subscribe<N>(&self, on_next: N) -> Subscription
    where
        N: Fn(&Option<Self::Item>) + Send + Sync + 'static,
    {
        self.subscribe_with(on_next, || {})
    }

    /// Registers a completion callback, ignoring data.
    fn on_complete<C>(&self, on_complete: C) -> Subscription
    where
        C: FnOnce() + Send + 'static,
    {
        self.subscribe_with(|_| {}, on_complete)
    }
}

/// Read-only handle to an emitter's stream.
///
/// Cheap to clone; all clones observe the same stream.
pub struct Observable<T> {
    pub(crate) shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Observe for Observable<T> {
    type Item = T;

    fn value(&self) -> Option<T> {
        self.shared.value()
    }

    fn raw_value(&self) -> Option<T> {
        self.shared.raw_value()
    }

    fn default_value(&self) -> Option<T> {
        self.shared.default_value()
    }

    fn is_completed(&self) -> bool {
        self.shared.completed()
    }

    fn listener_count(&self) -> usize {
        self.shared.channel.listener_count()
    }

    fn subscribe_with<N, C>(&self, on_next: N, on_complete: C) -> Subscription
    where
        N: Fn(&Option<T>) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static,
    {
        self.shared.listen(on_next, on_complete)
    }

    fn as_observable(&self) -> Observable<T> {
        self.clone()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value())
            .field("completed", &self.is_completed())
            .finish()
    }
}
