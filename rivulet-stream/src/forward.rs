// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription plumbing shared by every derived emitter.
//!
//! A derived emitter's own subscription to its source is *passive*: it receives
//! every delivery but does not count as demand. Demand reaches the source once the
//! derived emitter gets a listener of its own, so a bridged source only starts
//! producing when the end of the chain is wired.

use crate::emitter::Emitter;
use crate::observable::Observe;
use rivulet_core::Subscription;
use std::sync::Arc;

/// Listens to `source` without signalling demand.
pub(crate) fn subscribe_passive<O, N, C>(source: &O, on_next: N, on_complete: C) -> Subscription
where
    O: Observe,
    N: Fn(&Option<O::Item>) + Send + Sync + 'static,
    C: FnOnce() + Send + 'static,
{
    source
        .as_observable()
        .shared
        .listen_passive(on_next, on_complete)
}

/// Passes demand from `target` to `source` once `target` has a listener.
pub(crate) fn demand_through<O, U>(source: &O, target: &Emitter<U>)
where
    O: Observe,
    U: Clone + Send + Sync + 'static,
{
    let upstream = Arc::downgrade(&source.as_observable().shared);
    target.on_first_listener(move || {
        if let Some(upstream) = upstream.upgrade() {
            upstream.demand();
        }
    });
}

/// Listens to `source` on behalf of `target`. The listener is cancelled once
/// `target` completes, and `source` sees demand once `target` does.
#[doc(hidden)]
pub fn subscribe_for<O, U, N, C>(source: &O, target: &Emitter<U>, on_next: N, on_complete: C)
where
    O: Observe,
    U: Clone + Send + Sync + 'static,
    N: Fn(&Option<O::Item>) + Send + Sync + 'static,
    C: FnOnce() + Send + 'static,
{
    let subscription = subscribe_passive(source, on_next, on_complete);
    target.add_teardown(move || subscription.cancel());
    demand_through(source, target);
}

/// Wires `source` into `target`: `on_next` runs for every delivery and `on_complete`
/// when the source completes.
#[doc(hidden)]
pub fn forward_with<O, U, N, C>(source: &O, target: &Emitter<U>, on_next: N, on_complete: C)
where
    O: Observe,
    U: Clone + Send + Sync + 'static,
    N: Fn(&Emitter<U>, &Option<O::Item>) + Send + Sync + 'static,
    C: FnOnce(&Emitter<U>) + Send + 'static,
{
    let next_target = target.clone();
    let complete_target = target.clone();
    subscribe_for(
        source,
        target,
        move |value| on_next(&next_target, value),
        move || on_complete(&complete_target),
    );
}

/// [`forward_with`] completing `target` together with the source.
#[doc(hidden)]
pub fn forward<O, U, N>(source: &O, target: &Emitter<U>, on_next: N)
where
    O: Observe,
    U: Clone + Send + Sync + 'static,
    N: Fn(&Emitter<U>, &Option<O::Item>) + Send + Sync + 'static,
{
    forward_with(source, target, on_next, Emitter::complete);
}
