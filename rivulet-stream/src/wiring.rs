// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wiring between existing emitters.
//!
//! Unlike the derivation combinators, wiring writes into emitters that already
//! exist and does not propagate completion: the target keeps its own lifecycle.
//!
//! - one-way, live: [`push_to`](PushToExt::push_to), [`pull_from`](Emitter::pull_from),
//!   [`map_from`](Emitter::map_from)
//! - one-time snapshot: [`copy_from`](Emitter::copy_from) and its `_if_present` /
//!   `_if_distinct` variants
//! - two-way, live: [`map_with`](Emitter::map_with), [`synchronize_with`](Emitter::synchronize_with)
//!
//! Two-way wiring forms a cycle between the emitters. Each direction only emits
//! values that differ from the target's current value, which stops the echo after
//! one round trip:
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let meters = Emitter::<f64>::new();
//! let feet = Emitter::<f64>::new();
//! meters.map_with(&feet, |m| m * 4.0, |f| f / 4.0);
//!
//! meters.emit(2.0);
//! assert_eq!(feet.value(), Some(8.0));
//!
//! feet.emit(20.0);
//! assert_eq!(meters.value(), Some(5.0));
//! ```

use crate::emitter::Emitter;
use crate::observable::Observe;
use rivulet_core::Subscription;

/// Extension trait providing [`push_to`](Self::push_to).
pub trait PushToExt: Observe {
    /// Forwards every present value to `target`, one-way.
    fn push_to(&self, target: &Emitter<Self::Item>) -> Subscription;
}

impl<O: Observe> PushToExt for O {
    fn push_to(&self, target: &Emitter<Self::Item>) -> Subscription {
        let target = target.clone();
        self.subscribe(move |value| {
            if let Some(value) = value {
                target.emit(value.clone());
            }
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Emitter<T> {
    /// Receives every present value of `source`; same as `source.push_to(self)`.
    pub fn pull_from<O>(&self, source: &O) -> Subscription
    where
        O: Observe<Item = T>,
    {
        source.push_to(self)
    }

    /// Copies the current value of `source` once, including absence.
    pub fn copy_from<O>(&self, source: &O)
    where
        O: Observe<Item = T>,
    {
        self.send(source.value());
    }

    /// Copies the current value of `source` once, if it is present.
    pub fn copy_from_if_present<O>(&self, source: &O)
    where
        O: Observe<Item = T>,
    {
        if let Some(value) = source.value() {
            self.emit(value);
        }
    }

    /// Copies the current value of `source` once, if it differs from this emitter's.
    pub fn copy_from_if_distinct<O>(&self, source: &O)
    where
        O: Observe<Item = T>,
        T: PartialEq,
    {
        let value = source.value();
        if value != self.value() {
            self.send(value);
        }
    }

    /// Emits `f(v)` for every present value of `source`, clears when it clears.
    pub fn map_from<O, F>(&self, source: &O, f: F) -> Subscription
    where
        O: Observe,
        F: Fn(&O::Item) -> T + Send + Sync + 'static,
    {
        let target = self.clone();
        source.subscribe(move |value| target.send(value.as_ref().map(&f)))
    }

    /// Two-way mapping: this emitter's values flow to `other` through `forward`,
    /// `other`'s values flow back through `inverse`. Only distinct values are emitted
    /// in either direction.
    pub fn map_with<U, F, G>(&self, other: &Emitter<U>, forward: F, inverse: G) -> (Subscription, Subscription)
    where
        T: PartialEq,
        U: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
        G: Fn(&U) -> T + Send + Sync + 'static,
    {
        let to_other = {
            let other = other.clone();
            self.subscribe(move |value| send_if_distinct(&other, value.as_ref().map(&forward)))
        };
        let to_self = {
            let this = self.clone();
            other.subscribe(move |value| send_if_distinct(&this, value.as_ref().map(&inverse)))
        };
        (to_other, to_self)
    }

    /// Two-way mirroring of identical values; `map_with` with identity functions.
    pub fn synchronize_with(&self, other: &Emitter<T>) -> (Subscription, Subscription)
    where
        T: PartialEq,
    {
        self.map_with(other, T::clone, T::clone)
    }
}

fn send_if_distinct<T>(target: &Emitter<T>, value: Option<T>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    match value {
        Some(value) => target.emit_if_distinct(value),
        None if target.raw_value().is_some() => target.clear(),
        None => {}
    }
}
