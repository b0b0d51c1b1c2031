// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The writable side of a value stream.
//!
//! An [`Emitter`] is the only way to put values into rivulet. It owns a channel, holds
//! the current value, and decides when the stream completes.
//!
//! ## Emission procedure
//!
//! Every write goes through [`send`](Emitter::send), which runs these steps in order:
//!
//! 1. already completed: nothing happens
//! 2. the scope (see [`scope_to`](Emitter::scope_to)) has completed: the emitter
//!    completes instead of delivering
//! 3. the completion predicate accepts the value: the emitter completes instead of
//!    delivering
//! 4. the raw value is stored and the effective value recomputed (the default
//!    stands in for an absent raw value)
//! 5. the effective value is published to every listener, synchronously
//!
//! No lock is held during step 5, so listeners may write to any emitter, including
//! the one currently delivering.
//!
//! ## Example
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let celsius = Emitter::initial(20);
//! let fahrenheit = celsius.map(|c| c * 9 / 5 + 32);
//! assert_eq!(fahrenheit.value(), Some(68));
//!
//! celsius.emit(100);
//! assert_eq!(fahrenheit.value(), Some(212));
//!
//! celsius.complete();
//! assert!(fahrenheit.is_completed());
//! ```

use crate::forward::subscribe_passive;
use crate::observable::{Observable, Observe};
use crate::shared::{CompletionPredicate, Lifecycle, ScopeLink, Shared, Teardown};
use rivulet_core::{debug, trace, Subscription};
use std::fmt;
use std::mem::take;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Producer handle of a value stream.
///
/// Cloning an `Emitter` yields another handle to the **same** stream; use
/// [`fork`](crate::ForkExt::fork) for an independent copy.
pub struct Emitter<T> {
    pub(crate) shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Emitter<T> {
    /// Creates an active emitter with no value.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(None, None)
    }

    /// Creates an active emitter holding `value`.
    #[must_use]
    pub fn initial(value: T) -> Self {
        Self::seeded(Some(value), None)
    }

    /// Creates an active emitter whose value is absent until emitted, showing `default` meanwhile.
    #[must_use]
    pub fn with_default(default: T) -> Self {
        Self::seeded(None, Some(default))
    }

    pub(crate) fn seeded(raw: Option<T>, default: Option<T>) -> Self {
        Self {
            shared: Arc::new(Shared::new(raw, default)),
        }
    }

    /// Runs the emission procedure for `value` (`None` clears the stream).
    pub fn send(&self, value: Option<T>) {
        let (scope, predicate) = {
            let state = self.shared.state.lock();
            if state.completed {
                return;
            }
            (
                state.scope.as_ref().map(|link| link.parent.clone()),
                state.completion.clone(),
            )
        };

        if scope.is_some_and(|parent| ScopeLink::parent_completed(&parent)) {
            debug!("emitter scope has completed; completing instead of delivering");
            self.complete();
            return;
        }

        if predicate.is_some_and(|predicate| predicate(&value)) {
            trace!("completion predicate tripped; completing instead of delivering");
            self.complete();
            return;
        }

        let effective = {
            let mut state = self.shared.state.lock();
            if state.completed {
                return;
            }
            state.raw = value;
            state.recompute()
        };

        self.shared.channel.publish(&effective);
    }

    /// Emits a present value.
    pub fn emit(&self, value: T) {
        self.send(Some(value));
    }

    /// Clears the stream; observers see the default, if any, or `None`.
    pub fn clear(&self) {
        self.send(None);
    }

    /// Emits `value` only when it differs from the current effective value.
    pub fn emit_if_distinct(&self, value: T)
    where
        T: PartialEq,
    {
        if self.shared.value().as_ref() != Some(&value) {
            self.emit(value);
        }
    }

    /// Completes the stream: listeners get their completion callback once and no
    /// further values are delivered. Idempotent.
    pub fn complete(&self) {
        let (scope, teardown) = {
            let mut state = self.shared.state.lock();
            if state.completed {
                return;
            }
            state.completed = true;
            state.completion = None;
            (state.scope.take(), take(&mut state.teardown))
        };

        trace!("emitter completed");

        if let Some(link) = scope {
            link.subscription.cancel();
        }
        self.shared.channel.close();
        for action in teardown {
            action();
        }
    }

    /// Completes on the emission after the next `count` emissions.
    ///
    /// `complete_in(2)` lets two values through; the third completes the emitter
    /// instead of being delivered. Replaces any other completion predicate.
    pub fn complete_in(&self, count: usize) {
        let seen = AtomicUsize::new(0);
        self.install_completion(Arc::new(move |_: &Option<T>| {
            seen.fetch_add(1, Ordering::SeqCst) >= count
        }));
    }

    /// Completes, instead of delivering, the first present value matching `predicate`.
    pub fn complete_when<P>(&self, predicate: P)
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.install_completion(Arc::new(move |value: &Option<T>| {
            value.as_ref().is_some_and(&predicate)
        }));
    }

    /// Completes, instead of delivering, the first present value failing `predicate`.
    pub fn complete_when_not<P>(&self, predicate: P)
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.complete_when(move |value| !predicate(value));
    }

    /// Completes on the first clear.
    pub fn complete_once_empty(&self) {
        self.install_completion(Arc::new(|value: &Option<T>| value.is_none()));
    }

    fn install_completion(&self, predicate: CompletionPredicate<T>) {
        let mut state = self.shared.state.lock();
        if !state.completed {
            state.completion = Some(predicate);
        }
    }

    /// Completes when `other` completes; `other`'s values are ignored. Watching for
    /// completion does not count as demand on `other`.
    pub fn complete_with<O: Observe>(&self, other: &O) {
        let target = self.clone();
        let subscription = subscribe_passive(other, |_| {}, move || target.complete());
        self.add_teardown(move || subscription.cancel());
    }

    /// Ties this emitter's lifetime to `parent`: once `parent` completes this emitter
    /// completes too. The emitter never completes or holds on to `parent`.
    ///
    /// Replaces any previous scope.
    pub fn scope_to<O: Observe>(&self, parent: &O) {
        self.unscope();

        let parent = parent.as_observable();
        let child: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        let subscription = parent.shared.listen_passive(|_| {}, move || {
            if let Some(shared) = child.upgrade() {
                debug!("scope completed; completing scoped emitter");
                Emitter { shared }.complete();
            }
        });
        let weak_parent: Weak<Shared<O::Item>> = Arc::downgrade(&parent.shared);
        let weak_parent: Weak<dyn Lifecycle> = weak_parent;

        let mut state = self.shared.state.lock();
        if state.completed {
            drop(state);
            subscription.cancel();
            return;
        }
        state.scope = Some(ScopeLink {
            parent: weak_parent,
            subscription,
        });
    }

    /// Removes the scope set by [`scope_to`](Self::scope_to).
    pub fn unscope(&self) {
        let link = self.shared.state.lock().scope.take();
        if let Some(link) = link {
            link.subscription.cancel();
        }
    }

    /// Sets the default and republishes the effective value.
    pub fn set_default(&self, default: T) {
        self.update_default(Some(default));
    }

    /// Removes the default and republishes the effective value.
    pub fn clear_default(&self) {
        self.update_default(None);
    }

    fn update_default(&self, default: Option<T>) {
        let effective = {
            let mut state = self.shared.state.lock();
            if state.completed {
                return;
            }
            state.default = default;
            state.recompute()
        };
        self.shared.channel.publish(&effective);
    }

    /// Runs `action` once when this emitter completes, after listeners were notified.
    /// Runs it immediately if the emitter has already completed.
    pub fn add_teardown<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.shared.state.lock();
        if state.completed {
            drop(state);
            action();
            return;
        }
        let action: Teardown = Box::new(action);
        state.teardown.push(action);
    }

    /// Runs `hook` once this emitter sees demand: a listener of its own, or of an
    /// emitter derived from it. Runs right away if that already happened.
    pub(crate) fn on_first_listener<F>(&self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.shared.on_first_listener(Box::new(hook));
    }
}

impl<T: Clone + Send + Sync + 'static> Observe for Emitter<T> {
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
        Observable {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("raw", &self.raw_value())
            .field("default", &self.default_value())
            .field("completed", &self.is_completed())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> From<Emitter<T>> for Observable<T> {
    fn from(emitter: Emitter<T>) -> Self {
        Observable {
            shared: emitter.shared,
        }
    }
}
