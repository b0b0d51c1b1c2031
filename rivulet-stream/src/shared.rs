// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::{Channel, Subscription};
use std::sync::Weak;

pub(crate) type CompletionPredicate<T> = std::sync::Arc<dyn Fn(&Option<T>) -> bool + Send + Sync>;
pub(crate) type Teardown = Box<dyn FnOnce() + Send>;

/// Read access to another emitter's terminal flag, independent of its item type.
pub(crate) trait Lifecycle: Send + Sync {
    fn is_completed(&self) -> bool;
}

pub(crate) struct ScopeLink {
    pub(crate) parent: Weak<dyn Lifecycle>,
    pub(crate) subscription: Subscription,
}

impl ScopeLink {
    /// A parent that no longer exists can never emit again, so it counts as completed.
    pub(crate) fn parent_completed(parent: &Weak<dyn Lifecycle>) -> bool {
        parent.upgrade().map_or(true, |parent| parent.is_completed())
    }
}

pub(crate) struct State<T> {
    pub(crate) raw: Option<T>,
    pub(crate) default: Option<T>,
    pub(crate) value: Option<T>,
    pub(crate) completed: bool,
    pub(crate) completion: Option<CompletionPredicate<T>>,
    pub(crate) scope: Option<ScopeLink>,
    pub(crate) teardown: Vec<Teardown>,
    pub(crate) on_first_listener: Option<Teardown>,
    pub(crate) demanded: bool,
}

impl<T: Clone> State<T> {
    /// Effective value: raw if present, else the default.
    pub(crate) fn recompute(&mut self) -> Option<T> {
        self.value = self.raw.clone().or_else(|| self.default.clone());
        self.value.clone()
    }
}

/// State and channel behind every `Emitter`/`Observable` handle.
pub(crate) struct Shared<T> {
    pub(crate) state: Mutex<State<T>>,
    pub(crate) channel: Channel<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> Shared<T> {
    pub(crate) fn new(raw: Option<T>, default: Option<T>) -> Self {
        let mut state = State {
            raw,
            default,
            value: None,
            completed: false,
            completion: None,
            scope: None,
            teardown: Vec::new(),
            on_first_listener: None,
            demanded: false,
        };
        state.recompute();
        Self {
            state: Mutex::new(state),
            channel: Channel::new(),
        }
    }

    /// Registers a listener that does not count as demand.
    pub(crate) fn listen_passive<N, C>(&self, on_next: N, on_complete: C) -> Subscription
    where
        N: Fn(&Option<T>) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static,
    {
        self.channel.listen(on_next, Some(Box::new(on_complete)))
    }

    /// Registers a listener, then signals demand.
    pub(crate) fn listen<N, C>(&self, on_next: N, on_complete: C) -> Subscription
    where
        N: Fn(&Option<T>) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static,
    {
        let subscription = self.listen_passive(on_next, on_complete);
        self.demand();
        subscription
    }

    /// Fires the first-listener hook, if one is waiting.
    pub(crate) fn demand(&self) {
        let hook = {
            let mut state = self.state.lock();
            state.demanded = true;
            state.on_first_listener.take()
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Runs `hook` on the first demand, right away if there already was some.
    ///
    /// Several hooks registered before any demand all run, in registration order.
    pub(crate) fn on_first_listener(&self, hook: Teardown) {
        let mut state = self.state.lock();
        if state.completed || state.demanded {
            drop(state);
            hook();
            return;
        }
        state.on_first_listener = Some(match state.on_first_listener.take() {
            Some(earlier) => Box::new(move || {
                earlier();
                hook();
            }),
            None => hook,
        });
    }

    pub(crate) fn value(&self) -> Option<T> {
        self.state.lock().value.clone()
    }

    pub(crate) fn raw_value(&self) -> Option<T> {
        self.state.lock().raw.clone()
    }

    pub(crate) fn default_value(&self) -> Option<T> {
        self.state.lock().default.clone()
    }

    pub(crate) fn completed(&self) -> bool {
        self.state.lock().completed
    }
}

impl<T: Send> Lifecycle for Shared<T> {
    fn is_completed(&self) -> bool {
        self.state.lock().completed
    }
}
