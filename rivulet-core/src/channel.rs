// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous broadcast channel.
//!
//! A [`Channel`] fans every published value out to its registered listeners, on the
//! caller's thread, in registration order.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `publish` returns once every listener has run.
//! - **Snapshot delivery**: listeners registered during a publish miss that publish;
//!   listeners cancelled during a publish are not invoked afterwards.
//! - **Re-entrant**: no lock is held while listeners run, so a listener may publish,
//!   subscribe or cancel on any channel, including the one delivering to it.
//! - **Close once**: `close` fires every completion callback exactly once. Registering
//!   on a closed channel fires the completion callback immediately.
//!
//! ## Example
//!
//! ```
//! use rivulet_core::Channel;
//! use std::sync::{Arc, Mutex};
//!
//! let channel = Channel::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let subscription = channel.listen(move |v: &i32| sink.lock().unwrap().push(*v), None);
//!
//! channel.publish(&1);
//! subscription.cancel();
//! channel.publish(&2);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! ```

use parking_lot::Mutex;
use std::mem::take;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Listener invoked for every published value.
pub type NextFn<T> = Arc<dyn Fn(&T) + Send + Sync>;
/// Callback invoked once when the channel closes.
pub type CompleteFn = Box<dyn FnOnce() + Send>;

struct Listener<T> {
    id: u64,
    active: Arc<AtomicBool>,
    on_next: NextFn<T>,
    on_complete: Option<CompleteFn>,
}

struct ChannelState<T> {
    closed: bool,
    next_id: u64,
    listeners: Vec<Listener<T>>,
}

trait Unlisten: Send + Sync {
    fn unlisten(&self, id: u64);
}

impl<T> Unlisten for Mutex<ChannelState<T>> {
    fn unlisten(&self, id: u64) {
        self.lock().listeners.retain(|listener| listener.id != id);
    }
}

/// Handle to one listener registration.
///
/// Dropping the handle does **not** cancel the listener; call [`cancel`](Self::cancel).
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    channel: Option<Weak<dyn Unlisten>>,
}

impl Subscription {
    fn inert() -> Self {
        Self {
            id: 0,
            active: Arc::new(AtomicBool::new(false)),
            channel: None,
        }
    }

    /// Stops future deliveries to this listener. Idempotent.
    pub fn cancel(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(channel) = self.channel.as_ref().and_then(Weak::upgrade) {
            channel.unlisten(self.id);
        }
    }

    /// `false` once cancelled or once the channel has closed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Ordered, synchronous, multi-listener broadcast channel.
pub struct Channel<T> {
    state: Arc<Mutex<ChannelState<T>>>,
}

impl<T: 'static> Channel<T> {
    /// Creates an open channel with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ChannelState {
                closed: false,
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener and an optional completion callback.
    ///
    /// On a closed channel `on_complete` runs immediately and the returned
    /// subscription is already inactive.
    pub fn listen<F>(&self, on_next: F, on_complete: Option<CompleteFn>) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        if state.closed {
            drop(state);
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return Subscription::inert();
        }

        let id = state.next_id;
        state.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        state.listeners.push(Listener {
            id,
            active: active.clone(),
            on_next: Arc::new(on_next),
            on_complete,
        });
        drop(state);

        let weak: Weak<Mutex<ChannelState<T>>> = Arc::downgrade(&self.state);
        let channel: Weak<dyn Unlisten> = weak;
        Subscription {
            id,
            active,
            channel: Some(channel),
        }
    }

    /// Delivers `value` to every listener registered before this call, in order.
    pub fn publish(&self, value: &T) {
        let snapshot: Vec<(Arc<AtomicBool>, NextFn<T>)> = {
            let state = self.state.lock();
            if state.closed {
                return;
            }
            state
                .listeners
                .iter()
                .map(|listener| (listener.active.clone(), listener.on_next.clone()))
                .collect()
        };

        for (active, on_next) in snapshot {
            if active.load(Ordering::Acquire) {
                on_next(value);
            }
        }
    }

    /// Closes the channel, firing each completion callback once. Idempotent.
    pub fn close(&self) {
        let listeners = {
            let mut state = self.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            take(&mut state.listeners)
        };

        crate::trace!("closing channel with {} listeners", listeners.len());

        for listener in listeners {
            if listener.active.swap(false, Ordering::AcqRel) {
                if let Some(on_complete) = listener.on_complete {
                    on_complete();
                }
            }
        }
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of registered, uncancelled listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl<T: 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}
