// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Captures everything an observable delivers.

use parking_lot::Mutex;
use rivulet_core::Subscription;
use rivulet_stream::Observe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Listener that logs every delivery and counts completion callbacks.
///
/// ```
/// use rivulet_stream::Emitter;
/// use rivulet_test_utils::Recorder;
///
/// let source = Emitter::<i32>::new();
/// let recorder = Recorder::attach(&source);
///
/// source.emit(1);
/// source.clear();
/// source.complete();
///
/// assert_eq!(recorder.deliveries(), vec![Some(1), None]);
/// assert_eq!(recorder.completions(), 1);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    deliveries: Arc<Mutex<Vec<Option<T>>>>,
    completions: Arc<AtomicUsize>,
    subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    pub fn attach<O>(source: &O) -> Self
    where
        O: Observe<Item = T>,
    {
        let deliveries = Arc::new(Mutex::new(Vec::new()));
        let completions = Arc::new(AtomicUsize::new(0));

        let log = deliveries.clone();
        let count = completions.clone();
        let subscription = source.subscribe_with(
            move |value| log.lock().push(value.clone()),
            move || {
                count.fetch_add(1, Ordering::SeqCst);
            },
        );

        Self {
            deliveries,
            completions,
            subscription,
        }
    }

    /// Every delivery so far, clears as `None`.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Option<T>> {
        self.deliveries.lock().clone()
    }

    /// Present values only.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.deliveries.lock().iter().flatten().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deliveries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times the completion callback ran.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completions() > 0
    }

    /// Stops recording; what was recorded stays available.
    pub fn detach(&self) {
        self.subscription.cancel();
    }
}
