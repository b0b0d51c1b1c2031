// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Partitioning of present values by a predicate.

use crate::emitter::Emitter;
use crate::forward::{demand_through, subscribe_passive};
use crate::observable::Observe;
use rivulet_core::Subscription;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing [`split`](Self::split) and [`split_into`](Self::split_into).
pub trait SplitExt: Observe {
    /// Routes each present value to the first emitter if `predicate` holds, to the
    /// second otherwise. Both complete with the source. Clears are dropped.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::<i32>::new();
    /// let (even, odd) = source.split(|x| x % 2 == 0);
    ///
    /// source.emit(3);
    /// source.emit(4);
    ///
    /// assert_eq!(even.value(), Some(4));
    /// assert_eq!(odd.value(), Some(3));
    /// ```
    fn split<P>(&self, predicate: P) -> (Emitter<Self::Item>, Emitter<Self::Item>)
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// Routes each present value into `matching` or `rest`.
    ///
    /// The targets are owned by the caller and are not completed with the source;
    /// cancel the returned subscription to stop routing.
    fn split_into<P>(
        &self,
        matching: &Emitter<Self::Item>,
        rest: &Emitter<Self::Item>,
        predicate: P,
    ) -> Subscription
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;
}

impl<O: Observe> SplitExt for O {
    fn split<P>(&self, predicate: P) -> (Emitter<Self::Item>, Emitter<Self::Item>)
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let matching = Emitter::new();
        let rest = Emitter::new();

        let (next_matching, next_rest) = (matching.clone(), rest.clone());
        let (done_matching, done_rest) = (matching.clone(), rest.clone());
        let subscription = Arc::new(subscribe_passive(
            self,
            move |value| {
                if let Some(value) = value {
                    if predicate(value) {
                        next_matching.emit(value.clone());
                    } else {
                        next_rest.emit(value.clone());
                    }
                }
            },
            move || {
                done_matching.complete();
                done_rest.complete();
            },
        ));

        // Routing stops once both sides have completed.
        let completed = Arc::new(AtomicUsize::new(0));
        for side in [&matching, &rest] {
            let subscription = subscription.clone();
            let completed = completed.clone();
            side.add_teardown(move || {
                if completed.fetch_add(1, Ordering::SeqCst) + 1 == 2 {
                    subscription.cancel();
                }
            });
        }

        demand_through(self, &matching);
        demand_through(self, &rest);

        (matching, rest)
    }

    fn split_into<P>(
        &self,
        matching: &Emitter<Self::Item>,
        rest: &Emitter<Self::Item>,
        predicate: P,
    ) -> Subscription
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let matching = matching.clone();
        let rest = rest.clone();
        self.subscribe(move |value| {
            if let Some(value) = value {
                if predicate(value) {
                    matching.emit(value.clone());
                } else {
                    rest.emit(value.clone());
                }
            }
        })
    }
}
