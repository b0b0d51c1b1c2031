// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collector-driven accumulation, terminal and progressive.

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use crate::terminal::{fold_to_completion, Accumulator, Terminal};
use rivulet_core::Collector;

/// Extension trait providing the collect family.
pub trait CollectExt: Observe {
    /// Accumulates present values with `collector` and resolves with
    /// `collector.finish(acc)` once the source completes.
    ///
    /// # Errors
    ///
    /// Resolves to [`MissingValue`](rivulet_core::RivuletError::MissingValue) if the
    /// source is dropped before completing.
    fn collect<A, R>(&self, collector: Collector<Self::Item, A, R>) -> Terminal<R>
    where
        A: Send + 'static,
        R: Send + 'static;

    /// [`collect`](Self::collect) with the collector given as its three functions.
    fn collect_with<A, R, I, F, G>(&self, initializer: I, accumulator: F, finalizer: G) -> Terminal<R>
    where
        A: Send + 'static,
        R: Send + 'static,
        I: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, &Self::Item) -> A + Send + Sync + 'static,
        G: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.collect(Collector::new(initializer, accumulator, finalizer))
    }

    /// Emits `collector.finish(acc)` after every present value.
    fn progressively_collect<A, R>(&self, collector: Collector<Self::Item, A, R>) -> Emitter<R>
    where
        A: Send + 'static,
        R: Clone + Send + Sync + 'static;

    /// [`progressively_collect`](Self::progressively_collect) with the collector given
    /// as its three functions.
    fn progressively_collect_with<A, R, I, F, G>(
        &self,
        initializer: I,
        accumulator: F,
        finalizer: G,
    ) -> Emitter<R>
    where
        A: Send + 'static,
        R: Clone + Send + Sync + 'static,
        I: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, &Self::Item) -> A + Send + Sync + 'static,
        G: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.progressively_collect(Collector::new(initializer, accumulator, finalizer))
    }

    /// Every present value, in delivery order, once the source completes.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let source = Emitter::<&str>::new();
    /// let all = source.to_vec();
    ///
    /// source.emit("a");
    /// source.clear();
    /// source.emit("b");
    /// source.complete();
    ///
    /// assert_eq!(all.await.unwrap(), vec!["a", "b"]);
    /// # });
    /// ```
    fn to_vec(&self) -> Terminal<Vec<Self::Item>> {
        self.collect(Collector::to_vec())
    }

    /// Every delivery, clears included as `None`, once the source completes.
    fn to_option_vec(&self) -> Terminal<Vec<Option<Self::Item>>>;
}

impl<O: Observe> CollectExt for O {
    fn collect<A, R>(&self, collector: Collector<Self::Item, A, R>) -> Terminal<R>
    where
        A: Send + 'static,
        R: Send + 'static,
    {
        let finisher = collector.clone();
        fold_to_completion(
            self,
            collector.initial(),
            move |acc, value| match value {
                Some(value) => collector.accumulate(acc, value),
                None => acc,
            },
            move |acc| Ok(finisher.finish(&acc)),
        )
    }

    fn progressively_collect<A, R>(&self, collector: Collector<Self::Item, A, R>) -> Emitter<R>
    where
        A: Send + 'static,
        R: Clone + Send + Sync + 'static,
    {
        let acc = Accumulator::new(collector.initial());
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let Some(value) = value else {
                return;
            };
            acc.fold(value.clone(), |current, value| {
                let next = collector.accumulate(current, &value);
                target.emit(collector.finish(&next));
                next
            });
        });
        result
    }

    fn to_option_vec(&self) -> Terminal<Vec<Option<Self::Item>>> {
        fold_to_completion(
            self,
            Vec::new(),
            |mut acc, value| {
                acc.push(value.clone());
                acc
            },
            Ok,
        )
    }
}
