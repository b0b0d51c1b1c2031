// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use crate::terminal::{fold_to_completion, Accumulator, Terminal};
use rivulet_core::ValueExt;

/// Extension trait providing [`reduce`](Self::reduce) and
/// [`progressively_reduce`](Self::progressively_reduce).
pub trait ReduceExt: Observe {
    /// Folds every present value with `combine`, seeding the accumulator with the
    /// first one, and resolves with the result once the source completes.
    ///
    /// # Errors
    ///
    /// Resolves to [`MissingValue`](rivulet_core::RivuletError::MissingValue) if the
    /// source completes without a present value, or is dropped before completing.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let source = Emitter::<i32>::new();
    /// let sum = source.reduce(|acc, x| acc + x);
    ///
    /// source.emit(1);
    /// source.emit(2);
    /// source.emit(3);
    /// source.complete();
    ///
    /// assert_eq!(sum.await.unwrap(), 6);
    /// # });
    /// ```
    fn reduce<F>(&self, combine: F) -> Terminal<Self::Item>
    where
        F: Fn(Self::Item, &Self::Item) -> Self::Item + Send + Sync + 'static;

    /// Emits the running accumulator after every present value.
    fn progressively_reduce<F>(&self, combine: F) -> Emitter<Self::Item>
    where
        F: Fn(Self::Item, &Self::Item) -> Self::Item + Send + Sync + 'static;
}

impl<O: Observe> ReduceExt for O {
    fn reduce<F>(&self, combine: F) -> Terminal<Self::Item>
    where
        F: Fn(Self::Item, &Self::Item) -> Self::Item + Send + Sync + 'static,
    {
        fold_to_completion(
            self,
            None,
            move |acc: Option<Self::Item>, value| match value {
                Some(value) => Some(match acc {
                    Some(acc) => combine(acc, value),
                    None => value.clone(),
                }),
                None => acc,
            },
            |acc| acc.or_else_throw("reduce on a stream that completed without values"),
        )
    }

    fn progressively_reduce<F>(&self, combine: F) -> Emitter<Self::Item>
    where
        F: Fn(Self::Item, &Self::Item) -> Self::Item + Send + Sync + 'static,
    {
        let acc = Accumulator::new(None);
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let Some(value) = value else {
                return;
            };
            acc.fold(value.clone(), |current: Option<Self::Item>, value| {
                let next = match current {
                    Some(current) => combine(current, &value),
                    None => value,
                };
                target.emit(next.clone());
                Some(next)
            });
        });
        result
    }
}
