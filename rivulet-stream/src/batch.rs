// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-size grouping of present values.

use crate::emitter::Emitter;
use crate::filter::FilterExt;
use crate::forward::forward_with;
use crate::map::MapExt;
use crate::observable::Observe;
use parking_lot::Mutex;
use std::mem::take;
use std::sync::Arc;

/// Extension trait providing [`batch`](Self::batch) and its tuple forms.
pub trait BatchExt: Observe {
    /// Groups present values into vectors of `size`.
    ///
    /// Each full batch is emitted as an owned vector and the accumulator starts
    /// over. When the source completes, a non-empty partial batch is emitted
    /// before the result completes. Clears are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::<i32>::new();
    /// let batches = source.batch(2);
    ///
    /// source.emit(1);
    /// source.emit(2);
    /// assert_eq!(batches.value(), Some(vec![1, 2]));
    ///
    /// source.emit(3);
    /// source.complete();
    /// assert_eq!(batches.value(), Some(vec![3]));
    /// assert!(batches.is_completed());
    /// ```
    fn batch(&self, size: usize) -> Emitter<Vec<Self::Item>>;

    /// Consecutive pairs: `batch(2)` unpacked into tuples. A trailing partial batch is dropped.
    fn in_pairs(&self) -> Emitter<(Self::Item, Self::Item)>;

    /// Consecutive triplets. A trailing partial batch is dropped.
    fn in_triplets(&self) -> Emitter<(Self::Item, Self::Item, Self::Item)>;

    /// Consecutive quadruplets. A trailing partial batch is dropped.
    fn in_quadruplets(&self) -> Emitter<(Self::Item, Self::Item, Self::Item, Self::Item)>;
}

impl<O: Observe> BatchExt for O {
    fn batch(&self, size: usize) -> Emitter<Vec<Self::Item>> {
        assert!(size != 0, "batch size must be non-zero");

        let pending = Arc::new(Mutex::new(Vec::with_capacity(size)));
        let flush = pending.clone();
        let result = Emitter::new();
        forward_with(
            self,
            &result,
            move |target, value| {
                let Some(value) = value else {
                    return;
                };
                let full = {
                    let mut pending = pending.lock();
                    pending.push(value.clone());
                    (pending.len() >= size).then(|| take(&mut *pending))
                };
                if let Some(full) = full {
                    target.emit(full);
                }
            },
            move |target| {
                let rest = take(&mut *flush.lock());
                if !rest.is_empty() {
                    target.emit(rest);
                }
                target.complete();
            },
        );
        result
    }

    fn in_pairs(&self) -> Emitter<(Self::Item, Self::Item)> {
        self.batch(2)
            .filter(|batch| batch.len() == 2)
            .map(|batch| (batch[0].clone(), batch[1].clone()))
    }

    fn in_triplets(&self) -> Emitter<(Self::Item, Self::Item, Self::Item)> {
        self.batch(3)
            .filter(|batch| batch.len() == 3)
            .map(|batch| (batch[0].clone(), batch[1].clone(), batch[2].clone()))
    }

    fn in_quadruplets(&self) -> Emitter<(Self::Item, Self::Item, Self::Item, Self::Item)> {
        self.batch(4).filter(|batch| batch.len() == 4).map(|batch| {
            (
                batch[0].clone(),
                batch[1].clone(),
                batch[2].clone(),
                batch[3].clone(),
            )
        })
    }
}
