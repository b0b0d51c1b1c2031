// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Suppression of repeated deliveries.

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;

/// Extension trait providing [`distinct_until_changed`](Self::distinct_until_changed).
pub trait DistinctUntilChangedExt: Observe
where
    Self::Item: PartialEq,
{
    /// Drops a delivery equal to the previously delivered one.
    ///
    /// Absence takes part in the comparison: a clear after a value is delivered,
    /// a clear after a clear is not.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::<i32>::new();
    /// let distinct = source.distinct_until_changed();
    /// let changes = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    /// let counter = changes.clone();
    /// distinct.subscribe(move |_| {
    ///     counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    /// });
    ///
    /// source.emit(1);
    /// source.emit(1);
    /// source.clear();
    /// source.clear();
    ///
    /// assert_eq!(changes.load(std::sync::atomic::Ordering::SeqCst), 2);
    /// ```
    fn distinct_until_changed(&self) -> Emitter<Self::Item>;
}

impl<O> DistinctUntilChangedExt for O
where
    O: Observe,
    O::Item: PartialEq,
{
    fn distinct_until_changed(&self) -> Emitter<Self::Item> {
        let result = Emitter::new();
        if let Some(current) = self.value() {
            result.emit(current);
        }
        forward(self, &result, |target, value| {
            if target.raw_value() != *value {
                target.send(value.clone());
            }
        });
        result
    }
}
