// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value filtering.
//!
//! Filters only ever forward present values: a clear on the source never reaches
//! the filtered stream. Completion always does.

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;

/// Extension trait providing [`filter`](Self::filter), [`filter_not`](Self::filter_not)
/// and [`filter_present`](Self::filter_present).
pub trait FilterExt: Observe {
    /// Forwards present values satisfying `predicate`.
    ///
    /// The source's current value is forwarded right away if it passes.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::<i32>::new();
    /// let even = source.filter(|x| x % 2 == 0);
    ///
    /// source.emit(3);
    /// assert_eq!(even.value(), None);
    /// source.emit(4);
    /// assert_eq!(even.value(), Some(4));
    /// ```
    fn filter<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// Forwards present values failing `predicate`.
    fn filter_not<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// Forwards every present value, dropping clears.
    fn filter_present(&self) -> Emitter<Self::Item>;
}

impl<O: Observe> FilterExt for O {
    fn filter<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let result = Emitter::new();
        if let Some(current) = self.value().filter(|value| predicate(value)) {
            result.emit(current);
        }
        forward(self, &result, move |target, value| {
            if let Some(value) = value.as_ref().filter(|value| predicate(value)) {
                target.emit(value.clone());
            }
        });
        result
    }

    fn filter_not<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        self.filter(move |value| !predicate(value))
    }

    fn filter_present(&self) -> Emitter<Self::Item> {
        self.filter(|_| true)
    }
}
