// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value transformation: [`map`](MapExt::map) and [`tap`](MapExt::tap).

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;

/// Extension trait providing [`map`](Self::map) and [`tap`](Self::tap).
pub trait MapExt: Observe {
    /// Emits `f(v)` for every present value; clears pass through as clears.
    ///
    /// If the source currently holds a value, `f` is applied to it right away, so
    /// the result starts with a value too. Past values are not replayed.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::initial(5);
    /// let doubled = source.map(|x| x * 2);
    /// assert_eq!(doubled.value(), Some(10));
    /// ```
    fn map<U, F>(&self, f: F) -> Emitter<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&Self::Item) -> U + Send + Sync + 'static;

    /// Runs `f` on every delivery and passes it through unchanged.
    fn tap<F>(&self, f: F) -> Emitter<Self::Item>
    where
        F: Fn(&Option<Self::Item>) + Send + Sync + 'static;
}

impl<O: Observe> MapExt for O {
    fn map<U, F>(&self, f: F) -> Emitter<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&Self::Item) -> U + Send + Sync + 'static,
    {
        let result = Emitter::new();
        if let Some(current) = self.value() {
            result.emit(f(&current));
        }
        forward(self, &result, move |target, value| {
            target.send(value.as_ref().map(&f));
        });
        result
    }

    fn tap<F>(&self, f: F) -> Emitter<Self::Item>
    where
        F: Fn(&Option<Self::Item>) + Send + Sync + 'static,
    {
        let result = Emitter::seeded(self.raw_value(), self.default_value());
        forward(self, &result, move |target, value| {
            f(value);
            target.send(value.clone());
        });
        result
    }
}
