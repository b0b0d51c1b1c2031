// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Independent copies of a stream.

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use std::sync::Arc;

/// Extension trait providing [`fork`](Self::fork) and [`default_if_empty`](Self::default_if_empty).
pub trait ForkExt: Observe {
    /// A new emitter that starts from this stream's raw value and default, then
    /// follows every raw delivery, clears included, and its completion.
    ///
    /// The source's default is copied once; afterwards a source clear reaches the
    /// fork as a clear, even while the source shows its default.
    ///
    /// Unlike `Clone` on a handle, the fork has its own state: its default can be
    /// changed and it can be completed without touching the source.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::initial(1);
    /// let copy = source.fork();
    /// assert_eq!(copy.value(), Some(1));
    ///
    /// copy.complete();
    /// source.emit(2);
    /// assert!(!source.is_completed());
    /// assert_eq!(copy.value(), Some(1));
    /// ```
    fn fork(&self) -> Emitter<Self::Item>;

    /// A fork whose default is `default`, so an absent value reads as `default`,
    /// whatever default the source itself has.
    fn default_if_empty(&self, default: Self::Item) -> Emitter<Self::Item>;
}

impl<O: Observe> ForkExt for O {
    fn fork(&self) -> Emitter<Self::Item> {
        let result = Emitter::seeded(self.raw_value(), self.default_value());
        let source = Arc::downgrade(&self.as_observable().shared);
        forward(self, &result, move |target, value| {
            // A present delivery over an absent raw value is the source's default.
            let raw = match source.upgrade() {
                Some(source) if source.raw_value().is_none() => None,
                _ => value.clone(),
            };
            target.send(raw);
        });
        result
    }

    fn default_if_empty(&self, default: Self::Item) -> Emitter<Self::Item> {
        let result = self.fork();
        result.set_default(default);
        result
    }
}
