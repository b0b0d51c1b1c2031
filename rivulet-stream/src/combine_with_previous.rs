// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use parking_lot::Mutex;

/// Extension trait providing [`combine_with_previous`](Self::combine_with_previous).
pub trait CombineWithPreviousExt: Observe {
    /// Pairs every present value with the one before it.
    ///
    /// The first value is paired with `None`. The source's current value counts as
    /// the previous one for the first delivery. Clears are ignored.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// let source = Emitter::<i32>::new();
    /// let pairs = source.combine_with_previous();
    ///
    /// source.emit(1);
    /// assert_eq!(pairs.value(), Some((None, 1)));
    ///
    /// source.emit(2);
    /// assert_eq!(pairs.value(), Some((Some(1), 2)));
    /// ```
    fn combine_with_previous(&self) -> Emitter<(Option<Self::Item>, Self::Item)>;
}

impl<O: Observe> CombineWithPreviousExt for O {
    fn combine_with_previous(&self) -> Emitter<(Option<Self::Item>, Self::Item)> {
        let previous = Mutex::new(self.raw_value());
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let Some(value) = value else {
                return;
            };
            let before = previous.lock().replace(value.clone());
            target.emit((before, value.clone()));
        });
        result
    }
}
