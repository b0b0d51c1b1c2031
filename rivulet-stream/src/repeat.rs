// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;

/// Extension trait providing [`repeat`](Self::repeat).
pub trait RepeatExt: Observe {
    /// Emits every present value `times` times in a row. Clears pass through once.
    fn repeat(&self, times: usize) -> Emitter<Self::Item>;
}

impl<O: Observe> RepeatExt for O {
    fn repeat(&self, times: usize) -> Emitter<Self::Item> {
        let result = Emitter::new();
        forward(self, &result, move |target, value| match value {
            Some(value) => {
                for _ in 0..times {
                    target.emit(value.clone());
                }
            }
            None => target.clear(),
        });
        result
    }
}
