// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Extension trait providing [`recent`](Self::recent).
pub trait RecentExt: Observe {
    /// Sliding window over the last `size` present values, oldest first.
    ///
    /// Every present value pushes into the window, evicting the oldest entry once
    /// `size` is exceeded, and the window is emitted as a fresh vector. Clears are
    /// ignored. With `size == 0` every emitted window is empty.
    fn recent(&self, size: usize) -> Emitter<Vec<Self::Item>>;
}

impl<O: Observe> RecentExt for O {
    fn recent(&self, size: usize) -> Emitter<Vec<Self::Item>> {
        let window = Mutex::new(VecDeque::with_capacity(size));
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let Some(value) = value else {
                return;
            };
            let snapshot: Vec<_> = {
                let mut window = window.lock();
                window.push_back(value.clone());
                while window.len() > size {
                    window.pop_front();
                }
                window.iter().cloned().collect()
            };
            target.emit(snapshot);
        });
        result
    }
}
