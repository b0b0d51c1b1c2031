// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use crate::wire::forward;
use parking_lot::Mutex;
use rivulet_stream::{Emitter, Observe};
use std::time::Duration;

/// Extension trait providing [`throttle_with_timer`](Self::throttle_with_timer).
pub trait ThrottleExt: Observe {
    /// Leading throttle: forwards a delivery, then drops everything for `duration`.
    ///
    /// Unlike a leading debounce, dropped deliveries do not extend the window, so
    /// at most one delivery per `duration` gets through. Completion is forwarded
    /// immediately.
    fn throttle_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item>;
}

impl<O: Observe> ThrottleExt for O {
    fn throttle_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item> {
        let window_end: Mutex<Option<TM::Instant>> = Mutex::new(None);
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let now = timer.now();
            let open = {
                let mut window_end = window_end.lock();
                let open = window_end.map_or(true, |end| now >= end);
                if open {
                    *window_end = Some(now + duration);
                }
                open
            };
            if open {
                target.send(value.clone());
            }
        });
        result
    }
}

/// Throttle using [`TokioTimer`](crate::TokioTimer).
#[cfg(feature = "runtime-tokio")]
pub trait ThrottleWithDefaultTimerExt: ThrottleExt {
    /// See [`ThrottleExt::throttle_with_timer`].
    fn throttle(&self, duration: Duration) -> Emitter<Self::Item> {
        self.throttle_with_timer(duration, crate::TokioTimer)
    }
}

#[cfg(feature = "runtime-tokio")]
impl<O: Observe> ThrottleWithDefaultTimerExt for O {}
