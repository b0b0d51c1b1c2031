// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use crate::wire::{forward, spawn_bound};
use rivulet_stream::{Emitter, Observe};
use std::time::Duration;

/// Extension trait providing [`sample_with_timer`](Self::sample_with_timer).
pub trait SampleExt: Observe {
    /// On every tick of `interval`, emits the source's current value, or clears when
    /// the source has none.
    ///
    /// Only ticks produce output; source deliveries between ticks are not seen. The
    /// result completes with the source.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn sample_with_timer<TM: Timer>(&self, interval: Duration, timer: TM) -> Emitter<Self::Item>;
}

impl<O: Observe> SampleExt for O {
    fn sample_with_timer<TM: Timer>(&self, interval: Duration, timer: TM) -> Emitter<Self::Item> {
        let result = Emitter::new();
        forward(self, &result, |_, _| {});

        let source = self.as_observable();
        let target = result.clone();
        spawn_bound(&result, async move {
            let mut tick = timer.now() + interval;
            loop {
                timer.sleep_until(tick).await;
                tick = tick + interval;
                target.send(source.value());
            }
        });

        result
    }
}

/// Sampling using [`TokioTimer`](crate::TokioTimer).
#[cfg(feature = "runtime-tokio")]
pub trait SampleWithDefaultTimerExt: SampleExt {
    /// See [`SampleExt::sample_with_timer`].
    fn sample(&self, interval: Duration) -> Emitter<Self::Item> {
        self.sample_with_timer(interval, crate::TokioTimer)
    }
}

#[cfg(feature = "runtime-tokio")]
impl<O: Observe> SampleWithDefaultTimerExt for O {}
