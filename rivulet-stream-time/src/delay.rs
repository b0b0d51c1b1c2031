// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use crate::wire::{spawn_bound, timestamped_events, Event};
use futures::StreamExt;
use rivulet_stream::{Emitter, Observe};
use std::time::Duration;

/// Extension trait providing [`delay_with_timer`](Self::delay_with_timer).
pub trait DelayExt: Observe {
    /// Replays every delivery, clears and completion included, `duration` after it
    /// happened, in the original order.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn delay_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item>;
}

impl<O: Observe> DelayExt for O {
    fn delay_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item> {
        let result = Emitter::new();
        let mut events = timestamped_events(self, &result, timer.clone());
        let target = result.clone();

        spawn_bound(&result, async move {
            while let Some((event, at)) = events.next().await {
                timer.sleep_until(at + duration).await;
                match event {
                    Event::Next(value) => target.send(value),
                    Event::Complete => {
                        target.complete();
                        break;
                    }
                }
            }
        });

        result
    }
}

/// Delay using [`TokioTimer`](crate::TokioTimer).
#[cfg(feature = "runtime-tokio")]
pub trait DelayWithDefaultTimerExt: DelayExt {
    /// See [`DelayExt::delay_with_timer`].
    fn delay(&self, duration: Duration) -> Emitter<Self::Item> {
        self.delay_with_timer(duration, crate::TokioTimer)
    }
}

#[cfg(feature = "runtime-tokio")]
impl<O: Observe> DelayWithDefaultTimerExt for O {}
