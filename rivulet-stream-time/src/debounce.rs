// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debouncing: trailing ([`debounce`](DebounceExt::debounce_with_timer)) and
//! leading ([`debounce_leading`](DebounceExt::debounce_leading_with_timer)).

use crate::timer::Timer;
use crate::wire::{forward, spawn_bound, timestamped_events, Event};
use futures::StreamExt;
use parking_lot::Mutex;
use rivulet_stream::{Emitter, Observe};
use std::time::Duration;

/// Extension trait providing the debounce operators with an explicit timer.
pub trait DebounceExt: Observe {
    /// Trailing debounce.
    ///
    /// Every delivery, clears included, restarts a quiet period of `duration`;
    /// once a quiet period elapses, the latest delivery is forwarded. When the
    /// source completes, a pending delivery is forwarded right away and the result
    /// completes.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn debounce_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item>;

    /// Leading debounce.
    ///
    /// A delivery is forwarded immediately if none arrived during the preceding
    /// `duration`; every delivery, forwarded or not, extends the quiet window.
    fn debounce_leading_with_timer<TM: Timer>(
        &self,
        duration: Duration,
        timer: TM,
    ) -> Emitter<Self::Item>;
}

impl<O: Observe> DebounceExt for O {
    fn debounce_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) -> Emitter<Self::Item> {
        let result = Emitter::new();
        let mut events = timestamped_events(self, &result, timer.clone());
        let target = result.clone();

        spawn_bound(&result, async move {
            let mut pending: Option<(Option<O::Item>, TM::Instant)> = None;
            loop {
                let deadline = pending.as_ref().map(|(_, deadline)| *deadline);
                let event = match deadline {
                    None => events.next().await,
                    Some(deadline) => tokio::select! {
                        biased;
                        event = events.next() => event,
                        () = timer.sleep_until(deadline) => {
                            if let Some((value, _)) = pending.take() {
                                target.send(value);
                            }
                            continue;
                        }
                    },
                };

                match event {
                    Some((Event::Next(value), at)) => {
                        // Queued behind an already expired quiet period.
                        if deadline.is_some_and(|deadline| at >= deadline) {
                            if let Some((value, _)) = pending.take() {
                                target.send(value);
                            }
                        }
                        pending = Some((value, at + duration));
                    }
                    Some((Event::Complete, _)) => {
                        if let Some((value, _)) = pending.take() {
                            target.send(value);
                        }
                        target.complete();
                        break;
                    }
                    None => break,
                }
            }
        });

        result
    }

    fn debounce_leading_with_timer<TM: Timer>(
        &self,
        duration: Duration,
        timer: TM,
    ) -> Emitter<Self::Item> {
        let quiet_until: Mutex<Option<TM::Instant>> = Mutex::new(None);
        let result = Emitter::new();
        forward(self, &result, move |target, value| {
            let now = timer.now();
            let open = {
                let mut quiet_until = quiet_until.lock();
                let open = quiet_until.map_or(true, |until| now >= until);
                *quiet_until = Some(now + duration);
                open
            };
            if open {
                target.send(value.clone());
            }
        });
        result
    }
}

/// Debounce operators using [`TokioTimer`](crate::TokioTimer).
#[cfg(feature = "runtime-tokio")]
pub trait DebounceWithDefaultTimerExt: DebounceExt {
    /// Trailing debounce; see [`DebounceExt::debounce_with_timer`].
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    /// use rivulet_stream_time::prelude::*;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let keystrokes = Emitter::<&str>::new();
    /// let settled = keystrokes.debounce(Duration::from_millis(10));
    /// let search = settled.next();
    ///
    /// keystrokes.emit("r");
    /// keystrokes.emit("ru");
    /// keystrokes.emit("rust");
    ///
    /// assert_eq!(search.await.unwrap(), "rust");
    /// # }
    /// ```
    fn debounce(&self, duration: Duration) -> Emitter<Self::Item> {
        self.debounce_with_timer(duration, crate::TokioTimer)
    }

    /// Leading debounce; see [`DebounceExt::debounce_leading_with_timer`].
    fn debounce_leading(&self, duration: Duration) -> Emitter<Self::Item> {
        self.debounce_leading_with_timer(duration, crate::TokioTimer)
    }
}

#[cfg(feature = "runtime-tokio")]
impl<O: Observe> DebounceWithDefaultTimerExt for O {}
