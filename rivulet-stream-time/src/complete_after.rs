// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timed completion of an emitter.

use crate::schedule::until;
use crate::timer::Timer;
use crate::wire::spawn_bound;
use chrono::{DateTime, Utc};
use rivulet_core::trace;
use rivulet_stream::Emitter;
use std::time::Duration;

/// Extension trait scheduling [`Emitter::complete`] with an explicit timer.
///
/// The scheduled completion is dropped if the emitter completes earlier.
pub trait CompleteAfterExt {
    /// Completes the emitter after `duration`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn complete_after_with_timer<TM: Timer>(&self, duration: Duration, timer: TM);

    /// Completes the emitter at the wall-clock time `when`, right away if it has passed.
    fn complete_at_with_timer<TM: Timer>(&self, when: DateTime<Utc>, timer: TM);
}

impl<T: Clone + Send + Sync + 'static> CompleteAfterExt for Emitter<T> {
    fn complete_after_with_timer<TM: Timer>(&self, duration: Duration, timer: TM) {
        let target = self.clone();
        spawn_bound(self, async move {
            timer.sleep_future(duration).await;
            trace!("scheduled completion reached");
            target.complete();
        });
    }

    fn complete_at_with_timer<TM: Timer>(&self, when: DateTime<Utc>, timer: TM) {
        self.complete_after_with_timer(until(when), timer);
    }
}

/// Timed completion using [`TokioTimer`](crate::TokioTimer).
#[cfg(feature = "runtime-tokio")]
pub trait CompleteAfterWithDefaultTimerExt: CompleteAfterExt {
    /// See [`CompleteAfterExt::complete_after_with_timer`].
    fn complete_after(&self, duration: Duration) {
        self.complete_after_with_timer(duration, crate::TokioTimer);
    }

    /// See [`CompleteAfterExt::complete_at_with_timer`].
    fn complete_at(&self, when: DateTime<Utc>) {
        self.complete_at_with_timer(when, crate::TokioTimer);
    }
}

#[cfg(feature = "runtime-tokio")]
impl<T: Clone + Send + Sync + 'static> CompleteAfterWithDefaultTimerExt for Emitter<T> {}
