// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emitters driven purely by a [`Timer`].

use crate::timer::Timer;
use crate::wire::spawn_bound;
use chrono::{DateTime, Utc};
use rivulet_stream::Emitter;
use std::time::Duration;

/// Wall-clock time left until `when`, zero if it has passed.
pub(crate) fn until(when: DateTime<Utc>) -> Duration {
    (when - Utc::now()).to_std().unwrap_or(Duration::ZERO)
}

/// Extension trait turning a [`Timer`] into emitter sources.
///
/// # Panics
///
/// Every method panics when called outside a tokio runtime.
pub trait TimerExt: Timer {
    /// Emits `()` once after `duration`, then completes.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    /// use rivulet_stream_time::prelude::*;
    /// use rivulet_stream_time::TokioTimer;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let fired = TokioTimer.after(Duration::from_millis(5)).to_vec();
    /// assert_eq!(fired.await.unwrap(), vec![()]);
    /// # }
    /// ```
    fn after(&self, duration: Duration) -> Emitter<()>;

    /// Emits `()` once at the wall-clock time `when` (immediately if it has
    /// passed), then completes.
    fn at(&self, when: DateTime<Utc>) -> Emitter<()>;

    /// Emits a tick counter every `period`, starting with `0` one period from now.
    /// Never completes on its own.
    fn every(&self, period: Duration) -> Emitter<u64>;
}

impl<TM: Timer> TimerExt for TM {
    fn after(&self, duration: Duration) -> Emitter<()> {
        let result = Emitter::new();
        let target = result.clone();
        let timer = self.clone();
        spawn_bound(&result, async move {
            timer.sleep_future(duration).await;
            target.emit(());
            target.complete();
        });
        result
    }

    fn at(&self, when: DateTime<Utc>) -> Emitter<()> {
        self.after(until(when))
    }

    fn every(&self, period: Duration) -> Emitter<u64> {
        let result = Emitter::new();
        let target = result.clone();
        let timer = self.clone();
        spawn_bound(&result, async move {
            let mut count = 0u64;
            let mut tick = timer.now() + period;
            loop {
                timer.sleep_until(tick).await;
                tick = tick + period;
                target.emit(count);
                count += 1;
            }
        });
        result
    }
}
