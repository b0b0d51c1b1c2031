// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all time-driven operator traits.
//!
//! ```
//! use rivulet_stream::prelude::*;
//! use rivulet_stream_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = Emitter::<u32>::new();
//! let handled = clicks.throttle(Duration::from_millis(100));
//!
//! clicks.emit(1);
//! clicks.emit(2);
//! assert_eq!(handled.value(), Some(1));
//! # }
//! ```
//!
//! # Contents
//!
//! - [`DebounceExt`] - Emit after a quiet period, or at its start
//! - [`DelayExt`] - Shift every delivery in time
//! - [`SampleExt`] - Read the current value periodically
//! - [`ThrottleExt`] - At most one delivery per interval
//! - [`CompleteAfterExt`] - Timed completion
//! - [`TimerExt`] - `after`, `at` and `every` sources
//! - the matching `*WithDefaultTimerExt` traits, using [`TokioTimer`](crate::TokioTimer)

pub use crate::complete_after::CompleteAfterExt;
pub use crate::debounce::DebounceExt;
pub use crate::delay::DelayExt;
pub use crate::sample::SampleExt;
pub use crate::schedule::TimerExt;
pub use crate::throttle::ThrottleExt;
pub use crate::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use crate::complete_after::CompleteAfterWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::DebounceWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use crate::delay::DelayWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use crate::sample::SampleWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::ThrottleWithDefaultTimerExt;
