// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-driven operators for rivulet emitters.
//!
//! Every operator comes in two forms: `xxx_with_timer(duration, timer)` on the
//! `XxxExt` trait, generic over any [`Timer`], and `xxx(duration)` on the
//! `XxxWithDefaultTimerExt` trait, which uses [`TokioTimer`].
//!
//! Time-driven work runs on background tasks that re-enter the ordinary,
//! synchronous emission path. Those tasks stop when the emitter they feed
//! completes.
//!
//! # Operators
//!
//! - **[`debounce`](DebounceWithDefaultTimerExt::debounce)** /
//!   **[`debounce_leading`](DebounceWithDefaultTimerExt::debounce_leading)**
//! - **[`throttle`](ThrottleWithDefaultTimerExt::throttle)**
//! - **[`sample`](SampleWithDefaultTimerExt::sample)**
//! - **[`delay`](DelayWithDefaultTimerExt::delay)**
//! - **[`complete_after`](CompleteAfterWithDefaultTimerExt::complete_after)** /
//!   **[`complete_at`](CompleteAfterWithDefaultTimerExt::complete_at)**
//! - **[`after`](TimerExt::after)**, **[`at`](TimerExt::at)**, **[`every`](TimerExt::every)**
//!
//! # Testing
//!
//! [`TokioTimer`] reads `tokio::time`. Under `tokio::time::pause` the clock jumps
//! straight to the next pending timer whenever the runtime is idle, so awaiting a
//! `sleep` in a test lets every earlier timer fire first.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod complete_after;
mod debounce;
mod delay;
pub mod runtimes;
mod sample;
mod schedule;
mod throttle;
pub mod timer;
mod wire;

pub mod prelude;

pub use complete_after::CompleteAfterExt;
pub use debounce::DebounceExt;
pub use delay::DelayExt;
pub use sample::SampleExt;
pub use schedule::TimerExt;
pub use throttle::ThrottleExt;
pub use timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use complete_after::CompleteAfterWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use debounce::DebounceWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use delay::DelayWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use runtimes::TokioTimer;
#[cfg(feature = "runtime-tokio")]
pub use sample::SampleWithDefaultTimerExt;
#[cfg(feature = "runtime-tokio")]
pub use throttle::ThrottleWithDefaultTimerExt;
