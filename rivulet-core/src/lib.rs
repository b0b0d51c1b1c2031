// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks shared by every rivulet crate.
//!
//! - [`Channel`] / [`Subscription`]: synchronous, ordered broadcast delivery
//! - [`RivuletError`] / [`Result`]: the error type surfaced by value-demanding accessors
//! - [`ValueExt`]: pattern-match helpers on `Option<T>`, the "maybe a value" type of rivulet
//! - [`Collector`]: initializer / accumulator / finalizer triple consumed by collecting operators
//! - [`CancellationToken`] / [`RivuletTask`]: background work for timers and bridges

pub mod cancellation_token;
pub mod channel;
pub mod collector;
pub mod error;
pub mod logging;
#[cfg(feature = "runtime-tokio")]
pub mod rivulet_task;
pub mod value;

pub use self::cancellation_token::CancellationToken;
pub use self::channel::{Channel, Subscription};
pub use self::collector::Collector;
pub use self::error::{Result, ResultExt, RivuletError};
#[cfg(feature = "runtime-tokio")]
pub use self::rivulet_task::RivuletTask;
pub use self::value::ValueExt;
