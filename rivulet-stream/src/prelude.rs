// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let readings = Emitter::<i32>::new();
//! let alarms = readings
//!     .filter(|celsius: &i32| *celsius > 40)
//!     .distinct_until_changed()
//!     .map(|celsius| format!("too hot: {celsius}"));
//!
//! readings.emit(20);
//! readings.emit(45);
//! assert_eq!(alarms.value(), Some("too hot: 45".to_string()));
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`MapExt`] - Transform values, observe deliveries
//! - [`FilterExt`] - Keep values by predicate
//! - [`DistinctUntilChangedExt`] - Suppress consecutive duplicates
//! - [`TakeSkipExt`] - Prefix and suffix gating
//! - [`BatchExt`] - Fixed-size groups and tuples
//! - [`RecentExt`] - Sliding window of the latest values
//! - [`RepeatExt`] - Repeat every value
//! - [`ForkExt`] - Independent copies, default substitution
//! - [`CombineWithPreviousExt`] - Pair each value with its predecessor
//! - [`SplitExt`] - Partition by predicate
//! - [`ReduceExt`] / [`CollectExt`] - Terminal and progressive accumulation
//! - [`NextExt`] - Await the next value
//! - [`PushToExt`] - One-way wiring into an emitter
//! - [`ValueExt`] - Helpers on `Option<T>`
//!
//! ## Types
//!
//! - [`Emitter`], [`Observable`], [`Observe`]
//! - [`Collector`], [`Subscription`], [`Terminal`]

pub use crate::batch::BatchExt;
pub use crate::collect::CollectExt;
pub use crate::combine_with_previous::CombineWithPreviousExt;
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::emitter::Emitter;
pub use crate::filter::FilterExt;
pub use crate::fork::ForkExt;
pub use crate::map::MapExt;
pub use crate::merge::merge;
pub use crate::next::NextExt;
pub use crate::observable::{Observable, Observe};
pub use crate::recent::RecentExt;
pub use crate::reduce::ReduceExt;
pub use crate::repeat::RepeatExt;
pub use crate::split::SplitExt;
pub use crate::take_skip::TakeSkipExt;
pub use crate::terminal::Terminal;
pub use crate::wiring::PushToExt;
pub use rivulet_core::{Collector, Subscription, ValueExt};
