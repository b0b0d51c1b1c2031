// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value streams with a current value: observables, emitters and their combinators.
//!
//! An [`Emitter`] holds a current value (possibly absent), delivers every change to
//! its listeners synchronously, and eventually completes. An [`Observable`] is the
//! read-only view of the same stream. Both implement [`Observe`], and every
//! combinator is an extension trait over `Observe` returning a new, derived
//! [`Emitter`].
//!
//! # Architecture
//!
//! - **Current value**: each stream stores its last raw value plus an optional
//!   default; readers see the raw value, or the default while the raw value is absent
//! - **Synchronous fan-out**: `emit`, `clear` and `complete` run listeners on the
//!   caller's thread, in registration order, with no lock held
//! - **Derived emitters**: combinators subscribe to their source and complete with it;
//!   the source is never written to
//! - **Completion**: terminal and monotonic, triggered explicitly, by a completion
//!   predicate, by another stream's completion, or by a completed scope
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)**, **[`tap`](MapExt::tap)**
//! - **[`combine_with_previous`](CombineWithPreviousExt::combine_with_previous)**
//! - **[`fork`](ForkExt::fork)**, **[`default_if_empty`](ForkExt::default_if_empty)**
//! - **[`repeat`](RepeatExt::repeat)**
//!
//! ### Filtering and gating
//!
//! - **[`filter`](FilterExt::filter)**, **[`filter_not`](FilterExt::filter_not)**,
//!   **[`filter_present`](FilterExt::filter_present)**
//! - **[`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)**
//! - **[`take`](TakeSkipExt::take)**, **[`skip`](TakeSkipExt::skip)** and their
//!   `_while` / `_until` forms
//! - **[`split`](SplitExt::split)**
//!
//! ### Grouping and accumulation
//!
//! - **[`batch`](BatchExt::batch)**, **[`in_pairs`](BatchExt::in_pairs)**,
//!   **[`recent`](RecentExt::recent)**
//! - **[`progressively_reduce`](ReduceExt::progressively_reduce)**,
//!   **[`progressively_collect`](CollectExt::progressively_collect)**
//!
//! ### Terminal futures
//!
//! - **[`reduce`](ReduceExt::reduce)**, **[`collect`](CollectExt::collect)**,
//!   **[`to_vec`](CollectExt::to_vec)**, **[`next`](NextExt::next)**
//!
//! ### Fan-in and wiring
//!
//! - **[`merge`]**
//! - **[`push_to`](PushToExt::push_to)**, [`Emitter::pull_from`], [`Emitter::map_with`],
//!   [`Emitter::synchronize_with`]
//!
//! # Example
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let source = Emitter::initial(5);
//! let doubled = source.map(|x| x * 2);
//! assert_eq!(doubled.value(), Some(10));
//!
//! let pairs = source.in_pairs();
//! source.emit(1);
//! source.emit(2);
//! assert_eq!(pairs.value(), Some((1, 2)));
//! ```
//!
//! # Feature Flags
//!
//! - **`runtime-tokio`** (default): bridging constructors
//!   ([`Emitter::from_stream`] and friends)
//! - **`tracing`**: lifecycle events through `tracing`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[doc(hidden)]
pub mod forward;
mod shared;

pub mod batch;
#[cfg(feature = "runtime-tokio")]
pub mod bridge;
pub mod collect;
pub mod combine_with_previous;
pub mod distinct_until_changed;
pub mod emitter;
pub mod filter;
pub mod fork;
pub mod map;
pub mod merge;
pub mod next;
pub mod observable;
pub mod prelude;
pub mod recent;
pub mod reduce;
pub mod repeat;
pub mod split;
pub mod take_skip;
pub mod terminal;
pub mod wiring;

pub use batch::BatchExt;
pub use collect::CollectExt;
pub use combine_with_previous::CombineWithPreviousExt;
pub use distinct_until_changed::DistinctUntilChangedExt;
pub use emitter::Emitter;
pub use filter::FilterExt;
pub use fork::ForkExt;
pub use map::MapExt;
pub use merge::merge;
pub use next::NextExt;
pub use observable::{Observable, Observe};
pub use recent::RecentExt;
pub use reduce::ReduceExt;
pub use repeat::RepeatExt;
pub use split::SplitExt;
pub use take_skip::TakeSkipExt;
pub use terminal::Terminal;
pub use wiring::PushToExt;

pub use rivulet_core::{Collector, Result, RivuletError, Subscription, ValueExt};
