// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Reactive value streams. An [`Emitter`] holds a current value, possibly absent,
//! pushes every change to its listeners synchronously, and completes exactly once.
//! Combinators derive new emitters from existing ones, and wiring connects emitters
//! that already exist.
//!
//! ## Design Philosophy
//!
//! - **Current value first**: every stream can be queried with `value()` at any time;
//!   deliveries are `Option<T>`, `None` meaning the stream was cleared
//! - **Synchronous core**: `emit`, `clear` and `complete` return once every listener
//!   has run; only timers and future/stream bridges are asynchronous
//! - **One-way derivation**: a derived emitter never writes back to its source and
//!   completes with it
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! let temperature = Emitter::initial(21);
//! let warnings = temperature
//!     .filter(|celsius| *celsius >= 30)
//!     .map(|celsius| format!("{celsius} degrees"));
//!
//! temperature.emit(25);
//! assert_eq!(warnings.value(), None);
//!
//! temperature.emit(32);
//! assert_eq!(warnings.value(), Some("32 degrees".to_string()));
//!
//! temperature.complete();
//! assert!(warnings.is_completed());
//! ```
//!
//! ## Crates
//!
//! - [`rivulet_core`]: channel, errors, collectors, tasks
//! - [`rivulet_stream`]: emitters, observables and combinators
//! - `rivulet_stream_time` (feature `time`): debounce, throttle, sample, delay,
//!   timed completion

pub use rivulet_core::{
    CancellationToken, Channel, Collector, Result, ResultExt, RivuletError, Subscription,
    ValueExt,
};
#[cfg(feature = "runtime-tokio")]
pub use rivulet_core::RivuletTask;
pub use rivulet_stream::{merge, Emitter, Observable, Observe, Terminal};

pub use rivulet_core;
pub use rivulet_stream;
#[cfg(feature = "time")]
pub use rivulet_stream_time;

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_stream::prelude::*;

    #[cfg(feature = "time")]
    pub use rivulet_stream_time::prelude::*;
    #[cfg(all(feature = "time", feature = "runtime-tokio"))]
    pub use rivulet_stream_time::TokioTimer;
}
