// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in of several streams into one.
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let left = Emitter::<i32>::new();
//! let right = Emitter::<i32>::new();
//! let merged = merge([left.clone(), right.clone()]);
//!
//! left.emit(1);
//! assert_eq!(merged.value(), Some(1));
//! right.emit(2);
//! assert_eq!(merged.value(), Some(2));
//!
//! left.complete();
//! assert!(!merged.is_completed());
//! right.complete();
//! assert!(merged.is_completed());
//! ```

use crate::emitter::Emitter;
use crate::forward::subscribe_for;
use crate::observable::Observe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Merges `sources` into a new emitter.
///
/// Present values are emitted as they arrive and clears clear the result. The
/// result completes once every source has completed; with no sources it is
/// completed from the start. There is no ordering across sources beyond the
/// order in which their deliveries happen.
///
/// To mix emitters and observables, convert with [`Observe::as_observable`].
pub fn merge<O, I>(sources: I) -> Emitter<O::Item>
where
    O: Observe,
    I: IntoIterator<Item = O>,
{
    let sources: Vec<O> = sources.into_iter().collect();
    let result = Emitter::new();
    let total = sources.len();
    if total == 0 {
        result.complete();
        return result;
    }

    let completed = Arc::new(AtomicUsize::new(0));
    for source in &sources {
        let next_target = result.clone();
        let complete_target = result.clone();
        let completed = completed.clone();
        subscribe_for(
            source,
            &result,
            move |value| next_target.send(value.clone()),
            move || {
                if completed.fetch_add(1, Ordering::SeqCst) + 1 == total {
                    complete_target.complete();
                }
            },
        );
    }
    result
}

impl<T: Clone + Send + Sync + 'static> Emitter<T> {
    /// Merges `sources` into a new emitter; see [`merge`].
    pub fn merge<O, I>(sources: I) -> Emitter<T>
    where
        O: Observe<Item = T>,
        I: IntoIterator<Item = O>,
    {
        merge(sources)
    }
}
