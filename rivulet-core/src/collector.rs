// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mutable-reduction recipe consumed by the collecting operators.
//!
//! A [`Collector<T, A, R>`] describes how to fold values of type `T` into an
//! accumulator `A` and how to turn that accumulator into a result `R`:
//!
//! ```
//! use rivulet_core::Collector;
//!
//! let average = Collector::new(
//!     || (0u32, 0u32),
//!     |(sum, count), value: &u32| (sum + value, count + 1),
//!     |(sum, count)| if *count == 0 { 0 } else { sum / count },
//! );
//!
//! let acc = [2, 4, 6].iter().fold(average.initial(), |acc, v| average.accumulate(acc, v));
//! assert_eq!(average.finish(&acc), 4);
//! ```

use std::fmt;
use std::sync::Arc;

type Initializer<A> = Arc<dyn Fn() -> A + Send + Sync>;
type Accumulator<T, A> = Arc<dyn Fn(A, &T) -> A + Send + Sync>;
type Finalizer<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// Initializer, accumulator and finalizer bundled together.
///
/// Cloning is cheap; all clones share the same functions.
pub struct Collector<T, A, R> {
    initializer: Initializer<A>,
    accumulator: Accumulator<T, A>,
    finalizer: Finalizer<A, R>,
}

impl<T, A, R> Collector<T, A, R> {
    pub fn new<I, F, G>(initializer: I, accumulator: F, finalizer: G) -> Self
    where
        I: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, &T) -> A + Send + Sync + 'static,
        G: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            initializer: Arc::new(initializer),
            accumulator: Arc::new(accumulator),
            finalizer: Arc::new(finalizer),
        }
    }

    /// A fresh accumulator.
    pub fn initial(&self) -> A {
        (self.initializer)()
    }

    /// Folds `value` into `acc`.
    pub fn accumulate(&self, acc: A, value: &T) -> A {
        (self.accumulator)(acc, value)
    }

    /// Produces the result for the current accumulator without consuming it.
    pub fn finish(&self, acc: &A) -> R {
        (self.finalizer)(acc)
    }
}

impl<T: Clone + 'static> Collector<T, Vec<T>, Vec<T>> {
    /// Collects every value, in arrival order.
    #[must_use]
    pub fn to_vec() -> Self {
        Self::new(
            Vec::new,
            |mut acc: Vec<T>, value: &T| {
                acc.push(value.clone());
                acc
            },
            Clone::clone,
        )
    }
}

impl<T: 'static> Collector<T, usize, usize> {
    /// Counts values.
    #[must_use]
    pub fn counting() -> Self {
        Self::new(|| 0, |count, _: &T| count + 1, |count| *count)
    }
}

impl<T, A, R> Clone for Collector<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            initializer: self.initializer.clone(),
            accumulator: self.accumulator.clone(),
            finalizer: self.finalizer.clone(),
        }
    }
}

impl<T, A, R> fmt::Debug for Collector<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector").finish_non_exhaustive()
    }
}
