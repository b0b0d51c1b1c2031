// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prefix and suffix gating.
//!
//! Each operator is a gate over present values. While the gate is open, values
//! and clears pass through; while it is closed, both are dropped. `take*` gates
//! start open and complete the result when they close; `skip*` gates start closed
//! and stay open once opened.

use crate::emitter::Emitter;
use crate::forward::forward;
use crate::observable::Observe;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Extension trait providing the take/skip family.
pub trait TakeSkipExt: Observe {
    /// Delivers the first `count` present values, then completes.
    fn take(&self, count: usize) -> Emitter<Self::Item>;

    /// Drops the first `count` present values.
    fn skip(&self, count: usize) -> Emitter<Self::Item>;

    /// Delivers values while `predicate` holds; completes at the first value failing it.
    fn take_while<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// Drops values while `predicate` holds; delivers everything from the first value failing it.
    fn skip_while<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// `take_while` of the negated predicate: completes at the first value satisfying it.
    fn take_until<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;

    /// `skip_while` of the negated predicate: delivers from the first value satisfying it.
    fn skip_until<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;
}

impl<O: Observe> TakeSkipExt for O {
    fn take(&self, count: usize) -> Emitter<Self::Item> {
        let result = Emitter::new();
        if count == 0 {
            result.complete();
            return result;
        }

        let taken = AtomicUsize::new(0);
        forward(self, &result, move |target, value| match value {
            Some(value) => {
                let seen = taken.fetch_add(1, Ordering::SeqCst) + 1;
                if seen <= count {
                    target.emit(value.clone());
                }
                if seen >= count {
                    target.complete();
                }
            }
            None => target.clear(),
        });
        result
    }

    fn skip(&self, count: usize) -> Emitter<Self::Item> {
        let result = Emitter::new();
        let skipped = AtomicUsize::new(0);
        forward(self, &result, move |target, value| match value {
            Some(value) => {
                if skipped.load(Ordering::SeqCst) >= count {
                    target.emit(value.clone());
                } else {
                    skipped.fetch_add(1, Ordering::SeqCst);
                }
            }
            None => {
                if skipped.load(Ordering::SeqCst) >= count {
                    target.clear();
                }
            }
        });
        result
    }

    fn take_while<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let result = Emitter::new();
        forward(self, &result, move |target, value| match value {
            Some(value) if predicate(value) => target.emit(value.clone()),
            Some(_) => target.complete(),
            None => target.clear(),
        });
        result
    }

    fn skip_while<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let result = Emitter::new();
        let open = AtomicBool::new(false);
        forward(self, &result, move |target, value| {
            if let Some(value) = value {
                if !open.load(Ordering::SeqCst) && !predicate(value) {
                    open.store(true, Ordering::SeqCst);
                }
            }
            if open.load(Ordering::SeqCst) {
                target.send(value.clone());
            }
        });
        result
    }

    fn take_until<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        self.take_while(move |value| !predicate(value))
    }

    fn skip_until<P>(&self, predicate: P) -> Emitter<Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        self.skip_while(move |value| !predicate(value))
    }
}
