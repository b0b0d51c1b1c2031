// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Futures resolved by a stream's completion.

use crate::observable::Observe;
use futures::future::FusedFuture;
use futures_channel::oneshot;
use parking_lot::Mutex;
use rivulet_core::{warn, Result, RivuletError};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Future returned by terminal operations such as [`reduce`](crate::ReduceExt::reduce),
/// [`collect`](crate::CollectExt::collect) and [`next`](crate::NextExt::next).
///
/// Resolves once the stream has produced what the operation waits for. If every
/// handle to the source is dropped first, it resolves to
/// [`RivuletError::MissingValue`].
#[must_use = "futures do nothing unless awaited"]
#[derive(Debug)]
pub struct Terminal<R> {
    receiver: oneshot::Receiver<Result<R>>,
}

impl<R> Terminal<R> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<R>>) -> Self {
        Self { receiver }
    }
}

impl<R> Future for Terminal<R> {
    type Output = Result<R>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(oneshot::Canceled)) => {
                warn!("terminal operation lost its source before completion");
                Poll::Ready(Err(RivuletError::missing_value(
                    "source dropped before completion",
                )))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<R> FusedFuture for Terminal<R> {
    fn is_terminated(&self) -> bool {
        self.receiver.is_terminated()
    }
}

/// An accumulator stepped outside its lock, so a step may re-enter the source.
///
/// Values delivered while a step runs queue up and are folded, in order, by the
/// call already stepping.
pub(crate) struct Accumulator<A, V> {
    slot: Mutex<Slot<A, V>>,
}

struct Slot<A, V> {
    acc: Option<A>,
    backlog: VecDeque<V>,
    closer: Option<Box<dyn FnOnce(A) + Send>>,
}

impl<A: Send, V: Send> Accumulator<A, V> {
    pub(crate) fn new(initial: A) -> Self {
        Self {
            slot: Mutex::new(Slot {
                acc: Some(initial),
                backlog: VecDeque::new(),
                closer: None,
            }),
        }
    }

    /// Folds `value` and anything queued behind it with `step`.
    pub(crate) fn fold(&self, value: V, mut step: impl FnMut(A, V) -> A) {
        let mut current = {
            let mut slot = self.slot.lock();
            slot.backlog.push_back(value);
            match slot.acc.take() {
                Some(acc) => acc,
                None => return,
            }
        };

        loop {
            let value = {
                let mut slot = self.slot.lock();
                match slot.backlog.pop_front() {
                    Some(value) => value,
                    None => {
                        match slot.closer.take() {
                            Some(closer) => {
                                drop(slot);
                                closer(current);
                            }
                            None => slot.acc = Some(current),
                        }
                        return;
                    }
                }
            };
            current = step(current, value);
        }
    }

    /// Hands the accumulator to `closer` once no step is running.
    pub(crate) fn close(&self, closer: impl FnOnce(A) + Send + 'static) {
        let mut slot = self.slot.lock();
        match slot.acc.take() {
            Some(acc) => {
                drop(slot);
                closer(acc);
            }
            None => slot.closer = Some(Box::new(closer)),
        }
    }
}

/// Folds every delivery into `initial` and resolves with `finish(acc)` once the
/// source completes.
pub(crate) fn fold_to_completion<O, A, R, S, F>(
    source: &O,
    initial: A,
    step: S,
    finish: F,
) -> Terminal<R>
where
    O: Observe,
    A: Send + 'static,
    R: Send + 'static,
    S: Fn(A, &Option<O::Item>) -> A + Send + Sync + 'static,
    F: FnOnce(A) -> Result<R> + Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let acc = Arc::new(Accumulator::new(initial));
    let last = acc.clone();

    // Dropped without being called when the source is dropped, which cancels the receiver.
    source.subscribe_with(
        move |value| acc.fold(value.clone(), |current, value| step(current, &value)),
        move || {
            last.close(move |acc| {
                let _ = sender.send(finish(acc));
            });
        },
    );

    Terminal::new(receiver)
}
