// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emitters fed by iterators, futures and streams.
//!
//! Every bridge drives its input on a background [`RivuletTask`]. The task holds
//! off until the emitter gets its first listener, so wiring done after
//! construction sees every item, whichever worker thread runs the task. An
//! emitter nobody subscribes to never pulls from its input. The task stops when
//! the emitter completes, for whatever reason.
//!
//! These constructors need a running tokio runtime.

use crate::emitter::Emitter;
use futures::stream::{self, FuturesUnordered};
use futures::{Stream, StreamExt};
use futures_channel::oneshot;
use rivulet_core::{trace, RivuletTask};
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;

impl<T: Clone + Send + Sync + 'static> Emitter<T> {
    /// Emits every item of `items`, then completes.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_stream(stream::iter(items))
    }

    /// Emits the output of `future`, then completes.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::from_stream(stream::once(future))
    }

    /// Emits the output of each future as it resolves; completes once all have.
    pub fn from_futures<I, F>(futures: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = T> + Send + 'static,
    {
        Self::from_stream(futures.into_iter().collect::<FuturesUnordered<_>>())
    }

    /// Emits every item of `stream`; completes when it is exhausted.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let numbers = Emitter::from_stream(futures::stream::iter(vec![1, 2, 3]));
    /// let all = numbers.to_vec();
    /// assert_eq!(all.await.unwrap(), vec![1, 2, 3]);
    /// # }
    /// ```
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let emitter = Self::new();
        // Held weakly until armed: dropping every handle first ends the task.
        let target = Arc::downgrade(&emitter.shared);
        let (arm, armed) = oneshot::channel::<()>();
        emitter.on_first_listener(move || {
            let _ = arm.send(());
        });

        let task = RivuletTask::spawn(move |token| async move {
            tokio::select! {
                () = token.cancelled() => return,
                armed = armed => {
                    if armed.is_err() {
                        return;
                    }
                }
            }
            let Some(shared) = target.upgrade() else {
                return;
            };
            let target = Emitter { shared };
            trace!("bridged stream armed by first listener");

            let mut stream = pin!(stream);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    item = stream.next() => match item {
                        Some(item) => target.emit(item),
                        None => {
                            trace!("bridged stream exhausted");
                            target.complete();
                            break;
                        }
                    },
                }
            }
        });
        emitter.add_teardown(move || task.cancel());
        emitter
    }

    /// Interleaves the items of every stream; completes when all are exhausted.
    pub fn from_streams<I, S>(streams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Stream<Item = T> + Send + 'static,
    {
        Self::from_stream(stream::select_all(streams.into_iter().map(Box::pin)))
    }
}
