// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Plumbing shared by the time-driven operators.

use crate::timer::Timer;
use futures::channel::mpsc::{self, UnboundedReceiver};
use rivulet_core::RivuletTask;
pub(crate) use rivulet_stream::forward::forward;
use rivulet_stream::forward::subscribe_for;
use rivulet_stream::{Emitter, Observe};
use std::future::Future;

/// A source delivery or the source's completion.
pub(crate) enum Event<T> {
    Next(Option<T>),
    Complete,
}

/// Queues every delivery and the completion of `source`, stamped with the time
/// they happened, for a worker task to replay. The queue ends when `owner` completes,
/// and `source` sees demand once `owner` does.
pub(crate) fn timestamped_events<O, U, TM>(
    source: &O,
    owner: &Emitter<U>,
    timer: TM,
) -> UnboundedReceiver<(Event<O::Item>, TM::Instant)>
where
    O: Observe,
    U: Clone + Send + Sync + 'static,
    TM: Timer,
{
    let (sender, receiver) = mpsc::unbounded();
    let complete_sender = sender.clone();
    let complete_timer = timer.clone();
    subscribe_for(
        source,
        owner,
        move |value| {
            let _ = sender.unbounded_send((Event::Next(value.clone()), timer.now()));
        },
        move || {
            let _ = complete_sender.unbounded_send((Event::Complete, complete_timer.now()));
        },
    );
    receiver
}

/// Runs `work` in the background until it finishes or `owner` completes.
pub(crate) fn spawn_bound<U, F>(owner: &Emitter<U>, work: F)
where
    U: Clone + Send + Sync + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let task = RivuletTask::spawn(move |token| async move {
        tokio::select! {
            () = token.cancelled() => {}
            () = work => {}
        }
    });
    owner.add_teardown(move || task.cancel());
}
