// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observable::Observe;
use crate::terminal::Terminal;
use futures_channel::oneshot;
use parking_lot::Mutex;
use rivulet_core::{RivuletError, Subscription};
use std::sync::Arc;

/// Extension trait providing [`next`](Self::next).
pub trait NextExt: Observe {
    /// Resolves with the next present value delivered after this call.
    ///
    /// The current value does not count, and clears are skipped. The listener is
    /// removed as soon as the value arrives.
    ///
    /// # Errors
    ///
    /// Resolves to [`MissingValue`](RivuletError::MissingValue) if the stream
    /// completes, or is dropped, before delivering a present value.
    ///
    /// ```
    /// use rivulet_stream::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let source = Emitter::initial(1);
    /// let next = source.next();
    ///
    /// source.clear();
    /// source.emit(2);
    ///
    /// assert_eq!(next.await.unwrap(), 2);
    /// # });
    /// ```
    fn next(&self) -> Terminal<Self::Item>;
}

impl<O: Observe> NextExt for O {
    fn next(&self) -> Terminal<Self::Item> {
        let (sender, receiver) = oneshot::channel();
        let sender = Arc::new(Mutex::new(Some(sender)));
        let on_complete_sender = sender.clone();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let on_next_slot = slot.clone();

        let subscription = self.subscribe_with(
            move |value| {
                let Some(value) = value else {
                    return;
                };
                let Some(sender) = sender.lock().take() else {
                    return;
                };
                let _ = sender.send(Ok(value.clone()));
                if let Some(subscription) = on_next_slot.lock().take() {
                    subscription.cancel();
                }
            },
            move || {
                if let Some(sender) = on_complete_sender.lock().take() {
                    let _ = sender.send(Err(RivuletError::missing_value(
                        "stream completed before delivering a value",
                    )));
                }
            },
        );

        if subscription.is_active() {
            *slot.lock() = Some(subscription);
        }

        Terminal::new(receiver)
    }
}
