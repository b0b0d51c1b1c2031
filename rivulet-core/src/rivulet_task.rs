// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task spawning with cooperative cancellation.
//!
//! Timer-driven operators and future/stream bridges run their asynchronous half in
//! a [`RivuletTask`]. The task receives a [`CancellationToken`] and is expected to
//! stop at its next checkpoint once the token fires.

use crate::CancellationToken;
use std::future::Future;

/// Handle to a spawned background task.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct RivuletTask {
    cancel: CancellationToken,
}

impl RivuletTask {
    /// Spawns `f(token)` on the ambient tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signals the task to stop; does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for RivuletTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
