//! Restartable delayed task handle.
//!
//! The timer itself is whatever sleep future the caller hands in
//! (`gloo_timers` in the browser, `tokio::time::sleep` on the server and in
//! tests), so this works on any executor.

use std::future::Future;

use futures::future::{AbortHandle, Abortable, Aborted, abortable};

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<AbortHandle>,
    generation: u64,
}

/// A scheduled wait. Resolves to its generation when the quiet period
/// elapses, or to `None` if it was superseded or cancelled first.
pub struct Debounced<S> {
    generation: u64,
    wait: Abortable<S>,
}

impl<S: Future<Output = ()>> Debounced<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn elapsed(self) -> Option<u64> {
        let generation = self.generation;
        match self.wait.await {
            Ok(()) => Some(generation),
            Err(Aborted) => None,
        }
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is pending and start a new wait on `sleep`.
    pub fn restart<S: Future<Output = ()>>(&mut self, sleep: S) -> Debounced<S> {
        self.cancel();
        let (wait, handle) = abortable(sleep);
        self.pending = Some(handle);
        Debounced { generation: self.generation, wait }
    }

    /// Drop the pending wait, if any. Bumps the generation so anything issued
    /// under the old one is recognisably stale.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
