// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay applied to search-as-you-type before a fetch is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces rapid calls so only the last one runs.
///
/// Each call arms a timer and disarms the previous one; the action fires
/// only after the delay elapses with no newer call. Keystroke-driven
/// fetches go through this so the server sees one request per pause, not
/// one per key.
///
/// The shipped console takes its query as a single argument, so it has no
/// keystroke stream to coalesce and does not hold one of these; a resident
/// front end owns one `Debouncer` per text input.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `action`, discarding any previously scheduled one.
    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay: Duration = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Discards the scheduled action, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
