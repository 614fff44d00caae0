// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{Debouncer, SEARCH_DEBOUNCE};

#[tokio::test(start_paused = true)]
async fn test_action_runs_after_delay() {
    let fired: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut debouncer: Debouncer = Debouncer::new(SEARCH_DEBOUNCE);

    let counter: Arc<AtomicUsize> = Arc::clone(&fired);
    debouncer.call(async move {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_calls_coalesce_to_the_last() {
    let fired: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut debouncer: Debouncer = Debouncer::new(SEARCH_DEBOUNCE);

    // Three keystrokes in quick succession; only the last may fire.
    for _ in 0..3 {
        let counter: Arc<AtomicUsize> = Arc::clone(&fired);
        debouncer.call(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }

    tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_calls_spaced_past_the_delay_each_fire() {
    let fired: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut debouncer: Debouncer = Debouncer::new(Duration::from_millis(100));

    for _ in 0..2 {
        let counter: Arc<AtomicUsize> = Arc::clone(&fired);
        debouncer.call(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_the_pending_action() {
    let fired: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut debouncer: Debouncer = Debouncer::new(SEARCH_DEBOUNCE);

    let counter: Arc<AtomicUsize> = Arc::clone(&fired);
    debouncer.call(async move {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    debouncer.cancel();

    tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}
