// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod debounce;
mod endpoints;
mod error;
mod import;
mod sse;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, CreateOutcome, DeleteOutcome};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use endpoints::{IMPORT_PATHS, post_first_available};
pub use error::ClientError;
pub use import::bulk_import;
pub use sse::{
    ConnectionStatus, DEFAULT_RETRY_DELAY, NotificationSource, SseDecoder, SseEvent, SseSource,
    Subscription,
};
