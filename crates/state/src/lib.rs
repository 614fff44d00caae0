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

mod command;
mod error;
mod fetch;
mod notifications;
mod roster;
mod view;

#[cfg(test)]
mod tests;

pub use command::{AppliedMutation, Mutation, MutationLedger};
pub use error::StateError;
pub use fetch::{FetchGuard, FetchTicket};
pub use notifications::{Notification, NotificationFeed};
pub use roster::Roster;
pub use view::{DEFAULT_PAGE_SIZE, RosterPage, paginate};
