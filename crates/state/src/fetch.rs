// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Last-request-wins ordering for roster list fetches.
//!
//! Rapid filter changes can leave several list requests in flight at once.
//! Each fetch takes a ticket; only the ticket from the most recent `begin`
//! is accepted, so a slow stale response can never overwrite a newer one.
//! The transport-level abort is separate (the client cancels the previous
//! request when it can); this guard is the correctness backstop.
//!
//! The shipped console runs one fetch per process invocation, so nothing
//! there can be superseded and it does not hold a guard; a resident front
//! end (interactive shell or UI) owns one `FetchGuard` per list view and
//! routes every response through [`FetchGuard::accept`].

/// A ticket for one list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Tracks the newest fetch generation and whether any fetch has completed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchGuard {
    latest: u64,
    completed_once: bool,
}

impl FetchGuard {
    /// Creates a guard with no fetches issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: 0,
            completed_once: false,
        }
    }

    /// Starts a new fetch, superseding every earlier ticket.
    pub const fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            generation: self.latest,
        }
    }

    /// Returns whether a ticket is still the newest fetch.
    #[must_use]
    pub const fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.latest
    }

    /// Accepts a completed fetch if its ticket is still current.
    ///
    /// Returns `true` when the caller may apply the response to state.
    /// A stale ticket returns `false` and must be discarded.
    pub const fn accept(&mut self, ticket: FetchTicket) -> bool {
        if ticket.generation == self.latest {
            self.completed_once = true;
            true
        } else {
            false
        }
    }

    /// Returns whether any fetch has ever been accepted.
    ///
    /// A failure before the first accepted fetch is a first-load error (no
    /// roster to preserve); afterwards, failures keep the previous roster
    /// on screen.
    #[must_use]
    pub const fn has_loaded(&self) -> bool {
        self.completed_once
    }
}
