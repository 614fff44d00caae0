// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StateError;
use crate::roster::Roster;
use plantel_domain::StudentId;
use std::collections::HashSet;

/// A mutation applied optimistically, as data only.
///
/// Only the active-flag toggle is optimistic: create, edit and delete wait
/// for server confirmation and reconcile through a full re-fetch instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Flip a student's active flag.
    SetActive {
        /// The student to mutate.
        id: StudentId,
        /// The new active value.
        active: bool,
    },
}

impl Mutation {
    /// Returns the id of the record this mutation touches.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        match self {
            Self::SetActive { id, .. } => *id,
        }
    }
}

/// Captured undo state for one applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Undo {
    /// Restore the active flag to its prior value.
    RestoreActive(bool),
}

/// An optimistic mutation that has been applied locally but not yet
/// confirmed by the server.
///
/// The value is consumed exactly once, by [`MutationLedger::confirm`] when
/// the request succeeds or [`MutationLedger::revert`] when it fails. Holding
/// it keeps the record latched against a second concurrent mutation.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an applied mutation must be confirmed or reverted"]
pub struct AppliedMutation {
    id: StudentId,
    undo: Undo,
}

impl AppliedMutation {
    /// Returns the id of the record this mutation touched.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        self.id
    }
}

/// Applies optimistic mutations and tracks which records are in flight.
///
/// The cycle is: [`apply`](Self::apply) flips local state synchronously
/// before the network call starts; once that specific call settles, exactly
/// one of [`confirm`](Self::confirm) or [`revert`](Self::revert) runs. A
/// second mutation on a record whose first mutation has not settled is
/// rejected with [`StateError::MutationInFlight`] rather than racing it.
/// Mutations on different records are independent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationLedger {
    in_flight: HashSet<StudentId>,
}

impl MutationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a record has an unsettled mutation.
    #[must_use]
    pub fn is_in_flight(&self, id: StudentId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Applies a mutation to local state, capturing its undo value.
    ///
    /// # Errors
    ///
    /// * `StateError::MutationInFlight` if the record already has an
    ///   unsettled mutation
    /// * `StateError::UnknownStudent` if the record is not in the roster
    pub fn apply(
        &mut self,
        roster: &mut Roster,
        mutation: Mutation,
    ) -> Result<AppliedMutation, StateError> {
        let id: StudentId = mutation.student_id();
        if self.in_flight.contains(&id) {
            return Err(StateError::MutationInFlight(id));
        }

        let undo: Undo = match mutation {
            Mutation::SetActive { id, active } => {
                let prior: bool = roster.set_active(id, active)?;
                Undo::RestoreActive(prior)
            }
        };

        self.in_flight.insert(id);
        Ok(AppliedMutation { id, undo })
    }

    /// Confirms a mutation after its request succeeded.
    ///
    /// The local state is already correct; this only releases the record's
    /// latch. The caller follows up with a full re-fetch to reconcile any
    /// other server-side drift.
    pub fn confirm(&mut self, applied: AppliedMutation) {
        self.in_flight.remove(&applied.id);
    }

    /// Reverts a mutation after its request failed.
    ///
    /// Restores the captured prior value and releases the latch. If the
    /// record vanished from the roster in the meantime (a concurrent
    /// reconciliation), there is nothing to restore and the revert is a
    /// no-op on state.
    pub fn revert(&mut self, roster: &mut Roster, applied: AppliedMutation) {
        match applied.undo {
            Undo::RestoreActive(prior) => {
                let _ = roster.set_active(applied.id, prior);
            }
        }
        self.in_flight.remove(&applied.id);
    }
}
