// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_domain::StudentId;

/// Errors that can occur while mutating client-side state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The record is not present in the roster.
    UnknownStudent(StudentId),
    /// The record already has an optimistic mutation awaiting its response.
    MutationInFlight(StudentId),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStudent(id) => {
                write!(f, "Student {id} is not in the roster")
            }
            Self::MutationInFlight(id) => {
                write!(f, "Student {id} already has a pending change")
            }
        }
    }
}

impl std::error::Error for StateError {}
