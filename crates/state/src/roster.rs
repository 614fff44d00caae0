// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StateError;
use plantel_domain::{Student, StudentId};

/// The canonical in-memory roster for one institution.
///
/// A single `Roster` is owned by the component driving the UI; every
/// mutating operation funnels through it, and every confirmed server
/// mutation is followed by [`Roster::replace_all`] with a fresh fetch so the
/// client never trusts accumulated optimistic patches indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Creates a roster from an already-normalized student list.
    #[must_use]
    pub const fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Replaces the entire roster with the authoritative server list.
    ///
    /// This is the reconciliation step that runs after every successful
    /// mutation and after every accepted list fetch.
    pub fn replace_all(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    /// Returns the students in server order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Looks up one student by id.
    #[must_use]
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Returns the number of students currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns whether the roster holds no students.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Flips a student's active flag and returns the prior value.
    ///
    /// Crate-private: callers go through [`crate::MutationLedger`] so the
    /// prior value is always captured for rollback.
    pub(crate) fn set_active(&mut self, id: StudentId, active: bool) -> Result<bool, StateError> {
        let student: &mut Student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StateError::UnknownStudent(id))?;
        let prior: bool = student.is_active;
        student.is_active = active;
        Ok(prior)
    }
}
