// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_roster, create_test_student};
use crate::{AppliedMutation, Mutation, MutationLedger, Roster, StateError};
use plantel_domain::StudentId;

#[test]
fn test_apply_flips_active_flag_immediately() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(1);

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: false })
        .unwrap();

    assert!(!roster.get(id).unwrap().is_active);
    assert!(ledger.is_in_flight(id));
    ledger.confirm(applied);
}

#[test]
fn test_revert_restores_prior_value() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(1);
    let before: bool = roster.get(id).unwrap().is_active;

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: false })
        .unwrap();
    ledger.revert(&mut roster, applied);

    assert_eq!(roster.get(id).unwrap().is_active, before);
    assert!(!ledger.is_in_flight(id));
}

#[test]
fn test_revert_restores_even_a_redundant_toggle() {
    // Toggling to the value the record already had must still revert to
    // that same value, not to the opposite.
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(2);

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: true })
        .unwrap();
    ledger.revert(&mut roster, applied);

    assert!(roster.get(id).unwrap().is_active);
}

#[test]
fn test_confirm_releases_the_latch() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(1);

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: false })
        .unwrap();
    ledger.confirm(applied);

    assert!(!ledger.is_in_flight(id));
    // A follow-up mutation on the same record is allowed again.
    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: true })
        .unwrap();
    ledger.confirm(applied);
}

#[test]
fn test_second_toggle_on_same_record_is_rejected_while_in_flight() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(1);

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: false })
        .unwrap();

    let second: Result<AppliedMutation, StateError> =
        ledger.apply(&mut roster, Mutation::SetActive { id, active: true });
    assert_eq!(second.unwrap_err(), StateError::MutationInFlight(id));

    // The first mutation's local state is untouched by the rejection.
    assert!(!roster.get(id).unwrap().is_active);
    ledger.confirm(applied);
}

#[test]
fn test_toggles_on_different_records_are_independent() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let first: StudentId = StudentId::new(1);
    let second: StudentId = StudentId::new(2);

    let applied_first: AppliedMutation = ledger
        .apply(
            &mut roster,
            Mutation::SetActive {
                id: first,
                active: false,
            },
        )
        .unwrap();
    let applied_second: AppliedMutation = ledger
        .apply(
            &mut roster,
            Mutation::SetActive {
                id: second,
                active: false,
            },
        )
        .unwrap();

    // Settle them in the opposite order they were applied.
    ledger.revert(&mut roster, applied_second);
    ledger.confirm(applied_first);

    assert!(!roster.get(first).unwrap().is_active);
    assert!(roster.get(second).unwrap().is_active);
}

#[test]
fn test_apply_rejects_unknown_student() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(99);

    let result: Result<AppliedMutation, StateError> =
        ledger.apply(&mut roster, Mutation::SetActive { id, active: false });
    assert_eq!(result.unwrap_err(), StateError::UnknownStudent(id));
    assert!(!ledger.is_in_flight(id));
}

#[test]
fn test_revert_after_reconciliation_removed_the_record_is_a_no_op() {
    let mut roster: Roster = create_test_roster();
    let mut ledger: MutationLedger = MutationLedger::new();
    let id: StudentId = StudentId::new(1);

    let applied: AppliedMutation = ledger
        .apply(&mut roster, Mutation::SetActive { id, active: false })
        .unwrap();

    // A re-fetch replaced the roster and the record is gone.
    roster.replace_all(vec![create_test_student(2, "Luis", "Mora", true)]);
    ledger.revert(&mut roster, applied);

    assert!(roster.get(id).is_none());
    assert!(!ledger.is_in_flight(id));
}
