// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{Notification, Roster};
use plantel_domain::{Jornada, Student, StudentId};

pub fn create_test_student(id: i64, first: &str, last: &str, active: bool) -> Student {
    Student {
        id: StudentId::new(id),
        document_type: None,
        document_number: format!("100200300{id}"),
        first_name: String::from(first),
        last_name: String::from(last),
        grade: String::from("10"),
        course: String::from("A"),
        jornada: Some(Jornada::Manana),
        email: format!("{first}.{last}@example.com").to_lowercase(),
        phone: None,
        address: None,
        is_active: active,
        last_activity: None,
    }
}

pub fn create_test_roster() -> Roster {
    Roster::from_students(vec![
        create_test_student(1, "Ana", "Ruiz", true),
        create_test_student(2, "Luis", "Mora", true),
        create_test_student(3, "Pedro", "Núñez", false),
    ])
}

pub fn create_test_notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        title: format!("Notificación {id}"),
        message: String::from("Nuevo reporte disponible"),
        kind: Some(String::from("academico")),
        read,
        created_at: Some(String::from("2026-02-01T10:00:00Z")),
    }
}
