// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, RawStudent, StudentListBody, StudentPayload, ToggleActivePayload, normalize_student,
    normalize_students,
};
use plantel_domain::{DocumentType, Jornada, Student, StudentForm};

#[test]
fn test_raw_student_accepts_current_field_names() {
    let json = r#"{
        "id": 12,
        "tipo_documento": "TI",
        "numero_documento": "1002003004",
        "nombre": "María",
        "apellido": "García",
        "grado": "10",
        "curso": "A",
        "jornada": "mañana",
        "correo": "maria@example.com",
        "is_active": true
    }"#;

    let raw: RawStudent = serde_json::from_str(json).unwrap();
    assert_eq!(raw.id, Some(12));
    assert_eq!(raw.tipo_documento.as_deref(), Some("TI"));
    assert!(raw.is_active);
}

#[test]
fn test_raw_student_accepts_historical_field_variants() {
    let json = r#"{
        "id_usuario": 12,
        "tipo": "CC",
        "documento": 1002003004,
        "nombres": "María",
        "apellidos": "García",
        "grado": 10,
        "email": "maria@example.com",
        "activo": 0
    }"#;

    let raw: RawStudent = serde_json::from_str(json).unwrap();
    assert_eq!(raw.id, Some(12));
    assert_eq!(raw.tipo_documento.as_deref(), Some("CC"));
    assert_eq!(raw.numero_documento.as_deref(), Some("1002003004"));
    assert_eq!(raw.grado.as_deref(), Some("10"));
    assert_eq!(raw.correo.as_deref(), Some("maria@example.com"));
    assert!(!raw.is_active);
}

#[test]
fn test_raw_student_camel_case_id_variant() {
    let json = r#"{"idUsuario": 7, "is_activo": "1"}"#;
    let raw: RawStudent = serde_json::from_str(json).unwrap();
    assert_eq!(raw.id, Some(7));
    assert!(raw.is_active);
}

#[test]
fn test_missing_active_flag_defaults_to_active() {
    let json = r#"{"id": 3}"#;
    let raw: RawStudent = serde_json::from_str(json).unwrap();
    assert!(raw.is_active);
}

#[test]
fn test_list_body_accepts_bare_array_and_wrapper() {
    let bare: StudentListBody = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(bare.into_raw().len(), 2);

    let wrapped: StudentListBody =
        serde_json::from_str(r#"{"estudiantes": [{"id": 1}]}"#).unwrap();
    assert_eq!(wrapped.into_raw().len(), 1);
}

#[test]
fn test_normalize_maps_known_codes_and_degrades_unknown_ones() {
    let raw: RawStudent = serde_json::from_str(
        r#"{
            "id": 5,
            "tipo_documento": "ti",
            "jornada": "madrugada",
            "telefono": "  ",
            "direccion": "Calle 1 # 2-3"
        }"#,
    )
    .unwrap();

    let student: Student = normalize_student(raw).unwrap();
    assert_eq!(student.document_type, Some(DocumentType::TI));
    assert_eq!(student.jornada, None);
    assert_eq!(student.phone, None);
    assert_eq!(student.address.as_deref(), Some("Calle 1 # 2-3"));
}

#[test]
fn test_normalize_rejects_record_without_id() {
    let raw: RawStudent = serde_json::from_str(r#"{"nombre": "Ana"}"#).unwrap();
    assert_eq!(normalize_student(raw), Err(ApiError::MissingStudentId));
}

#[test]
fn test_normalize_students_drops_idless_records_and_counts_them() {
    let body: StudentListBody =
        serde_json::from_str(r#"[{"id": 1}, {"nombre": "sin id"}, {"id": 2}]"#).unwrap();

    let (students, dropped) = normalize_students(body.into_raw());
    assert_eq!(students.len(), 2);
    assert_eq!(dropped, 1);
}

#[test]
fn test_normalize_parses_jornada_variants() {
    let raw: RawStudent = serde_json::from_str(r#"{"id": 1, "jornada": "Manana"}"#).unwrap();
    let student: Student = normalize_student(raw).unwrap();
    assert_eq!(student.jornada, Some(Jornada::Manana));
}

#[test]
fn test_payload_coerces_empty_optionals_to_null() {
    let form: StudentForm = StudentForm {
        document_type: String::from("cc"),
        document_number: String::from("1.002.003.004"),
        first_name: String::from(" María "),
        last_name: String::from("García"),
        grade: String::from("10"),
        course: String::new(),
        jornada: String::new(),
        email: String::from("maria@example.com"),
        phone: String::new(),
        address: String::from("  "),
    };

    let payload: StudentPayload = StudentPayload::from(&form);
    assert_eq!(payload.tipo_documento, "CC");
    assert_eq!(payload.numero_documento, "1002003004");
    assert_eq!(payload.nombre, "María");
    assert_eq!(payload.curso, None);
    assert_eq!(payload.telefono, None);
    assert_eq!(payload.direccion, None);

    let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["curso"], serde_json::Value::Null);
    assert_eq!(json["telefono"], serde_json::Value::Null);
}

#[test]
fn test_toggle_payload_carries_only_the_flag() {
    let json: serde_json::Value =
        serde_json::to_value(ToggleActivePayload { is_active: false }).unwrap();
    assert_eq!(json, serde_json::json!({"is_active": false}));
}
