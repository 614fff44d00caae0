// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DocumentType, DomainError, Jornada, StudentId};
use std::str::FromStr;

#[test]
fn test_document_type_parses_known_codes() {
    assert_eq!(DocumentType::from_str("CC"), Ok(DocumentType::CC));
    assert_eq!(DocumentType::from_str("ti"), Ok(DocumentType::TI));
    assert_eq!(DocumentType::from_str(" rc "), Ok(DocumentType::RC));
}

#[test]
fn test_document_type_rejects_unknown_code() {
    let result: Result<DocumentType, DomainError> = DocumentType::from_str("DNI");
    assert!(matches!(result, Err(DomainError::InvalidDocumentType(_))));
}

#[test]
fn test_document_type_round_trip() {
    for code in ["CC", "TI", "CE", "RC", "PPT"] {
        let parsed: DocumentType = DocumentType::from_str(code).unwrap();
        assert_eq!(parsed.as_str(), code);
    }
}

#[test]
fn test_jornada_parses_accented_and_plain_forms() {
    assert_eq!(Jornada::from_str("mañana"), Ok(Jornada::Manana));
    assert_eq!(Jornada::from_str("manana"), Ok(Jornada::Manana));
    assert_eq!(Jornada::from_str("Tarde"), Ok(Jornada::Tarde));
    assert_eq!(Jornada::from_str("completa"), Ok(Jornada::Completa));
    assert_eq!(Jornada::from_str("única"), Ok(Jornada::Completa));
}

#[test]
fn test_jornada_rejects_unknown_value() {
    let result: Result<Jornada, DomainError> = Jornada::from_str("nocturna");
    assert!(matches!(result, Err(DomainError::InvalidJornada(_))));
}

#[test]
fn test_jornada_wire_value_keeps_accent() {
    assert_eq!(Jornada::Manana.as_str(), "mañana");
}

#[test]
fn test_jornada_serde_accepts_aliases() {
    let from_plain: Jornada = serde_json::from_str("\"manana\"").unwrap();
    assert_eq!(from_plain, Jornada::Manana);

    let serialized: String = serde_json::to_string(&Jornada::Manana).unwrap();
    assert_eq!(serialized, "\"mañana\"");
}

#[test]
fn test_student_id_value_round_trip() {
    let id: StudentId = StudentId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
}

// Every variant is a parse-level failure; form-level failures surface as
// `FieldError` values instead.
#[test]
fn test_domain_error_messages() {
    let cases: [(DomainError, &str); 3] = [
        (
            DomainError::InvalidDocumentType("DNI".to_string()),
            "Invalid document type 'DNI'",
        ),
        (
            DomainError::InvalidDocumentNumber {
                reason: "expected exactly 10 digits".to_string(),
            },
            "Invalid document number: expected exactly 10 digits",
        ),
        (
            DomainError::InvalidJornada("nocturna".to_string()),
            "Invalid jornada 'nocturna'",
        ),
    ];
    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}
