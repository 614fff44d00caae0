// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw-record normalization at the API boundary.
//!
//! Every fallback chain for historical field variants lives in
//! [`crate::dto::RawStudent`]'s serde attributes; this module finishes the
//! job by mapping raw records into the canonical [`Student`] shape. Values
//! the strict domain parsers reject (an unknown document-type code, a
//! jornada spelling from an older deployment) degrade to `None` instead of
//! dropping the record.

use crate::dto::RawStudent;
use crate::error::ApiError;
use plantel_domain::{DocumentType, Jornada, Student, StudentId};
use std::str::FromStr;

/// Normalizes one raw record into the canonical student shape.
///
/// # Errors
///
/// Returns `ApiError::MissingStudentId` if no id variant was present; a
/// record the client cannot address is useless.
pub fn normalize_student(raw: RawStudent) -> Result<Student, ApiError> {
    let id: i64 = raw.id.ok_or(ApiError::MissingStudentId)?;

    Ok(Student {
        id: StudentId::new(id),
        document_type: raw
            .tipo_documento
            .as_deref()
            .and_then(|s| DocumentType::from_str(s).ok()),
        document_number: raw.numero_documento.unwrap_or_default(),
        first_name: raw.nombre.unwrap_or_default(),
        last_name: raw.apellido.unwrap_or_default(),
        grade: raw.grado.unwrap_or_default(),
        course: raw.curso.unwrap_or_default(),
        jornada: raw.jornada.as_deref().and_then(|s| Jornada::from_str(s).ok()),
        email: raw.correo.unwrap_or_default(),
        phone: raw.telefono.filter(|s| !s.trim().is_empty()),
        address: raw.direccion.filter(|s| !s.trim().is_empty()),
        is_active: raw.is_active,
        last_activity: raw.ultima_actividad,
    })
}

/// Normalizes a full list response.
///
/// Records without an id are dropped rather than failing the whole fetch;
/// the number dropped is returned so the caller can log it.
#[must_use]
pub fn normalize_students(raws: Vec<RawStudent>) -> (Vec<Student>, usize) {
    let total: usize = raws.len();
    let students: Vec<Student> = raws
        .into_iter()
        .filter_map(|raw| normalize_student(raw).ok())
        .collect();
    let dropped: usize = total - students.len();
    (students, dropped)
}
