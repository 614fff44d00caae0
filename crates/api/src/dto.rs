// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire data transfer objects.
//!
//! The backend has gone through several field-naming generations
//! (`id` / `id_usuario` / `idUsuario`, `is_active` / `is_activo` / `activo`).
//! All accepted variants are declared here, once, as serde aliases; nothing
//! downstream ever sees a raw wire record.

use plantel_domain::StudentForm;
use serde::{Deserialize, Deserializer, Serialize};

/// A roster record exactly as the server sent it, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawStudent {
    /// Server-assigned identifier. Older deployments used `id_usuario`
    /// or `idUsuario`.
    #[serde(
        default,
        alias = "id_usuario",
        alias = "idUsuario",
        alias = "id_estudiante"
    )]
    pub id: Option<i64>,
    /// Document type code.
    #[serde(default, alias = "tipo", alias = "tipoDocumento")]
    pub tipo_documento: Option<String>,
    /// Document number; some deployments send it as a bare number.
    #[serde(
        default,
        alias = "documento",
        deserialize_with = "opt_string_or_number"
    )]
    pub numero_documento: Option<String>,
    /// First name(s).
    #[serde(default, alias = "nombres")]
    pub nombre: Option<String>,
    /// Last name(s).
    #[serde(default, alias = "apellidos")]
    pub apellido: Option<String>,
    /// Grade; numeric in some deployments.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grado: Option<String>,
    /// Course section.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub curso: Option<String>,
    /// Shift.
    #[serde(default)]
    pub jornada: Option<String>,
    /// Contact email.
    #[serde(default, alias = "email")]
    pub correo: Option<String>,
    /// Contact phone.
    #[serde(default, alias = "celular")]
    pub telefono: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub direccion: Option<String>,
    /// Active flag; booleans, 0/1 integers and string forms all occur.
    /// Missing means active.
    #[serde(
        default = "default_active",
        alias = "is_activo",
        alias = "activo",
        deserialize_with = "active_flag"
    )]
    pub is_active: bool,
    /// Last recorded activity timestamp.
    #[serde(default, alias = "ultimaActividad", alias = "last_activity")]
    pub ultima_actividad: Option<String>,
}

const fn default_active() -> bool {
    true
}

/// Accepts a bool, a 0/1 integer, a "true"/"false"/"0"/"1" string, or null.
fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(true),
        Some(Repr::Bool(b)) => Ok(b),
        Some(Repr::Int(i)) => Ok(i != 0),
        Some(Repr::Str(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "si" | "sí" | "activo" => Ok(true),
            "false" | "0" | "no" | "inactivo" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "unrecognized active flag '{other}'"
            ))),
        },
    }
}

/// Accepts a string or a bare number, yielding the string form.
fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
        Repr::Str(s) => s,
        Repr::Int(i) => i.to_string(),
        Repr::Float(f) => f.to_string(),
    }))
}

/// The roster list body: a bare array, or wrapped in `{"estudiantes": [...]}`
/// depending on backend version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StudentListBody {
    /// Bare array form.
    Plain(Vec<RawStudent>),
    /// Wrapped form.
    Wrapped {
        /// The records.
        estudiantes: Vec<RawStudent>,
    },
}

impl StudentListBody {
    /// Unwraps to the raw record list.
    #[must_use]
    pub fn into_raw(self) -> Vec<RawStudent> {
        match self {
            Self::Plain(records) | Self::Wrapped {
                estudiantes: records,
            } => records,
        }
    }
}

/// Create/update payload for a student.
///
/// Optional fields left empty in the form are coerced to null, never sent
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentPayload {
    /// Document type code.
    pub tipo_documento: String,
    /// Document number (digits only).
    pub numero_documento: String,
    /// First name(s).
    pub nombre: String,
    /// Last name(s).
    pub apellido: String,
    /// Grade.
    pub grado: Option<String>,
    /// Course section.
    pub curso: Option<String>,
    /// Shift.
    pub jornada: Option<String>,
    /// Contact email.
    pub correo: String,
    /// Contact phone.
    pub telefono: Option<String>,
    /// Postal address.
    pub direccion: Option<String>,
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl From<&StudentForm> for StudentPayload {
    fn from(form: &StudentForm) -> Self {
        Self {
            tipo_documento: form.document_type.trim().to_uppercase(),
            numero_documento: plantel_domain::sanitize_document_number(&form.document_number),
            nombre: form.first_name.trim().to_string(),
            apellido: form.last_name.trim().to_string(),
            grado: none_if_empty(&form.grade),
            curso: none_if_empty(&form.course),
            jornada: none_if_empty(&form.jornada),
            correo: form.email.trim().to_string(),
            telefono: none_if_empty(&form.phone),
            direccion: none_if_empty(&form.address),
        }
    }
}

/// PUT body for the active-flag toggle: only the flag, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleActivePayload {
    /// The new active value.
    pub is_active: bool,
}

/// One row of a client-side parsed import file.
///
/// A transient projection of a student record; never stored locally, only
/// submitted for server-side reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportRow {
    /// Document type code.
    pub tipo_documento: Option<String>,
    /// Document number.
    pub numero_documento: Option<String>,
    /// First name(s).
    pub nombre: Option<String>,
    /// Last name(s).
    pub apellido: Option<String>,
    /// Grade.
    pub grado: Option<String>,
    /// Course section.
    pub curso: Option<String>,
    /// Shift.
    pub jornada: Option<String>,
    /// Contact email.
    pub correo: Option<String>,
}

impl ImportRow {
    /// Returns whether every cell is empty (a blank line in the file).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.tipo_documento,
            &self.numero_documento,
            &self.nombre,
            &self.apellido,
            &self.grado,
            &self.curso,
            &self.jornada,
            &self.correo,
        ]
        .iter()
        .all(|cell| cell.is_none())
    }
}

/// JSON body for the parsed-rows import fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRowsRequest {
    /// The parsed rows.
    pub filas: Vec<ImportRow>,
}

/// Structured result of one bulk import, as counted by the server.
///
/// A summary value only; it exists for the duration of one import and is
/// converted into toast messages by [`crate::summarize_import`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportResult {
    /// Rows inserted as new students.
    #[serde(default)]
    pub insertados: u32,
    /// Rows that updated an existing student.
    #[serde(default)]
    pub actualizados: u32,
    /// Rows repeated within the file itself.
    #[serde(default)]
    pub duplicados_en_archivo: u32,
    /// Rows skipped because the student already exists in this institution.
    #[serde(default)]
    pub omitidos_por_existir: u32,
    /// Rows skipped because the student belongs to another institution.
    #[serde(default)]
    pub omitidos_por_otras_instituciones: u32,
    /// Total rows read from the file.
    #[serde(default)]
    pub total_leidos: u32,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    /// Primary error description.
    #[serde(default)]
    pub error: Option<String>,
    /// Alternate detail field used by some endpoints.
    #[serde(default)]
    pub detalle: Option<String>,
}

impl ErrorBody {
    /// Returns the best available human-readable message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.detalle.as_deref())
    }
}

/// Institution profile as exchanged with `/admin/perfil`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstitutionProfile {
    /// Institution display name.
    #[serde(default, alias = "nombre_institucion")]
    pub nombre: String,
    /// Contact email.
    #[serde(default, alias = "email")]
    pub correo: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub telefono: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub direccion: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// POST body for `/admin/cambiar-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub actual: String,
    /// The new password.
    pub nueva: String,
}

/// POST body for marking one notification read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkReadRequest {
    /// The notification id.
    pub id: i64,
}
