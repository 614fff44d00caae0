// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identity document types accepted by the platform.
///
/// The wire representation is the two-or-three letter code used by the
/// backend (`CC`, `TI`, ...). Unknown codes coming back from the server are
/// kept as `None` on [`Student`] rather than rejected; the strict parse is
/// only applied to locally entered form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cédula de ciudadanía.
    CC,
    /// Tarjeta de identidad.
    TI,
    /// Cédula de extranjería.
    CE,
    /// Registro civil.
    RC,
    /// Permiso por protección temporal.
    PPT,
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CC" => Ok(Self::CC),
            "TI" => Ok(Self::TI),
            "CE" => Ok(Self::CE),
            "RC" => Ok(Self::RC),
            "PPT" => Ok(Self::PPT),
            other => Err(DomainError::InvalidDocumentType(other.to_string())),
        }
    }
}

impl DocumentType {
    /// Converts this document type to its wire code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CC => "CC",
            Self::TI => "TI",
            Self::CE => "CE",
            Self::RC => "RC",
            Self::PPT => "PPT",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shift (jornada) a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jornada {
    /// Morning shift.
    #[serde(rename = "mañana", alias = "manana", alias = "Mañana")]
    Manana,
    /// Afternoon shift.
    #[serde(rename = "tarde", alias = "Tarde")]
    Tarde,
    /// Full-day shift.
    #[serde(rename = "completa", alias = "Completa", alias = "unica", alias = "única")]
    Completa,
}

impl FromStr for Jornada {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mañana" | "manana" => Ok(Self::Manana),
            "tarde" => Ok(Self::Tarde),
            "completa" | "única" | "unica" => Ok(Self::Completa),
            other => Err(DomainError::InvalidJornada(other.to_string())),
        }
    }
}

impl Jornada {
    /// Converts this jornada to its wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manana => "mañana",
            Self::Tarde => "tarde",
            Self::Completa => "completa",
        }
    }
}

impl std::fmt::Display for Jornada {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server-assigned roster identifier.
///
/// Ids are unique within one institution's roster. A record only becomes a
/// [`Student`] once the server has assigned it an id; locally entered data
/// lives in [`StudentForm`] until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(i64);

impl StudentId {
    /// Creates a new `StudentId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical roster entry as held in client state.
///
/// Every field mirrors what the server reported after normalization.
/// `is_active = false` means the student is excluded from "active" views but
/// retained for historical linkage; it is never a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Server-assigned identifier, unique within the institution.
    pub id: StudentId,
    /// Identity document type, if the server reported a recognized code.
    pub document_type: Option<DocumentType>,
    /// Identity document number as stored server-side.
    pub document_number: String,
    /// First name(s).
    pub first_name: String,
    /// Last name(s).
    pub last_name: String,
    /// Grade (e.g. "10", "11").
    pub grade: String,
    /// Course section letter (e.g. "A").
    pub course: String,
    /// Enrollment shift, if the server reported a recognized value.
    pub jornada: Option<Jornada>,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Soft-delete / visibility flag.
    pub is_active: bool,
    /// Last recorded activity timestamp (ISO 8601, as reported).
    pub last_activity: Option<String>,
}

impl Student {
    /// Returns the full display name (`first last`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Locally entered student data for the create and edit forms.
///
/// Optional fields left empty are submitted as null, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentForm {
    /// Identity document type code as entered (validated on submit).
    pub document_type: String,
    /// Identity document number as entered (validated on submit).
    pub document_number: String,
    /// First name(s).
    pub first_name: String,
    /// Last name(s).
    pub last_name: String,
    /// Grade.
    pub grade: String,
    /// Course section.
    pub course: String,
    /// Enrollment shift as entered.
    pub jornada: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Postal address (optional).
    pub address: String,
}
