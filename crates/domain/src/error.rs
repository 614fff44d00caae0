// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document type code is not one of the accepted values.
    InvalidDocumentType(String),
    /// The document number does not satisfy the platform rule.
    InvalidDocumentNumber {
        /// A human-readable description of the violation.
        reason: String,
    },
    /// The jornada value is not one of the accepted shifts.
    InvalidJornada(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocumentType(value) => {
                write!(f, "Invalid document type '{value}'")
            }
            Self::InvalidDocumentNumber { reason } => {
                write!(f, "Invalid document number: {reason}")
            }
            Self::InvalidJornada(value) => {
                write!(f, "Invalid jornada '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
