// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the wire-contract layer.

/// Errors produced while interpreting wire data or parsing an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The import file has no content worth submitting: empty text, no
    /// recognized header columns, or only blank rows.
    EmptyCsv,
    /// The import file could not be parsed as delimited data.
    InvalidCsv {
        /// A human-readable description of the parse failure.
        reason: String,
    },
    /// A roster record arrived without any recognized id field.
    MissingStudentId,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCsv => {
                write!(f, "CSV file is empty or unreadable")
            }
            Self::InvalidCsv { reason } => {
                write!(f, "Invalid CSV: {reason}")
            }
            Self::MissingStudentId => {
                write!(f, "Student record is missing an id")
            }
        }
    }
}

impl std::error::Error for ApiError {}
