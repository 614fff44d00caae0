// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{DocumentType, StudentForm};
use std::str::FromStr;

/// The number of digits a document number must have.
const DOCUMENT_NUMBER_LENGTH: usize = 10;

/// Form fields that participate in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Document type selector.
    DocumentType,
    /// Document number input.
    DocumentNumber,
    /// First name input.
    FirstName,
    /// Last name input.
    LastName,
    /// Email input.
    Email,
    /// Phone input.
    Phone,
}

impl FormField {
    /// Returns the field name used in user-facing messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentType => "tipo_documento",
            Self::DocumentNumber => "numero_documento",
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::Email => "correo",
            Self::Phone => "telefono",
        }
    }
}

/// A per-field validation failure, suitable for inline error indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: FormField,
    /// A human-readable description of the failure.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

/// Strips every non-digit character from a document number input.
///
/// Applied on input, before length validation, so pasted values such as
/// `"1.002.003.004"` collapse to their digits.
#[must_use]
pub fn sanitize_document_number(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validates that a document number is exactly ten digits after sanitizing.
///
/// # Errors
///
/// Returns `DomainError::InvalidDocumentNumber` if the sanitized value does
/// not contain exactly ten digits.
pub fn validate_document_number(input: &str) -> Result<String, DomainError> {
    let digits: String = sanitize_document_number(input);
    if digits.len() != DOCUMENT_NUMBER_LENGTH {
        return Err(DomainError::InvalidDocumentNumber {
            reason: format!(
                "must be exactly {DOCUMENT_NUMBER_LENGTH} digits, got {}",
                digits.len()
            ),
        });
    }
    Ok(digits)
}

/// Validates a student form before submission.
///
/// The same rule set applies to the create and edit forms: name, last name,
/// document type, a ten-digit document number, email and phone are all
/// required. Submission must stay blocked while this returns errors.
///
/// # Errors
///
/// Returns one [`FieldError`] per failing field, in form order, so callers
/// can light up inline indicators.
pub fn validate_student_form(form: &StudentForm) -> Result<(), Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    if form.first_name.trim().is_empty() {
        errors.push(FieldError {
            field: FormField::FirstName,
            message: String::from("el nombre es obligatorio"),
        });
    }

    if form.last_name.trim().is_empty() {
        errors.push(FieldError {
            field: FormField::LastName,
            message: String::from("el apellido es obligatorio"),
        });
    }

    if form.document_type.trim().is_empty() {
        errors.push(FieldError {
            field: FormField::DocumentType,
            message: String::from("el tipo de documento es obligatorio"),
        });
    } else if DocumentType::from_str(&form.document_type).is_err() {
        errors.push(FieldError {
            field: FormField::DocumentType,
            message: format!("tipo de documento no reconocido: '{}'", form.document_type),
        });
    }

    if let Err(e) = validate_document_number(&form.document_number) {
        errors.push(FieldError {
            field: FormField::DocumentNumber,
            message: e.to_string(),
        });
    }

    let email: &str = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: FormField::Email,
            message: String::from("el correo es obligatorio"),
        });
    } else if !is_plausible_email(email) {
        errors.push(FieldError {
            field: FormField::Email,
            message: format!("correo no válido: '{email}'"),
        });
    }

    if form.phone.trim().is_empty() {
        errors.push(FieldError {
            field: FormField::Phone,
            message: String::from("el teléfono es obligatorio"),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Minimal email shape check: one `@` with non-empty local and domain parts.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
