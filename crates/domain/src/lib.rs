// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod filter;
mod search;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use filter::{ActivityFilter, RosterFilter};
pub use search::{fold_for_search, name_matches_query};
pub use types::{DocumentType, Jornada, Student, StudentForm, StudentId};
pub use validation::{
    FieldError, FormField, sanitize_document_number, validate_document_number,
    validate_student_form,
};
