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
    clippy::all
)]

mod csv_import;
mod dto;
mod error;
mod normalize;
mod report;

#[cfg(test)]
mod tests;

pub use csv_import::{detect_delimiter, parse_students_csv};
pub use dto::{
    ChangePasswordRequest, ErrorBody, ImportResult, ImportRow, ImportRowsRequest,
    InstitutionProfile, MarkReadRequest, RawStudent, StudentListBody, StudentPayload,
    ToggleActivePayload,
};
pub use error::ApiError;
pub use normalize::{normalize_student, normalize_students};
pub use report::{Toast, ToastKind, summarize_import};
