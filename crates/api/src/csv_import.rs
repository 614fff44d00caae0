// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side CSV parsing for the bulk-import fallback.
//!
//! When neither multipart import endpoint is deployed, the file is parsed
//! locally and submitted as structured rows. Files in the wild use either
//! `;` or `,` as the delimiter (regional spreadsheet exports differ), so the
//! delimiter is chosen per file by counting both in the header line. Quoted
//! fields, `""` escapes and CRLF line endings are handled by the `csv`
//! reader underneath.

use crate::dto::ImportRow;
use crate::error::ApiError;
use csv::{ReaderBuilder, StringRecord};

/// Columns recognized in an import file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportColumn {
    Tipo,
    Documento,
    Nombre,
    Apellido,
    Grado,
    Curso,
    Jornada,
    Correo,
}

/// Maps a header cell to a recognized column, if any.
///
/// Headers are lower-cased and trimmed first; each column accepts its
/// historical synonyms. Unrecognized headers are ignored, not an error.
fn canonical_column(header: &str) -> Option<ImportColumn> {
    match header.trim().to_lowercase().as_str() {
        "tipo" | "tipo_documento" => Some(ImportColumn::Tipo),
        "documento" | "numero_documento" => Some(ImportColumn::Documento),
        "nombre" | "nombres" => Some(ImportColumn::Nombre),
        "apellido" | "apellidos" => Some(ImportColumn::Apellido),
        "grado" => Some(ImportColumn::Grado),
        "curso" => Some(ImportColumn::Curso),
        "jornada" => Some(ImportColumn::Jornada),
        "correo" | "email" => Some(ImportColumn::Correo),
        _ => None,
    }
}

/// Picks the delimiter for one file: whichever of `;` and `,` appears more
/// often in the header line wins; ties go to `,`.
#[must_use]
pub fn detect_delimiter(text: &str) -> u8 {
    let header_line: &str = text.lines().next().unwrap_or("");
    let semicolons: usize = header_line.matches(';').count();
    let commas: usize = header_line.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Parses an uploaded file's text into import rows.
///
/// Blank rows (every cell empty after trimming) are dropped. The row order
/// of the file is preserved.
///
/// # Errors
///
/// Returns `ApiError::EmptyCsv` if the text is empty, the header contains
/// no recognized column, or no non-blank data row remains; and
/// `ApiError::InvalidCsv` if the reader cannot parse the data at all.
pub fn parse_students_csv(text: &str) -> Result<Vec<ImportRow>, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::EmptyCsv);
    }

    let delimiter: u8 = detect_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsv {
            reason: e.to_string(),
        })?
        .clone();

    let columns: Vec<Option<ImportColumn>> = headers.iter().map(canonical_column).collect();
    if columns.iter().all(Option::is_none) {
        return Err(ApiError::EmptyCsv);
    }

    let mut rows: Vec<ImportRow> = Vec::new();
    for record in reader.records() {
        let record: StringRecord = record.map_err(|e| ApiError::InvalidCsv {
            reason: e.to_string(),
        })?;

        let mut row: ImportRow = ImportRow::default();
        for (idx, column) in columns.iter().enumerate() {
            let Some(column) = column else { continue };
            let value: Option<String> = record
                .get(idx)
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string);
            let Some(value) = value else { continue };
            match column {
                ImportColumn::Tipo => row.tipo_documento = Some(value),
                ImportColumn::Documento => row.numero_documento = Some(value),
                ImportColumn::Nombre => row.nombre = Some(value),
                ImportColumn::Apellido => row.apellido = Some(value),
                ImportColumn::Grado => row.grado = Some(value),
                ImportColumn::Curso => row.curso = Some(value),
                ImportColumn::Jornada => row.jornada = Some(value),
                ImportColumn::Correo => row.correo = Some(value),
            }
        }

        if !row.is_blank() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(ApiError::EmptyCsv);
    }
    Ok(rows)
}
