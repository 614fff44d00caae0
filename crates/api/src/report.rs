// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import-result aggregation into user-facing messages.

use crate::dto::ImportResult;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something was written.
    Success,
    /// Informational; nothing went wrong.
    Info,
    /// Rows were rejected and never written.
    Error,
}

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity.
    pub kind: ToastKind,
    /// Message text.
    pub text: String,
}

impl Toast {
    fn success(text: String) -> Self {
        Self {
            kind: ToastKind::Success,
            text,
        }
    }

    fn info(text: String) -> Self {
        Self {
            kind: ToastKind::Info,
            text,
        }
    }

    fn error(text: String) -> Self {
        Self {
            kind: ToastKind::Error,
            text,
        }
    }
}

/// Picks the singular or plural wording for a count.
fn pluralized(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Converts an import result into its message sequence.
///
/// One message per non-zero counter, in fixed order: inserted, updated,
/// duplicated-in-file, already-in-institution, belongs-to-another-
/// institution. If anything was written, a closing summary carries both
/// write counts and the total read. If every counter is zero, a single
/// informational message mentions the total read. Wording is singular for
/// a count of one.
#[must_use]
pub fn summarize_import(result: &ImportResult) -> Vec<Toast> {
    let mut toasts: Vec<Toast> = Vec::new();

    if result.insertados > 0 {
        toasts.push(Toast::success(pluralized(
            result.insertados,
            "estudiante creado exitosamente",
            "estudiantes creados exitosamente",
        )));
    }

    if result.actualizados > 0 {
        toasts.push(Toast::success(pluralized(
            result.actualizados,
            "estudiante actualizado",
            "estudiantes actualizados",
        )));
    }

    if result.duplicados_en_archivo > 0 {
        toasts.push(Toast::info(pluralized(
            result.duplicados_en_archivo,
            "estudiante duplicado en el archivo",
            "estudiantes duplicados en el archivo",
        )));
    }

    if result.omitidos_por_existir > 0 {
        toasts.push(Toast::info(pluralized(
            result.omitidos_por_existir,
            "estudiante ya existía en esta institución y fue omitido",
            "estudiantes ya existían en esta institución y fueron omitidos",
        )));
    }

    if result.omitidos_por_otras_instituciones > 0 {
        toasts.push(Toast::error(pluralized(
            result.omitidos_por_otras_instituciones,
            "estudiante pertenece a otra institución y no fue registrado",
            "estudiantes pertenecen a otra institución y no fueron registrados",
        )));
    }

    if toasts.is_empty() {
        toasts.push(Toast::info(format!(
            "No se realizaron cambios ({})",
            pluralized(result.total_leidos, "fila leída", "filas leídas")
        )));
        return toasts;
    }

    let written: u32 = result.insertados + result.actualizados;
    if written > 0 {
        toasts.push(Toast::success(format!(
            "Importación completada: {} nuevos, {} actualizados ({})",
            result.insertados,
            result.actualizados,
            pluralized(result.total_leidos, "fila leída", "filas leídas")
        )));
    }

    toasts
}
