// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console rendering: toasts, the roster table, and confirmation prompts.

use std::io::{BufRead, Write};

use plantel_api::{Toast, ToastKind};
use plantel_state::{Notification, RosterPage};

/// Prints one aggregated message with its severity tag.
pub fn print_toast(toast: &Toast) {
    let tag: &str = match toast.kind {
        ToastKind::Success => "[OK]",
        ToastKind::Info => "[INFO]",
        ToastKind::Error => "[ERROR]",
    };
    println!("{tag} {}", toast.text);
}

pub fn toast_success(text: &str) {
    println!("[OK] {text}");
}

pub fn toast_info(text: &str) {
    println!("[INFO] {text}");
}

pub fn toast_error(text: &str) {
    eprintln!("[ERROR] {text}");
}

/// Prints one roster page with its pagination footer.
pub fn print_page(page: &RosterPage) {
    if page.items.is_empty() {
        println!("No hay estudiantes que coincidan con el filtro.");
        return;
    }
    println!(
        "{:>6}  {:<30} {:<14} {:<8} {:<9} {}",
        "id", "nombre", "documento", "grado", "jornada", "estado"
    );
    for student in &page.items {
        let jornada: &str = student.jornada.map_or("-", |j| j.as_str());
        let estado: &str = if student.is_active {
            "activo"
        } else {
            "inactivo"
        };
        println!(
            "{:>6}  {:<30} {:<14} {:<8} {:<9} {}",
            student.id,
            student.full_name(),
            student.document_number,
            student.grade,
            jornada,
            estado
        );
    }
    println!(
        "Página {} de {} ({} coincidencias)",
        page.page + 1,
        page.page_count.max(1),
        page.total_matching
    );
}

/// Prints one notification line, unread ones marked.
pub fn print_notification(notification: &Notification) {
    let marker: &str = if notification.read { " " } else { "*" };
    let fecha: &str = notification.created_at.as_deref().unwrap_or("-");
    println!(
        "{marker} [{}] {}: {} ({fecha})",
        notification.id, notification.title, notification.message
    );
}

/// Asks a yes/no question on stdout and reads the answer from stdin.
///
/// Only an explicit yes proceeds; anything else, including a closed stdin,
/// declines.
pub fn confirm(question: &str) -> bool {
    print!("{question} [s/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer: String = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y")
}
