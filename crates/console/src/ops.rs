// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One function per subcommand, wiring the optimistic flows end to end.
//!
//! Every mutation follows the same shape: apply locally, send the request,
//! confirm and re-fetch on success, revert on failure. The re-fetch keeps
//! the printed state authoritative instead of trusting accumulated
//! optimistic patches.

use plantel_api::{ImportResult, InstitutionProfile, Toast, summarize_import};
use plantel_client::{
    ApiClient, ClientError, CreateOutcome, DeleteOutcome, NotificationSource, SseSource,
    Subscription, bulk_import,
};
use plantel_domain::{
    ActivityFilter, RosterFilter, Student, StudentForm, StudentId, validate_student_form,
};
use plantel_state::{
    AppliedMutation, DEFAULT_PAGE_SIZE, Mutation, MutationLedger, NotificationFeed, Roster,
    RosterPage, paginate,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::FormOverrides;
use crate::output;

async fn fetch_roster(
    client: &ApiClient,
    filter: &RosterFilter,
) -> Result<Vec<Student>, ClientError> {
    let cancel: CancellationToken = CancellationToken::new();
    client.list_students(filter, &cancel).await
}

/// Filter that sees every record, used when looking one up by id.
fn unfiltered() -> RosterFilter {
    RosterFilter {
        activity: ActivityFilter::All,
        ..RosterFilter::default()
    }
}

/// Validates a form, printing field errors the way the form screen shows
/// them inline. Returns whether the form may be submitted.
fn validated(form: &StudentForm) -> bool {
    match validate_student_form(form) {
        Ok(()) => true,
        Err(errors) => {
            for error in &errors {
                output::toast_error(&error.to_string());
            }
            false
        }
    }
}

fn form_from_student(student: &Student) -> StudentForm {
    StudentForm {
        document_type: student
            .document_type
            .map_or_else(String::new, |t| t.as_str().to_string()),
        document_number: student.document_number.clone(),
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        grade: student.grade.clone(),
        course: student.course.clone(),
        jornada: student
            .jornada
            .map_or_else(String::new, |j| j.as_str().to_string()),
        email: student.email.clone(),
        phone: student.phone.clone().unwrap_or_default(),
        address: student.address.clone().unwrap_or_default(),
    }
}

/// Fetches the roster and prints one filtered page.
pub async fn list(client: &ApiClient, filter: &RosterFilter) -> Result<(), ClientError> {
    let students: Vec<Student> = fetch_roster(client, filter).await?;
    let roster: Roster = Roster::from_students(students);
    let page: RosterPage = paginate(&roster, filter, DEFAULT_PAGE_SIZE);
    output::print_page(&page);
    Ok(())
}

/// Validates and creates a student.
///
/// A duplicate refusal is informational; the operator is told which record
/// clashed and nothing else changes.
pub async fn create(client: &ApiClient, form: &StudentForm) -> Result<(), ClientError> {
    if !validated(form) {
        return Ok(());
    }
    match client.create_student(form).await? {
        CreateOutcome::Created => {
            output::toast_success("Estudiante creado exitosamente.");
            let total: usize = fetch_roster(client, &unfiltered()).await?.len();
            println!("Estudiantes en el listado: {total}");
        }
        CreateOutcome::Duplicate { message } => {
            output::toast_info(&message);
        }
    }
    Ok(())
}

/// Edits a student, keeping unspecified fields at their current values.
pub async fn edit(
    client: &ApiClient,
    id: i64,
    overrides: &FormOverrides,
) -> Result<(), ClientError> {
    let id: StudentId = StudentId::new(id);
    let roster: Roster = Roster::from_students(fetch_roster(client, &unfiltered()).await?);
    let Some(student) = roster.get(id) else {
        output::toast_error(&format!("El estudiante {id} no está en el listado."));
        return Ok(());
    };

    let mut form: StudentForm = form_from_student(student);
    apply_overrides(&mut form, overrides);
    if !validated(&form) {
        return Ok(());
    }

    client.update_student(id, &form).await?;
    output::toast_success("Estudiante actualizado.");
    let refreshed: Roster = Roster::from_students(fetch_roster(client, &unfiltered()).await?);
    if let Some(updated) = refreshed.get(id) {
        println!(
            "{} ({}) ahora figura como {}.",
            updated.full_name(),
            updated.document_number,
            if updated.is_active { "activo" } else { "inactivo" }
        );
    }
    Ok(())
}

fn apply_overrides(form: &mut StudentForm, overrides: &FormOverrides) {
    let fields: [(&mut String, &Option<String>); 10] = [
        (&mut form.document_type, &overrides.document_type),
        (&mut form.document_number, &overrides.document_number),
        (&mut form.first_name, &overrides.first_name),
        (&mut form.last_name, &overrides.last_name),
        (&mut form.grade, &overrides.grade),
        (&mut form.course, &overrides.course),
        (&mut form.jornada, &overrides.jornada),
        (&mut form.email, &overrides.email),
        (&mut form.phone, &overrides.phone),
        (&mut form.address, &overrides.address),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
}

/// Toggles a student's active flag optimistically.
///
/// The local roster is patched first; a failed request restores the prior
/// value before the error is reported. Deactivation asks for confirmation.
pub async fn toggle(
    client: &ApiClient,
    id: i64,
    active: bool,
    yes: bool,
) -> Result<(), ClientError> {
    let id: StudentId = StudentId::new(id);
    let mut roster: Roster = Roster::from_students(fetch_roster(client, &unfiltered()).await?);
    let Some(student) = roster.get(id) else {
        output::toast_error(&format!("El estudiante {id} no está en el listado."));
        return Ok(());
    };
    let name: String = student.full_name();

    if !active
        && !yes
        && !output::confirm(&format!(
            "¿Desactivar a {name}? Podrá reactivarlo después."
        ))
    {
        println!("Operación cancelada.");
        return Ok(());
    }

    let mut ledger: MutationLedger = MutationLedger::new();
    let applied: AppliedMutation =
        match ledger.apply(&mut roster, Mutation::SetActive { id, active }) {
            Ok(applied) => applied,
            Err(error) => {
                output::toast_error(&error.to_string());
                return Ok(());
            }
        };

    match client.set_active(id, active).await {
        Ok(()) => {
            ledger.confirm(applied);
            roster.replace_all(fetch_roster(client, &unfiltered()).await?);
            let verb: &str = if active { "activado" } else { "desactivado" };
            output::toast_success(&format!("{name} {verb}."));
            Ok(())
        }
        Err(error) => {
            ledger.revert(&mut roster, applied);
            output::toast_error("No se pudo actualizar el estado; el cambio local fue revertido.");
            Err(error)
        }
    }
}

/// Deletes a student after a confirmation that names both outcomes.
///
/// A history conflict is informational: the server deactivated nothing and
/// deleted nothing, it only explained why. Either way the roster is
/// re-fetched so the printed count is authoritative.
pub async fn delete(client: &ApiClient, id: i64, yes: bool) -> Result<(), ClientError> {
    let id: StudentId = StudentId::new(id);
    let roster: Roster = Roster::from_students(fetch_roster(client, &unfiltered()).await?);
    let Some(student) = roster.get(id) else {
        output::toast_error(&format!("El estudiante {id} no está en el listado."));
        return Ok(());
    };
    let name: String = student.full_name();

    if !yes
        && !output::confirm(&format!(
            "¿Eliminar a {name}? Si tiene historial académico solo podrá ser desactivado."
        ))
    {
        println!("Operación cancelada.");
        return Ok(());
    }

    match client.delete_student(id).await? {
        DeleteOutcome::Deleted => {
            output::toast_success("Estudiante eliminado.");
        }
        DeleteOutcome::HasHistory { message } => {
            output::toast_info(&message);
        }
    }

    let remaining: usize = fetch_roster(client, &unfiltered()).await?.len();
    println!("Estudiantes en el listado: {remaining}");
    Ok(())
}

/// Runs the two-tier bulk import and prints the aggregated result.
///
/// Like every other mutation, a successful import is followed by a full
/// re-fetch so the printed count reflects the server's reconciliation.
pub async fn import(client: &ApiClient, file_name: &str, bytes: &[u8]) -> Result<(), ClientError> {
    let result: ImportResult = bulk_import(client, file_name, bytes).await?;
    let toasts: Vec<Toast> = summarize_import(&result);
    for toast in &toasts {
        output::print_toast(toast);
    }
    let total: usize = fetch_roster(client, &unfiltered()).await?.len();
    println!("Estudiantes en el listado: {total}");
    Ok(())
}

/// Prints the stored notifications, optionally marking some read first.
///
/// Read-marking is optimistic: the feed flips before the request, and a
/// notification the feed does not know is never sent to the server.
pub async fn notifications(
    client: &ApiClient,
    mark_read: Option<i64>,
    mark_all_read: bool,
) -> Result<(), ClientError> {
    let mut feed: NotificationFeed = NotificationFeed::new();
    feed.replace_all(client.list_notifications().await?);

    if let Some(id) = mark_read {
        if feed.mark_read(id) {
            client.mark_notification_read(id).await?;
            output::toast_success("Notificación marcada como leída.");
        } else {
            output::toast_info("La notificación no existe o ya estaba leída.");
        }
    } else if mark_all_read {
        let changed: usize = feed.mark_all_read();
        if changed > 0 {
            client.mark_all_notifications_read().await?;
        }
        output::toast_success(&format!("{changed} notificaciones marcadas como leídas."));
    }

    for notification in feed.items() {
        output::print_notification(notification);
    }
    println!("Sin leer: {}", feed.unread_count());
    Ok(())
}

/// Streams live notifications until Ctrl-C.
///
/// The feed is seeded from the list endpoint first so duplicates between
/// the seed and the stream are suppressed by id.
pub async fn watch(client: &ApiClient) -> Result<(), ClientError> {
    let mut feed: NotificationFeed = NotificationFeed::new();
    feed.replace_all(client.list_notifications().await?);
    println!(
        "Escuchando notificaciones ({} almacenadas, {} sin leer). Ctrl-C para salir.",
        feed.items().len(),
        feed.unread_count()
    );

    let source: SseSource = SseSource::new(client.clone());
    let mut subscription: Subscription = source.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                subscription.unsubscribe();
                println!("Detenido.");
                return Ok(());
            }
            event = subscription.next_event() => {
                let Some(notification) = event else {
                    return Ok(());
                };
                if feed.push(notification.clone()) {
                    output::print_notification(&notification);
                } else {
                    debug!(id = notification.id, "duplicate live notification dropped");
                }
            }
        }
    }
}

/// Prints the institution profile.
pub async fn profile(client: &ApiClient) -> Result<(), ClientError> {
    let profile: InstitutionProfile = client.get_profile().await?;
    println!("Institución: {}", profile.nombre);
    if let Some(correo) = &profile.correo {
        println!("Correo:      {correo}");
    }
    if let Some(telefono) = &profile.telefono {
        println!("Teléfono:    {telefono}");
    }
    if let Some(direccion) = &profile.direccion {
        println!("Dirección:   {direccion}");
    }
    Ok(())
}

/// Changes the account password.
pub async fn change_password(
    client: &ApiClient,
    current: &str,
    new: &str,
) -> Result<(), ClientError> {
    client.change_password(current, new).await?;
    output::toast_success("Contraseña actualizada.");
    Ok(())
}
