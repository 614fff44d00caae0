// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_api::{
    ChangePasswordRequest, ErrorBody, ImportResult, ImportRow, ImportRowsRequest,
    InstitutionProfile, MarkReadRequest, StudentListBody, StudentPayload, ToggleActivePayload,
};
use plantel_domain::{RosterFilter, Student, StudentForm, StudentId};
use plantel_state::Notification;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::endpoints::{IMPORT_PATHS, post_first_available};
use crate::error::ClientError;

/// Default message when the server refuses a delete without explanation.
const DELETE_CONFLICT_FALLBACK: &str =
    "El estudiante tiene historial y solo puede ser desactivado";

/// Outcome of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The student was created.
    Created,
    /// The document number already belongs to a student.
    Duplicate {
        /// The server's explanation.
        message: String,
    },
}

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed.
    Deleted,
    /// The record carries history and can only be deactivated.
    HasHistory {
        /// The server's explanation.
        message: String,
    },
}

/// Notification list bodies arrive either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NotificationListBody {
    Plain(Vec<Notification>),
    Wrapped {
        notificaciones: Vec<Notification>,
    },
}

impl NotificationListBody {
    fn into_items(self) -> Vec<Notification> {
        match self {
            Self::Plain(items) | Self::Wrapped { notificaciones: items } => items,
        }
    }
}

/// Authenticated HTTP client for the admin backend.
///
/// Holds the session token captured at login; every request carries it as
/// a bearer credential along with the tunnel-bypass header the hosted
/// backend requires.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Creates a client against the given backend.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend origin, with or without a trailing slash.
    /// * `token` - The session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] if the base URL is empty or is not
    /// an `http(s)` origin.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        let trimmed: &str = base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::BaseUrl("base URL is empty".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ClientError::BaseUrl(format!(
                "'{trimmed}' is not an http(s) origin"
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed.to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.token)
            .header("ngrok-skip-browser-warning", "true")
    }

    /// Builds the GET request for the live notification stream.
    ///
    /// Used by the stream worker; carries the same credentials as every
    /// other request.
    #[must_use]
    pub fn notifications_stream_request(&self) -> RequestBuilder {
        self.request(Method::GET, "/admin/notificaciones/stream")
            .header("Accept", "text/event-stream")
    }

    /// Maps a response's status onto the client error taxonomy.
    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status: StatusCode = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if status.is_success() {
            return Ok(response);
        }
        let message: String = read_error_message(response, status).await;
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetches the roster matching the given server-side filters.
    ///
    /// The request is abandoned as soon as `cancel` fires, which lets a
    /// newer fetch supersede it. A millisecond timestamp query parameter
    /// defeats intermediary caching.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] when superseded, or any transport
    /// or server error.
    pub async fn list_students(
        &self,
        filter: &RosterFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Student>, ClientError> {
        let mut params: Vec<(&'static str, String)> = filter.server_params();
        params.push(("_ts", now_millis().to_string()));
        let request: RequestBuilder = self.request(Method::GET, "/admin/estudiantes").query(&params);

        let fetch = async {
            let response: Response = Self::ensure_success(request.send().await?).await?;
            let body: StudentListBody = response.json().await?;
            Ok::<StudentListBody, ClientError>(body)
        };
        let body: StudentListBody = tokio::select! {
            () = cancel.cancelled() => return Err(ClientError::Cancelled),
            body = fetch => body?,
        };

        let (students, dropped) = plantel_api::normalize_students(body.into_raw());
        if dropped > 0 {
            warn!(dropped, "roster rows without an id were discarded");
        }
        debug!(count = students.len(), "roster fetched");
        Ok(students)
    }

    /// Creates a student from a validated form.
    ///
    /// A duplicate document number is a normal outcome, not an error: the
    /// server's refusal is surfaced as [`CreateOutcome::Duplicate`] so the
    /// caller can tell the operator which record clashed.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error other than a duplicate
    /// refusal.
    pub async fn create_student(&self, form: &StudentForm) -> Result<CreateOutcome, ClientError> {
        let payload: StudentPayload = StudentPayload::from(form);
        let response: Response = self
            .request(Method::POST, "/admin/estudiantes")
            .json(&payload)
            .send()
            .await?;
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(CreateOutcome::Created);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        let message: String = read_error_message(response, status).await;
        let folded: String = message.to_lowercase();
        if status == StatusCode::CONFLICT
            || folded.contains("duplicad")
            || folded.contains("ya existe")
        {
            return Ok(CreateOutcome::Duplicate { message });
        }
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Replaces an existing student's fields.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn update_student(
        &self,
        id: StudentId,
        form: &StudentForm,
    ) -> Result<(), ClientError> {
        let payload: StudentPayload = StudentPayload::from(form);
        let path: String = format!("/admin/estudiantes/{id}");
        let response: Response = self
            .request(Method::PUT, &path)
            .json(&payload)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Sets a student's active flag.
    ///
    /// Goes through the same PUT route as field edits, with a body carrying
    /// only the flag.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn set_active(&self, id: StudentId, active: bool) -> Result<(), ClientError> {
        let path: String = format!("/admin/estudiantes/{id}");
        let response: Response = self
            .request(Method::PUT, &path)
            .json(&ToggleActivePayload { is_active: active })
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Deletes a student record.
    ///
    /// A 409 means the record is referenced by history rows and may only
    /// be deactivated; that is an informational outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error other than the history
    /// conflict.
    pub async fn delete_student(&self, id: StudentId) -> Result<DeleteOutcome, ClientError> {
        let path: String = format!("/admin/estudiantes/{id}");
        let response: Response = self.request(Method::DELETE, &path).send().await?;
        if response.status() == StatusCode::CONFLICT {
            let message: String = read_error_body(response)
                .await
                .unwrap_or_else(|| DELETE_CONFLICT_FALLBACK.to_string());
            return Ok(DeleteOutcome::HasHistory { message });
        }
        Self::ensure_success(response).await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Uploads a roster file for server-side parsing.
    ///
    /// The file bytes are cloned per attempt because each endpoint probe
    /// needs a fresh multipart body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EndpointUnavailable`] when no upload route
    /// is deployed, or any transport or server error.
    pub async fn import_file(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<ImportResult, ClientError> {
        let response: Response = post_first_available(&IMPORT_PATHS, |path| {
            let part: Part = Part::bytes(bytes.to_vec()).file_name(file_name.to_string());
            let form: Form = Form::new().part("archivo", part);
            self.request(Method::POST, path).multipart(form)
        })
        .await?;
        let response: Response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Submits client-parsed rows as JSON.
    ///
    /// The fallback tier of the bulk import, used when the upload route
    /// exists but rejected the raw file, or not at all when no route is
    /// deployed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EndpointUnavailable`] when no import route
    /// is deployed, or any transport or server error.
    pub async fn import_rows(&self, rows: Vec<ImportRow>) -> Result<ImportResult, ClientError> {
        let body: ImportRowsRequest = ImportRowsRequest { filas: rows };
        let response: Response = post_first_available(&IMPORT_PATHS, |path| {
            self.request(Method::POST, path).json(&body)
        })
        .await?;
        let response: Response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches the stored notification list.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ClientError> {
        let response: Response = self
            .request(Method::GET, "/admin/notificaciones")
            .send()
            .await?;
        let response: Response = Self::ensure_success(response).await?;
        let body: NotificationListBody = response.json().await?;
        Ok(body.into_items())
    }

    /// Marks one notification as read.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ClientError> {
        let response: Response = self
            .request(Method::POST, "/admin/notificaciones/marcar")
            .json(&MarkReadRequest { id })
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Marks every notification as read.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn mark_all_notifications_read(&self) -> Result<(), ClientError> {
        let response: Response = self
            .request(Method::POST, "/admin/notificaciones/mark-all-read")
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Fetches the institution profile.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn get_profile(&self) -> Result<InstitutionProfile, ClientError> {
        let response: Response = self.request(Method::GET, "/admin/perfil").send().await?;
        let response: Response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Replaces the institution profile.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn update_profile(&self, profile: &InstitutionProfile) -> Result<(), ClientError> {
        let response: Response = self
            .request(Method::PUT, "/admin/perfil")
            .json(profile)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Changes the account password.
    ///
    /// # Errors
    ///
    /// Returns any transport or server error.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ClientError> {
        let body: ChangePasswordRequest = ChangePasswordRequest {
            actual: current.to_string(),
            nueva: new.to_string(),
        };
        let response: Response = self
            .request(Method::POST, "/admin/cambiar-password")
            .json(&body)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

fn now_millis() -> i128 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

async fn read_error_body(response: Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.message().map(str::to_string)
}

async fn read_error_message(response: Response, status: StatusCode) -> String {
    read_error_body(response)
        .await
        .unwrap_or_else(|| format!("HTTP {status}"))
}
