// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::ClientError;

/// Candidate bulk-import paths, tried in order.
///
/// Deployed backends disagree on which of these routes exists, so the
/// client probes the preferred one first and falls through on 404.
pub const IMPORT_PATHS: [&str; 2] = [
    "/admin/estudiantes/importar",
    "/admin/estudiantes/import",
];

/// Sends a request to each candidate path in order until one is deployed.
///
/// A 404 means the route does not exist on this backend and the next
/// candidate is tried. Any other response, success or failure alike, is
/// final and returned to the caller for normal status handling. Transport
/// errors also stop the probe, since retrying a different path will not
/// fix an unreachable host.
///
/// # Arguments
///
/// * `paths` - Candidate paths, most preferred first.
/// * `build` - Builds the request for one candidate path.
///
/// # Returns
///
/// The first non-404 response.
///
/// # Errors
///
/// Returns [`ClientError::EndpointUnavailable`] when every candidate
/// answered 404, or [`ClientError::Transport`] when a request failed to
/// complete.
pub async fn post_first_available<F>(paths: &[&str], build: F) -> Result<Response, ClientError>
where
    F: Fn(&str) -> RequestBuilder,
{
    for &path in paths {
        let response: Response = build(path).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(path, "endpoint not deployed, trying next candidate");
            continue;
        }
        return Ok(response);
    }
    Err(ClientError::EndpointUnavailable)
}
