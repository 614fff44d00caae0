// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_api::{ImportResult, ImportRow, parse_students_csv};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Runs the two-tier bulk import for one roster file.
///
/// The raw file is first uploaded for server-side parsing. When no upload
/// route is deployed at all, the file is parsed locally and the rows are
/// resubmitted as JSON, so the import still succeeds against backends
/// that only accept pre-parsed rows. Either way the server does the
/// reconciliation and reports the counters.
///
/// # Arguments
///
/// * `client` - The authenticated client.
/// * `file_name` - The original file name, forwarded with the upload.
/// * `bytes` - The raw file contents.
///
/// # Errors
///
/// Returns [`ClientError::Contract`] when the local fallback cannot parse
/// the file, or any transport or server error.
pub async fn bulk_import(
    client: &ApiClient,
    file_name: &str,
    bytes: &[u8],
) -> Result<ImportResult, ClientError> {
    match client.import_file(file_name, bytes).await {
        Ok(result) => Ok(result),
        Err(ClientError::EndpointUnavailable) => {
            info!(file_name, "no upload route deployed, parsing locally");
            let text: String = String::from_utf8_lossy(bytes).into_owned();
            let rows: Vec<ImportRow> = parse_students_csv(&text)?;
            client.import_rows(rows).await
        }
        Err(other) => Err(other),
    }
}
