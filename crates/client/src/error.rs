// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_api::ApiError;
use thiserror::Error;

/// Errors surfaced by the HTTP transport.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: connection, TLS, or decode failure.
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered 401; the session must be cleared.
    #[error("session expired or invalid")]
    Unauthorized,
    /// The server rejected the request with a business-level error body.
    #[error("server rejected the request (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The message from the response's error body, or a generic one.
        message: String,
    },
    /// Every candidate endpoint answered 404.
    #[error("no import endpoint is deployed on this backend")]
    EndpointUnavailable,
    /// A newer request superseded this one before it completed.
    #[error("request was superseded")]
    Cancelled,
    /// The wire contract layer rejected local data (e.g. an unreadable
    /// import file) before any request was made.
    #[error(transparent)]
    Contract(#[from] ApiError),
    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}
