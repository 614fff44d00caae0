// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_api::ImportResult;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{ApiClient, ClientError, bulk_import};

const CSV_TEXT: &str = "\
nombre;apellido;documento;grado\n\
María;Pérez;1002003405;5\n\
Juan;Gómez;1002003406;5\n";

fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), "token-123").expect("mock server uri is a valid base")
}

#[tokio::test]
async fn test_upload_uses_the_primary_path() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/importar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insertados": 2,
            "total_leidos": 2
        })))
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let result: ImportResult = client
        .import_file("roster.csv", CSV_TEXT.as_bytes())
        .await
        .expect("upload should succeed");

    assert_eq!(result.insertados, 2);
    assert_eq!(result.total_leidos, 2);
}

#[tokio::test]
async fn test_upload_falls_through_to_the_secondary_path_on_404() {
    let server: MockServer = MockServer::start().await;
    // Only the legacy route exists; the preferred one 404s by default.
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insertados": 1,
            "actualizados": 1,
            "total_leidos": 2
        })))
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let result: ImportResult = client
        .import_file("roster.csv", CSV_TEXT.as_bytes())
        .await
        .expect("fallback path should succeed");

    assert_eq!(result.insertados, 1);
    assert_eq!(result.actualizados, 1);
}

#[tokio::test]
async fn test_no_route_at_all_is_endpoint_unavailable() {
    let server: MockServer = MockServer::start().await;

    let client: ApiClient = test_client(&server);
    let result = client.import_file("roster.csv", CSV_TEXT.as_bytes()).await;

    assert!(matches!(result, Err(ClientError::EndpointUnavailable)));
}

#[tokio::test]
async fn test_bulk_import_falls_back_to_parsed_rows() {
    let server: MockServer = MockServer::start().await;
    // No upload route anywhere; the backend only accepts pre-parsed rows.
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/importar"))
        .and(body_string_contains("\"filas\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insertados": 2,
            "total_leidos": 2
        })))
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let result: ImportResult = bulk_import(&client, "roster.csv", CSV_TEXT.as_bytes())
        .await
        .expect("row fallback should succeed");

    assert_eq!(result.insertados, 2);
}

#[tokio::test]
async fn test_bulk_import_reports_unparseable_files() {
    let server: MockServer = MockServer::start().await;

    let client: ApiClient = test_client(&server);
    let result = bulk_import(&client, "vacio.csv", b"").await;

    assert!(matches!(result, Err(ClientError::Contract(_))));
}

#[tokio::test]
async fn test_upload_rejection_is_not_retried_as_rows() {
    let server: MockServer = MockServer::start().await;
    // The route exists but the server rejected the file; that refusal is
    // final and must not trigger the row fallback.
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/importar"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Archivo inválido"})),
        )
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let result = bulk_import(&client, "roster.csv", CSV_TEXT.as_bytes()).await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Archivo inválido");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}
