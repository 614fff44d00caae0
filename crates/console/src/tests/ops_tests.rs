// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plantel_client::ApiClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::ops;

fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), "token-123").expect("mock server uri is a valid base")
}

#[tokio::test]
async fn test_import_refetches_the_roster_after_success() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/importar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insertados": 1,
            "total_leidos": 1
        })))
        .mount(&server)
        .await;
    // The reconciliation fetch must follow the import.
    Mock::given(method("GET"))
        .and(path("/admin/estudiantes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nombres": "María", "apellidos": "Pérez"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let csv: &[u8] = b"nombre;apellido;documento\nMar\xc3\xada;P\xc3\xa9rez;1002003405\n";
    ops::import(&client, "roster.csv", csv)
        .await
        .expect("import should succeed");
}

#[tokio::test]
async fn test_failed_import_does_not_refetch() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/estudiantes/importar"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Archivo inválido"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/estudiantes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client: ApiClient = test_client(&server);
    let csv: &[u8] = b"nombre;apellido;documento\nAna;Ruiz;1002003406\n";
    let result = ops::import(&client, "roster.csv", csv).await;

    assert!(result.is_err());
}
