use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use xfinance::config::AppState;

fn router() -> Router {
    xfinance::app(AppState::default())
}

async fn post_json(path: &str, body: Value, language: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(lang) = language {
        request = request.header(header::ACCEPT_LANGUAGE, lang);
    }

    let response = router()
        .oneshot(request.body(Body::from(body.to_string())).expect("request builds"))
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn sample_records() -> Value {
    json!([
        {
            "id": 1,
            "idUserGuy": 7,
            "idUserGuilty": 3,
            "honorario": 1000,
            "despesa": 200,
            "guyHonorario": 400,
            "dtInspecao": "2024-06-01",
            "prazo": 5
        },
        {
            "id": 2,
            "idUserGuy": 9,
            "idUserGuilty": 7,
            "honorario": null,
            "despesa": 50
        },
        {
            "id": 3,
            "honorario": 2500,
            "dtInspecao": "2024-06-01",
            "dtEntregue": "2024-06-03",
            "dtPago": "2024-06-20"
        }
    ])
}

#[tokio::test]
async fn health_responds_ok() {
    let response = router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn summary_without_filters_counts_everything() {
    let (status, body) = post_json(
        "/api/dashboard/summary",
        json!({ "viewerId": 7, "records": sample_records(), "today": "2024-06-30" }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["express"], 3);
    assert_eq!(body["kpis"]["honorarios"].as_f64(), Some(3500.0));
    assert_eq!(body["kpis"]["despesas"].as_f64(), Some(250.0));
    assert_eq!(body["overdue"], 1);
    assert_eq!(body["players"].as_array().map(Vec::len), Some(3));
    // Player sem Guy aparece como null
    assert_eq!(body["players"][0]["player"], Value::Null);
    assert_eq!(body["formatted"]["resultadoOperacional"], "R$ 3.250");
}

#[tokio::test]
async fn summary_applies_player_filter_for_viewer() {
    let (status, body) = post_json(
        "/api/dashboard/summary",
        json!({
            "viewerId": 7,
            "filters": { "player": true, "myJob": false, "dbLimit": false },
            "records": sample_records(),
            "today": "2024-06-30"
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["express"], 1);
    assert_eq!(body["margemOperacional"].as_f64(), Some(0.8));
    assert_eq!(body["formatted"]["margemOperacional"], "80,00%");
}

#[tokio::test]
async fn summary_of_empty_list_has_null_margin() {
    let (status, body) = post_json(
        "/api/dashboard/summary",
        json!({ "viewerId": 1, "records": [] }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["express"], 0);
    assert_eq!(body["margemOperacional"], Value::Null);
    assert_eq!(body["formatted"]["margemOperacional"], "-");
}

#[tokio::test]
async fn accept_language_switches_separators() {
    let (_, body) = post_json(
        "/api/dashboard/summary",
        json!({ "viewerId": 7, "records": sample_records(), "today": "2024-06-30" }),
        Some("en-US,en;q=0.9"),
    )
    .await;

    assert_eq!(body["formatted"]["resultadoOperacional"], "R$3,250");
}

#[tokio::test]
async fn statuses_keep_order_and_flags() {
    let (status, body) = post_json(
        "/api/inspections/status",
        json!({ "records": sample_records(), "today": "2024-06-30" }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array of statuses");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["overdue"], true);
    assert_eq!(rows[0]["alerts"]["inspecao"], "danger");
    assert_eq!(rows[1]["margemOperacional"], Value::Null);
    assert_eq!(rows[2]["complete"], true);
    assert_eq!(rows[2]["paid"], true);
    assert_eq!(rows[2]["guyPaid"], false);
    assert_eq!(rows[2]["display"]["dtEntregue"], "03/06/24");
}

#[tokio::test]
async fn valid_form_is_accepted() {
    let (status, body) = post_json(
        "/api/inspections/validate",
        json!({
            "idContr": 1, "idSegur": 2, "idAtivi": 3, "idUserGuy": 4, "idUf": 5,
            "dtInspecao": "01/01/2024",
            "honorario": "1.200,00"
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn invalid_form_reports_each_field() {
    let (status, body) = post_json(
        "/api/inspections/validate",
        json!({ "idContr": 0, "idSegur": 2, "idAtivi": 3, "idUserGuy": 4, "honorario": "abc" }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = &body["details"];
    assert_eq!(details["idContr"], "Player obrigatório");
    assert_eq!(details["idUf"], "UF obrigatória");
    assert_eq!(details["honorario"], "Valor inválido");
    assert!(details.get("idSegur").is_none());
}

#[tokio::test]
async fn malformed_body_is_rejected_with_json_error() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/inspections/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"records\": ["))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Corpo da requisição inválido.");
}

#[tokio::test]
async fn extreme_amounts_degrade_to_null_instead_of_failing() {
    let records = json!([
        { "id": 1, "idUserGuy": 7, "honorario": 0.0001, "despesa": -1e25 },
        { "id": 2, "idUserGuy": 7, "honorario": 5e28 },
        { "id": 3, "idUserGuy": 7, "honorario": 5e28 }
    ]);

    let (status, body) = post_json(
        "/api/inspections/status",
        json!({ "records": records.clone(), "today": "2024-06-30" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["margemOperacional"], Value::Null);

    let (status, body) = post_json(
        "/api/dashboard/summary",
        json!({ "viewerId": 7, "records": records, "today": "2024-06-30" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["express"], 3);
}
