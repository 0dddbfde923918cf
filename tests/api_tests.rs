// HTTP contract tests - drive the router in-process

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use conta_ledger::api::{router, AppState};
use conta_ledger::AccountDirectory;
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, AccountDirectory) {
    let directory = AccountDirectory::new();
    (router(AppState::new(directory.clone())), directory)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn register(app: &Router, cpf: &str, nome: &str) {
    let (status, _) = send(app, Method::POST, "/conta", Some(json!({ "cpf": cpf, "nome": nome }))).await;
    assert_eq!(status, StatusCode::CREATED);
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_register_deposit_withdraw_scenario() {
    let (app, directory) = app();

    let (status, body) =
        send(&app, Method::POST, "/conta", Some(json!({ "cpf": "111", "nome": "Ana" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sucesso"], "Cliente cadastrado com sucesso!");

    let (status, body) = send(
        &app,
        Method::POST,
        "/deposito?cpf=111",
        Some(json!({ "valor": 100, "descricao": "salario" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);

    let (status, body) =
        send(&app, Method::POST, "/saque?cpf=111", Some(json!({ "valor": 40 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sucesso"], "Saque efetuado com sucesso");

    let (status, body) =
        send(&app, Method::POST, "/saque?cpf=111", Some(json!({ "valor": 100 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "INSUFFICIENT_FUNDS");
    assert_eq!(body["erro"], "Saldo insuficiente!");
    assert_eq!(body["detalhes"]["disponivel"], 60.0);

    let account = directory.find_by_national_id("111").unwrap();
    assert_eq!(account.ledger().len(), 2);
    assert_eq!(account.balance().unwrap(), dec!(60));
}

#[tokio::test]
async fn test_register_duplicate_cpf() {
    let (app, directory) = app();
    register(&app, "111", "Ana").await;

    let (status, body) =
        send(&app, Method::POST, "/conta", Some(json!({ "cpf": "111", "nome": "Outra" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "DUPLICATE_CUSTOMER");
    assert_eq!(body["erro"], "Cliente já cadastrado!");
    assert_eq!(directory.count(), 1);
}

#[rstest]
#[case(Method::GET, "/extrato?cpf=000", None)]
#[case(Method::POST, "/deposito?cpf=000", Some(json!({ "valor": 10, "descricao": "x" })))]
#[case(Method::POST, "/saque?cpf=000", Some(json!({ "valor": 10 })))]
#[case(Method::GET, "/extrato/date?cpf=000&date=2024-01-01", None)]
#[case(Method::PUT, "/conta?cpf=000", Some(json!({ "nome": "Zé" })))]
#[case(Method::GET, "/conta?cpf=000", None)]
#[case(Method::DELETE, "/conta?cpf=000", None)]
#[tokio::test]
async fn test_gate_rejects_unknown_cpf(
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    let (app, directory) = app();
    register(&app, "111", "Ana").await;

    let (status, response) = send(&app, method, uri, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["codigo"], "CUSTOMER_NOT_FOUND");
    assert_eq!(response["erro"], "Cliente não encontrado!");

    let account = directory.find_by_national_id("111").unwrap();
    assert_eq!(account.name(), "Ana");
    assert!(account.ledger().is_empty());
    assert_eq!(directory.count(), 1);
}

#[rstest]
#[case("/extrato")]
#[case("/conta")]
#[case("/extrato?cpf=")]
#[tokio::test]
async fn test_missing_cpf(#[case] uri: &str) {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "MISSING_CPF");
}

#[tokio::test]
async fn test_cpf_from_header() {
    let (app, _) = app();
    register(&app, "111", "Ana").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/conta")
        .header("cpf", "111")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["cpf"], "111");
}

#[tokio::test]
async fn test_statement_lists_entries_in_order() {
    let (app, _) = app();
    register(&app, "111", "Ana").await;
    send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 50, "descricao": "pix" }))).await;
    send(&app, Method::POST, "/saque?cpf=111", Some(json!({ "valor": 20 }))).await;

    let (status, body) = send(&app, Method::GET, "/extrato?cpf=111", None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["tipo"], "credito");
    assert_eq!(entries[0]["descricao"], "pix");
    assert_eq!(entries[0]["valor"], 50.0);
    assert_eq!(entries[1]["tipo"], "debito");
    assert!(entries[1].get("descricao").is_none());
}

#[tokio::test]
async fn test_dated_statement() {
    let (app, _) = app();
    register(&app, "111", "Ana").await;
    send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 10, "descricao": "a" }))).await;
    send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 5, "descricao": "b" }))).await;

    let uri = format!("/extrato/date?cpf=111&date={}", today());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/extrato/date?cpf=111&date=1999-12-31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[case("/extrato/date?cpf=111&date=31-12-1999")]
#[case("/extrato/date?cpf=111&date=amanha")]
#[case("/extrato/date?cpf=111")]
#[tokio::test]
async fn test_dated_statement_unparseable_date_matches_nothing(#[case] uri: &str) {
    let (app, _) = app();
    register(&app, "111", "Ana").await;
    send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 10 }))).await;

    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[case(Method::POST, "/saque?cpf=111", json!({}))]
#[case(Method::POST, "/saque?cpf=111", json!({ "valor": "abc" }))]
#[case(Method::POST, "/deposito?cpf=111", json!({ "descricao": "sem valor" }))]
#[case(Method::PUT, "/conta?cpf=111", json!({ "name": "Ana" }))]
#[case(Method::POST, "/conta", json!({ "cpf": "222" }))]
#[tokio::test]
async fn test_malformed_body_is_bad_request(
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Value,
) {
    let (app, directory) = app();
    register(&app, "111", "Ana").await;

    let (status, response) = send(&app, method, uri, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["codigo"], "INVALID_BODY");
    assert!(response["detalhes"]["motivo"].is_string());

    let account = directory.find_by_national_id("111").unwrap();
    assert_eq!(account.name(), "Ana");
    assert!(account.ledger().is_empty());
    assert_eq!(directory.count(), 1);
}

#[tokio::test]
async fn test_unknown_cpf_reported_before_malformed_body() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::POST, "/saque?cpf=999", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "CUSTOMER_NOT_FOUND");
}

#[tokio::test]
async fn test_deposit_overflow_rejected_and_account_stays_usable() {
    let (app, directory) = app();
    register(&app, "111", "Ana").await;

    let (status, _) =
        send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 5e28 }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
        send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": 5e28 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "BALANCE_OVERFLOW");

    let (status, _) = send(&app, Method::POST, "/saque?cpf=111", Some(json!({ "valor": 1 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(directory.find_by_national_id("111").unwrap().ledger().len(), 2);
}

#[tokio::test]
async fn test_negative_deposit_rejected() {
    let (app, directory) = app();
    register(&app, "111", "Ana").await;

    let (status, body) =
        send(&app, Method::POST, "/deposito?cpf=111", Some(json!({ "valor": -10 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "INVALID_AMOUNT");
    assert!(directory.find_by_national_id("111").unwrap().ledger().is_empty());
}

#[tokio::test]
async fn test_update_and_fetch_account() {
    let (app, _) = app();
    register(&app, "111", "Ana").await;

    let (status, body) =
        send(&app, Method::PUT, "/conta?cpf=111", Some(json!({ "nome": "Ana Maria" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sucesso"], "Dados alterados com sucesso!");

    let (status, body) = send(&app, Method::GET, "/conta?cpf=111", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "Ana Maria");
    assert_eq!(body["cpf"], "111");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["extrato"], json!([]));
}

#[tokio::test]
async fn test_delete_account_keeps_others() {
    let (app, _) = app();
    register(&app, "111", "Ana").await;
    register(&app, "222", "Bia").await;
    register(&app, "333", "Caio").await;

    let (status, body) = send(&app, Method::DELETE, "/conta?cpf=222", None).await;
    assert_eq!(status, StatusCode::OK);

    let cpfs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["cpf"].as_str().unwrap())
        .collect();
    assert_eq!(cpfs, vec!["111", "333"]);

    let (status, body) = send(&app, Method::GET, "/conta?cpf=222", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["codigo"], "CUSTOMER_NOT_FOUND");

    let (status, _) = send(&app, Method::GET, "/conta?cpf=333", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], conta_ledger::VERSION);
}
