use std::{path::Path, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use ecocanteen_api::{
    application::http::{
        chat::handlers::chat_socket::reply_to_frame,
        server::{
            app_state::AppState,
            http_server::{router, state},
        },
    },
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::{AsyncTestContext, test_context};

const GREETING: &str =
    "Hello! I am your AI Sustainability Agent. Ask me anything about food waste or green canteen practices!";

async fn app_state(data_dir: &Path) -> AppState {
    let args = Args::parse_from([
        "ecocanteen-api",
        "--data-dir",
        data_dir.to_str().unwrap(),
        "--root-path",
        "",
        "--watsonx-api-key",
        "",
        "--project-id",
        "",
        "--metrics-enabled",
        "false",
        "--allowed-origins",
        "http://localhost:5000",
    ]);
    state(Arc::new(args)).await.unwrap()
}

struct ApiContext {
    server: TestServer,
    data_dir: TempDir,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let state = app_state(data_dir.path()).await;
        let server = TestServer::new(router(state).unwrap()).unwrap();

        Self { server, data_dir }
    }
}

fn record(food_item: &str, produced_kg: Value, leftover_kg: Value, diversion: Option<&str>) -> Value {
    let mut body = json!({
        "date": "2024-06-12",
        "meal_type": "Lunch",
        "food_item": food_item,
        "produced_kg": produced_kg,
        "leftover_kg": leftover_kg,
        "reason": "Exam week",
        "recorded_by": "Priya",
    });
    if let Some(diversion) = diversion {
        body["diversion_type"] = json!(diversion);
    }
    body
}

#[test_context(ApiContext)]
#[tokio::test]
async fn insights_without_records_report_not_enough_data(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api/insights").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(
        body["insights"],
        json!(["Not enough data for analysis. Please input daily records."])
    );
    assert!(body.get("metrics").is_none());
    assert_eq!(body["raw_data"], json!([]));
    assert_eq!(body["data_status"], json!({"status": "empty"}));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn submitted_records_are_listed_in_order(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/submit-data")
        .json(&record("Veg Pulao", json!("30"), json!("6.5"), Some("Compost")))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "success", "message": "Data saved successfully"})
    );

    ctx.server
        .post("/api/submit-data")
        .json(&record("Chole", json!(12), json!(2.5), None))
        .await
        .assert_status_ok();

    let body = ctx.server.get("/api/waste-records").await.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["food_item"], "Veg Pulao");
    assert_eq!(data[0]["produced_kg"], "30");
    assert_eq!(data[0]["diversion_type"], "Compost");
    assert_eq!(data[1]["food_item"], "Chole");
    assert_eq!(data[1]["produced_kg"], "12");
    assert_eq!(data[1]["leftover_kg"], "2.5");
    assert_eq!(data[1]["diversion_type"], "Disposed");
    assert_eq!(body["data_status"], json!({"status": "loaded"}));

    assert!(ctx.data_dir.path().join("waste_data.csv").exists());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn non_numeric_quantity_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/submit-data")
        .json(&record("Idli", json!("plenty"), json!("1"), None))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = ctx.server.get("/api/waste-records").await.json::<Value>();
    assert_eq!(body["data"], json!([]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn insights_aggregate_all_records(ctx: &mut ApiContext) {
    for body in [
        record("Chapati", json!("60"), json!("4.0"), Some("Donated")),
        record("Sambar", json!("40"), json!("16"), Some("Disposed")),
        record("Leftover Rice", json!("0"), json!("5"), None),
    ] {
        ctx.server
            .post("/api/submit-data")
            .json(&body)
            .await
            .assert_status_ok();
    }

    let response = ctx.server.get("/api/insights").await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 5);
    assert_eq!(insights[0], "Average waste percentage: 25.0%.");
    assert_eq!(
        insights[1],
        "Key Opportunity: Repurpose into Fried Rice or lemon rice for the next snack session. (5.0kg saved)"
    );
    assert_eq!(
        insights[2],
        "Staff 'Priya' recorded the latest efficiency check."
    );
    assert_eq!(insights[3], "Impact: 10 meals saved via donation.");
    assert_eq!(
        insights[4],
        "Environment: prevented 10.0kg of CO2 emissions."
    );

    assert_eq!(body["metrics"]["meals_saved"], 10);
    assert_eq!(body["metrics"]["donated_kg"], 4.0);
    assert_eq!(body["metrics"]["composted_kg"], 0.0);
    assert_eq!(body["raw_data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn recipe_catalog_feeds_key_opportunity() {
    let data_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        data_dir.path().join("recipes.json"),
        r#"[{"name": "Bread Upma", "ingredients": ["bread"], "instructions": "Cube and temper."}]"#,
    )
    .unwrap();
    let server = TestServer::new(router(app_state(data_dir.path()).await).unwrap()).unwrap();

    server
        .post("/api/submit-data")
        .json(&record("Stale Bread", json!("8"), json!("3"), None))
        .await
        .assert_status_ok();

    let body = server.get("/api/insights").await.json::<Value>();
    assert_eq!(
        body["insights"][1],
        "Key Opportunity: RAG Suggestion: Try 'Bread Upma' - Cube and temper. (3.0kg saved)"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn chat_falls_back_to_intent_classifier(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/chat")
        .json(&json!({"query": "hello there"}))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["response"], GREETING);
    assert_eq!(body["source"], "intent_classifier");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn chat_rejects_oversized_query(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/chat")
        .json(&json!({"query": "a".repeat(5001)}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_reports_capabilities(ctx: &mut ApiContext) {
    let body = ctx.server.get("/health").await.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["hosted_model_enabled"], false);
    assert_eq!(body["record_count"], 0);
}

#[tokio::test]
async fn socket_frames_get_exactly_one_reply() {
    let data_dir = tempfile::tempdir().unwrap();
    let state = app_state(data_dir.path()).await;

    let reply: Value =
        serde_json::from_str(&reply_to_frame(&state.service, r#"{"query": "hello there"}"#).await)
            .unwrap();
    assert_eq!(reply["response"], GREETING);
    assert!(reply.get("error").is_none());

    let reply: Value =
        serde_json::from_str(&reply_to_frame(&state.service, "not json").await).unwrap();
    assert!(reply["error"].as_str().unwrap().starts_with("invalid chat payload"));
    assert!(reply.get("response").is_none());
}
