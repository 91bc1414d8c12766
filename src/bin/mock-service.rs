//! In-memory stand-in for one backing service.
//!
//! Serves /info, /health, and a resource collection with generated ids
//! and timestamps, so the gateway can run locally without the real
//! services.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "mock-service")]
#[command(about = "Mock downstream service for local gateway runs", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "127.0.0.1:3001")]
    bind: String,

    /// Reported service name, e.g. "User Service"
    #[arg(short, long, default_value = "User Service")]
    service: String,

    /// Resource collection to serve, e.g. "users"
    #[arg(short, long, default_value = "users")]
    resource: String,
}

#[derive(Clone)]
struct MockState {
    service: String,
    pod: String,
    store: Arc<Mutex<Vec<Value>>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let state = MockState {
        service: args.service.clone(),
        pod: std::env::var("HOSTNAME").unwrap_or_else(|_| "mock-local".to_string()),
        store: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route(
            &format!("/{}", args.resource),
            get(list).post(create),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    println!(
        "{} serving /{} on http://{}",
        args.service, args.resource, args.bind
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<MockState>) -> Json<Value> {
    Json(json!({ "status": "OK", "service": state.service }))
}

async fn info(State(state): State<MockState>) -> Json<Value> {
    Json(json!({
        "service": state.service,
        "pod": state.pod,
        "timestamp": now(),
    }))
}

async fn list(State(state): State<MockState>) -> Json<Value> {
    Json(Value::Array(state.store.lock().await.clone()))
}

async fn create(State(state): State<MockState>, Json(mut record): Json<Value>) -> impl IntoResponse {
    if let Some(fields) = record.as_object_mut() {
        let stamp = now();
        fields.insert("_id".to_string(), json!(Uuid::new_v4().to_string()));
        fields.insert("createdAt".to_string(), json!(stamp));
        fields.insert("updatedAt".to_string(), json!(stamp));
    }
    state.store.lock().await.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
