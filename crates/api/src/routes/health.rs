use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// GET /health -- liveness plus a database reachability probe.
///
/// Always answers 200; a broken pool is reported in the body so that
/// probes can distinguish "process up" from "fully serving".
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match pantry_db::health_check(&state.pool).await {
        Ok(()) => "reachable",
        Err(_) => "unreachable",
    };

    Json(HealthStatus {
        database,
        status: if database == "reachable" {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub database: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
