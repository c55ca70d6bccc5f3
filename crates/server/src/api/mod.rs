use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use serde_json::{Map, Value};
use server_api::plates_route;
use shared::protocol::HealthStatus;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::app_state::AppState;

mod envelope;
mod validation;

use envelope::{fail, succeed, Failure};
use validation::ValidPlates;

pub(crate) fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health_check).post(log_event))
        .route(plates_route(), post(update_plates))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Response {
    succeed(HealthStatus::healthy())
}

/// Accepts any JSON object (or `null`) from external event triggers, logs it and acknowledges.
async fn log_event(headers: HeaderMap, body: Bytes) -> Response {
    let event = match serde_json::from_slice::<Option<Map<String, Value>>>(&body) {
        Ok(event) => event,
        Err(error) => {
            warn!(
                ?headers,
                body = %String::from_utf8_lossy(&body),
                %error,
                "request body is invalid"
            );
            return fail(StatusCode::BAD_REQUEST);
        }
    };

    let event = event.map_or(Value::Null, Value::Object);
    info!(?headers, body = %event, "logging event request data");
    succeed(HealthStatus::healthy())
}

async fn update_plates(
    State(state): State<Arc<AppState>>,
    ValidPlates(command): ValidPlates,
) -> Result<Response, Failure> {
    let (shop_number, plate) = command.into_update();
    let outcome = server_api::update_plates(state.updater.as_ref(), shop_number, plate)
        .await
        .map_err(|err| {
            error!(code = ?err.code, error = %err.message, "failed to update plates");
            Failure::from(&err)
        })?;
    Ok(succeed(outcome))
}
