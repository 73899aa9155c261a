use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::models::{CallCredentials, CreateCallRequest, JoinCallRequest};
use crate::state::AppState;

/// Call routes
pub fn call_routes() -> Router<AppState> {
    Router::new()
        .route("/create-call", post(create_call))
        .route("/join-call", post(join_call))
}

/// Only a JSON object is read; any other body is handled like `{}` so it fails field validation.
fn body_or_default<T: DeserializeOwned + Default>(
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> T {
    let object = match body {
        Ok(Json(value @ Value::Object(_))) => value,
        Ok(Json(_)) => {
            tracing::debug!("Ignoring non-object request body");
            return T::default();
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unreadable request body");
            return T::default();
        }
    };

    serde_json::from_value(object).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring malformed request fields");
        T::default()
    })
}

/// POST /create-call
async fn create_call(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<CallCredentials>> {
    let request: CreateCallRequest = body_or_default(body);

    let created = state.calls.create_call(request.username.as_deref())?;

    tracing::info!(call_id = %created.call_id, user_id = %created.user_id, "Call created");

    Ok(Json(created))
}

/// POST /join-call
async fn join_call(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<CallCredentials>> {
    let request: JoinCallRequest = body_or_default(body);

    let joined = state
        .calls
        .join_call(request.username.as_deref(), request.call_id.as_deref())?;

    tracing::info!(call_id = %joined.call_id, user_id = %joined.user_id, "Call joined");

    Ok(Json(joined))
}
