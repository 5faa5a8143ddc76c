use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use super::json_error;
use crate::state::AppState;

/// Reload the content index from disk (dev mode only).
pub async fn reload(State(state): State<AppState>) -> Response {
  if !state.config.dev_mode {
    return json_error(StatusCode::NOT_FOUND, "Page not found");
  }

  // Store files are read with blocking IO
  let reloader = state.clone();
  match tokio::task::spawn_blocking(move || reloader.reload_index()).await {
    Ok(Ok(stores)) => Json(json!({ "stores": stores })).into_response(),
    Ok(Err(e)) => {
      tracing::warn!("Content reload failed: {}", e);
      json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
    Err(e) => {
      tracing::error!("Content reload task failed: {}", e);
      json_error(StatusCode::INTERNAL_SERVER_ERROR, "Reload failed")
    }
  }
}
