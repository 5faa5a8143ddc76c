use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Deserialize;
use serde_json::json;

use super::json_error;
use crate::locale::Locale;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SwitchQuery {
  /// Current path, with query string and fragment if any
  pub path: String,
  pub locale: String,
}

/// Href of the current page in another locale: `{ "href": "/fr/villes" }`.
pub async fn switch_locale(
  State(state): State<AppState>,
  Query(query): Query<SwitchQuery>,
) -> Response {
  let locale: Locale = match query.locale.parse() {
    Ok(locale) => locale,
    Err(e) => return json_error(StatusCode::BAD_REQUEST, e),
  };

  let href = state.routes.switch_locale(&query.path, locale);
  Json(json!({ "href": href })).into_response()
}
