pub mod dev;
pub mod pages;
pub mod reroute;
pub mod sitemap;
pub mod switch;

use axum::{
  http::StatusCode,
  middleware,
  response::{IntoResponse, Response},
  routing::{get, post},
  Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use reroute::ResolvedRoute;

/// JSON error body: `{ "error": message }`
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
  (status, Json(json!({ "error": message.into() }))).into_response()
}

/// The site router. Every request passes the locale reroute first.
pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/sitemap.xml", get(sitemap::sitemap_xml))
    .route("/__switch", get(switch::switch_locale))
    .route("/__dev/reload", post(dev::reload))
    .fallback(pages::page)
    .layer(middleware::from_fn_with_state(state.clone(), reroute::reroute))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
