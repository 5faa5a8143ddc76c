use axum::{
  extract::State,
  http::{header, StatusCode},
  response::{IntoResponse, Response},
};

use super::json_error;
use crate::sitemap::{enumerate_site_urls, render_sitemap_xml};
use crate::state::AppState;

/// `sitemap.xml` built from the live content index.
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
  let index = state.index.get();
  let urls = match enumerate_site_urls(&state.routes, &index, &state.config.base_url) {
    Ok(urls) => urls,
    Err(e) => {
      tracing::error!("Failed to enumerate site URLs: {}", e);
      return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to build sitemap");
    }
  };

  let xml = render_sitemap_xml(&urls, &state.config.sitemap_options());
  (
    [
      (header::CONTENT_TYPE, "application/xml"),
      (header::CACHE_CONTROL, "max-age=0, s-maxage=3600"),
    ],
    xml,
  )
    .into_response()
}
