use axum::{
  extract::State,
  http::{Method, StatusCode},
  response::{IntoResponse, Response},
  Extension, Json,
};
use serde::Serialize;

use super::{json_error, ResolvedRoute};
use crate::locale::Locale;
use crate::pages::{load_page, PageData, PageError};
use crate::routing::{CanonicalPath, LocalizedPath, RouteMatch};
use crate::state::AppState;

#[derive(Serialize)]
struct PageResponse<'a> {
  locale: Locale,
  canonical: &'a CanonicalPath,
  route: &'a RouteMatch,
  /// The same page in every locale, for hreflang links and the language switcher
  alternates: Vec<LocalizedPath>,
  data: PageData<'a>,
}

/// Page data for any path the router has no explicit route for.
pub async fn page(
  State(state): State<AppState>,
  method: Method,
  Extension(resolved): Extension<ResolvedRoute>,
) -> Response {
  if method != Method::GET && method != Method::HEAD {
    return json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
  }

  let Some(route) = resolved.route.as_ref() else {
    return json_error(StatusCode::NOT_FOUND, "Page not found");
  };

  let index = state.index.get();
  match load_page(route, &index) {
    Ok(data) => Json(PageResponse {
      locale: resolved.locale,
      canonical: &resolved.canonical,
      route,
      alternates: state.routes.alternates(route),
      data,
    })
    .into_response(),
    Err(PageError::NotFound(message)) => {
      tracing::debug!("No page for {} ({})", resolved.canonical, message);
      json_error(StatusCode::NOT_FOUND, message)
    }
  }
}
