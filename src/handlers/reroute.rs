//! Request-time locale reroute.
//!
//! Mirrors the build: the same route table that enumerated the site resolves
//! each inbound path to its locale and canonical route.

use axum::{
  extract::{Request, State},
  http::{header, HeaderValue},
  middleware::Next,
  response::{IntoResponse, Redirect, Response},
};

use crate::locale::Locale;
use crate::routing::{validate_no_double_prefix, CanonicalPath, RouteMatch};
use crate::state::AppState;

/// Routing outcome stored in request extensions.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
  pub locale: Locale,
  pub canonical: CanonicalPath,
  /// `None` when no page shape matches
  pub route: Option<RouteMatch>,
}

/// `/fr/fr/antwerpen` -> `/fr/antwerpen`, `/nl/fr` -> `/fr`
fn drop_first_segment(path: &str) -> String {
  let rest = path.trim_start_matches('/');
  match rest.find('/') {
    Some(i) => rest[i..].to_string(),
    None => "/".to_string(),
  }
}

pub async fn reroute(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
  let raw = request.uri().path().to_string();
  let path = urlencoding::decode(&raw)
    .map(|p| p.into_owned())
    .unwrap_or_else(|_| raw.clone());

  // Only the first locale segment is removed; a triple prefix takes two redirects.
  if !validate_no_double_prefix(&path) {
    let mut target = drop_first_segment(&raw);
    if let Some(query) = request.uri().query() {
      target.push('?');
      target.push_str(query);
    }
    tracing::debug!("Redirecting double-prefixed {} to {}", raw, target);
    return Redirect::permanent(&target).into_response();
  }

  let (locale, canonical) = state.routes.canonicalize(&path);
  let route = state.routes.resolve(&path).map(|(_, route)| route);
  request.extensions_mut().insert(ResolvedRoute {
    locale,
    canonical,
    route,
  });

  let mut response = next.run(request).await;
  response
    .headers_mut()
    .entry(header::CONTENT_LANGUAGE)
    .or_insert(HeaderValue::from_static(locale.code()));
  response
}
