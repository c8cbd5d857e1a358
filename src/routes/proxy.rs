//! Service forwarding.
//!
//! DESIGN
//! ======
//! `ANY /svc/{service}/{*path}` is replayed against the configured upstream
//! with the same method, query, body and content headers. The upstream
//! status and body come back unchanged; only hop-by-hop headers are dropped
//! in both directions. When a token is configured it replaces whatever
//! credential the browser sent.
//!
//! ERROR HANDLING
//! ==============
//! Failures that happen before an upstream answers are reported by
//! [`ProxyError`] as a JSON body `{"success": false, "message": ...}`, the
//! same shape the dashboard already unwraps for backend rejections.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dashboard::net::services::ServiceId;
use serde_json::json;

use crate::config::Upstream;
use crate::state::AppState;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("service {0} is not configured")]
    NotConfigured(&'static str),

    #[error("upstream {service} unreachable: {source}")]
    Upstream {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownService(_) => StatusCode::NOT_FOUND,
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "success": false, "message": self.to_string() }))).into_response()
    }
}

/// `{base}/{path}?{query}` with exactly one slash between base and path.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = if path.is_empty() { base.to_owned() } else { format!("{base}/{path}") };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Browser headers worth passing upstream, plus the configured token.
#[must_use]
pub fn upstream_request_headers(incoming: &HeaderMap, upstream: &Upstream) -> HeaderMap {
    let auth = upstream.auth_header().and_then(|(name, value)| {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        let value = HeaderValue::from_str(&value).ok()?;
        Some((name, value))
    });

    let mut headers = HeaderMap::new();
    for (name, value) in incoming {
        if is_hop_by_hop(name)
            || name == axum::http::header::HOST
            || name == axum::http::header::CONTENT_LENGTH
            || name == axum::http::header::COOKIE
        {
            continue;
        }
        if auth.is_some() && name == axum::http::header::AUTHORIZATION {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    if let Some((name, value)) = auth {
        headers.insert(name, value);
    }
    headers
}

/// Upstream response headers passed back to the browser.
#[must_use]
pub fn downstream_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in upstream {
        if is_hop_by_hop(name) || name == axum::http::header::CONTENT_LENGTH {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Handler for `/svc/{service}` with no trailing path.
pub async fn forward_root(
    State(state): State<AppState>,
    Path(service): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward_inner(&state, &service, "", method, &uri, &headers, body).await
}

/// Handler for `/svc/{service}/{*path}`.
///
/// The tail is taken from the raw request path: `Path` would percent-decode
/// it and turn an encoded `%2F` or `%3F` inside one segment into structure.
pub async fn forward(
    State(state): State<AppState>,
    Path((service, _)): Path<(String, String)>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = raw_service_path(uri.path());
    forward_inner(&state, &service, path, method, &uri, &headers, body).await
}

/// Still-encoded remainder of `/svc/{service}/{rest}`.
#[must_use]
pub fn raw_service_path(request_path: &str) -> &str {
    let rest = request_path.strip_prefix("/svc/").unwrap_or(request_path);
    rest.find('/').map_or("", |i| &rest[i + 1..])
}

async fn forward_inner(
    state: &AppState,
    slug: &str,
    path: &str,
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let service = ServiceId::from_slug(slug).ok_or_else(|| ProxyError::UnknownService(slug.to_owned()))?;
    let upstream = state.config.upstream(service).ok_or(ProxyError::NotConfigured(service.slug()))?;

    let url = upstream_url(&upstream.url, path, uri.query());
    tracing::debug!(service = service.slug(), %method, %url, "forwarding");

    let response = state
        .http
        .request(method, &url)
        .headers(upstream_request_headers(headers, upstream))
        .body(body)
        .send()
        .await
        .map_err(|source| {
            tracing::warn!(service = service.slug(), %url, error = %source, "upstream request failed");
            ProxyError::Upstream { service: service.slug(), source }
        })?;

    let status = response.status();
    let response_headers = downstream_response_headers(response.headers());
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ProxyError::Upstream { service: service.slug(), source })?;

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    *out.headers_mut() = response_headers;
    Ok(out)
}
