use super::*;

fn upstream(token: Option<&str>, header: Option<&str>) -> Upstream {
    Upstream {
        url: "http://persons:8080".into(),
        token: token.map(str::to_owned),
        token_header: header.map(str::to_owned),
    }
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://a:1", "api/persons", None), "http://a:1/api/persons");
    assert_eq!(upstream_url("http://a:1/", "/api/persons", Some("q=ann")), "http://a:1/api/persons?q=ann");
    assert_eq!(upstream_url("http://a:1/base", "", Some("")), "http://a:1/base");
    assert_eq!(upstream_url("http://a:1", "", Some("x=1")), "http://a:1?x=1");
}

#[test]
fn raw_service_path_keeps_percent_encoding() {
    assert_eq!(raw_service_path("/svc/file-gateway/files/a%2Fb%3Fc%23d"), "files/a%2Fb%3Fc%23d");
    assert_eq!(raw_service_path("/svc/persons/api/persons/"), "api/persons/");
    assert_eq!(raw_service_path("/svc/persons"), "");
}

#[test]
fn request_headers_drop_hop_by_hop_and_host() {
    let mut incoming = HeaderMap::new();
    incoming.insert("host", HeaderValue::from_static("dashboard.local"));
    incoming.insert("connection", HeaderValue::from_static("keep-alive"));
    incoming.insert("content-length", HeaderValue::from_static("12"));
    incoming.insert("cookie", HeaderValue::from_static("session=1"));
    incoming.insert("content-type", HeaderValue::from_static("application/json"));
    incoming.insert("accept", HeaderValue::from_static("*/*"));

    let out = upstream_request_headers(&incoming, &upstream(None, None));
    assert!(out.get("host").is_none());
    assert!(out.get("connection").is_none());
    assert!(out.get("content-length").is_none());
    assert!(out.get("cookie").is_none());
    assert_eq!(out.get("content-type").unwrap(), "application/json");
    assert_eq!(out.get("accept").unwrap(), "*/*");
}

#[test]
fn configured_token_replaces_browser_authorization() {
    let mut incoming = HeaderMap::new();
    incoming.insert("authorization", HeaderValue::from_static("Bearer browser"));

    let out = upstream_request_headers(&incoming, &upstream(Some("secret"), None));
    assert_eq!(out.get_all("authorization").iter().count(), 1);
    assert_eq!(out.get("authorization").unwrap(), "Bearer secret");
}

#[test]
fn browser_authorization_passes_without_token() {
    let mut incoming = HeaderMap::new();
    incoming.insert("authorization", HeaderValue::from_static("Bearer browser"));

    let out = upstream_request_headers(&incoming, &upstream(None, None));
    assert_eq!(out.get("authorization").unwrap(), "Bearer browser");
}

#[test]
fn custom_token_header_is_sent_raw() {
    let out = upstream_request_headers(&HeaderMap::new(), &upstream(Some("k1"), Some("X-Api-Key")));
    assert_eq!(out.get("x-api-key").unwrap(), "k1");
    assert!(out.get("authorization").is_none());
}

#[test]
fn response_headers_keep_content_headers() {
    let mut upstream_headers = HeaderMap::new();
    upstream_headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    upstream_headers.insert("content-length", HeaderValue::from_static("10"));
    upstream_headers.insert("content-type", HeaderValue::from_static("text/markdown"));
    upstream_headers.insert("content-disposition", HeaderValue::from_static("attachment; filename=a.md"));

    let out = downstream_response_headers(&upstream_headers);
    assert!(out.get("transfer-encoding").is_none());
    assert!(out.get("content-length").is_none());
    assert_eq!(out.get("content-type").unwrap(), "text/markdown");
    assert!(out.get("content-disposition").is_some());
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::UnknownService("x".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(ProxyError::NotConfigured("persons").status(), StatusCode::SERVICE_UNAVAILABLE);
}
