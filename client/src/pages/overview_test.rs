use super::*;

fn health(healthy: bool, message: Option<&str>) -> ServiceHealth {
    ServiceHealth { name: "persons".into(), healthy, latency_ms: 12, message: message.map(str::to_owned) }
}

#[test]
fn healthy_badge_shows_latency() {
    let (class, text) = health_badge(Some(&health(true, None)), false);
    assert_eq!(class, "badge--ok");
    assert_eq!(text, "healthy · 12 ms");
}

#[test]
fn unhealthy_badge_prefers_server_message() {
    assert_eq!(health_badge(Some(&health(false, Some("db down"))), false).1, "db down");
    assert_eq!(health_badge(Some(&health(false, None)), false).1, "unhealthy");
}

#[test]
fn missing_health_distinguishes_pending_from_failed() {
    assert_eq!(health_badge(None, false).0, "badge--pending");
    assert_eq!(health_badge(None, true).0, "badge--unknown");
}
