use super::*;

#[test]
fn slugs_round_trip_for_every_service() {
    for id in ServiceId::ALL {
        assert_eq!(ServiceId::from_slug(id.slug()), Some(id));
    }
    assert_eq!(ServiceId::from_slug("nope"), None);
}

#[test]
fn serde_names_match_slugs() {
    for id in ServiceId::ALL {
        let encoded = serde_json::to_value(id).unwrap();
        assert_eq!(encoded, serde_json::Value::String(id.slug().to_owned()));
    }
}

#[test]
fn default_registry_routes_through_host_forwarder() {
    let registry = ServiceRegistry::default();
    assert_eq!(registry.url(ServiceId::BankAccounts, "/accounts"), "/svc/bank-accounts/accounts");
    assert_eq!(registry.url(ServiceId::Wordbook, "chat"), "/svc/wordbook/chat");
    assert_eq!(registry.url(ServiceId::FileGateway, ""), "/svc/file-gateway");
}

#[test]
fn runtime_config_overrides_base_paths_and_trims_slash() {
    let config: RuntimeConfig = serde_json::from_value(serde_json::json!({
        "services": {
            "finance": { "base_path": "https://finance.local/api/", "token": "t0k" },
            "skills": { "base_path": "/svc/skills", "enabled": false }
        }
    }))
    .unwrap();
    let registry = ServiceRegistry::from_runtime_config(config);
    assert_eq!(registry.url(ServiceId::Finance, "/tx"), "https://finance.local/api/tx");
    assert!(!registry.is_enabled(ServiceId::Skills));
    assert!(registry.is_enabled(ServiceId::Persons));
}

#[test]
fn auth_header_uses_bearer_for_authorization() {
    let mut endpoint = ServiceEndpoint::forwarded(ServiceId::Homework);
    assert_eq!(endpoint.auth_header(), None);
    endpoint.token = Some("abc".to_owned());
    assert_eq!(endpoint.auth_header(), Some(("Authorization".to_owned(), "Bearer abc".to_owned())));
    endpoint.token_header = Some("X-Service-Token".to_owned());
    assert_eq!(endpoint.auth_header(), Some(("X-Service-Token".to_owned(), "abc".to_owned())));
}
