use super::*;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn defaults_apply_when_environment_is_empty() {
    let config = HostConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(config.enabled.len(), ServiceId::ALL.len());
    assert_eq!(config.configured().count(), 0);
}

#[test]
fn env_prefix_uses_underscored_slug() {
    assert_eq!(env_prefix(ServiceId::BankAccounts), "PIF_BANK_ACCOUNTS");
    assert_eq!(env_prefix(ServiceId::Persons), "PIF_PERSONS");
}

#[test]
fn upstream_url_token_and_header_are_read() {
    let config = HostConfig::from_vars(vars(&[
        ("PIF_PERSONS_URL", "http://persons:8080/"),
        ("PIF_PERSONS_TOKEN", "secret"),
        ("PIF_FINANCE_URL", "https://finance.internal"),
        ("PIF_FINANCE_TOKEN", "t2"),
        ("PIF_FINANCE_TOKEN_HEADER", "X-Api-Key"),
    ]))
    .unwrap();

    let persons = config.upstream(ServiceId::Persons).unwrap();
    assert_eq!(persons.url, "http://persons:8080");
    assert_eq!(persons.auth_header(), Some(("Authorization".to_owned(), "Bearer secret".to_owned())));

    let finance = config.upstream(ServiceId::Finance).unwrap();
    assert_eq!(finance.auth_header(), Some(("X-Api-Key".to_owned(), "t2".to_owned())));

    assert!(config.upstream(ServiceId::Wordbook).is_none());
}

#[test]
fn service_list_limits_enabled_services() {
    let config = HostConfig::from_vars(vars(&[
        ("PIF_SERVICES", "persons, finance,persons"),
        ("PIF_PERSONS_URL", "http://persons"),
        ("PIF_WAKE_URL", "http://ignored"),
        ("PIF_REMOTE_WAKE_URL", "http://wake"),
    ]))
    .unwrap();
    assert_eq!(config.enabled, vec![ServiceId::Persons, ServiceId::Finance]);
    assert!(config.upstream(ServiceId::Persons).is_some());
    assert!(config.upstream(ServiceId::RemoteWake).is_none());
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(
        HostConfig::from_vars(vars(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        HostConfig::from_vars(vars(&[("PIF_PROXY_TIMEOUT_SECS", "0")])),
        Err(ConfigError::InvalidTimeout("0".into()))
    );
    assert_eq!(
        HostConfig::from_vars(vars(&[("PIF_SERVICES", "persons,payroll")])),
        Err(ConfigError::UnknownService("payroll".into()))
    );
    assert!(matches!(
        HostConfig::from_vars(vars(&[("PIF_SKILLS_URL", "skills:80")])),
        Err(ConfigError::InvalidUrl { .. })
    ));
}

#[test]
fn runtime_config_exposes_paths_but_never_tokens() {
    let config = HostConfig::from_vars(vars(&[
        ("PIF_PERSONS_URL", "http://persons"),
        ("PIF_PERSONS_TOKEN", "secret"),
    ]))
    .unwrap();
    let runtime = config.runtime_config();
    let persons = &runtime.services[&ServiceId::Persons];
    assert_eq!(persons.base_path, "/svc/persons");
    assert!(persons.enabled);
    assert_eq!(persons.token, None);
    assert!(!runtime.services[&ServiceId::Skills].enabled);

    let json = serde_json::to_string(&runtime).unwrap();
    assert!(!json.contains("secret"));
}
