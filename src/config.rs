//! Host configuration parsed from environment variables.
//!
//! Variables:
//! - `PORT`: listen port, default 3000
//! - `PIF_SERVICES`: comma list of enabled service slugs, default all
//! - `PIF_<SLUG>_URL`: upstream base URL for one service (`-` in the slug
//!   becomes `_`, e.g. `PIF_BANK_ACCOUNTS_URL`)
//! - `PIF_<SLUG>_TOKEN`: static token forwarded upstream
//! - `PIF_<SLUG>_TOKEN_HEADER`: header for the token, default
//!   `Authorization` with a `Bearer` prefix
//! - `PIF_PROXY_TIMEOUT_SECS`: upstream request timeout, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::{BTreeMap, HashMap};

use dashboard::net::services::{RuntimeConfig, ServiceEndpoint, ServiceId};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid PIF_PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("unknown service in PIF_SERVICES: {0}")]
    UnknownService(String),

    #[error("{var} must be an http(s) URL, got {value}")]
    InvalidUrl { var: String, value: String },
}

/// Where one service lives and how to authenticate to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    /// Base URL without trailing slash.
    pub url: String,
    pub token: Option<String>,
    pub token_header: Option<String>,
}

impl Upstream {
    /// Header pair carrying the static token, if one is configured.
    #[must_use]
    pub fn auth_header(&self) -> Option<(String, String)> {
        ServiceEndpoint {
            base_path: self.url.clone(),
            token: self.token.clone(),
            token_header: self.token_header.clone(),
            enabled: true,
        }
        .auth_header()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub proxy_timeout_secs: u64,
    /// Services the dashboard should show.
    pub enabled: Vec<ServiceId>,
    upstreams: BTreeMap<ServiceId, Upstream>,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed values; missing upstreams are not an
    /// error (the service is reported as unavailable instead).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build typed host config from `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let proxy_timeout_secs = match get("PIF_PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw.to_owned())),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };
        let enabled = match get("PIF_SERVICES") {
            Some(raw) => parse_service_list(raw)?,
            None => ServiceId::ALL.to_vec(),
        };

        let mut upstreams = BTreeMap::new();
        for service in ServiceId::ALL {
            let prefix = env_prefix(service);
            let url_var = format!("{prefix}_URL");
            let Some(url) = get(&url_var) else {
                continue;
            };
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl { var: url_var, value: url.to_owned() });
            }
            upstreams.insert(
                service,
                Upstream {
                    url: url.trim_end_matches('/').to_owned(),
                    token: get(&format!("{prefix}_TOKEN")).map(str::to_owned),
                    token_header: get(&format!("{prefix}_TOKEN_HEADER")).map(str::to_owned),
                },
            );
        }

        Ok(Self { port, proxy_timeout_secs, enabled, upstreams })
    }

    /// Upstream for `service` when it is both enabled and configured.
    #[must_use]
    pub fn upstream(&self, service: ServiceId) -> Option<&Upstream> {
        if !self.enabled.contains(&service) {
            return None;
        }
        self.upstreams.get(&service)
    }

    /// Enabled services that have an upstream.
    pub fn configured(&self) -> impl Iterator<Item = (ServiceId, &Upstream)> {
        self.enabled.iter().filter_map(|s| self.upstreams.get(s).map(|u| (*s, u)))
    }

    /// The browser's view of the catalog: forwarding paths only, never tokens.
    #[must_use]
    pub fn runtime_config(&self) -> RuntimeConfig {
        let services = ServiceId::ALL
            .into_iter()
            .map(|id| {
                let mut endpoint = ServiceEndpoint::forwarded(id);
                endpoint.enabled = self.upstream(id).is_some();
                (id, endpoint)
            })
            .collect();
        RuntimeConfig { services }
    }
}

/// `PIF_` plus the upper-cased slug with `-` as `_`.
#[must_use]
pub fn env_prefix(service: ServiceId) -> String {
    format!("PIF_{}", service.slug().to_uppercase().replace('-', "_"))
}

fn parse_service_list(raw: &str) -> Result<Vec<ServiceId>, ConfigError> {
    let mut services = Vec::new();
    for slug in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let service = ServiceId::from_slug(slug).ok_or_else(|| ConfigError::UnknownService(slug.to_owned()))?;
        if !services.contains(&service) {
            services.push(service);
        }
    }
    Ok(services)
}
