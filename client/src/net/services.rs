//! Catalog of the backend services this dashboard talks to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request names a [`ServiceId`]. The [`ServiceRegistry`] resolves it to
//! a base path (normally the host's `/svc/{slug}` forwarding route) and an
//! optional static token for deployments that call services directly.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend APIs consumed by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    Persons,
    Documents,
    Addresses,
    BankAccounts,
    Contacts,
    Homework,
    Wordbook,
    AiWeekly,
    Config,
    FileGateway,
    Finance,
    Efficiency,
    DocService,
    RemoteWake,
    Skills,
}

impl ServiceId {
    pub const ALL: [ServiceId; 15] = [
        ServiceId::Persons,
        ServiceId::Documents,
        ServiceId::Addresses,
        ServiceId::BankAccounts,
        ServiceId::Contacts,
        ServiceId::Homework,
        ServiceId::Wordbook,
        ServiceId::AiWeekly,
        ServiceId::Config,
        ServiceId::FileGateway,
        ServiceId::Finance,
        ServiceId::Efficiency,
        ServiceId::DocService,
        ServiceId::RemoteWake,
        ServiceId::Skills,
    ];

    /// URL-safe identifier, also used in environment variable names by the host.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Persons => "persons",
            Self::Documents => "documents",
            Self::Addresses => "addresses",
            Self::BankAccounts => "bank-accounts",
            Self::Contacts => "contacts",
            Self::Homework => "homework",
            Self::Wordbook => "wordbook",
            Self::AiWeekly => "ai-weekly",
            Self::Config => "config",
            Self::FileGateway => "file-gateway",
            Self::Finance => "finance",
            Self::Efficiency => "efficiency",
            Self::DocService => "doc-service",
            Self::RemoteWake => "remote-wake",
            Self::Skills => "skills",
        }
    }

    /// Human label for navigation and health cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Persons => "Persons",
            Self::Documents => "Documents",
            Self::Addresses => "Addresses",
            Self::BankAccounts => "Bank Accounts",
            Self::Contacts => "Contacts",
            Self::Homework => "Homework",
            Self::Wordbook => "Wordbook",
            Self::AiWeekly => "AI Weekly",
            Self::Config => "Service Catalog",
            Self::FileGateway => "Files",
            Self::Finance => "Finance",
            Self::Efficiency => "Efficiency",
            Self::DocService => "Docs",
            Self::RemoteWake => "Remote Wake",
            Self::Skills => "Skills",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// How to reach one service from the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Absolute URL or host-relative path prefix, without trailing slash.
    pub base_path: String,
    /// Static token forwarded with every request, if configured client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Header carrying the token. `Authorization` sends `Bearer <token>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_header: Option<String>,
    /// Whether the host has an upstream configured for this service.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ServiceEndpoint {
    #[must_use]
    pub fn forwarded(service: ServiceId) -> Self {
        Self { base_path: format!("/svc/{}", service.slug()), token: None, token_header: None, enabled: true }
    }

    /// The `(name, value)` header pair for the static token, if any.
    #[must_use]
    pub fn auth_header(&self) -> Option<(String, String)> {
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        match self.token_header.as_deref() {
            None | Some("Authorization" | "authorization") => {
                Some(("Authorization".to_owned(), format!("Bearer {token}")))
            }
            Some(name) => Some((name.to_owned(), token.to_owned())),
        }
    }
}

/// Runtime configuration document served by the host at `/api/runtime-config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub services: BTreeMap<ServiceId, ServiceEndpoint>,
}

/// Resolved endpoints for every [`ServiceId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRegistry {
    endpoints: BTreeMap<ServiceId, ServiceEndpoint>,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        let endpoints = ServiceId::ALL
            .into_iter()
            .map(|id| (id, ServiceEndpoint::forwarded(id)))
            .collect();
        Self { endpoints }
    }
}

impl ServiceRegistry {
    /// Defaults overlaid with whatever the runtime config provides.
    #[must_use]
    pub fn from_runtime_config(config: RuntimeConfig) -> Self {
        let mut registry = Self::default();
        for (id, mut endpoint) in config.services {
            endpoint.base_path = endpoint.base_path.trim_end_matches('/').to_owned();
            registry.endpoints.insert(id, endpoint);
        }
        registry
    }

    #[must_use]
    pub fn endpoint(&self, service: ServiceId) -> ServiceEndpoint {
        self.endpoints
            .get(&service)
            .cloned()
            .unwrap_or_else(|| ServiceEndpoint::forwarded(service))
    }

    #[must_use]
    pub fn is_enabled(&self, service: ServiceId) -> bool {
        self.endpoints.get(&service).map_or(true, |e| e.enabled)
    }

    /// Join the service base with a request path.
    #[must_use]
    pub fn url(&self, service: ServiceId, path: &str) -> String {
        let base = self.endpoint(service).base_path;
        if path.is_empty() {
            return base;
        }
        if path.starts_with('/') || path.starts_with('?') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
