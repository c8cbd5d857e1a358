//! Typed JSON client over an [`HttpTransport`] and a [`ServiceRegistry`].
//!
//! ERROR HANDLING
//! ==============
//! Every verb returns `Result<_, ApiError>`: non-2xx statuses become
//! [`ApiError::Status`], envelope failures [`ApiError::Rejected`], and shape
//! mismatches [`ApiError::Decode`]. Nothing here retries.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope;
use super::error::ApiError;
use super::http::{Body, FormPart, HttpRequest, HttpTransport, Method};
use super::services::{RuntimeConfig, ServiceId, ServiceRegistry};

/// Host endpoint describing where each service lives.
pub const RUNTIME_CONFIG_PATH: &str = "/api/runtime-config";

/// Cheaply cloneable handle shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    registry: Rc<RefCell<ServiceRegistry>>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Rc<dyn HttpTransport>, registry: ServiceRegistry) -> Self {
        Self { transport, registry: Rc::new(RefCell::new(registry)) }
    }

    /// Client for the current environment: `fetch` in the browser, an
    /// always-unavailable transport during server rendering.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Rc::new(super::http::BrowserTransport), ServiceRegistry::default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Rc::new(super::http::UnavailableTransport), ServiceRegistry::default())
        }
    }

    pub fn set_registry(&self, registry: ServiceRegistry) {
        *self.registry.borrow_mut() = registry;
    }

    #[must_use]
    pub fn registry(&self) -> ServiceRegistry {
        self.registry.borrow().clone()
    }

    #[must_use]
    pub fn url(&self, service: ServiceId, path: &str) -> String {
        self.registry.borrow().url(service, path)
    }

    /// Fetch the host's service catalog and adopt it as the registry.
    ///
    /// # Errors
    ///
    /// Transport, status and JSON failures; the registry is left unchanged.
    pub async fn load_runtime_config(&self) -> Result<RuntimeConfig, ApiError> {
        let request = HttpRequest {
            method: Method::Get,
            url: RUNTIME_CONFIG_PATH.to_owned(),
            headers: vec![("Accept".to_owned(), "application/json".to_owned())],
            body: Body::Empty,
        };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        let config: RuntimeConfig = serde_json::from_str(&response.body)?;
        self.set_registry(ServiceRegistry::from_runtime_config(config.clone()));
        log::debug!("runtime config loaded: {} services", config.services.len());
        Ok(config)
    }

    /// Send a request and return the unwrapped JSON payload.
    ///
    /// An empty 2xx body decodes as `null`.
    ///
    /// # Errors
    ///
    /// Transport, status, envelope, and JSON failures.
    pub async fn request_value(
        &self,
        service: ServiceId,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<Value, ApiError> {
        let (url, auth) = {
            let registry = self.registry.borrow();
            (registry.url(service, path), registry.endpoint(service).auth_header())
        };
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        headers.extend(auth);
        let request = HttpRequest { method, url, headers, body };
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("{} {} -> {}", method.as_str(), self.url(service, path), response.status);
            return Err(ApiError::from_status(response.status, &response.body));
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        let value: Value = serde_json::from_str(&response.body)?;
        envelope::unwrap(value)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn get<T: DeserializeOwned>(&self, service: ServiceId, path: &str) -> Result<T, ApiError> {
        let value = self.request_value(service, Method::Get, path, Body::Empty).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `GET` a collection, accepting bare arrays and `{items: [...]}` pages.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn get_list<T: DeserializeOwned>(&self, service: ServiceId, path: &str) -> Result<Vec<T>, ApiError> {
        let value = self.request_value(service, Method::Get, path, Body::Empty).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(envelope::list_items(value))?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        service: ServiceId,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(service, Method::Post, path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        service: ServiceId,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(service, Method::Put, path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        service: ServiceId,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(service, Method::Patch, path, body).await
    }

    /// `DELETE`, discarding any response payload.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn delete(&self, service: ServiceId, path: &str) -> Result<(), ApiError> {
        self.request_value(service, Method::Delete, path, Body::Empty).await?;
        Ok(())
    }

    /// `POST` a multipart form.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_value`].
    pub async fn upload<T: DeserializeOwned>(
        &self,
        service: ServiceId,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<T, ApiError> {
        let value = self
            .request_value(service, Method::Post, path, Body::Multipart(parts))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        service: ServiceId,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let value = self.request_value(service, method, path, Body::Json(body)).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Append query parameters, skipping empty values.
#[must_use]
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let encoded = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>();
    if encoded.is_empty() {
        return path.to_owned();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{}", encoded.join("&"))
}

/// Percent-encode a single path segment.
#[must_use]
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
