//! HTTP transport abstraction.
//!
//! DESIGN
//! ======
//! Endpoint code builds [`HttpRequest`] values and hands them to an
//! [`HttpTransport`]. The browser implementation uses `gloo-net`; tests plug
//! in scripted transports so caching and envelope logic run natively.

use async_trait::async_trait;

use super::error::ApiError;

/// HTTP verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One field of a multipart form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    File { file_name: String, content_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    #[must_use]
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self { name: name.to_owned(), value: FormValue::Text(value.into()) }
    }

    #[must_use]
    pub fn file(name: &str, file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_owned(),
            value: FormValue::File {
                file_name: file_name.to_owned(),
                content_type: content_type.to_owned(),
                bytes,
            },
        }
    }
}

/// Request body.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw response.
///
/// Transports only fail for transport reasons; non-2xx statuses are returned
/// as responses and interpreted by the caller.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport used where no browser is present (server rendering).
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl HttpTransport for UnavailableTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Unavailable(format!("{} {}", request.method.as_str(), request.url)))
    }
}

/// `fetch`-backed transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "hydrate")]
fn form_data(parts: Vec<FormPart>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for part in parts {
        match part.value {
            FormValue::Text(text) => form.append_with_str(&part.name, &text).map_err(js_err)?,
            FormValue::File { file_name, content_type, bytes } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let sequence = js_sys::Array::of1(&array);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                    .map_err(js_err)?;
                form.append_with_blob_and_filename(&part.name, &blob, &file_name)
                    .map_err(js_err)?;
            }
        }
    }
    Ok(form)
}
