//! Scripted transport for native tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, HttpTransport};
use super::services::ServiceRegistry;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, err: ApiError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request recorded")
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Client over a fresh scripted transport with the default registry.
pub fn scripted_client() -> (ApiClient, Rc<ScriptedTransport>) {
    let transport = Rc::new(ScriptedTransport::default());
    let client = ApiClient::new(transport.clone(), ServiceRegistry::default());
    (client, transport)
}
