//! Transport layer
//!
//! `Transport` is the seam every API call goes through. `HttpTransport`
//! talks to the real backend; tests swap in a recording transport.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::permission::AuthState;
use crate::response::ApiResponse;
use crate::state::AuthStore;

/// A single backend call: fixed method and path, optional query params and JSON body
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: &'static str,
    pub params: Option<Value>,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: &'static str) -> Self {
        Self {
            method,
            url,
            params: None,
            data: None,
        }
    }

    pub fn get(url: &'static str) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: &'static str) -> Self {
        Self::new(Method::POST, url)
    }

    /// Attach query params; `None`/null params leave the query empty
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> ApiResult<Self> {
        self.params = Some(serde_json::to_value(params)?).filter(|v| !v.is_null());
        Ok(self)
    }

    /// Attach a JSON body
    pub fn data<B: Serialize + ?Sized>(mut self, data: &B) -> ApiResult<Self> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }
}

/// Sends one request and yields the backend payload
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// Flatten a params object into query pairs.
///
/// Null fields are dropped and arrays repeat their key.
pub fn query_pairs(params: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    pairs.extend(items.iter().filter_map(query_value).map(|v| (key.clone(), v)))
                }
                other => {
                    if let Some(v) = query_value(other) {
                        pairs.push((key.clone(), v));
                    }
                }
            }
        }
    }
    pairs
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        nested => Some(nested.to_string()),
    }
}

/// reqwest-backed transport for the console backend
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: Arc<Config>,
    auth: Option<Arc<AuthStore>>,
}

impl HttpTransport {
    pub fn new(config: Config) -> ApiResult<Self> {
        if config.base_url.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }
        if config.timeout_secs == 0 {
            return Err(ApiError::Config("timeout_secs must be positive".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
            auth: None,
        })
    }

    /// Attach the auth store whose token is sent as a bearer credential
    pub fn with_auth(mut self, auth: Arc<AuthStore>) -> Self {
        self.auth = Some(auth);
        self
    }

    fn bearer_token(&self) -> Option<String> {
        self.auth
            .as_ref()
            .filter(|store| store.is_login())
            .and_then(|store| store.token())
            .or_else(|| self.config.token.clone())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.config.endpoint(request.url);
        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self.http.request(request.method.clone(), &url);
        if let Some(params) = &request.params {
            builder = builder.query(&query_pairs(params));
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ApiResponse = serde_json::from_slice(&bytes)?;
        envelope.into_result(&self.config.success_code).inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "backend rejected request");
        })
    }
}
