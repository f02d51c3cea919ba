use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiResult;
use crate::state::AuthStore;
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Typed entry point shared by every API function
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build an HTTP client from configuration, optionally bound to an auth store
    pub fn from_config(config: Config, auth: Option<Arc<AuthStore>>) -> ApiResult<Self> {
        let transport = HttpTransport::new(config)?;
        let transport = match auth {
            Some(store) => transport.with_auth(store),
            None => transport,
        };
        Ok(Self::new(transport))
    }

    /// Send a request and decode the payload as `T`
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let value = self.transport.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}
