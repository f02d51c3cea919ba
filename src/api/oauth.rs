//! OAuth API

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::transport::ApiRequest;

#[derive(Debug, Serialize)]
struct PlatQuery<'a> {
    plat: &'a str,
}

/// GET /oauth/get_auth_url
pub async fn fetch_get_oauth_url(client: &ApiClient, plat: &str) -> ApiResult<String> {
    let request = ApiRequest::get("/oauth/get_auth_url").params(&PlatQuery { plat })?;
    client.request(request).await
}
