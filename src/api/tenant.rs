//! Tenant API

use crate::client::ApiClient;
use crate::entity::{AllRole, Tenant, TenantList, TenantSearchParams};
use crate::error::ApiResult;
use crate::transport::ApiRequest;

/// GET /tenant/list
pub async fn fetch_get_tenant_list(
    client: &ApiClient,
    params: Option<&TenantSearchParams>,
) -> ApiResult<TenantList> {
    let request = ApiRequest::get("/tenant/list").params(&params)?;
    client.request(request).await
}

/// GET /tenant/role_scope - roles a tenant may be granted
pub async fn fetch_get_tenant_roles(client: &ApiClient) -> ApiResult<Vec<AllRole>> {
    client.request(ApiRequest::get("/tenant/role_scope")).await
}

/// POST /tenant/post
pub async fn post_tenant(client: &ApiClient, data: &Tenant) -> ApiResult<String> {
    let request = ApiRequest::post("/tenant/post").data(data)?;
    client.request(request).await
}
