//! Route API

use serde::Serialize;

use crate::client::ApiClient;
use crate::entity::{MenuRoute, UserRoute};
use crate::error::ApiResult;
use crate::transport::ApiRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteNameQuery<'a> {
    route_name: &'a str,
}

/// GET /route/getConstantRoutes
pub async fn fetch_get_constant_routes(client: &ApiClient) -> ApiResult<Vec<MenuRoute>> {
    client.request(ApiRequest::get("/route/getConstantRoutes")).await
}

/// GET /system/get_user_routes
pub async fn fetch_get_user_routes(client: &ApiClient) -> ApiResult<UserRoute> {
    client.request(ApiRequest::get("/system/get_user_routes")).await
}

/// GET /system/is_exist_route - whether a route with this name exists
pub async fn fetch_is_route_exist(client: &ApiClient, route_name: &str) -> ApiResult<bool> {
    let request = ApiRequest::get("/system/is_exist_route").params(&RouteNameQuery { route_name })?;
    client.request(request).await
}
