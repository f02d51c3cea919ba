//! Backend API calls
//!
//! One async function per endpoint. Each builds its request and hands it to
//! [`ApiClient::request`](crate::client::ApiClient::request) unchanged.

use serde::Serialize;

pub mod oauth;
pub mod route;
pub mod system;
pub mod tenant;

/// Body of the batch delete endpoints
#[derive(Debug, Serialize)]
pub(crate) struct DeleteIds<'a> {
    pub ids: &'a [i64],
}
