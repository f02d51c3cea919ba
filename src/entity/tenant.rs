//! Tenant entity - backend `tenantManage` module

use serde::{Deserialize, Serialize};

use super::common::{CommonRecord, EnableStatus, PaginatingQueryRecord};

/// Tenant fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantFields {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub size: String,
    /// role codes available to the tenant
    #[serde(default)]
    pub roles: Vec<String>,
}

pub type Tenant = CommonRecord<TenantFields>;

pub type TenantList = PaginatingQueryRecord<Tenant>;

/// Tenant search params
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
