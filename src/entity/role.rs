//! Role entity - backend `systemManage` module

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::common::{CommonRecord, EnableStatus, PaginatingQueryRecord};

/// Role fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFields {
    /// role name
    pub name: String,
    /// role code
    pub code: String,
    /// role description
    #[serde(default)]
    pub desc: String,
}

pub type Role = CommonRecord<RoleFields>;

pub type RoleList = PaginatingQueryRecord<Role>;

/// Role search params
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSearchParams {
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

/// Enabled role, as listed for select inputs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllRole {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// Role resource type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum RoleMenuMode {
    /// directory and menu
    Menu = 1,
    /// button
    Button = 2,
}

/// Resources bound to a role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenu {
    pub role_id: i64,
    pub mode: RoleMenuMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
}

impl RoleMenu {
    /// Query for the resources currently bound to a role
    pub fn query(role_id: i64, mode: RoleMenuMode) -> Self {
        Self {
            role_id,
            mode,
            ids: None,
        }
    }

    /// Bind exactly `ids` to a role
    pub fn bind(role_id: i64, mode: RoleMenuMode, ids: Vec<i64>) -> Self {
        Self {
            role_id,
            mode,
            ids: Some(ids),
        }
    }
}
