//! User entity - backend `systemManage` module

use serde::{Deserialize, Serialize};

use super::common::{CommonRecord, EnableStatus, PaginatingQueryRecord};

/// User gender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserGender {
    /// 男
    #[serde(rename = "1")]
    Male,
    /// 女
    #[serde(rename = "2")]
    Female,
}

/// User fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// user name
    pub username: String,
    /// user gender
    #[serde(default)]
    pub user_gender: Option<UserGender>,
    /// user nick name
    #[serde(default)]
    pub nickname: String,
    /// user phone
    #[serde(default)]
    pub phone: String,
    /// user email
    #[serde(default)]
    pub email: String,
    /// user role code collection
    #[serde(default)]
    pub roles: Vec<String>,
}

pub type User = CommonRecord<UserFields>;

pub type UserList = PaginatingQueryRecord<User>;

/// User search params
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_gender: Option<UserGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
