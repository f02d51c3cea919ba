//! Common entity - shared envelopes
//!
//! Audit envelope, paging envelope and the enable/disable status used by
//! roles, users, menus and tenants.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::ops::{Deref, DerefMut};

/// Enable status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum EnableStatus {
    /// 启用
    Enable = 1,
    /// 禁用
    Disable = 2,
}

impl From<EnableStatus> for u8 {
    fn from(status: EnableStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for EnableStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EnableStatus::Enable),
            2 => Ok(EnableStatus::Disable),
            other => Err(other),
        }
    }
}

/// Common params of paginating
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatingCommonParams {
    /// current page number
    pub current: u32,
    /// page size
    pub size: u32,
    /// total count
    pub total: u64,
}

/// Common params of paginating query list data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatingQueryRecord<T> {
    pub current: u32,
    pub size: u32,
    pub total: u64,
    pub list: Vec<T>,
}

impl<T> PaginatingQueryRecord<T> {
    pub fn paging(&self) -> PaginatingCommonParams {
        PaginatingCommonParams {
            current: self.current,
            size: self.size,
            total: self.total,
        }
    }
}

/// Paging part of every search request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl CommonSearchParams {
    pub fn page(current: u32, size: u32) -> Self {
        Self {
            current: Some(current),
            size: Some(size),
        }
    }
}

/// Audit envelope wrapped around every managed record
///
/// The record's own fields are flattened next to the audit fields on the
/// wire, and reachable through `Deref`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRecord<T> {
    /// record id
    pub id: i64,
    /// record creator
    #[serde(default)]
    pub create_by: String,
    /// record create time
    #[serde(default)]
    pub create_time: String,
    /// record updater
    #[serde(default)]
    pub update_by: String,
    /// record update time
    #[serde(default)]
    pub update_time: String,
    /// record status
    pub status: Option<EnableStatus>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> CommonRecord<T> {
    /// Wrap fields for a record that has no audit data yet
    pub fn new(id: i64, status: Option<EnableStatus>, record: T) -> Self {
        Self {
            id,
            create_by: String::new(),
            create_time: String::new(),
            update_by: String::new(),
            update_time: String::new(),
            status,
            record,
        }
    }
}

impl<T> Deref for CommonRecord<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl<T> DerefMut for CommonRecord<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.record
    }
}
