//! Entity module - backend DTO mirrors
//!
//! Passive value types for every payload the console backend sends or accepts.
//! Field names follow the backend's camelCase wire format.

pub mod auth;
pub mod common;
pub mod menu;
pub mod role;
pub mod route;
pub mod tenant;
pub mod user;

pub use auth::{LoginToken, UserInfo};
pub use common::{
    CommonRecord, CommonSearchParams, EnableStatus, PaginatingCommonParams, PaginatingQueryRecord,
};
pub use menu::{IconType, Menu, MenuButton, MenuFields, MenuList, MenuPropsOfRoute, MenuTree, MenuType};
pub use role::{AllRole, Role, RoleFields, RoleList, RoleMenu, RoleMenuMode, RoleSearchParams};
pub use route::{MenuRoute, RouteMeta, RouteQuery, UserRoute};
pub use tenant::{Tenant, TenantFields, TenantList, TenantSearchParams};
pub use user::{User, UserFields, UserGender, UserList, UserSearchParams};
