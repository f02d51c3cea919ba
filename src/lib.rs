//! Console API - typed client for the multi-tenant admin console
//!
//! This crate provides the backend calls used by the admin console (roles,
//! users, menus, tenants, routes and OAuth), the DTOs they exchange, the
//! business constant tables behind select inputs, and button/role permission
//! checks over an injected authentication state.

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod permission;
pub mod response;
pub mod state;
pub mod transport;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use permission::{Auth, AuthState};
pub use state::AuthStore;
pub use transport::{ApiRequest, HttpTransport, Transport};
