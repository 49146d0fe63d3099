//! Roles carried in access tokens

/// Tenant administrator, may change the tenant's config
pub const ADMIN: &str = "admin";
/// Super administrator, may manage all tenants
pub const SADM: &str = "SADM";

// vim: ts=4
