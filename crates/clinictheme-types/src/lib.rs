//! Shared types, adapter traits, and core utilities for clinictheme.
//!
//! This crate holds the tenant customization model that both the server-side
//! stylesheet generator and the client-side styling applier read, together
//! with the storage adapter trait and the common error type.

pub mod customization;
pub mod error;
pub mod extract;
pub mod prelude;
pub mod tenant_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
