//! Clinictheme is a multi-tenant theming service for clinic applications.
//!
//! # Features
//!
//! - Per-tenant stylesheets generated from a stored customization record
//!     - colors, typography, spacing, radii, shadows
//!     - component styles (buttons, cards, inputs)
//!     - dashboard, form and table layouts
//!     - raw custom CSS overrides
//! - Customization API for tenant administrators
//! - Tenant registration and super admin management routes

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub use clinictheme_types::customization;
pub use clinictheme_types::error;
pub use clinictheme_types::tenant_adapter;
pub use clinictheme_types::types;
pub use clinictheme_types::utils;

pub use clinictheme_core::roles;
pub use clinictheme_core::token;

pub mod app;
pub mod prelude;
pub mod routes;
pub mod tenant;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
