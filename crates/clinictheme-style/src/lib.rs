//! Tenant stylesheet generation and style state rendering
//!
//! This crate provides:
//! - `StyleState`: the complete, defaults-merged set of CSS custom properties
//!   for a tenant, shared by the server stylesheet and the client applier
//! - `CssGenerator`: renders a tenant's stylesheet from a Handlebars template
//! - `ValueValidator`: per-property whitelist for customization values

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod state;
pub mod tokens;
pub mod validate;

mod prelude;

pub use generator::{CssGenerator, GeneratedCss};
pub use state::StyleState;
pub use validate::ValueValidator;

// vim: ts=4
