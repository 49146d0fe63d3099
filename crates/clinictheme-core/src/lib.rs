//! Core infrastructure for clinictheme.
//!
//! Shared by the server crate: the application state, access tokens, the
//! authentication extractors and the tenant resolving middleware.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod middleware;
pub mod prelude;
pub mod roles;
pub mod token;

pub use app::{App, AppBuilderOpts, AppState};
pub use extract::{Auth, PublicTnId};

// vim: ts=4
