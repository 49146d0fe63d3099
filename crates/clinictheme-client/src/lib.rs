//! Client side of tenant theming
//!
//! - `StylingApplier` pushes a tenant's style state into a `StyleRoot` and
//!   caches the tenant record in `ClientStorage`
//! - `CustomizerSession` is the editor: it keeps a draft and a baseline,
//!   previews the draft live and saves it through a `ConfigClient`

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod applier;
pub mod customizer;
pub mod http;
pub mod root;
pub mod storage;

mod prelude;

pub use applier::StylingApplier;
pub use customizer::{ConfigClient, CustomizerSession, OperatorPrompt};
pub use http::HttpConfigClient;
pub use root::{InMemoryStyleRoot, StyleRoot};
pub use storage::{ClientStorage, FileStorage, MemoryStorage, TENANT_INFO_KEY};

// vim: ts=4
